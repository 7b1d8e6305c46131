use crate::generator_table::generator_naf_table;
use crate::window::NafLookupTable;
use crate::{Projective, ScalarField};

/// Compute `a * A + b * G` in variable time, where `G` is the fixed generator.
///
/// `A` gets a width-5 NAF table built per call; `G` uses the shared width-8
/// table. Leading zero digits of both recodings are skipped.
pub fn vartime_double_base_mul(a: &ScalarField, point: &Projective, b: &ScalarField) -> Projective {
    let a_naf = a.non_adjacent_form(5);
    let b_naf = b.non_adjacent_form(8);

    let top = match (0..256).rev().find(|&i| a_naf[i] != 0 || b_naf[i] != 0) {
        Some(i) => i,
        None => return Projective::INFINITY,
    };

    let table_a = NafLookupTable::new(point, 5);
    let table_b = generator_naf_table();

    let mut r = Projective::INFINITY;
    for i in (0..=top).rev() {
        r = r.double();
        r = table_a.apply_digit(r, a_naf[i]);
        r = table_b.apply_digit(r, b_naf[i]);
    }

    r
}
