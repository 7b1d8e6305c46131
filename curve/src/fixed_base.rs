//! Constant-time fixed-base scalar multiplication.

use crate::window::LookupTable;
use crate::{Projective, ScalarField};

/// Number of signed radix-16 digits of a scalar.
const DIGITS: usize = 64;

/// Precomputed multiples of a fixed base `B`.
///
/// Table `i` holds `[1, 2, ..., 8] * 16^i * B`, so `s * B` is the sum of one
/// lookup per radix-16 digit of `s` with no doublings at all.
#[derive(Clone, Debug)]
pub struct FixedBaseTable {
    tables: Vec<LookupTable>,
}

impl FixedBaseTable {
    pub fn new(base: &Projective) -> Self {
        let mut tables = Vec::with_capacity(DIGITS);
        let mut p = *base;
        for _ in 0..DIGITS {
            tables.push(LookupTable::from(&p));
            p = p.mul_by_pow_2(4);
        }
        FixedBaseTable { tables }
    }

    /// The base point this table was built from.
    pub fn basepoint(&self) -> Projective {
        self.tables[0].select(1)
    }

    /// Compute `scalar * B` in constant time.
    pub fn mul(&self, scalar: &ScalarField) -> Projective {
        let digits = scalar.as_radix_16();

        self.tables
            .iter()
            .zip(digits.iter())
            .fold(Projective::INFINITY, |acc, (table, &digit)| {
                acc + table.select(digit)
            })
    }
}

impl From<&Projective> for FixedBaseTable {
    fn from(base: &Projective) -> Self {
        FixedBaseTable::new(base)
    }
}
