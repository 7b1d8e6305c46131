//! Process-wide precomputed tables for the fixed generator.

use std::sync::OnceLock;

use crate::fixed_base::FixedBaseTable;
use crate::window::NafLookupTable;
use crate::{Projective, ScalarField};

/// NAF width of the generator table used by variable-time routines.
pub const GENERATOR_NAF_WIDTH: usize = 8;

static GENERATOR_TABLE: OnceLock<FixedBaseTable> = OnceLock::new();
static GENERATOR_NAF_TABLE: OnceLock<NafLookupTable> = OnceLock::new();

/// Radix-16 table of the generator, built on first use.
pub fn generator_table() -> &'static FixedBaseTable {
    GENERATOR_TABLE.get_or_init(|| FixedBaseTable::new(&Projective::generator()))
}

/// Odd multiples of the generator up to `127 * G`, built on first use.
pub fn generator_naf_table() -> &'static NafLookupTable {
    GENERATOR_NAF_TABLE
        .get_or_init(|| NafLookupTable::new(&Projective::generator(), GENERATOR_NAF_WIDTH))
}

/// Constant-time `scalar * G`.
#[inline]
pub fn mul_generator(scalar: &ScalarField) -> Projective {
    generator_table().mul(scalar)
}
