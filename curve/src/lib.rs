//! Elliptic curve group over the KoalaBear degree-8 extension field.
//!
//! This crate provides affine and projective curve points, a scalar field
//! with the recodings used by scalar multiplication, lookup tables of
//! precomputed multiples, constant-time fixed-base and variable-base scalar
//! multiplication, and variable-time double-base scalar multiplication.
//! The curve parameters and generators are fixed to the values in the
//! `affine` module.

mod affine;
mod basefield;
mod fixed_base;
mod generator_table;
mod group;
mod projective;
mod random;
mod scalarfield;
mod vartime_double_base;
mod window;

pub use affine::Affine;
pub use basefield::{from_coeffs, BaseField};
pub use fixed_base::FixedBaseTable;
pub use generator_table::{generator_naf_table, generator_table, mul_generator, GENERATOR_NAF_WIDTH};
pub use group::{Group, ScalarBits};
pub use p3_koala_bear::KoalaBear;
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::ScalarField;
pub use vartime_double_base::vartime_double_base_mul;
pub use window::{LookupTable, NafLookupTable};
