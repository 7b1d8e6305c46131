//! Multiscalar multiplication over the KoalaBear Fp8 curve.
//!
//! This crate computes `Σ s_i * P_i` for many scalar/point pairs faster than
//! summing independent scalar multiplications:
//! - [`Straus`] in constant time (radix-16 digits, constant-time table
//!   lookups) and in variable time (width-w NAF digits),
//! - [`Pippenger`]'s bucket method for large variable-time inputs,
//! - [`VartimePrecomputedStraus`] for fixed ("static") bases whose tables are
//!   built once, optionally mixed with per-call ("dynamic") points,
//! - [`VartimePrecomputedSubsetStraus`] for calls that use only some of the
//!   precomputed bases.
//!
//! Variable-time routines must only be used with public scalars.
//!
//! # Example
//!
//! ```
//! use curve::{Group, Projective, ScalarField};
//! use msm::{VartimeMultiscalarMul, VartimePrecomputedMultiscalarMul, VartimePrecomputedStraus};
//!
//! let g = Projective::generator();
//! let h = Projective::generator_pedersen();
//! let a = ScalarField::from_canonical_u64(3);
//! let b = ScalarField::from_canonical_u64(5);
//!
//! let sum = Projective::vartime_multiscalar_mul([a, b], [g, h]).expect("msm");
//!
//! let precomputed = VartimePrecomputedStraus::new([g, h]);
//! assert_eq!(precomputed.vartime_multiscalar_mul([a, b]).expect("msm"), sum);
//! assert_eq!(sum, g.mul_u64(3) + h.mul_u64(5));
//! ```

mod config;
mod constants;
mod errors;
mod pippenger;
mod precomputed_straus;
mod straus;
mod traits;
mod variable_base;

#[cfg(test)]
mod tests;

pub use config::MsmConfig;
pub use constants::{DEFAULT_DYNAMIC_NAF_WIDTH, DEFAULT_PIPPENGER_THRESHOLD, DEFAULT_STATIC_NAF_WIDTH};
pub use errors::MsmError;
pub use pippenger::Pippenger;
pub use precomputed_straus::{VartimePrecomputedStraus, VartimePrecomputedSubsetStraus};
pub use straus::Straus;
pub use traits::{
    MultiscalarMul, VartimeMultiscalarMul, VartimePrecomputedMultiscalarMul,
    VartimePrecomputedSubsetMultiscalarMul,
};
pub use variable_base::optional_multiscalar_mul_with_config;
