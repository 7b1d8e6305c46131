//! Interfaces of the multiscalar multiplication engines.
//!
//! Scalars and points are accepted as anything iterable over values or
//! references. All methods compute `Σ s_i * P_i`.

use core::borrow::Borrow;
use core::iter;

use curve::ScalarField;

use crate::config::MsmConfig;
use crate::errors::MsmError;

/// Constant-time multiscalar multiplication.
///
/// Running time does not depend on the scalar values, only on the number of
/// terms.
pub trait MultiscalarMul {
    type Point;

    fn multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Self::Point, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator,
        J::Item: Borrow<Self::Point>;
}

/// Variable-time multiscalar multiplication for public inputs.
pub trait VartimeMultiscalarMul {
    type Point: Clone;

    /// Like [`VartimeMultiscalarMul::vartime_multiscalar_mul`], for points
    /// that may have failed to decode. A `None` point is reported as
    /// [`MsmError::MissingPoint`].
    fn optional_multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Self::Point, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator<Item = Option<Self::Point>>;

    fn vartime_multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Self::Point, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator,
        J::Item: Borrow<Self::Point>,
    {
        Self::optional_multiscalar_mul(
            scalars,
            points.into_iter().map(|p| Some(p.borrow().clone())),
        )
    }
}

/// Variable-time multiscalar multiplication with precomputation for a fixed
/// ("static") set of points, optionally mixed with per-call ("dynamic")
/// points.
pub trait VartimePrecomputedMultiscalarMul: Sized {
    type Point: Clone;

    /// Precompute tables for `static_points` with the default widths.
    fn new<I>(static_points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Point>;

    /// Precompute tables for `static_points` with the widths in `config`.
    fn with_config<I>(static_points: I, config: &MsmConfig) -> Result<Self, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Point>;

    /// Number of static points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `Σ a_i * A_i` over the static points; one scalar per static point.
    fn vartime_multiscalar_mul<I>(&self, static_scalars: I) -> Result<Self::Point, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
    {
        self.vartime_mixed_multiscalar_mul(
            static_scalars,
            iter::empty::<ScalarField>(),
            iter::empty::<Self::Point>(),
        )
    }

    /// `Σ a_i * A_i + Σ b_j * B_j` for static points `A_i` and dynamic
    /// points `B_j`.
    fn vartime_mixed_multiscalar_mul<I, J, K>(
        &self,
        static_scalars: I,
        dynamic_scalars: J,
        dynamic_points: K,
    ) -> Result<Self::Point, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator,
        J::Item: Borrow<ScalarField>,
        K: IntoIterator,
        K::Item: Borrow<Self::Point>,
    {
        self.optional_mixed_multiscalar_mul(
            static_scalars,
            dynamic_scalars,
            dynamic_points.into_iter().map(|p| Some(p.borrow().clone())),
        )
    }

    /// Mixed multiplication where dynamic points may be absent; a `None`
    /// point is reported as [`MsmError::MissingPoint`].
    fn optional_mixed_multiscalar_mul<I, J, K>(
        &self,
        static_scalars: I,
        dynamic_scalars: J,
        dynamic_points: K,
    ) -> Result<Self::Point, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator,
        J::Item: Borrow<ScalarField>,
        K: IntoIterator<Item = Option<Self::Point>>;
}

/// Variable-time multiscalar multiplication over an arbitrary subset of a
/// precomputed set of points.
pub trait VartimePrecomputedSubsetMultiscalarMul: Sized {
    type Point;

    fn new<I>(static_points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Point>;

    fn with_config<I>(static_points: I, config: &MsmConfig) -> Result<Self, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<Self::Point>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `Σ s_k * A_{i_k}` for `(i_k, s_k)` pairs. Positions may repeat, in
    /// which case their terms add up.
    fn vartime_subset_multiscalar_mul<I, S>(&self, static_scalars: I) -> Result<Self::Point, MsmError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Borrow<ScalarField>;
}
