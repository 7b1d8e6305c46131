//! Tuning constants for the multiscalar multiplication engines.

/// Inputs with at least this many terms go to Pippenger instead of Straus.
pub const DEFAULT_PIPPENGER_THRESHOLD: usize = 190;

/// NAF width of the tables built once for fixed bases.
///
/// A width-8 table holds the 64 odd multiples `P, 3P, ..., 127P`.
pub const DEFAULT_STATIC_NAF_WIDTH: usize = 8;

/// NAF width of the tables built per call for variable bases.
///
/// A width-5 table holds the 8 odd multiples `P, 3P, ..., 15P`.
pub const DEFAULT_DYNAMIC_NAF_WIDTH: usize = 5;

/// Supported NAF widths; digits must fit in an `i8`.
pub(crate) const MIN_NAF_WIDTH: usize = 2;
pub(crate) const MAX_NAF_WIDTH: usize = 8;

/// Pippenger switches to a wider window at these input sizes.
pub(crate) const PIPPENGER_WINDOW_7_FROM: usize = 500;
pub(crate) const PIPPENGER_WINDOW_8_FROM: usize = 800;
