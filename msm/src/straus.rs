//! Straus's method: one shared chain of doublings, with a lookup table of
//! small multiples per point.

use core::borrow::Borrow;

use curve::{LookupTable, NafLookupTable, Projective, ScalarField};
use tracing::trace;

use crate::config::check_naf_width;
use crate::constants::DEFAULT_DYNAMIC_NAF_WIDTH;
use crate::errors::MsmError;
use crate::traits::{MultiscalarMul, VartimeMultiscalarMul};

/// Straus multiscalar multiplication, in constant-time and variable-time
/// flavours.
pub struct Straus;

impl Straus {
    /// Variable-time Straus with per-point NAF tables of the given width.
    ///
    /// Widths outside `2..=8` are rejected with [`MsmError::InvalidWindow`].
    pub fn optional_multiscalar_mul_with_width<I, J>(
        scalars: I,
        points: J,
        naf_width: usize,
    ) -> Result<Projective, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator<Item = Option<Projective>>,
    {
        check_naf_width("naf_width", naf_width)?;

        let nafs: Vec<[i8; 256]> = scalars
            .into_iter()
            .map(|s| s.borrow().non_adjacent_form(naf_width))
            .collect();

        let lookup_tables = naf_tables(points, naf_width)?;

        check_lengths(nafs.len(), lookup_tables.len())?;

        let top = match highest_nonzero_digit(&nafs) {
            Some(top) => top,
            None => return Ok(Projective::INFINITY),
        };
        trace!(terms = nafs.len(), top, naf_width, "variable-time straus");

        let mut r = Projective::INFINITY;
        for i in (0..=top).rev() {
            r = r.double();
            for (naf, table) in nafs.iter().zip(lookup_tables.iter()) {
                r = table.apply_digit(r, naf[i]);
            }
        }

        Ok(r)
    }
}

impl MultiscalarMul for Straus {
    type Point = Projective;

    fn multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Projective, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator,
        J::Item: Borrow<Projective>,
    {
        let lookup_tables: Vec<LookupTable> = points
            .into_iter()
            .map(|p| LookupTable::from(p.borrow()))
            .collect();

        let digits: Vec<[i8; 64]> = scalars
            .into_iter()
            .map(|s| s.borrow().as_radix_16())
            .collect();

        check_lengths(digits.len(), lookup_tables.len())?;

        let mut q = Projective::INFINITY;
        for j in (0..64).rev() {
            q = q.mul_by_pow_2(4);
            for (d, table) in digits.iter().zip(lookup_tables.iter()) {
                q += table.select(d[j]);
            }
        }

        Ok(q)
    }
}

impl VartimeMultiscalarMul for Straus {
    type Point = Projective;

    fn optional_multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Projective, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator<Item = Option<Projective>>,
    {
        Self::optional_multiscalar_mul_with_width(scalars, points, DEFAULT_DYNAMIC_NAF_WIDTH)
    }
}

pub(crate) fn check_lengths(scalars: usize, points: usize) -> Result<(), MsmError> {
    if scalars == points {
        Ok(())
    } else {
        Err(MsmError::LengthMismatch { scalars, points })
    }
}

/// Build a NAF table per point, failing on the first missing point.
pub(crate) fn naf_tables<J>(points: J, naf_width: usize) -> Result<Vec<NafLookupTable>, MsmError>
where
    J: IntoIterator<Item = Option<Projective>>,
{
    points
        .into_iter()
        .enumerate()
        .map(|(index, p)| {
            p.map(|p| NafLookupTable::new(&p, naf_width))
                .ok_or(MsmError::MissingPoint { index })
        })
        .collect()
}

/// Highest position holding a nonzero digit in any of the recodings.
pub(crate) fn highest_nonzero_digit<'a, I>(nafs: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a [i8; 256]>,
{
    nafs.into_iter()
        .filter_map(|naf| naf.iter().rposition(|&d| d != 0))
        .max()
}
