//! Pippenger's bucket method for large variable-base inputs.

use core::borrow::Borrow;

use curve::{Projective, ScalarField};
use tracing::trace;

use crate::constants::{PIPPENGER_WINDOW_7_FROM, PIPPENGER_WINDOW_8_FROM};
use crate::errors::MsmError;
use crate::straus::check_lengths;
use crate::traits::VartimeMultiscalarMul;

/// Variable-time bucket-method multiscalar multiplication.
///
/// Each scalar is recoded into signed radix-2^w digits. For every digit
/// position the points are dropped into `2^(w-1)` buckets by digit magnitude
/// (negated for negative digits), the buckets are summed with a running sum
/// so bucket `k` counts `k + 1` times, and the per-position sums are combined
/// from the most significant position down with `w` doublings in between.
pub struct Pippenger;

impl Pippenger {
    /// Window width used for an input of `size` terms.
    pub fn window_width(size: usize) -> usize {
        if size < PIPPENGER_WINDOW_7_FROM {
            6
        } else if size < PIPPENGER_WINDOW_8_FROM {
            7
        } else {
            8
        }
    }
}

impl VartimeMultiscalarMul for Pippenger {
    type Point = Projective;

    fn optional_multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Projective, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator<Item = Option<Projective>>,
    {
        let scalars: Vec<ScalarField> = scalars.into_iter().map(|s| *s.borrow()).collect();
        let points: Vec<Projective> = points
            .into_iter()
            .enumerate()
            .map(|(index, p)| p.ok_or(MsmError::MissingPoint { index }))
            .collect::<Result<_, _>>()?;

        check_lengths(scalars.len(), points.len())?;

        let w = Self::window_width(scalars.len());
        trace!(terms = scalars.len(), window = w, "pippenger");

        Ok(Self::multiscalar_mul_with_window(&scalars, &points, w))
    }
}

impl Pippenger {
    /// Bucket method with a fixed window width in `6..=8`, on inputs of
    /// equal length.
    pub(crate) fn multiscalar_mul_with_window(
        scalars: &[ScalarField],
        points: &[Projective],
        w: usize,
    ) -> Projective {
        debug_assert!((6..=8).contains(&w));
        debug_assert_eq!(scalars.len(), points.len());

        let digits_count = ScalarField::radix_2w_digit_count(w);
        let buckets_count = 1usize << (w - 1);

        let scalars_points: Vec<([i8; 64], Projective)> = scalars
            .iter()
            .map(|s| s.as_radix_2w(w))
            .zip(points.iter().copied())
            .collect();

        let mut buckets = vec![Projective::INFINITY; buckets_count];
        let mut total = Projective::INFINITY;

        for digit_index in (0..digits_count).rev() {
            total = total.mul_by_pow_2(w as u32);

            buckets.fill(Projective::INFINITY);
            for (digits, point) in &scalars_points {
                let digit = digits[digit_index] as i16;
                if digit > 0 {
                    buckets[(digit - 1) as usize] += *point;
                } else if digit < 0 {
                    buckets[(-digit - 1) as usize] -= *point;
                }
            }

            // Σ (k + 1) * buckets[k] via a running sum from the top bucket down
            let mut running = Projective::INFINITY;
            let mut column = Projective::INFINITY;
            for bucket in buckets.iter().rev() {
                running += *bucket;
                column += running;
            }

            total += column;
        }

        total
    }
}
