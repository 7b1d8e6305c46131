//! Precomputed multiples of a point, looked up by recoded scalar digits.

use crate::Projective;
use subtle::{Choice, ConditionallyNegatable, ConditionallySelectable, ConstantTimeEq};

/// Multiples `[P, 2P, ..., 8P]` for signed radix-16 digits.
///
/// [`LookupTable::select`] reads every entry, so it is safe to index with
/// secret digits.
#[derive(Copy, Clone, Debug)]
pub struct LookupTable([Projective; 8]);

impl LookupTable {
    /// Return `x * P` for `x` in `[-8, 8]` in constant time.
    pub fn select(&self, x: i8) -> Projective {
        debug_assert!(x >= -8);
        debug_assert!(x <= 8);

        // |x| without branching
        let xmask = (x as i16) >> 7;
        let xabs = ((x as i16 + xmask) ^ xmask) as u16;

        let mut t = Projective::INFINITY;
        for (j, entry) in (1u16..).zip(self.0.iter()) {
            t.conditional_assign(entry, xabs.ct_eq(&j));
        }

        let neg = Choice::from((xmask & 1) as u8);
        t.conditional_negate(neg);
        t
    }
}

impl From<&Projective> for LookupTable {
    fn from(point: &Projective) -> Self {
        let mut entries = [*point; 8];
        for i in 1..8 {
            entries[i] = entries[i - 1] + *point;
        }
        LookupTable(entries)
    }
}

/// Odd multiples `[P, 3P, 5P, ..., (2^(w-1) - 1)P]` for width-`w` NAF digits.
///
/// Lookups index directly by digit and run in variable time.
#[derive(Clone, Debug)]
pub struct NafLookupTable {
    width: usize,
    entries: Vec<Projective>,
}

impl NafLookupTable {
    /// Table of the `2^(w-2)` odd multiples of `point`.
    ///
    /// # Panics
    ///
    /// `width` must be in `2..=8`. Smaller widths underflow when sizing the
    /// table; larger ones produce NAF digits that do not fit in `i8`.
    pub fn new(point: &Projective, width: usize) -> Self {
        debug_assert!((2..=8).contains(&width));

        let count = 1usize << (width - 2);
        let double = point.double();

        let mut entries = Vec::with_capacity(count);
        entries.push(*point);
        for i in 1..count {
            entries.push(entries[i - 1] + double);
        }

        NafLookupTable { width, entries }
    }

    /// Return `x * P` for odd `0 < x < 2^(w-1)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= 2^(w-1)`. An even `x` is not detected in release
    /// builds and returns `(x + 1) * P`.
    #[inline]
    pub fn select(&self, x: usize) -> Projective {
        debug_assert_eq!(x & 1, 1);
        debug_assert!(x < (1 << (self.width - 1)));

        self.entries[x / 2]
    }

    /// Add or subtract the multiple named by a signed NAF digit; zero is a no-op.
    #[inline]
    pub fn apply_digit(&self, acc: Projective, digit: i8) -> Projective {
        match digit {
            0 => acc,
            d if d > 0 => acc + self.select(d as usize),
            d => acc - self.select(-(d as i16) as usize),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    #[test]
    fn test_lookup_table_select_all_digits() {
        let p = Projective::generator_pedersen();
        let table = LookupTable::from(&p);

        assert!(table.select(0).is_infinity());
        for x in 1..=8i8 {
            let expected = p.mul_u64(x as u64);
            assert_eq!(table.select(x), expected, "digit {x}");
            assert_eq!(table.select(-x), -expected, "digit -{x}");
        }
    }

    #[test]
    fn test_naf_table_odd_multiples() {
        let p = Projective::generator();
        for width in [2, 5, 8] {
            let table = NafLookupTable::new(&p, width);
            assert_eq!(table.len(), 1 << (width - 2));
            assert_eq!(table.width(), width);

            for x in (1..(1usize << (width - 1))).step_by(2) {
                assert_eq!(table.select(x), p.mul_u64(x as u64), "width {width} digit {x}");
            }
        }
    }

    #[test]
    fn test_apply_digit() {
        let p = Projective::generator();
        let table = NafLookupTable::new(&p, 5);
        let acc = p.mul_u64(100);

        assert_eq!(table.apply_digit(acc, 0), acc);
        assert_eq!(table.apply_digit(acc, 7), p.mul_u64(107));
        assert_eq!(table.apply_digit(acc, -15), p.mul_u64(85));
    }

    #[test]
    #[should_panic]
    fn test_naf_select_past_table_panics() {
        let table = NafLookupTable::new(&Projective::generator(), 3);
        let _ = table.select(5);
    }
}
