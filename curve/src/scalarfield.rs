//! Scalar field of the curve. q = 0xf06e44682c2aa440f5f26a5ae1748ff85ccc2efc3068faf2154ff8a2e94d81
//!
//! Elements are kept in Montgomery form as [u64; 4] in little-endian order.
//! Besides field arithmetic this module provides the scalar recodings used by
//! the scalar multiplication routines: width-w NAF, signed radix-16 and
//! signed radix-2^w.

use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConstantTimeEq};

/// Scalar field element for the curve
/// Represented in Montgomery form with [u64; 4]
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ScalarField {
    /// Montgomery form: value * R mod q, where R = 2^256
    limbs: [u64; 4],
}

// Field modulus: q = 0xf06e44682c2aa440f5f26a5ae1748ff85ccc2efc3068faf2154ff8a2e94d81
const MODULUS: [u64; 4] = [
    0xf2154ff8a2e94d81,
    0xf85ccc2efc3068fa,
    0x40f5f26a5ae1748f,
    0x00f06e44682c2aa4,
];

// R = 2^256 mod q
const R: [u64; 4] = [
    0xc95b07d2e81da6f0,
    0x1d670e140c90755e,
    0xfaae6eff70742708,
    0x008ad7515112b17a,
];

// R^2 = 2^512 mod q
const R2: [u64; 4] = [
    0x23eabb3eaf3c12e3,
    0xefbc3b2088f7b0f7,
    0x0943bc9a31f37148,
    0x004497b874228e49,
];

// -q^{-1} mod 2^64
const MU: u64 = 0x921d21f874d30d7f;

/// Canonical scalars are below 2^248, so the top byte is always zero.
const TOP_LIMB_MASK: u64 = 0x00ff_ffff_ffff_ffff;

impl ScalarField {
    pub const ZERO: Self = ScalarField {
        limbs: [0, 0, 0, 0],
    };

    /// One (R mod q in Montgomery form)
    pub const ONE: Self = ScalarField { limbs: R };

    /// Number of significant bits of the modulus.
    pub const BITS: usize = 248;

    /// Create a new scalar field element from a u64 value
    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        Self::from_canonical_limbs([val, 0, 0, 0])
    }

    /// Convert from Montgomery form to canonical little-endian limbs
    #[inline]
    pub fn to_canonical_u64_vec(&self) -> [u64; 4] {
        let one = ScalarField {
            limbs: [1, 0, 0, 0],
        };
        montgomery_mul(*self, one).limbs
    }

    #[inline]
    fn from_canonical_limbs(limbs: [u64; 4]) -> Self {
        montgomery_mul(ScalarField { limbs }, ScalarField { limbs: R2 })
    }

    /// Canonical little-endian encoding.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.to_canonical_u64_vec()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Decode a canonical little-endian encoding, rejecting values `>= q`.
    pub fn from_le_bytes_canonical(bytes: &[u8; 32]) -> Option<Self> {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(word);
        }
        if is_canonical(limbs) {
            Some(Self::from_canonical_limbs(limbs))
        } else {
            None
        }
    }

    pub fn as_canonical_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_le_bytes())
    }

    /// The field modulus q.
    pub fn order() -> BigUint {
        let mut bytes = Vec::with_capacity(32);
        for &limb in &MODULUS {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }
        BigUint::from_bytes_le(&bytes)
    }

    /// Width-`w` non-adjacent form of this scalar.
    ///
    /// Every nonzero digit is odd and bounded by `2^(w-1)` in absolute value,
    /// and of any `w` consecutive digits at most one is nonzero. Runs in
    /// variable time.
    pub fn non_adjacent_form(&self, w: usize) -> [i8; 256] {
        debug_assert!(w >= 2);
        // digits must fit in i8
        debug_assert!(w <= 8);

        let mut naf = [0i8; 256];

        let mut x_u64 = [0u64; 5];
        x_u64[..4].copy_from_slice(&self.to_canonical_u64_vec());

        let width = 1u64 << w;
        let window_mask = width - 1;

        let mut pos = 0;
        let mut carry = 0;
        while pos < 256 {
            let u64_idx = pos / 64;
            let bit_idx = pos % 64;
            let bit_buf = if bit_idx < 64 - w {
                x_u64[u64_idx] >> bit_idx
            } else {
                (x_u64[u64_idx] >> bit_idx) | (x_u64[1 + u64_idx] << (64 - bit_idx))
            };

            let window = carry + (bit_buf & window_mask);

            if window & 1 == 0 {
                pos += 1;
                continue;
            }

            if window < width / 2 {
                carry = 0;
                naf[pos] = window as i8;
            } else {
                carry = 1;
                naf[pos] = (window as i8).wrapping_sub(width as i8);
            }

            pos += w;
        }

        naf
    }

    /// Signed radix-16 digits `d_i` in `[-8, 8]` with `Σ d_i 16^i = self`.
    ///
    /// The recoding does not branch on the scalar.
    pub fn as_radix_16(&self) -> [i8; 64] {
        let bytes = self.to_le_bytes();
        let mut output = [0i8; 64];

        for i in 0..32 {
            output[2 * i] = (bytes[i] & 15) as i8;
            output[2 * i + 1] = ((bytes[i] >> 4) & 15) as i8;
        }

        // Shift each digit from [0, 16) into [-8, 8)
        for i in 0..63 {
            let carry = (output[i] + 8) >> 4;
            output[i] -= carry << 4;
            output[i + 1] += carry;
        }

        output
    }

    /// Number of digits produced by [`ScalarField::as_radix_2w`].
    pub fn radix_2w_digit_count(w: usize) -> usize {
        debug_assert!((4..=8).contains(&w));
        (Self::BITS + w - 1) / w + 1
    }

    /// Signed radix-2^w digits in `[-2^(w-1), 2^(w-1)]` with
    /// `Σ d_i 2^(w i) = self`. Only the first
    /// [`ScalarField::radix_2w_digit_count`] digits can be nonzero.
    pub fn as_radix_2w(&self, w: usize) -> [i8; 64] {
        debug_assert!((4..=8).contains(&w));

        if w == 4 {
            return self.as_radix_16();
        }

        let mut x_u64 = [0u64; 5];
        x_u64[..4].copy_from_slice(&self.to_canonical_u64_vec());

        let radix = 1u64 << w;
        let window_mask = radix - 1;
        let digits_count = Self::radix_2w_digit_count(w);

        let mut carry = 0u64;
        let mut digits = [0i8; 64];
        for (i, digit) in digits.iter_mut().enumerate().take(digits_count - 1) {
            let bit_offset = i * w;
            let u64_idx = bit_offset / 64;
            let bit_idx = bit_offset % 64;

            let bit_buf = if bit_idx < 64 - w {
                x_u64[u64_idx] >> bit_idx
            } else {
                (x_u64[u64_idx] >> bit_idx) | (x_u64[1 + u64_idx] << (64 - bit_idx))
            };

            let coef = carry + (bit_buf & window_mask);
            carry = (coef + radix / 2) >> w;
            *digit = (coef as i64 - (carry << w) as i64) as i8;
        }
        digits[digits_count - 1] = carry as i8;

        digits
    }
}

/// Add two 256-bit numbers mod q
#[inline]
const fn add_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);

    let (s0, borrow) = r0.overflowing_sub(MODULUS[0]);
    let (s1, borrow) = borrowing_sub(r1, MODULUS[1], borrow);
    let (s2, borrow) = borrowing_sub(r2, MODULUS[2], borrow);
    let (s3, borrow) = borrowing_sub(r3, MODULUS[3], borrow);

    if carry || !borrow {
        [s0, s1, s2, s3]
    } else {
        [r0, r1, r2, r3]
    }
}

/// Subtract two 256-bit numbers mod q
#[inline]
const fn sub_mod(a: [u64; 4], b: [u64; 4]) -> [u64; 4] {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);

    if borrow {
        let (r0, carry) = r0.overflowing_add(MODULUS[0]);
        let (r1, carry) = carrying_add(r1, MODULUS[1], carry);
        let (r2, carry) = carrying_add(r2, MODULUS[2], carry);
        let (r3, _) = carrying_add(r3, MODULUS[3], carry);
        [r0, r1, r2, r3]
    } else {
        [r0, r1, r2, r3]
    }
}

#[inline]
const fn neg_mod(a: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(MODULUS, a)
}

#[inline]
const fn is_canonical(limbs: [u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(MODULUS[0]);
    let (_, borrow) = borrowing_sub(limbs[1], MODULUS[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], MODULUS[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], MODULUS[3], borrow);
    borrow
}

#[inline]
const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Montgomery multiplication: (a * b * R^{-1}) mod q
#[inline]
fn montgomery_mul(a: ScalarField, b: ScalarField) -> ScalarField {
    let mut t = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;
        for j in 0..4 {
            let product = (a.limbs[i] as u128) * (b.limbs[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }
        t[i + 4] = carry as u64;
    }

    for i in 0..4 {
        let k = t[i].wrapping_mul(MU);
        let mut carry = 0u128;

        for j in 0..4 {
            let product = (k as u128) * (MODULUS[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
        }

        for j in 4..8 - i {
            let sum = (t[i + j] as u128) + carry;
            t[i + j] = sum as u64;
            carry = sum >> 64;
        }
    }

    let result = [t[4], t[5], t[6], t[7]];

    if is_canonical(result) {
        ScalarField { limbs: result }
    } else {
        ScalarField {
            limbs: sub_mod(result, MODULUS),
        }
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        loop {
            let mut limbs: [u64; 4] = rng.random();
            limbs[3] &= TOP_LIMB_MASK;

            if is_canonical(limbs) {
                return ScalarField::from_canonical_limbs(limbs);
            }
        }
    }
}

impl From<u64> for ScalarField {
    fn from(val: u64) -> Self {
        Self::from_canonical_u64(val)
    }
}

impl ConstantTimeEq for ScalarField {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.limbs[..].ct_eq(&other.limbs[..])
    }
}

impl Add for ScalarField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ScalarField {
            limbs: add_mod(self.limbs, rhs.limbs),
        }
    }
}

impl AddAssign for ScalarField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ScalarField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ScalarField {
            limbs: sub_mod(self.limbs, rhs.limbs),
        }
    }
}

impl SubAssign for ScalarField {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for ScalarField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        ScalarField {
            limbs: neg_mod(self.limbs),
        }
    }
}

impl Mul for ScalarField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        montgomery_mul(self, rhs)
    }
}

impl MulAssign for ScalarField {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for ScalarField {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl DivAssign for ScalarField {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for ScalarField {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for ScalarField {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_u64_vec();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}

impl Hash for ScalarField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs.hash(state);
    }
}

impl ScalarField {
    /// Multiplicative inverse via Fermat: a^{q-2}. Zero maps to zero.
    pub fn inverse(&self) -> Self {
        let exp = sub_mod(MODULUS, [2, 0, 0, 0]);
        self.pow_vartime(exp)
    }

    /// Variable-time exponentiation
    fn pow_vartime(&self, exp: [u64; 4]) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }

        let mut result = Self::ONE;
        let mut base = *self;

        for &limb in exp.iter() {
            let mut remaining = limb;
            for _ in 0..64 {
                if remaining & 1 == 1 {
                    result = result * base;
                }
                base = base * base;
                remaining >>= 1;
            }
        }

        result
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }
}
