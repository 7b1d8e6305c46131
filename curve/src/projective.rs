use crate::affine::Affine;
use crate::basefield::{curve_a, curve_b, curve_b3, BaseField};
use crate::window::LookupTable;
use crate::{generator_table, vartime_double_base_mul, Group, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use p3_field::{Field, PrimeCharacteristicRing};
use p3_koala_bear::KoalaBear;
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable};

/// Projective point on the elliptic curve.
/// Represents a point in homogeneous coordinates (X:Y:Z) where (x,y) = (X/Z, Y/Z).
/// The point at infinity is any (0:Y:0), canonically (0:1:0).
///
/// Addition and doubling use the complete formulas of Renes, Costello and
/// Batina (ePrint 2015/1060, algorithms 1 and 3), valid for every pair of
/// inputs on a prime-order curve. Equality compares the points, not the
/// coordinates.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Projective {
    pub x: BaseField,
    pub y: BaseField,
    pub z: BaseField,
}

impl Projective {
    /// The point at infinity (identity element): (0:1:0)
    pub const INFINITY: Self = Projective {
        x: BaseField::ZERO,
        y: BaseField::ONE,
        z: BaseField::ZERO,
    };

    pub fn new(x: BaseField, y: BaseField, z: BaseField) -> Self {
        Projective { x, y, z }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn to_affine(&self) -> Affine {
        if self.is_infinity() {
            return Affine::INFINITY;
        }

        let z_inv = self.z.inverse();
        Affine::new(self.x * z_inv, self.y * z_inv)
    }

    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::INFINITY;
        }

        Projective::new(point.x, point.y, BaseField::ONE)
    }

    /// Check if a point is on the curve: Y^2*Z = X^3 + a*X*Z^2 + b*Z^3.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return self.x.is_zero() && !self.y.is_zero();
        }

        let z2 = self.z * self.z;
        let z3 = z2 * self.z;

        let lhs = self.y * self.y * self.z;
        let rhs = self.x * self.x * self.x + curve_a() * self.x * z2 + curve_b() * z3;

        lhs == rhs
    }

    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    pub fn generator_pedersen() -> Self {
        Self::from_affine(&Affine::generator_pedersen())
    }

    /// Point doubling: 2*P (complete, algorithm 3 of RCB16).
    pub fn double(&self) -> Self {
        let a = curve_a();
        let b3 = curve_b3();

        let t0 = self.x * self.x;
        let t1 = self.y * self.y;
        let t2 = self.z * self.z;
        let t3 = self.x * self.y;
        let t3 = t3 + t3;
        let z3 = self.x * self.z;
        let z3 = z3 + z3;
        let x3 = a * z3;
        let y3 = b3 * t2;
        let y3 = x3 + y3;
        let x3 = t1 - y3;
        let y3 = t1 + y3;
        let y3 = x3 * y3;
        let x3 = t3 * x3;
        let z3 = b3 * z3;
        let t2 = a * t2;
        let t3 = t0 - t2;
        let t3 = a * t3;
        let t3 = t3 + z3;
        let z3 = t0 + t0;
        let t0 = z3 + t0;
        let t0 = t0 + t2;
        let t0 = t0 * t3;
        let y3 = y3 + t0;
        let t2 = self.y * self.z;
        let t2 = t2 + t2;
        let t0 = t2 * t3;
        let x3 = x3 - t0;
        let z3 = t2 * t1;
        let z3 = z3 + z3;
        let z3 = z3 + z3;

        Projective::new(x3, y3, z3)
    }

    /// Compute 2^k * P by repeated doubling.
    pub fn mul_by_pow_2(&self, k: u32) -> Self {
        let mut r = *self;
        for _ in 0..k {
            r = r.double();
        }
        r
    }

    pub fn negate(&self) -> Self {
        Projective::new(self.x, -self.y, self.z)
    }

    /// Multiply the fixed generator in constant time using the precomputed
    /// generator table.
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        generator_table().mul(scalar)
    }

    /// Constant-time variable-base scalar multiplication.
    ///
    /// Signed radix-16 digits select from a table of [P, 2P, ..., 8P] with a
    /// full scan, so neither the branches nor the memory accesses depend on
    /// the scalar.
    pub fn mul_ct(&self, scalar: &ScalarField) -> Self {
        let table = LookupTable::from(self);
        let digits = scalar.as_radix_16();

        let mut acc = Self::INFINITY;
        for &digit in digits.iter().rev() {
            acc = acc.mul_by_pow_2(4);
            acc += table.select(digit);
        }
        acc
    }

    /// Compute a * G + b * P, where G is the fixed generator. Variable time.
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        vartime_double_base_mul(b, point, a)
    }

    /// Batch normalization: convert multiple projective points to affine
    /// with a single field inversion (Montgomery's trick).
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine> {
        let mut prefix = Vec::with_capacity(points.len());
        let mut acc = BaseField::ONE;
        for p in points {
            prefix.push(acc);
            if !p.is_infinity() {
                acc *= p.z;
            }
        }

        let mut inv = acc.inverse();
        let mut out = vec![Affine::INFINITY; points.len()];
        for ((p, prod), slot) in points.iter().zip(prefix).zip(out.iter_mut()).rev() {
            if p.is_infinity() {
                continue;
            }
            let z_inv = inv * prod;
            inv *= p.z;
            *slot = Affine::new(p.x * z_inv, p.y * z_inv);
        }
        out
    }
}

impl PartialEq for Projective {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl Eq for Projective {}

impl Default for Projective {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl ConditionallySelectable for Projective {
    /// Branch-free selection: `a + c * (b - a)` with `c` in {0, 1}.
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let c = KoalaBear::new(choice.unwrap_u8() as u32);
        Projective {
            x: a.x + (b.x - a.x) * c,
            y: a.y + (b.y - a.y) * c,
            z: a.z + (b.z - a.z) * c,
        }
    }
}

impl Group for Projective {
    type Scalar = ScalarField;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Projective::generator()
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Projective::mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    #[inline]
    fn scalar_mul(&self, scalar: &ScalarField) -> Self {
        self.mul_ct(scalar)
    }
}

impl Add for Projective {
    type Output = Self;

    /// Complete addition, algorithm 1 of RCB16.
    fn add(self, other: Self) -> Self {
        let a = curve_a();
        let b3 = curve_b3();

        let t0 = self.x * other.x;
        let t1 = self.y * other.y;
        let t2 = self.z * other.z;
        let t3 = self.x + self.y;
        let t4 = other.x + other.y;
        let t3 = t3 * t4;
        let t4 = t0 + t1;
        let t3 = t3 - t4;
        let t4 = self.x + self.z;
        let t5 = other.x + other.z;
        let t4 = t4 * t5;
        let t5 = t0 + t2;
        let t4 = t4 - t5;
        let t5 = self.y + self.z;
        let x3 = other.y + other.z;
        let t5 = t5 * x3;
        let x3 = t1 + t2;
        let t5 = t5 - x3;
        let z3 = a * t4;
        let x3 = b3 * t2;
        let z3 = x3 + z3;
        let x3 = t1 - z3;
        let z3 = t1 + z3;
        let y3 = x3 * z3;
        let t1 = t0 + t0;
        let t1 = t1 + t0;
        let t2 = a * t2;
        let t4 = b3 * t4;
        let t1 = t1 + t2;
        let t2 = t0 - t2;
        let t2 = a * t2;
        let t4 = t4 + t2;
        let t0 = t1 * t4;
        let y3 = y3 + t0;
        let t0 = t5 * t4;
        let x3 = t3 * x3;
        let x3 = x3 - t0;
        let t0 = t3 * t1;
        let z3 = t5 * z3;
        let z3 = z3 + t0;

        Projective::new(x3, y3, z3)
    }
}

impl<'a> Add<&'a Projective> for &Projective {
    type Output = Projective;

    fn add(self, other: &'a Projective) -> Projective {
        *self + *other
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl<'a> Sub<&'a Projective> for &Projective {
    type Output = Projective;

    fn sub(self, other: &'a Projective) -> Projective {
        *self - *other
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Neg for &Projective {
    type Output = Projective;

    fn neg(self) -> Projective {
        self.negate()
    }
}

impl Mul<ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        self.mul_ct(&scalar)
    }
}

impl Mul<&ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        self.mul_ct(scalar)
    }
}

impl Mul<Projective> for ScalarField {
    type Output = Projective;

    fn mul(self, point: Projective) -> Projective {
        point.mul_ct(&self)
    }
}

impl Mul<&Projective> for ScalarField {
    type Output = Projective;

    fn mul(self, point: &Projective) -> Projective {
        point.mul_ct(&self)
    }
}

impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Projective::from_affine(&point)
    }
}

impl From<&Affine> for Projective {
    fn from(point: &Affine) -> Self {
        Projective::from_affine(point)
    }
}

impl From<Projective> for Affine {
    fn from(point: Projective) -> Self {
        point.to_affine()
    }
}

impl From<&Projective> for Affine {
    fn from(point: &Projective) -> Self {
        point.to_affine()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Group, RandomField};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use subtle::ConditionallyNegatable;

    #[test]
    fn test_infinity() {
        let inf = Projective::INFINITY;
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
        assert_eq!(inf.to_affine(), Affine::INFINITY);
    }

    #[test]
    fn test_generators_on_curve() {
        assert!(Projective::generator().is_on_curve());
        assert!(Projective::generator_pedersen().is_on_curve());
    }

    #[test]
    fn test_equality_is_projective() {
        let g = Projective::generator();
        let two = BaseField::TWO;
        let scaled = Projective::new(g.x * two, g.y * two, g.z * two);

        assert_eq!(g, scaled);
        assert_ne!(g, Projective::generator_pedersen());
        assert_ne!(g, Projective::INFINITY);

        let other_inf = Projective::new(BaseField::ZERO, two, BaseField::ZERO);
        assert_eq!(other_inf, Projective::INFINITY);
    }

    #[test]
    fn test_complete_addition_edge_cases() {
        let g = Projective::generator();
        let inf = Projective::INFINITY;

        assert_eq!(g + inf, g);
        assert_eq!(inf + g, g);
        assert!((inf + inf).is_infinity());
        assert!((g + g.negate()).is_infinity());
        assert_eq!(g + g, g.double());
        assert!(inf.double().is_infinity());
    }

    #[test]
    fn test_addition_matches_affine() {
        let g = Projective::generator();
        let h = Projective::generator_pedersen();

        let sum = (g + h).to_affine();
        assert_eq!(sum, Affine::generator() + Affine::generator_pedersen());
        assert!(sum.is_on_curve());

        let dbl = g.double().to_affine();
        assert_eq!(dbl, Affine::generator().double());
    }

    #[test]
    fn test_mul_by_pow_2() {
        let g = Projective::generator();
        assert_eq!(g.mul_by_pow_2(4), g.mul_u64(16));
        assert_eq!(g.mul_by_pow_2(0), g);
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = Projective::generator();
        let result = g.scalar_mul(&ScalarField::from_canonical_u64(5));

        assert_eq!(result, g + g + g + g + g);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let g = Projective::generator();
        assert!(g.scalar_mul(&ScalarField::ZERO).is_infinity());
        assert_eq!(g.scalar_mul(&ScalarField::ONE), g);
        assert!(Projective::INFINITY
            .scalar_mul(&ScalarField::from_canonical_u64(77))
            .is_infinity());
    }

    #[test]
    fn test_scalar_mul_minus_one() {
        let g = Projective::generator();
        assert_eq!(g.scalar_mul(&-ScalarField::ONE), -g);
    }

    #[test]
    fn test_mul_ct_matches_double_and_add() {
        let mut rng = StdRng::seed_from_u64(99);
        let g = Projective::generator_pedersen();
        for _ in 0..4 {
            let s = ScalarField::random(&mut rng);
            assert_eq!(g.mul_ct(&s), g.scalar_mul_windowed(&s));
        }
    }

    #[test]
    fn test_scalar_linearity() {
        let g = Projective::generator();
        let a = ScalarField::from_canonical_u64(3);
        let b = ScalarField::from_canonical_u64(5);

        assert_eq!(g * (a + b), g * a + g * b);
        assert_eq!((g * a) * b, g * (a * b));
    }

    #[test]
    fn test_mul_generator() {
        let scalar = ScalarField::from_canonical_u64(123456);
        let result = Projective::mul_generator(&scalar);

        assert_eq!(result, Projective::generator().scalar_mul_windowed(&scalar));
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_conditional_select_and_negate() {
        let g = Projective::generator();
        let h = Projective::generator_pedersen();

        assert_eq!(Projective::conditional_select(&g, &h, Choice::from(0)), g);
        assert_eq!(Projective::conditional_select(&g, &h, Choice::from(1)), h);

        let mut p = g;
        p.conditional_negate(Choice::from(0));
        assert_eq!(p, g);
        p.conditional_negate(Choice::from(1));
        assert_eq!(p, -g);
    }

    #[test]
    fn test_batch_normalize() {
        let g = Projective::generator();
        let points = vec![
            g.mul_u64(1),
            Projective::INFINITY,
            g.mul_u64(2) + g,
            g.mul_u64(4),
        ];

        let affine_points = Projective::batch_normalize(&points);

        assert_eq!(affine_points.len(), 4);
        for (proj, aff) in points.iter().zip(affine_points.iter()) {
            assert_eq!(proj.to_affine(), *aff);
        }
        assert!(Projective::batch_normalize(&[]).is_empty());
    }
}
