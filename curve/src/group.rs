use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

impl ScalarBits for crate::ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.to_canonical_u64_vec()
    }
}

/// Prime-order group operations shared by the affine and projective models.
///
/// The provided methods are straightforward reference algorithms; the point
/// types override the ones they have faster or constant-time versions of.
pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    /// `scalar * G` for the fixed generator `G`.
    fn mul_generator(scalar: &Self::Scalar) -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Right-to-left double-and-add.
    #[inline]
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();
        let mut temp = *self;

        for &limb in scalar_limbs.iter() {
            let mut bits = limb;
            for _ in 0..64 {
                if bits & 1 == 1 {
                    result = result + temp;
                }
                temp = temp.double();
                bits >>= 1;
            }
        }

        result
    }

    /// Fixed 4-bit windows over an unsigned table [O, P, ..., 15P].
    fn scalar_mul_windowed(&self, scalar: &Self::Scalar) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut table = [Self::identity(); 16];
        table[1] = *self;

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1] + table[1]
            };
        }

        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for shift in (0..64).step_by(4).rev() {
                for _ in 0..4 {
                    result = result.double();
                }

                let window = ((limb >> shift) & 0xF) as usize;
                if window != 0 {
                    result = result + table[window];
                }
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        let mut result = Self::identity();
        let mut temp = *self;
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp;
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }

    /// Naive sum of independent scalar multiplications; the reference the
    /// multiscalar engines are checked against.
    fn multi_scalar_mul(points: &[Self], scalars: &[Self::Scalar]) -> Self {
        assert_eq!(
            points.len(),
            scalars.len(),
            "Points and scalars must have same length"
        );

        points
            .iter()
            .zip(scalars.iter())
            .fold(Self::identity(), |acc, (point, scalar)| {
                acc + point.scalar_mul(scalar)
            })
    }
}
