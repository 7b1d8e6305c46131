use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{mul_generator, Affine, BaseField, Projective, ScalarField};

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for BaseField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

impl RandomField for ScalarField {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

/// Uniform points, sampled as `s * G` for a uniform scalar `s`.
impl Distribution<Projective> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Projective {
        mul_generator(&ScalarField::random(rng))
    }
}

impl Distribution<Affine> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Affine {
        let p: Projective = self.sample(rng);
        p.to_affine()
    }
}
