use p3_field::extension::BinomialExtensionField;
use p3_field::PrimeCharacteristicRing;
use p3_koala_bear::KoalaBear;

/// KoalaBear degree-8 extension field
pub type BaseField = BinomialExtensionField<KoalaBear, 8>;

/// Build an extension element from its coefficients, lowest power of `u` first.
#[inline]
pub fn from_coeffs(coeffs: [KoalaBear; 8]) -> BaseField {
    BaseField::from(coeffs)
}

// Curve parameters: y^2 = x^3 + a*x + b with a = 3*u and b = 42639.

/// The 'a' coefficient: 3*u
#[inline]
pub(crate) fn curve_a() -> BaseField {
    let zero = KoalaBear::ZERO;
    from_coeffs([zero, KoalaBear::new(3), zero, zero, zero, zero, zero, zero])
}

/// The 'b' coefficient: 42639
#[inline]
pub(crate) fn curve_b() -> BaseField {
    let zero = KoalaBear::ZERO;
    from_coeffs([KoalaBear::new(42639), zero, zero, zero, zero, zero, zero, zero])
}

/// 3*b, used by the complete projective formulas.
#[inline]
pub(crate) fn curve_b3() -> BaseField {
    let zero = KoalaBear::ZERO;
    from_coeffs([KoalaBear::new(3 * 42639), zero, zero, zero, zero, zero, zero, zero])
}
