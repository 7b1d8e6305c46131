//! Algorithm selection for variable-base multiscalar multiplication.

use core::borrow::Borrow;

use curve::{Projective, ScalarField};
use tracing::trace;

use crate::config::MsmConfig;
use crate::errors::MsmError;
use crate::pippenger::Pippenger;
use crate::straus::Straus;
use crate::traits::{MultiscalarMul, VartimeMultiscalarMul};

/// Variable-time `Σ s_i * P_i`, picking Straus for small inputs and
/// Pippenger from `config.pippenger_threshold` terms on.
pub fn optional_multiscalar_mul_with_config<I, J>(
    scalars: I,
    points: J,
    config: &MsmConfig,
) -> Result<Projective, MsmError>
where
    I: IntoIterator,
    I::Item: Borrow<ScalarField>,
    J: IntoIterator<Item = Option<Projective>>,
{
    config.validate()?;

    let scalars: Vec<ScalarField> = scalars.into_iter().map(|s| *s.borrow()).collect();
    let size = scalars.len();

    if size < config.pippenger_threshold {
        trace!(size, "dispatching to straus");
        Straus::optional_multiscalar_mul_with_width(scalars, points, config.dynamic_naf_width)
    } else {
        trace!(size, "dispatching to pippenger");
        Pippenger::optional_multiscalar_mul(scalars, points)
    }
}

impl MultiscalarMul for Projective {
    type Point = Projective;

    fn multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Projective, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator,
        J::Item: Borrow<Projective>,
    {
        Straus::multiscalar_mul(scalars, points)
    }
}

impl VartimeMultiscalarMul for Projective {
    type Point = Projective;

    fn optional_multiscalar_mul<I, J>(scalars: I, points: J) -> Result<Projective, MsmError>
    where
        I: IntoIterator,
        I::Item: Borrow<ScalarField>,
        J: IntoIterator<Item = Option<Projective>>,
    {
        optional_multiscalar_mul_with_config(scalars, points, &MsmConfig::default())
    }
}
