//! Tunable parameters of the multiscalar multiplication engines.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DYNAMIC_NAF_WIDTH, DEFAULT_PIPPENGER_THRESHOLD, DEFAULT_STATIC_NAF_WIDTH,
    MAX_NAF_WIDTH, MIN_NAF_WIDTH,
};
use crate::errors::MsmError;

/// Parameters for algorithm selection and table sizes.
///
/// Missing fields take their defaults, so a partial TOML document such as
/// `pippenger_threshold = 256` is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MsmConfig {
    /// Variable-base inputs with at least this many terms use Pippenger.
    pub pippenger_threshold: usize,
    /// NAF width of precomputed fixed-base tables.
    pub static_naf_width: usize,
    /// NAF width of per-call variable-base tables.
    pub dynamic_naf_width: usize,
}

impl Default for MsmConfig {
    fn default() -> Self {
        Self {
            pippenger_threshold: DEFAULT_PIPPENGER_THRESHOLD,
            static_naf_width: DEFAULT_STATIC_NAF_WIDTH,
            dynamic_naf_width: DEFAULT_DYNAMIC_NAF_WIDTH,
        }
    }
}

impl MsmConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, MsmError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MsmError> {
        check_naf_width("static_naf_width", self.static_naf_width)?;
        check_naf_width("dynamic_naf_width", self.dynamic_naf_width)
    }
}

pub(crate) fn check_naf_width(name: &'static str, width: usize) -> Result<(), MsmError> {
    if (MIN_NAF_WIDTH..=MAX_NAF_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(MsmError::InvalidWindow { name, width })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = MsmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pippenger_threshold, 190);
        assert_eq!(config.static_naf_width, 8);
        assert_eq!(config.dynamic_naf_width, 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = MsmConfig::from_toml_str("pippenger_threshold = 64").expect("parse");
        assert_eq!(config.pippenger_threshold, 64);
        assert_eq!(config.static_naf_width, DEFAULT_STATIC_NAF_WIDTH);
        assert_eq!(config.dynamic_naf_width, DEFAULT_DYNAMIC_NAF_WIDTH);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = MsmConfig::from_toml_str("").expect("parse");
        assert_eq!(config, MsmConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_width() {
        let err = MsmConfig::from_toml_str("static_naf_width = 9").unwrap_err();
        assert!(matches!(
            err,
            MsmError::InvalidWindow {
                name: "static_naf_width",
                width: 9
            }
        ));

        let err = MsmConfig::from_toml_str("dynamic_naf_width = 1").unwrap_err();
        assert!(matches!(err, MsmError::InvalidWindow { width: 1, .. }));
    }

    #[test]
    fn test_rejects_unknown_and_malformed_fields() {
        let err = MsmConfig::from_toml_str("window = 4").unwrap_err();
        assert!(matches!(err, MsmError::Config(_)));

        let err = MsmConfig::from_toml_str("pippenger_threshold = \"many\"").unwrap_err();
        assert!(matches!(err, MsmError::Config(_)));
    }

    #[test]
    fn test_serializes_back_to_toml() {
        let config = MsmConfig {
            pippenger_threshold: 300,
            ..MsmConfig::default()
        };
        let text = toml::to_string(&config).expect("serialize");
        assert_eq!(MsmConfig::from_toml_str(&text).expect("parse"), config);
    }
}
