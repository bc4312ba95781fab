//! YAML configuration for the resolver.
//!
//! ```yaml
//! version: 1
//! normalize:
//!   saturation: 0.6
//!   lightness: 0.5
//! tie_break: first_seen
//! strict: false
//! ```
//!
//! Every key is optional; omitted keys take the defaults shown above.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalize::NormalizeTarget;
use crate::resolver::BiomeColorResolver;
use crate::vote::TieBreak;

/// Normalization target settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Target saturation (0.0-1.0).
    #[serde(default = "default_saturation")]
    pub saturation: f64,

    /// Target lightness (0.0-1.0).
    #[serde(default = "default_lightness")]
    pub lightness: f64,
}

fn default_saturation() -> f64 {
    NormalizeTarget::SIGNATURE.saturation
}
fn default_lightness() -> f64 {
    NormalizeTarget::SIGNATURE.lightness
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            saturation: default_saturation(),
            lightness: default_lightness(),
        }
    }
}

impl From<&NormalizeConfig> for NormalizeTarget {
    fn from(config: &NormalizeConfig) -> Self {
        Self::new(config.saturation, config.lightness)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Normalization target.
    #[serde(default)]
    pub normalize: NormalizeConfig,

    /// Tie-break policy between equally frequent categories.
    #[serde(default)]
    pub tie_break: TieBreak,

    /// Reject map colors with out-of-range channels.
    #[serde(default)]
    pub strict: bool,
}

fn default_version() -> u32 {
    1
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            normalize: NormalizeConfig::default(),
            tie_break: TieBreak::default(),
            strict: false,
        }
    }
}

impl ResolverConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        tracing::debug!(path = %path.display(), "loading resolver config");
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] for a saturation or lightness outside
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("normalize.saturation", self.normalize.saturation),
            ("normalize.lightness", self.normalize.lightness),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::ConfigInvalid {
                    key: key.to_string(),
                    message: format!("{value} is outside [0, 1]"),
                });
            }
        }
        Ok(())
    }

    /// Validates and builds the configured resolver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] if validation fails.
    pub fn into_resolver(self) -> Result<BiomeColorResolver> {
        self.validate()?;
        Ok(BiomeColorResolver::new()
            .with_target(NormalizeTarget::from(&self.normalize))
            .with_tie_break(self.tie_break)
            .strict(self.strict))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = ResolverConfig::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.normalize.saturation, 0.6);
        assert_eq!(config.normalize.lightness, 0.5);
        assert_eq!(config.tie_break, TieBreak::FirstSeen);
        assert!(!config.strict);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = ResolverConfig::parse("version: 1").unwrap();
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r#"
version: 1
normalize:
  saturation: 0.8
  lightness: 0.4
tie_break: lexical
strict: true
"#;

        let config = ResolverConfig::parse(yaml).unwrap();

        assert_eq!(config.normalize.saturation, 0.8);
        assert_eq!(config.normalize.lightness, 0.4);
        assert_eq!(config.tie_break, TieBreak::Lexical);
        assert!(config.strict);
    }

    #[test]
    fn test_config_partial_normalize_keeps_defaults() {
        let config = ResolverConfig::parse("normalize:\n  lightness: 0.7\n").unwrap();
        assert_eq!(config.normalize.saturation, 0.6);
        assert_eq!(config.normalize.lightness, 0.7);
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
version: 1
normalize:
  saturation: not_a_number
"#;

        let err = ResolverConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('4'), "Error should include line number");
    }

    #[test]
    fn test_config_unknown_tie_break() {
        assert!(ResolverConfig::parse("tie_break: random").is_err());
    }

    #[test]
    fn test_config_validate() {
        let mut config = ResolverConfig::new();
        assert!(config.validate().is_ok());

        config.normalize.lightness = 1.5;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, Error::ConfigInvalid { ref key, .. } if key == "normalize.lightness")
        );
        assert!(config.into_resolver().is_err());
    }

    #[test]
    fn test_into_resolver() {
        let config = ResolverConfig::parse("tie_break: unspecified\nstrict: true").unwrap();
        let resolver = BiomeColorResolver::from_config(&config).unwrap();

        assert_eq!(resolver.tie_break(), TieBreak::Unspecified);
        assert!(resolver.is_strict());
        assert_eq!(resolver.target(), NormalizeTarget::SIGNATURE);
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "normalize:\n  saturation: 0.3").unwrap();

        let config = ResolverConfig::load(file.path()).unwrap();
        assert_eq!(config.normalize.saturation, 0.3);
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = ResolverConfig::load("/nonexistent/biome-tint.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));

        let config = ResolverConfig::load_or_default("/nonexistent/biome-tint.yaml");
        assert_eq!(config, ResolverConfig::default());
    }

    #[test]
    fn test_color_types_deserialize() {
        let color: crate::color::Rgba = serde_yaml_ng::from_str("{r: 1, g: 2, b: 3}").unwrap();
        assert_eq!(color, crate::color::Rgba::rgb(1.0, 2.0, 3.0));

        let hsla: crate::color::Hsla = serde_yaml_ng::from_str("{h: 0.5, s: 0.2, l: 0.1}").unwrap();
        assert_eq!(hsla.a, 1.0);
    }
}
