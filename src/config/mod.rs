//! `.fakegen.toml` configuration.

pub mod loader;

pub use loader::{load_config, load_config_file, load_config_from, CONFIG_FILE_NAME};

use crate::core::errors::{Error, Result};
use crate::generator::equality::DEFAULT_REFERENCE_PATTERNS;
use crate::generator::{CollisionPolicy, GeneratorOptions, TypeClassifier, DEFAULT_INDENT_WIDTH};
use serde::{Deserialize, Serialize};

const MAX_INDENT_WIDTH: usize = 16;

/// Root configuration structure for fakegen
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FakegenConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Spaces per indentation level in emitted Swift
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    #[serde(default)]
    pub collision_policy: CollisionPolicy,

    /// Regexes marking argument types compared by object identity
    #[serde(default = "default_reference_type_patterns")]
    pub reference_type_patterns: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
            collision_policy: CollisionPolicy::default(),
            reference_type_patterns: default_reference_type_patterns(),
        }
    }
}

impl GeneratorConfig {
    pub fn to_options(&self) -> Result<GeneratorOptions> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(Error::Configuration(format!(
                "indent_width must be between 1 and {}, got {}",
                MAX_INDENT_WIDTH, self.indent_width
            )));
        }
        let classifier = TypeClassifier::new(&self.reference_type_patterns).map_err(|e| {
            Error::Configuration(format!("invalid reference_type_patterns: {}", e))
        })?;
        Ok(GeneratorOptions {
            indent_width: self.indent_width,
            collision_policy: self.collision_policy,
            classifier,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub imports: Vec<String>,

    #[serde(default)]
    pub module: Option<String>,

    /// Write the regeneration command as a header comment
    #[serde(default = "default_regeneration_hint")]
    pub regeneration_hint: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            imports: Vec::new(),
            module: None,
            regeneration_hint: default_regeneration_hint(),
        }
    }
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

fn default_reference_type_patterns() -> Vec<String> {
    DEFAULT_REFERENCE_PATTERNS
        .iter()
        .map(|pattern| pattern.to_string())
        .collect()
}

fn default_regeneration_hint() -> bool {
    true
}

/// Contents written by `fakegen init`.
pub const DEFAULT_CONFIG: &str = r#"# fakegen configuration

[generator]
indent_width = 4
# preserve | disambiguate | reject
collision_policy = "preserve"
reference_type_patterns = ["AnyObject"]

[output]
imports = ["Foundation"]
regeneration_hint = true
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_text_parses() {
        let config: FakegenConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.generator, GeneratorConfig::default());
        assert_eq!(config.output.imports, vec!["Foundation"]);
        assert!(config.output.regeneration_hint);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: FakegenConfig = toml::from_str("").unwrap();
        assert_eq!(config, FakegenConfig::default());
        assert_eq!(config.generator.indent_width, 4);
        assert_eq!(config.generator.reference_type_patterns, vec!["AnyObject"]);
    }

    #[test]
    fn indent_width_is_bounded() {
        let config = GeneratorConfig {
            indent_width: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.to_options(), Err(Error::Configuration(_))));
    }

    #[test]
    fn bad_pattern_is_a_configuration_error() {
        let config = GeneratorConfig {
            reference_type_patterns: vec!["[".into()],
            ..GeneratorConfig::default()
        };
        let err = config.to_options().unwrap_err();
        assert!(err.to_string().contains("reference_type_patterns"));
    }

    #[test]
    fn collision_policy_reads_snake_case() {
        let config: FakegenConfig =
            toml::from_str("[generator]\ncollision_policy = \"disambiguate\"\n").unwrap();
        assert_eq!(config.generator.collision_policy, CollisionPolicy::Disambiguate);
        let options = config.generator.to_options().unwrap();
        assert_eq!(options.collision_policy, CollisionPolicy::Disambiguate);
    }
}
