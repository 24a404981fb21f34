//! Quantization mode presets and optional configuration file.
//!
//! Modes bundle the tuned quantizer settings under a memorable name. The
//! built-in catalog can be replaced or extended with a YAML file:
//!
//! ```yaml
//! modes:
//!   balanced:
//!     grey_mix: 1.6
//!   poster:
//!     grey_mix: 0.4
//! default_mode: poster
//! ```

use std::collections::HashMap;
use std::path::Path;

use channel_palette::MergeStrategy;
use serde::Deserialize;

use crate::error::CliError;

/// Quantization configuration loaded from a YAML file or built-in defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct QuantizeConfig {
    /// Named mode presets.
    #[serde(default)]
    pub modes: HashMap<String, ModeConfig>,

    /// Mode used when the command line names none.
    #[serde(default = "default_mode")]
    pub default_mode: String,
}

fn default_mode() -> String {
    "balanced".to_string()
}

/// Settings for one quantization mode.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ModeConfig {
    /// Grey-mix dampening factor: larger values give grey/lightness buckets
    /// a bigger share of the palette.
    pub grey_mix: f32,
}

impl QuantizeConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
        if config.modes.is_empty() {
            return Err(CliError::Config(format!(
                "{}: no modes defined",
                path.display()
            )));
        }
        tracing::info!(
            modes = config.modes.len(),
            default = %config.default_mode,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Look up a mode by name, falling back to the configured default when
    /// `name` is `None`.
    pub fn resolve_mode(&self, name: Option<&str>) -> Result<ModeConfig, CliError> {
        let name = name.unwrap_or(&self.default_mode);
        self.modes
            .get(name)
            .copied()
            .ok_or_else(|| CliError::UnknownMode(name.to_string()))
    }
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        // Tuning constants carried over from the upstream mode catalog.
        let mut modes = HashMap::new();
        modes.insert("balanced".to_string(), ModeConfig { grey_mix: 1.6 });
        modes.insert("monotone".to_string(), ModeConfig { grey_mix: 2.0 });
        modes.insert("vibrant".to_string(), ModeConfig { grey_mix: 0.6 });

        Self {
            modes,
            default_mode: "balanced".to_string(),
        }
    }
}

/// Parse a merge strategy name from the command line.
pub fn parse_strategy(name: &str) -> Result<MergeStrategy, CliError> {
    match name {
        "least-cost" => Ok(MergeStrategy::LeastCost),
        "greatest-cost" => Ok(MergeStrategy::GreatestCost),
        "alternating" => Ok(MergeStrategy::Alternating),
        other => Err(CliError::UnknownStrategy(other.to_string())),
    }
}
