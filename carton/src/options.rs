//! Configuration for carton factories.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use carton_shared::errors::{CartonError, CartonResult};
use serde::{Deserialize, Serialize};

use crate::dimensions::Dimensions;
use crate::types::CartonId;

// ============================================================================
// Id Policy
// ============================================================================

/// What happens to the `id` field when a carton is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Ignore the encoded id and allocate a fresh one.
    #[default]
    Reassign,

    /// Keep the encoded id and move the factory counter past it.
    /// Falls back to a fresh id when the text has no `id` field.
    Adopt,
}

impl IdPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdPolicy::Reassign => "reassign",
            IdPolicy::Adopt => "adopt",
        }
    }
}

impl FromStr for IdPolicy {
    type Err = CartonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reassign" => Ok(IdPolicy::Reassign),
            "adopt" => Ok(IdPolicy::Adopt),
            _ => Err(CartonError::Config(format!(
                "unknown id policy: '{}' (supported: reassign, adopt)",
                s
            ))),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Carton Options
// ============================================================================

/// Options a [`CartonFactory`](crate::CartonFactory) is built from.
///
/// Every field has a default, so an empty JSON object is a valid file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartonOptions {
    /// Decoded-id handling.
    ///
    /// Default: `reassign`
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// First id the factory hands out.
    ///
    /// Default: 0
    #[serde(default)]
    pub first_id: CartonId,

    /// Size used by `create_default`.
    ///
    /// Default: [`Dimensions::MEDIUM`]
    #[serde(default = "default_size")]
    pub default_size: Dimensions,
}

fn default_size() -> Dimensions {
    Dimensions::MEDIUM
}

impl Default for CartonOptions {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::default(),
            first_id: CartonId::default(),
            default_size: default_size(),
        }
    }
}

impl CartonOptions {
    /// Load options from a JSON file, or YAML when the extension is
    /// `.yaml` / `.yml`.
    pub fn load(path: &Path) -> CartonResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            CartonError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );
        let options: CartonOptions = if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| {
                CartonError::Config(format!("invalid YAML in {}: {}", path.display(), e))
            })?
        } else {
            serde_json::from_str(&text).map_err(|e| {
                CartonError::Config(format!("invalid JSON in {}: {}", path.display(), e))
            })?
        };

        tracing::debug!(path = %path.display(), ?options, "Loaded carton options");
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> CartonResult<()> {
        if !self.default_size.is_valid() {
            return Err(CartonError::Config(format!(
                "default_size must be positive in every dimension, got {}",
                self.default_size
            )));
        }
        Ok(())
    }
}
