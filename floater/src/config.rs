//! Overlay configuration.
//!
//! Every field has a default, so a partial TOML table is enough:
//!
//! ```toml
//! placement = "top-end"
//! offset = 4.0
//! match_width = true
//! ```

use floatdom::Strategy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::position::{DEFAULT_PADDING, Placement, PositionOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid overlay config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Defaults shared by every overlay built from this config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub placement: Placement,
    pub offset: f64,
    pub match_width: bool,
    /// Viewport padding kept when shifting.
    pub padding: f64,
    #[serde(with = "strategy")]
    pub strategy: Strategy,
    /// Selector of the node floating roots are mounted under.
    pub portal_target: String,
    pub close_on_escape: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            placement: Placement::BottomStart,
            offset: 8.0,
            match_width: false,
            padding: DEFAULT_PADDING,
            strategy: Strategy::Absolute,
            portal_target: "body".to_string(),
            close_on_escape: true,
        }
    }
}

impl OverlayConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            placement: self.placement,
            offset: self.offset,
            padding: self.padding,
            match_width: self.match_width,
            ..PositionOptions::default()
        }
    }
}

/// `Strategy` lives in the DOM crate, which has no serde dependency.
mod strategy {
    use floatdom::Strategy;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &Strategy, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Strategy, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "absolute" => Ok(Strategy::Absolute),
            "fixed" => Ok(Strategy::Fixed),
            other => Err(D::Error::custom(format!(
                "unknown strategy '{other}', expected 'absolute' or 'fixed'"
            ))),
        }
    }
}
