use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerMode {
    /// One poll cycle, then close
    #[default]
    SingleShot,
    /// Poll until shutdown
    Continuous,
}

impl fmt::Display for ConsumerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleShot => f.write_str("single_shot"),
            Self::Continuous => f.write_str("continuous"),
        }
    }
}

impl FromStr for ConsumerMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single_shot" | "single-shot" | "once" => Ok(Self::SingleShot),
            "continuous" => Ok(Self::Continuous),
            other => Err(ConfigError::config(format!(
                "consumer.mode must be 'single_shot' or 'continuous', got '{other}'"
            ))),
        }
    }
}
