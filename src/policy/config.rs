use std::str::FromStr;

use crate::foundation::{
    core::Engine,
    error::{RingError, RingResult},
};

/// Environment variable disabling ring switches for the whole process.
pub const ENV_NO_RING_SWITCH: &str = "RINGSEL_NO_RING_SWITCH";
/// Environment variable pinning every decision to one engine.
pub const ENV_FORCE_ENGINE: &str = "RINGSEL_FORCE_ENGINE";

/// Diagnostic pin on the decision functions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineOverride {
    /// Heuristics decide.
    #[default]
    Auto,
    /// Every query answers "blit".
    ForceBlit,
    /// Every query answers "render".
    ForceRender,
}

impl EngineOverride {
    /// The pinned engine, if any.
    pub fn forced(self) -> Option<Engine> {
        match self {
            Self::Auto => None,
            Self::ForceBlit => Some(Engine::Blit),
            Self::ForceRender => Some(Engine::Render),
        }
    }
}

impl FromStr for EngineOverride {
    type Err = RingError;

    fn from_str(s: &str) -> RingResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "blit" | "blt" | "force_blit" => Ok(Self::ForceBlit),
            "render" | "force_render" => Ok(Self::ForceRender),
            other => Err(RingError::config(format!(
                "unknown engine override '{other}' (expected auto, blit or render)"
            ))),
        }
    }
}

/// Injectable policy switches. Takes precedence over every heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// When false no switch is ever considered cheap.
    pub ring_switch: bool,
    /// Pin on the final answer.
    pub engine_override: EngineOverride,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            ring_switch: true,
            engine_override: EngineOverride::Auto,
        }
    }
}

impl PolicyConfig {
    /// Defaults with the process-scope environment overrides applied.
    pub fn from_env() -> RingResult<Self> {
        Self::default().with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> RingResult<Self> {
        if let Some(v) = lookup(ENV_NO_RING_SWITCH) {
            self.ring_switch = !parse_flag(ENV_NO_RING_SWITCH, &v)?;
            tracing::debug!(ring_switch = self.ring_switch, "ring switch override from env");
        }
        if let Some(v) = lookup(ENV_FORCE_ENGINE) {
            self.engine_override = v.parse()?;
            tracing::debug!(engine_override = ?self.engine_override, "engine override from env");
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, value: &str) -> RingResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(RingError::config(format!(
            "{key}: expected a boolean, got '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/policy/config.rs"]
mod tests;
