//! Bot configuration, loaded from YAML or JSON.

use serde::{Deserialize, Serialize};

use arena_core::{ArenaConfig, Ballistics, ConfigError};
use arena_maneuver::{DodgeControl, DodgeTimings};
use arena_utility::ArbiterConfig;

use crate::AssemblyError;

/// Which decision policy drives the bot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Utility,
    BehaviorTree,
}

/// Top-level bot configuration. Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub policy: PolicyKind,
    pub arena: ArenaConfig,
    pub ballistics: BallisticsSettings,
    pub arbiter: ArbiterSettings,
    pub tree: TreeSettings,
    pub dodge: DodgeSettings,
}

/// Ball model parameters. The arena is taken from [`BotConfig::arena`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallisticsSettings {
    pub gravity: f32,
    pub restitution: f32,
    pub step: f32,
}

impl Default for BallisticsSettings {
    fn default() -> Self {
        let reference = Ballistics::default();
        Self {
            gravity: reference.gravity,
            restitution: reference.restitution,
            step: reference.step,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArbiterSettings {
    /// Margin a challenger must beat the active choice by.
    pub switch_threshold: f32,
}

impl Default for ArbiterSettings {
    fn default() -> Self {
        Self {
            switch_threshold: ArbiterConfig::default().switch_threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeSettings {
    pub max_steps_per_tick: usize,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self {
            max_steps_per_tick: arena_bt::DEFAULT_MAX_STEPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeSettings {
    /// Seconds after a dodge ends before another may begin.
    pub cooldown: f32,
}

impl Default for DodgeSettings {
    fn default() -> Self {
        Self {
            cooldown: DodgeControl::default().cooldown,
        }
    }
}

impl BotConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, AssemblyError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self, AssemblyError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn ballistics(&self) -> Ballistics {
        Ballistics {
            gravity: self.ballistics.gravity,
            restitution: self.ballistics.restitution,
            step: self.ballistics.step,
            arena: self.arena,
        }
    }

    pub fn arbiter_config(&self) -> ArbiterConfig {
        ArbiterConfig {
            switch_threshold: self.arbiter.switch_threshold,
        }
    }

    pub fn dodge_control(&self) -> DodgeControl {
        DodgeControl::new(DodgeTimings::default(), self.dodge.cooldown)
    }

    /// Rejects geometry, ball model, threshold and cooldown values the bot cannot run with.
    pub fn validate(&self) -> Result<(), AssemblyError> {
        self.ballistics().validate()?;
        non_negative("arbiter.switch_threshold", self.arbiter.switch_threshold)?;
        if self.tree.max_steps_per_tick == 0 {
            return Err(AssemblyError::InvalidSetting {
                name: "tree.max_steps_per_tick",
                value: "0".into(),
            });
        }
        non_negative("dodge.cooldown", self.dodge.cooldown)?;
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidWeight { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_the_default_config() {
        let config = BotConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, BotConfig::default());
        assert_eq!(config.arbiter.switch_threshold, 0.1);
        assert_eq!(config.tree.max_steps_per_tick, 256);
        assert_eq!(config.dodge.cooldown, 0.5);
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = BotConfig::from_json_str(
            r#"{ "policy": "behavior_tree", "arena": { "half_length": 6000.0 } }"#,
        )
        .unwrap();
        assert_eq!(config.policy, PolicyKind::BehaviorTree);
        assert_eq!(config.arena.half_length, 6000.0);
        assert_eq!(config.arena.half_width, 4096.0);
        assert_eq!(config.ballistics().arena.half_length, 6000.0);
    }

    #[test]
    fn rejects_out_of_range_settings() {
        let err = BotConfig::from_yaml_str("arbiter:\n  switch_threshold: -1.0\n").unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::Config(ConfigError::InvalidWeight {
                name: "arbiter.switch_threshold",
                ..
            })
        ));

        let err = BotConfig::from_yaml_str("ballistics:\n  restitution: 2.0\n").unwrap_err();
        assert!(matches!(err, AssemblyError::Config(_)));

        assert!(BotConfig::from_yaml_str("tree:\n  max_steps_per_tick: 0\n").is_err());
        assert!(BotConfig::from_yaml_str("policy: sideways\n").is_err());
    }
}
