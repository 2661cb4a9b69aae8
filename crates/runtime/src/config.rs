//! Runtime configuration.
//!
//! Loaded from RON, then optionally overridden by environment variables:
//!
//! - `MIRROR_CONFIG` - path of a RON file to start from
//! - `MIRROR_CONTRACT_ID` - `0x`-prefixed contract identity
//! - `MIRROR_EVENT_BUFFER` - event channel capacity
use std::env;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use game_core::{Identity, RulesConfig};

use crate::api::{Result, RuntimeError};
use crate::events::EventBus;

/// Configuration shared by the runtime and its event bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Identity of the game contract; proofs are bound to it and it is
    /// granted decryption rights on every stored handle.
    pub contract: Identity,
    pub rules: RulesConfig,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            contract: Identity::ZERO,
            rules: RulesConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
        }
    }
}

impl RuntimeConfig {
    pub const CONFIG_PATH_VAR: &'static str = "MIRROR_CONFIG";
    pub const CONTRACT_VAR: &'static str = "MIRROR_CONTRACT_ID";
    pub const EVENT_BUFFER_VAR: &'static str = "MIRROR_EVENT_BUFFER";

    pub fn with_contract(mut self, contract: Identity) -> Self {
        self.contract = contract;
        self
    }

    pub fn with_rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::from_str(text).map_err(|e| RuntimeError::ConfigParse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RuntimeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Builds a configuration from the process environment, reading `.env`
    /// first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(Self::CONFIG_PATH_VAR) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(raw) = lookup(Self::CONTRACT_VAR) {
            config.contract = Identity::from_str(raw.trim()).map_err(|e| {
                RuntimeError::ConfigParse(format!("{}: {e}", Self::CONTRACT_VAR))
            })?;
        }
        if let Some(size) = parse_var::<usize, _>(&lookup, Self::EVENT_BUFFER_VAR) {
            config.event_buffer_size = size.max(1);
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use game_core::RulesConfigError;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn ron_fields_default_when_missing() {
        let config = RuntimeConfig::from_ron_str("(event_buffer_size: 8)").unwrap();

        assert_eq!(config.event_buffer_size, 8);
        assert_eq!(config.rules, RulesConfig::default());
        assert_eq!(config.contract, Identity::ZERO);
    }

    #[test]
    fn ron_parses_contract_and_rules() {
        let text = r#"(
            contract: "0x00000000000000000000000000000000000000cc",
            rules: (fail_below: 40, death_below: 45),
        )"#;
        let config = RuntimeConfig::from_ron_str(text).unwrap();

        let mut expected = [0u8; 20];
        expected[19] = 0xcc;
        assert_eq!(config.contract, Identity::new(expected));
        assert_eq!(config.rules.fail_below, 40);
        assert_eq!(config.rules.death_below, 45);
        assert_eq!(config.rules.success_reward, RulesConfig::DEFAULT_SUCCESS_REWARD);
    }

    #[test]
    fn malformed_ron_is_a_parse_error() {
        let result = RuntimeConfig::from_ron_str("(event_buffer_size: \"lots\")");
        assert!(matches!(result, Err(RuntimeError::ConfigParse(_))));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(event_buffer_size: 3)").unwrap();

        let config = RuntimeConfig::load(file.path()).unwrap();
        assert_eq!(config.event_buffer_size, 3);

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.ron");
        assert!(matches!(
            RuntimeConfig::load(&missing),
            Err(RuntimeError::ConfigIo { path, .. }) if path == missing
        ));
    }

    #[test]
    fn lookup_overrides_file_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(event_buffer_size: 3)").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let config = RuntimeConfig::from_lookup(lookup(&[
            ("MIRROR_CONFIG", path.as_str()),
            ("MIRROR_CONTRACT_ID", "0x0101010101010101010101010101010101010101"),
            ("MIRROR_EVENT_BUFFER", "0"),
        ]))
        .unwrap();

        assert_eq!(config.contract, Identity::new([1; 20]));
        assert_eq!(config.event_buffer_size, 1);
    }

    #[test]
    fn bad_contract_override_is_rejected() {
        let result = RuntimeConfig::from_lookup(lookup(&[("MIRROR_CONTRACT_ID", "0x12")]));
        assert!(matches!(result, Err(RuntimeError::ConfigParse(_))));
    }

    #[test]
    fn validate_surfaces_rule_errors() {
        let config = RuntimeConfig::default().with_rules(RulesConfig::new().with_thresholds(70, 60));
        assert!(matches!(
            config.validate(),
            Err(RuntimeError::InvalidConfig(RulesConfigError::BandsOutOfOrder { .. }))
        ));
    }
}
