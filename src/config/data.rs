//! The configuration structs used to build the AppConfig, and their impls.
use std::{
    collections::{hash_map::Entry, HashMap},
    io::Read,
};

use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;
use toml::Value;

use crate::config::{ConfigError, ConfigResult};

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
}

/// Accumulates raw `section -> key -> value` tables from any number of TOML
/// sources, later sources overriding earlier ones key by key.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct AppConfigBuilder(HashMap<String, HashMap<String, Value>>);

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    pub fn init() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

impl AppConfigBuilder {
    /// Extends this `AppConfigBuilder` with the contents of `other` builder.
    fn extend_builder(&mut self, other: Self) {
        for (entry, entry_hm) in other.0 {
            if let Entry::Vacant(e) = self.0.entry(entry.clone()) {
                e.insert(entry_hm);
            } else {
                let target_hm = self.0.get_mut(&entry).expect("Checked above!");
                for (inner_entry, inner_value) in entry_hm {
                    target_hm.insert(inner_entry, inner_value);
                }
            }
        }
    }

    /// Panics if file reading or deserialization goes wrong.
    pub fn add_source_file(mut self, mut file: std::fs::File) -> Self {
        let mut file_content = String::new();

        if let Err(e) = file.read_to_string(&mut file_content) {
            panic!("Fatal Error: Building config: {e}");
        }

        let app_conf_builder: AppConfigBuilder = toml::from_str(&file_content)
            .unwrap_or_else(|e| panic!("Fatal Error: Building config: {e}"));

        self.extend_builder(app_conf_builder);

        self
    }

    pub fn build(self) -> ConfigResult<AppConfig> {
        let serialized = toml::to_string(&self)?;
        let app_config = toml::from_str(&serialized)?;
        Ok(app_config)
    }
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail),
        }
    }
}
