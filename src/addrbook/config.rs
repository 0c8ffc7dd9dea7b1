use crate::error::{AddressBookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

pub const CONTACTS_FILE_ENV: &str = "ADDRBOOK_FILE";

/// Configuration for addrbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddrbookConfig {
    /// Where contacts are persisted. Relative paths resolve against the working directory.
    #[serde(default = "default_contacts_file")]
    pub contacts_file: PathBuf,
}

fn default_contacts_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONTACTS_FILE)
}

impl Default for AddrbookConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
        }
    }
}

impl AddrbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddressBookError::Io)?;
        let config: AddrbookConfig =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AddressBookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(AddressBookError::Serialization)?;
        fs::write(config_path, content).map_err(AddressBookError::Io)?;
        Ok(())
    }

    /// Picks the contacts file: explicit flag, then environment, then this config.
    pub fn resolve_contacts_file(
        &self,
        flag: Option<PathBuf>,
        env_value: Option<String>,
    ) -> PathBuf {
        flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| self.contacts_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AddrbookConfig::default();
        assert_eq!(config.contacts_file, PathBuf::from("contacts.json"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = AddrbookConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, AddrbookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_dir = temp_dir.path().join("addrbook");

        let config = AddrbookConfig {
            contacts_file: PathBuf::from("/tmp/book.json"),
        };
        config.save(&config_dir).unwrap();

        let loaded = AddrbookConfig::load(&config_dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let parsed: AddrbookConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AddrbookConfig::default());
    }

    #[test]
    fn test_resolution_order() {
        let config = AddrbookConfig {
            contacts_file: PathBuf::from("from-config.json"),
        };
        assert_eq!(
            config.resolve_contacts_file(
                Some(PathBuf::from("flag.json")),
                Some("env.json".to_string())
            ),
            PathBuf::from("flag.json")
        );
        assert_eq!(
            config.resolve_contacts_file(None, Some("env.json".to_string())),
            PathBuf::from("env.json")
        );
        assert_eq!(
            config.resolve_contacts_file(None, Some(String::new())),
            PathBuf::from("from-config.json")
        );
        assert_eq!(
            config.resolve_contacts_file(None, None),
            PathBuf::from("from-config.json")
        );
    }
}
