use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once through a content provider and serves cached copies.
/// A missing source yields `TConfig::default()`, which is not cached so a file
/// created later is still picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: Mutex::new(None),
        }
    }

    fn cached(&self) -> Result<MutexGuard<'_, Option<TConfig>>, String> {
        self.config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.cached()?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        *self.cached()? = Some(config.clone());
        Ok(())
    }

    /// Drops the cached value so the next `get_config` reads the source again.
    pub fn reload(&self) -> Result<TConfig, String> {
        self.cached()?.take();
        self.get_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Limits {
        depth: u32,
    }

    impl Default for Limits {
        fn default() -> Self {
            Self { depth: 4 }
        }
    }

    impl Validate for Limits {
        fn validate(&self) -> Result<(), String> {
            if self.depth == 0 {
                return Err("depth must be greater than 0".to_string());
            }
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<InMemoryConfigProvider, Limits> {
        ConfigManager::new(
            InMemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_yields_default() {
        let manager = manager(None);
        assert_eq!(manager.get_config().unwrap(), Limits::default());
    }

    #[test]
    fn test_content_is_parsed_and_cached() {
        let manager = manager(Some("depth: 9\n"));
        assert_eq!(manager.get_config().unwrap().depth, 9);

        manager
            .config_content_provider
            .set_config_content("depth: 2\n")
            .unwrap();
        assert_eq!(manager.get_config().unwrap().depth, 9);
        assert_eq!(manager.reload().unwrap().depth, 2);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = manager(Some("depth: 0\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_set_config_rejects_invalid_and_keeps_source() {
        let manager = manager(None);
        assert!(manager.set_config(&Limits { depth: 0 }).is_err());
        assert_eq!(
            manager.config_content_provider.get_config_content().unwrap(),
            None
        );

        manager.set_config(&Limits { depth: 7 }).unwrap();
        assert_eq!(manager.reload().unwrap().depth, 7);
    }
}
