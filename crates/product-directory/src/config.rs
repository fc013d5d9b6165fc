//! Service configuration.
//!
//! Defaults merged with `CATALOG_`-prefixed environment variables:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `CATALOG_STORE_BUFFER` | [`store_buffer`](CatalogConfig::store_buffer) | 32 |
//! | `CATALOG_EVENT_CAPACITY` | [`event_capacity`](CatalogConfig::event_capacity) | 64 |
//! | `CATALOG_ALLOW_NEGATIVE_STOCK` | [`allow_negative_stock`](CatalogConfig::allow_negative_stock) | false |

use crate::product_actor::InventoryPolicy;
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),

    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Capacity of the product store's request channel.
    pub store_buffer: usize,
    /// How many events a slow subscriber may fall behind before losing some.
    pub event_capacity: usize,
    /// Lets adjustments take stock below zero.
    pub allow_negative_stock: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store_buffer: 32,
            event_capacity: 64,
            allow_negative_stock: false,
        }
    }
}

impl CatalogConfig {
    /// The layered sources, exposed so callers can merge further providers.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(CatalogConfig::default()))
            .merge(Env::prefixed("CATALOG_"))
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: CatalogConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero channel capacities. [`load`](Self::load) runs this; call it
    /// yourself on a config built by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_buffer == 0 {
            return Err(ConfigError::Invalid("store_buffer must be at least 1"));
        }
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid("event_capacity must be at least 1"));
        }
        Ok(())
    }

    pub fn inventory_policy(&self) -> InventoryPolicy {
        InventoryPolicy {
            allow_negative_stock: self.allow_negative_stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_environment() {
        Jail::expect_with(|_jail| {
            let config = CatalogConfig::load().expect("defaults load");
            assert_eq!(config, CatalogConfig::default());
            assert_eq!(config.inventory_policy(), InventoryPolicy::default());
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("CATALOG_STORE_BUFFER", "8");
            jail.set_env("CATALOG_ALLOW_NEGATIVE_STOCK", "true");

            let config = CatalogConfig::load().expect("env overrides load");
            assert_eq!(config.store_buffer, 8);
            assert_eq!(config.event_capacity, 64);
            assert!(config.inventory_policy().allow_negative_stock);
            Ok(())
        });
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("CATALOG_EVENT_CAPACITY", "0");
            assert!(matches!(
                CatalogConfig::load(),
                Err(ConfigError::Invalid(_))
            ));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_value_is_a_load_error() {
        Jail::expect_with(|jail| {
            jail.set_env("CATALOG_STORE_BUFFER", "plenty");
            assert!(matches!(CatalogConfig::load(), Err(ConfigError::Load(_))));
            Ok(())
        });
    }
}
