pub mod aliases;
pub mod app_config;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;

pub use aliases::{load_aliases, parse_aliases, AliasFile};
pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use fields::{normalize_header, Field, FieldAliases};
pub use record::{CellValue, RawRow, PropertyRecord};
