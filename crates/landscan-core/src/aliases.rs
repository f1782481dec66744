use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fields::{Field, FieldAliases};
use crate::ConfigError;

/// On-disk shape of an alias override file:
///
/// ```yaml
/// aliases:
///   price: [Price, Cost, "List Price"]
///   drive_metric: ["Drive Dist (mi)", "Drive Time"]
/// ```
///
/// Fields that are not listed keep their built-in aliases.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasFile {
    #[serde(default)]
    pub aliases: BTreeMap<Field, Vec<String>>,
}

impl AliasFile {
    /// Applies the overrides on top of the built-in table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any listed field has an empty
    /// or unusable alias list.
    pub fn into_field_aliases(self) -> Result<FieldAliases, ConfigError> {
        self.aliases
            .into_iter()
            .try_fold(FieldAliases::builtin(), |table, (field, aliases)| {
                table.with_aliases(field, &aliases)
            })
    }
}

/// Load and validate a field alias override file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_aliases(path: &Path) -> Result<FieldAliases, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AliasFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_aliases(&content)
}

/// Parse an alias override document already held in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_aliases(content: &str) -> Result<FieldAliases, ConfigError> {
    let file: AliasFile = serde_yaml::from_str(content)?;
    file.into_field_aliases()
}
