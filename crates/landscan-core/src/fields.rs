//! Logical listing fields and the ordered header aliases that feed them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A logical column of the property schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Address,
    City,
    State,
    Price,
    Acres,
    Score,
    Lat,
    Lng,
    DriveMetric,
    Url,
    PropertyType,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::Address,
        Field::City,
        Field::State,
        Field::Price,
        Field::Acres,
        Field::Score,
        Field::Lat,
        Field::Lng,
        Field::DriveMetric,
        Field::Url,
        Field::PropertyType,
    ];

    /// Built-in aliases in priority order.
    #[must_use]
    pub fn default_aliases(self) -> &'static [&'static str] {
        match self {
            Field::Address => &[
                "address",
                "location",
                "addr",
                "name",
                "fulladdress",
                "propertyaddress",
            ],
            Field::City => &["city", "town", "municipality"],
            Field::State => &["state", "st", "province"],
            Field::Price => &["price", "cost", "amount", "listprice", "askingprice"],
            Field::Acres => &["acres", "acreage", "landsize", "lotsize", "lotacres"],
            Field::Score => &["score", "llmscore", "rating", "rank"],
            Field::Lat => &["lat", "latitude", "y"],
            Field::Lng => &["lng", "longitude", "long", "lon", "x"],
            Field::DriveMetric => &[
                "drivetime",
                "drivedist",
                "drivedistmi",
                "minutes",
                "distance",
                "travel",
            ],
            Field::Url => &["url", "link", "listing", "listingurl", "zillow", "redfin"],
            Field::PropertyType => &["type", "propertytype", "category", "class"],
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Price => "price",
            Field::Acres => "acres",
            Field::Score => "score",
            Field::Lat => "lat",
            Field::Lng => "lng",
            Field::DriveMetric => "drive_metric",
            Field::Url => "url",
            Field::PropertyType => "property_type",
        };
        f.write_str(name)
    }
}

/// Reduces a header or alias to its comparison key: ASCII-lowercased with
/// every non-alphanumeric character removed.
///
/// `"Drive Dist (mi)"`, `"drivedist(mi)"` and `"DRIVE-DIST-MI"` all reduce
/// to `"drivedistmi"`.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Ordered alias lists for every [`Field`].
///
/// Aliases are stored already normalized so lookups never re-normalize the
/// configuration side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    table: BTreeMap<Field, Vec<String>>,
}

impl FieldAliases {
    /// The built-in alias table.
    #[must_use]
    pub fn builtin() -> Self {
        let table = Field::ALL
            .iter()
            .map(|&field| {
                let aliases = field
                    .default_aliases()
                    .iter()
                    .map(|a| normalize_header(a))
                    .collect();
                (field, aliases)
            })
            .collect();
        Self { table }
    }

    /// Replaces the alias list for `field`, keeping the caller's priority
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if the list is empty or any alias
    /// normalizes to an empty string.
    pub fn with_aliases<S: AsRef<str>>(
        mut self,
        field: Field,
        aliases: &[S],
    ) -> Result<Self, ConfigError> {
        if aliases.is_empty() {
            return Err(ConfigError::Validation(format!(
                "field '{field}' must have at least one alias"
            )));
        }

        let mut normalized = Vec::with_capacity(aliases.len());
        for alias in aliases {
            let key = normalize_header(alias.as_ref());
            if key.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "alias '{}' for field '{field}' has no alphanumeric characters",
                    alias.as_ref()
                )));
            }
            if !normalized.contains(&key) {
                normalized.push(key);
            }
        }

        self.table.insert(field, normalized);
        Ok(self)
    }

    /// Normalized aliases for `field`, highest priority first.
    #[must_use]
    pub fn aliases(&self, field: Field) -> &[String] {
        self.table.get(&field).map(Vec::as_slice).unwrap_or_default()
    }
}

impl Default for FieldAliases {
    fn default() -> Self {
        Self::builtin()
    }
}
