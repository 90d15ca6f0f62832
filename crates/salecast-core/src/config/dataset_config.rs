use serde::{Deserialize, Serialize};

use super::defaults;

/// Historical dataset location and parsing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path of the historical sales CSV.
    pub csv_path: String,
    /// chrono format string for the Date column.
    pub date_format: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            csv_path: defaults::DEFAULT_CSV_PATH.to_string(),
            date_format: defaults::DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}
