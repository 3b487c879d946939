//! Settings loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

use super::types::ReportSettings;

impl ReportSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/reports.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed settings on success, or an error if the file is
    /// missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use staffing_reports::config::ReportSettings;
    ///
    /// let settings = ReportSettings::load("./config/reports.yaml")?;
    /// # Ok::<(), staffing_reports::error::ReportError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ReportError::SettingsParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}
