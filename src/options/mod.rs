//! Controls options with TOML file support.
//!
//! All fields use `#[serde(default)]` so a partial file (e.g. only
//! `alpha_offset = 90.0`) fills the rest from defaults.

mod controls;

use std::path::Path;

pub use controls::{AngleGating, ControlsOptions};

use crate::error::DevorientError;

impl ControlsOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`DevorientError::Io`] if the file cannot be read,
    /// [`DevorientError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, DevorientError> {
        let content = std::fs::read_to_string(path).map_err(DevorientError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// [`DevorientError::OptionsParse`] on malformed TOML or unknown
    /// enum values.
    pub fn from_toml(content: &str) -> Result<Self, DevorientError> {
        toml::from_str(content)
            .map_err(|e| DevorientError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// [`DevorientError::Io`] if the file or its directory cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), DevorientError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DevorientError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DevorientError::Io)?;
        }
        std::fs::write(path, content).map_err(DevorientError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = ControlsOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = ControlsOptions::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let opts = ControlsOptions::from_toml("gating = \"per_angle\"\n").unwrap();
        assert_eq!(opts.gating, AngleGating::PerAngle);
        assert_eq!(opts.alpha_offset, 0.0);
        assert!(opts.screen_compensation);
    }

    #[test]
    fn unknown_gating_is_rejected() {
        let err = ControlsOptions::from_toml("gating = \"sometimes\"\n")
            .unwrap_err();
        assert!(matches!(err, DevorientError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir()
            .join(format!("devorient-options-{}", std::process::id()));
        let path = dir.join("controls.toml");
        let opts = ControlsOptions {
            gating: AngleGating::PerAngle,
            alpha_offset: 45.0,
            screen_compensation: false,
        };
        opts.save(&path).unwrap();
        assert_eq!(ControlsOptions::load(&path).unwrap(), opts);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ControlsOptions::load(Path::new("/nonexistent/devorient.toml"))
            .unwrap_err();
        assert!(matches!(err, DevorientError::Io(_)));
    }
}
