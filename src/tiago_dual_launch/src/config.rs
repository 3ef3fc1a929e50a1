//! Resolver configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host-specific parameter file merged over the base controller parameters
pub const DEFAULT_CALIBRATION_FILE: &str = "/etc/calibration/master_calibration.yaml";

/// Filesystem locations the resolver derives paths from.
///
/// Package share directories are looked up as `share_root/<package>`, so a
/// plan only depends on this struct and the option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    pub share_root: PathBuf,
    #[serde(default = "default_calibration_file")]
    pub calibration_file: PathBuf,
}

fn default_calibration_file() -> PathBuf {
    PathBuf::from(DEFAULT_CALIBRATION_FILE)
}

impl ResolverConfig {
    pub fn new(share_root: impl Into<PathBuf>) -> Self {
        Self {
            share_root: share_root.into(),
            calibration_file: default_calibration_file(),
        }
    }

    pub fn with_calibration_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.calibration_file = path.into();
        self
    }

    /// Load a config from a YAML file with `share_root` and optional `calibration_file` keys.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn package_share(&self, package: &str) -> PathBuf {
        self.share_root.join(package)
    }

    /// The calibration override, if it exists right now.
    pub fn calibration_override(&self) -> Option<&Path> {
        if self.calibration_file.exists() {
            log::debug!(
                "Calibration override found: {}",
                self.calibration_file.display()
            );
            Some(self.calibration_file.as_path())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_package_share() {
        let config = ResolverConfig::new("/opt/pal/share");
        assert_eq!(
            config.package_share("tiago_dual_bringup"),
            PathBuf::from("/opt/pal/share/tiago_dual_bringup")
        );
        assert_eq!(
            config.calibration_file,
            PathBuf::from(DEFAULT_CALIBRATION_FILE)
        );
    }

    #[test]
    fn test_calibration_override_absent() {
        let config = ResolverConfig::new("/share").with_calibration_file("/nonexistent/calib.yaml");
        assert!(config.calibration_override().is_none());
    }

    #[test]
    fn test_calibration_override_present() {
        let file = NamedTempFile::new().unwrap();
        let config = ResolverConfig::new("/share").with_calibration_file(file.path());
        assert_eq!(config.calibration_override(), Some(file.path()));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"share_root: /opt/pal/share\n").unwrap();
        file.flush().unwrap();

        let config = ResolverConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config, ResolverConfig::new("/opt/pal/share"));
    }
}
