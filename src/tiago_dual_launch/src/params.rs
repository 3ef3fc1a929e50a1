//! Parameter file sources and layered merging

use crate::error::{LaunchError, Result};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Where a controller or node reads its parameters from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterSource {
    /// A single parameter file, used unmodified.
    File { path: PathBuf },
    /// Parameter files merged in order; later layers win on conflicting keys.
    Layered { layers: Vec<PathBuf> },
}

impl ParameterSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ParameterSource::File { path: path.into() }
    }

    /// `base` alone, or `base` then `override_file` when an override is given.
    pub fn with_override(base: PathBuf, override_file: Option<&Path>) -> Self {
        match override_file {
            Some(override_file) => ParameterSource::Layered {
                layers: vec![base, override_file.to_path_buf()],
            },
            None => ParameterSource::File { path: base },
        }
    }

    pub fn layers(&self) -> Vec<&Path> {
        match self {
            ParameterSource::File { path } => vec![path.as_path()],
            ParameterSource::Layered { layers } => layers.iter().map(PathBuf::as_path).collect(),
        }
    }

    /// Load the effective parameter tree.
    pub fn load(&self) -> Result<Value> {
        merge_param_files(&self.layers())
    }

    /// Path a consumer can pass to `--param-file`.
    ///
    /// Single files are returned as-is without touching the filesystem.
    /// Layered sources are merged and written to `output_dir/<stem>.yaml`.
    pub fn materialize(&self, output_dir: &Path, stem: &str) -> Result<PathBuf> {
        match self {
            ParameterSource::File { path } => Ok(path.clone()),
            ParameterSource::Layered { .. } => {
                let merged = self.load()?;
                fs::create_dir_all(output_dir)?;
                let output = output_dir.join(format!("{}.yaml", stem));
                fs::write(&output, serde_yaml::to_string(&merged)?)?;
                log::info!("Wrote merged parameters: {}", output.display());
                Ok(output)
            }
        }
    }
}

/// Load a YAML parameter file. An empty file yields an empty mapping.
pub fn load_param_tree(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content)?;
    match value {
        Value::Null => Ok(Value::Mapping(Mapping::new())),
        Value::Mapping(_) => Ok(value),
        _ => Err(LaunchError::NotAMapping {
            path: path.display().to_string(),
        }),
    }
}

/// Merge parameter files in order, later files winning on conflicts.
pub fn merge_param_files(paths: &[&Path]) -> Result<Value> {
    let mut merged = Value::Mapping(Mapping::new());
    for path in paths {
        log::debug!("Merging parameter file: {}", path.display());
        merge_yaml(&mut merged, load_param_tree(path)?);
    }
    Ok(merged)
}

/// Recursively merge `overlay` into `base`.
///
/// Mappings are merged key by key; any other value in `overlay` replaces
/// the value in `base`, sequences included.
pub fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => merge_yaml(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
