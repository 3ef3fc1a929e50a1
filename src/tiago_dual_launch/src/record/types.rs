//! Launch record data structures

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Root structure of a launch record: everything the runtime has to start
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch: String,
    pub controller: Vec<ControllerRecord>,
    pub include: Vec<IncludeRecord>,
    pub node: Vec<NodeRecord>,
    pub description: Option<DescriptionRecord>,
}

impl LaunchRecord {
    pub fn new(launch: impl Into<String>) -> Self {
        Self {
            launch: launch.into(),
            ..Default::default()
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Controller spawner invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerRecord {
    pub name: String,
    pub controller_type: String,
    pub param_file: String,
    pub inactive: bool,
    pub cmd: Vec<String>,
}

/// Nested launch file to evaluate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncludeRecord {
    pub package: String,
    pub file: String,
    pub args: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub params_files: Vec<String>,
    /// Parameters filled from configuration slots, as (parameter, slot).
    pub slot_params: Vec<(String, String)>,
    pub remaps: Vec<(String, String)>,
    pub cmd: Vec<String>,
}

/// Template expansion whose output is stored in `target_slot`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionRecord {
    pub template: String,
    pub target_slot: String,
    pub args: Vec<(String, String)>,
    pub cmd: Vec<String>,
}
