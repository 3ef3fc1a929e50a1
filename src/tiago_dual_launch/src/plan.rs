//! Composition plan and the descriptors it is made of

use crate::{error::Result, options::OptionSet, params::ParameterSource};
use serde::Serialize;
use std::path::PathBuf;

/// A controller to be loaded through the controller manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerDescriptor {
    pub name: String,
    pub controller_type: String,
    pub parameters: ParameterSource,
    pub enabled: bool,
    /// Load without activating.
    pub inactive: bool,
}

impl ControllerDescriptor {
    pub fn new(
        name: impl Into<String>,
        controller_type: impl Into<String>,
        parameters: ParameterSource,
    ) -> Self {
        Self {
            name: name.into(),
            controller_type: controller_type.into(),
            parameters,
            enabled: true,
            inactive: false,
        }
    }

    pub fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.inactive = true;
        self
    }
}

/// A nested launch file evaluated with its own arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludeDescriptor {
    pub package: String,
    pub launch_file: String,
    /// Kept in order so later arguments may refer to earlier ones.
    pub arguments: Vec<(String, String)>,
    pub enabled: bool,
}

/// A parameter handed to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeParameter {
    File { source: ParameterSource },
    /// A parameter whose value is read from a configuration slot filled by
    /// another action, such as the generated robot description.
    FromSlot { name: String, slot: String },
}

/// A plain ROS node process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDescriptor {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub namespace: Option<String>,
    pub parameters: Vec<NodeParameter>,
    pub remappings: Vec<(String, String)>,
    pub enabled: bool,
}

impl NodeDescriptor {
    pub fn new(package: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            name: None,
            namespace: None,
            parameters: Vec::new(),
            remappings: Vec::new(),
            enabled: true,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_parameter(mut self, parameter: NodeParameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_remapping(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.remappings.push((from.into(), to.into()));
        self
    }

    pub fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Request to expand a description template into a configuration slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionRequest {
    pub template: PathBuf,
    pub target_slot: String,
    pub arguments: Vec<(String, String)>,
}

/// One step of a composition plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CompositionAction {
    LoadController(ControllerDescriptor),
    Include(IncludeDescriptor),
    Node(NodeDescriptor),
    GenerateDescription(DescriptionRequest),
}

impl CompositionAction {
    pub fn is_enabled(&self) -> bool {
        match self {
            CompositionAction::LoadController(c) => c.enabled,
            CompositionAction::Include(i) => i.enabled,
            CompositionAction::Node(n) => n.enabled,
            CompositionAction::GenerateDescription(_) => true,
        }
    }
}

/// The resolver's output: resolved options and the ordered actions derived from them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositionPlan {
    pub launch: String,
    pub options: OptionSet,
    pub actions: Vec<CompositionAction>,
}

impl CompositionPlan {
    pub fn new(launch: impl Into<String>, options: OptionSet) -> Self {
        Self {
            launch: launch.into(),
            options,
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, action: CompositionAction) {
        if !action.is_enabled() {
            log::debug!("Action disabled by its condition: {:?}", action);
        }
        self.actions.push(action);
    }

    /// Actions the runtime should carry out, in plan order.
    pub fn enabled_actions(&self) -> impl Iterator<Item = &CompositionAction> {
        self.actions.iter().filter(|a| a.is_enabled())
    }

    pub fn controllers(&self) -> impl Iterator<Item = &ControllerDescriptor> {
        self.enabled_actions().filter_map(|a| match a {
            CompositionAction::LoadController(c) => Some(c),
            _ => None,
        })
    }

    pub fn includes(&self) -> impl Iterator<Item = &IncludeDescriptor> {
        self.enabled_actions().filter_map(|a| match a {
            CompositionAction::Include(i) => Some(i),
            _ => None,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.enabled_actions().filter_map(|a| match a {
            CompositionAction::Node(n) => Some(n),
            _ => None,
        })
    }

    pub fn description_request(&self) -> Option<&DescriptionRequest> {
        self.actions.iter().find_map(|a| match a {
            CompositionAction::GenerateDescription(d) => Some(d),
            _ => None,
        })
    }

    /// Enabled controller by name.
    pub fn controller(&self, name: &str) -> Option<&ControllerDescriptor> {
        self.controllers().find(|c| c.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> CompositionPlan {
        let mut plan = CompositionPlan::new("test", OptionSet::default());
        plan.push(CompositionAction::LoadController(ControllerDescriptor::new(
            "head_controller",
            "joint_trajectory_controller/JointTrajectoryController",
            ParameterSource::file("/share/config/head_controller.yaml"),
        )));
        plan.push(CompositionAction::LoadController(
            ControllerDescriptor::new(
                "arm_left_controller",
                "joint_trajectory_controller/JointTrajectoryController",
                ParameterSource::file("/share/config/arm_left_controller.yaml"),
            )
            .enabled_if(false),
        ));
        plan.push(CompositionAction::Node(
            NodeDescriptor::new("joy_linux", "joy_linux_node").with_name("joystick"),
        ));
        plan
    }

    #[test]
    fn test_disabled_actions_are_kept_but_filtered() {
        let plan = plan();
        assert_eq!(plan.actions.len(), 3);
        assert_eq!(plan.enabled_actions().count(), 2);
        assert!(plan.controller("head_controller").is_some());
        assert!(plan.controller("arm_left_controller").is_none());
        assert_eq!(plan.nodes().count(), 1);
        assert!(plan.description_request().is_none());
    }

    #[test]
    fn test_serialize_plan() {
        let json = plan().to_json().unwrap();
        assert!(json.contains("\"action\": \"load_controller\""));
        assert!(json.contains("\"kind\": \"file\""));
        assert!(json.contains("\"enabled\": false"));
        assert!(json.contains("\"launch\": \"test\""));
    }

    #[test]
    fn test_controller_builder() {
        let controller = ControllerDescriptor::new(
            "gravity_compensation_controller",
            "pal_controllers/GravityCompensationController",
            ParameterSource::file("/gc.yaml"),
        )
        .inactive();
        assert!(controller.enabled);
        assert!(controller.inactive);
    }
}
