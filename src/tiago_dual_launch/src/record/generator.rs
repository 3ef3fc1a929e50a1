//! Command-line and record generation

use crate::{
    config::ResolverConfig,
    error::Result,
    params::ParameterSource,
    plan::{
        CompositionAction, CompositionPlan, ControllerDescriptor, DescriptionRequest,
        IncludeDescriptor, NodeDescriptor, NodeParameter,
    },
    record::types::{
        ControllerRecord, DescriptionRecord, IncludeRecord, LaunchRecord, NodeRecord,
    },
};
use std::path::{Path, PathBuf};

/// Lowers a composition plan into a launch record.
///
/// Layered parameter sources are merged into files under `merge_dir`; single
/// files are referenced in place and never opened.
pub struct RecordGenerator<'a> {
    config: &'a ResolverConfig,
    merge_dir: PathBuf,
}

impl<'a> RecordGenerator<'a> {
    pub fn new(config: &'a ResolverConfig, merge_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            merge_dir: merge_dir.into(),
        }
    }

    pub fn generate(&self, plan: &CompositionPlan) -> Result<LaunchRecord> {
        let mut record = LaunchRecord::new(plan.launch.as_str());

        for action in plan.enabled_actions() {
            match action {
                CompositionAction::LoadController(controller) => {
                    record.controller.push(self.controller_record(controller)?);
                }
                CompositionAction::Include(include) => {
                    record.include.push(self.include_record(include));
                }
                CompositionAction::Node(node) => {
                    record.node.push(self.node_record(node)?);
                }
                CompositionAction::GenerateDescription(request) => {
                    record.description = Some(Self::description_record(request));
                }
            }
        }

        log::debug!(
            "Generated record for {}: {} controllers, {} includes, {} nodes",
            record.launch,
            record.controller.len(),
            record.include.len(),
            record.node.len()
        );
        Ok(record)
    }

    fn param_file(&self, source: &ParameterSource, stem: &str) -> Result<String> {
        let path = source.materialize(&self.merge_dir, stem)?;
        Ok(path.display().to_string())
    }

    fn controller_record(&self, controller: &ControllerDescriptor) -> Result<ControllerRecord> {
        let param_file = self.param_file(&controller.parameters, &controller.name)?;
        let cmd = Self::spawner_command(controller, &param_file);

        Ok(ControllerRecord {
            name: controller.name.clone(),
            controller_type: controller.controller_type.clone(),
            param_file,
            inactive: controller.inactive,
            cmd,
        })
    }

    /// `ros2 run controller_manager spawner <name> --param-file <file> --controller-type <type> [--inactive]`
    pub fn spawner_command(controller: &ControllerDescriptor, param_file: &str) -> Vec<String> {
        let mut cmd: Vec<String> = [
            "ros2",
            "run",
            "controller_manager",
            "spawner",
            controller.name.as_str(),
            "--param-file",
            param_file,
            "--controller-type",
            controller.controller_type.as_str(),
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        if controller.inactive {
            cmd.push("--inactive".to_string());
        }
        cmd
    }

    fn include_record(&self, include: &IncludeDescriptor) -> IncludeRecord {
        let file = self
            .config
            .package_share(&include.package)
            .join("launch")
            .join(&include.launch_file);

        IncludeRecord {
            package: include.package.clone(),
            file: file.display().to_string(),
            args: include.arguments.clone(),
        }
    }

    fn node_record(&self, node: &NodeDescriptor) -> Result<NodeRecord> {
        let stem = node.name.as_deref().unwrap_or(&node.executable);

        let mut params_files = Vec::new();
        let mut slot_params = Vec::new();
        for parameter in &node.parameters {
            match parameter {
                NodeParameter::File { source } => {
                    params_files.push(self.param_file(source, stem)?);
                }
                NodeParameter::FromSlot { name, slot } => {
                    slot_params.push((name.clone(), slot.clone()));
                }
            }
        }

        let mut cmd: Vec<String> = vec![
            "ros2".to_string(),
            "run".to_string(),
            node.package.clone(),
            node.executable.clone(),
            "--ros-args".to_string(),
        ];
        if let Some(name) = &node.name {
            cmd.push("-r".to_string());
            cmd.push(format!("__node:={}", name));
        }
        if let Some(namespace) = &node.namespace {
            cmd.push("-r".to_string());
            cmd.push(format!("__ns:=/{}", namespace.trim_start_matches('/')));
        }
        for file in &params_files {
            cmd.push("--params-file".to_string());
            cmd.push(file.clone());
        }
        for (from, to) in &node.remappings {
            cmd.push("-r".to_string());
            cmd.push(format!("{}:={}", from, to));
        }

        Ok(NodeRecord {
            package: node.package.clone(),
            executable: node.executable.clone(),
            name: node.name.clone(),
            namespace: node.namespace.clone(),
            params_files,
            slot_params,
            remaps: node.remappings.clone(),
            cmd,
        })
    }

    fn description_record(request: &DescriptionRequest) -> DescriptionRecord {
        let template = request.template.display().to_string();
        let mut cmd = vec!["xacro".to_string(), template.clone()];
        cmd.extend(
            request
                .arguments
                .iter()
                .map(|(name, value)| format!("{}:={}", name, value)),
        );

        DescriptionRecord {
            template,
            target_slot: request.target_slot.clone(),
            args: request.arguments.clone(),
            cmd,
        }
    }
}

/// Merge directory used when the caller does not pick one.
pub fn default_merge_dir() -> PathBuf {
    std::env::temp_dir().join("tiago_dual_launch")
}

/// Generate a record with merged parameters written to `merge_dir`.
pub fn generate_record(
    plan: &CompositionPlan,
    config: &ResolverConfig,
    merge_dir: &Path,
) -> Result<LaunchRecord> {
    RecordGenerator::new(config, merge_dir).generate(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionSet;

    fn controller(inactive: bool) -> ControllerDescriptor {
        let controller = ControllerDescriptor::new(
            "head_controller",
            "joint_trajectory_controller/JointTrajectoryController",
            ParameterSource::file("/share/config/head_controller.yaml"),
        );
        if inactive {
            controller.inactive()
        } else {
            controller
        }
    }

    #[test]
    fn test_spawner_command() {
        let cmd = RecordGenerator::spawner_command(&controller(false), "/p.yaml");
        assert_eq!(
            cmd,
            vec![
                "ros2",
                "run",
                "controller_manager",
                "spawner",
                "head_controller",
                "--param-file",
                "/p.yaml",
                "--controller-type",
                "joint_trajectory_controller/JointTrajectoryController",
            ]
        );

        let cmd = RecordGenerator::spawner_command(&controller(true), "/p.yaml");
        assert_eq!(cmd.last().map(String::as_str), Some("--inactive"));
    }

    #[test]
    fn test_node_command() {
        let config = ResolverConfig::new("/share");
        let generator = RecordGenerator::new(&config, "/tmp/unused");
        let node = NodeDescriptor::new("joy_teleop", "incrementer_server")
            .with_name("incrementer")
            .with_namespace("torso_controller")
            .with_remapping("cmd_vel", "input_joy/cmd_vel");

        let record = generator.node_record(&node).unwrap();
        assert_eq!(
            record.cmd,
            vec![
                "ros2",
                "run",
                "joy_teleop",
                "incrementer_server",
                "--ros-args",
                "-r",
                "__node:=incrementer",
                "-r",
                "__ns:=/torso_controller",
                "-r",
                "cmd_vel:=input_joy/cmd_vel",
            ]
        );
    }

    #[test]
    fn test_disabled_actions_are_omitted() {
        let config = ResolverConfig::new("/share");
        let mut plan = CompositionPlan::new("test", OptionSet::default());
        plan.push(CompositionAction::LoadController(controller(false)));
        plan.push(CompositionAction::Include(IncludeDescriptor {
            package: "pal_gripper_controller_configuration".to_string(),
            launch_file: "pal_gripper_controller.launch.py".to_string(),
            arguments: vec![("side".to_string(), "left".to_string())],
            enabled: false,
        }));

        let record = generate_record(&plan, &config, Path::new("/tmp/unused")).unwrap();
        assert_eq!(record.controller.len(), 1);
        assert!(record.include.is_empty());
    }

    #[test]
    fn test_include_file_path() {
        let config = ResolverConfig::new("/share");
        let generator = RecordGenerator::new(&config, "/tmp/unused");
        let record = generator.include_record(&IncludeDescriptor {
            package: "pal_robotiq_controller_configuration".to_string(),
            launch_file: "robotiq_gripper_controller.launch.py".to_string(),
            arguments: vec![("side".to_string(), "right".to_string())],
            enabled: true,
        });
        assert_eq!(
            record.file,
            "/share/pal_robotiq_controller_configuration/launch/robotiq_gripper_controller.launch.py"
        );
    }

    #[test]
    fn test_description_command() {
        let record = RecordGenerator::description_record(&DescriptionRequest {
            template: PathBuf::from("/share/robots/tiago_dual.urdf.xacro"),
            target_slot: "robot_description".to_string(),
            arguments: vec![
                ("arm_right".to_string(), "tiago-arm".to_string()),
                ("namespace".to_string(), String::new()),
            ],
        });
        assert_eq!(
            record.cmd,
            vec![
                "xacro",
                "/share/robots/tiago_dual.urdf.xacro",
                "arm_right:=tiago-arm",
                "namespace:=",
            ]
        );
    }
}
