//! Joystick driver, teleop node and the incrementer servers it drives

use super::BRINGUP_PKG;
use crate::{
    arguments::{ArgumentSchema, DeclareArgument, TiagoDualArgs},
    condition::option_equals,
    config::ResolverConfig,
    error::Result,
    naming::{concatenate_strings, param_file_path},
    options::{OptionSet, Side},
    params::ParameterSource,
    plan::{CompositionAction, NodeDescriptor, NodeParameter},
};
use once_cell::sync::Lazy;

const JOY_TELEOP_CONFIG_DIR: &str = "config/joy_teleop";

pub(crate) static ARGUMENTS: Lazy<ArgumentSchema> = Lazy::new(|| {
    ArgumentSchema::new(vec![
        TiagoDualArgs::arm_type(Side::Right),
        TiagoDualArgs::arm_type(Side::Left),
        TiagoDualArgs::end_effector(Side::Right),
        TiagoDualArgs::end_effector(Side::Left),
        TiagoDualArgs::ft_sensor(Side::Right),
        TiagoDualArgs::ft_sensor(Side::Left),
        TiagoDualArgs::base_type(),
        DeclareArgument::new("cmd_vel", "Joystick cmd_vel topic").with_default("input_joy/cmd_vel"),
    ])
});

pub(crate) fn compose(
    options: &OptionSet,
    config: &ResolverConfig,
) -> Result<Vec<CompositionAction>> {
    let share = config.package_share(BRINGUP_PKG);
    let base_type = options.get("base_type")?;

    let teleop_config = param_file_path(
        &share,
        JOY_TELEOP_CONFIG_DIR,
        &concatenate_strings(&["joy_teleop", base_type], "_", true),
    );
    let joy_teleop = NodeDescriptor::new("joy_teleop", "joy_teleop")
        .with_parameter(NodeParameter::File {
            source: ParameterSource::file(teleop_config),
        })
        .with_remapping("cmd_vel", options.get("cmd_vel")?);

    let joystick = NodeDescriptor::new("joy_linux", "joy_linux_node")
        .with_name("joystick")
        .with_parameter(NodeParameter::File {
            source: ParameterSource::file(param_file_path(
                &share,
                JOY_TELEOP_CONFIG_DIR,
                "joy_config",
            )),
        });

    let gripper_enabled = option_equals(options, "end_effector_right", "pal-gripper")?;
    let incrementers = [
        ("torso_controller", true),
        ("head_controller", true),
        ("gripper_right_controller", gripper_enabled),
    ];

    let mut actions = vec![
        CompositionAction::Node(joy_teleop),
        CompositionAction::Node(joystick),
    ];
    actions.extend(incrementers.into_iter().map(|(namespace, enabled)| {
        CompositionAction::Node(
            NodeDescriptor::new("joy_teleop", "incrementer_server")
                .with_name("incrementer")
                .with_namespace(namespace)
                .enabled_if(enabled),
        )
    }));

    Ok(actions)
}
