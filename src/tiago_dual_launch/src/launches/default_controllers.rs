//! Default controller set: base, broadcasters, torso, head and both arms

use super::{BASE_CONTROLLER_CONFIGURATION_PKG, CONTROLLER_CONFIGURATION_PKG};
use crate::{
    arguments::{ArgumentSchema, CommonArgs, TiagoDualArgs},
    condition::base_controller_enabled,
    config::ResolverConfig,
    error::Result,
    naming::{controller_name, end_effector_package, param_file_path},
    options::{OptionSet, Side, SideConfig},
    params::ParameterSource,
    plan::{CompositionAction, ControllerDescriptor, IncludeDescriptor},
};
use once_cell::sync::Lazy;
use std::path::Path;

pub const DIFF_DRIVE_CONTROLLER: &str = "diff_drive_controller/DiffDriveController";
pub const OMNI_DRIVE_CONTROLLER: &str = "omni_drive_controller/OmniDriveController";
pub const JOINT_STATE_BROADCASTER: &str = "joint_state_broadcaster/JointStateBroadcaster";
pub const IMU_SENSOR_BROADCASTER: &str = "imu_sensor_broadcaster/IMUSensorBroadcaster";
pub const JOINT_TRAJECTORY_CONTROLLER: &str =
    "joint_trajectory_controller/JointTrajectoryController";
pub const FORCE_TORQUE_SENSOR_BROADCASTER: &str =
    "force_torque_sensor_broadcaster/ForceTorqueSensorBroadcaster";

const CONFIG_DIR: &str = "config";

pub(crate) static ARGUMENTS: Lazy<ArgumentSchema> = Lazy::new(|| {
    ArgumentSchema::new(vec![
        TiagoDualArgs::base_type(),
        TiagoDualArgs::arm_type(Side::Right),
        TiagoDualArgs::arm_type(Side::Left),
        TiagoDualArgs::end_effector(Side::Right),
        TiagoDualArgs::end_effector(Side::Left),
        TiagoDualArgs::ft_sensor(Side::Right),
        TiagoDualArgs::ft_sensor(Side::Left),
        CommonArgs::use_sim_time(),
        CommonArgs::namespace(),
    ])
});

pub(crate) fn compose(
    options: &OptionSet,
    config: &ResolverConfig,
) -> Result<Vec<CompositionAction>> {
    let base_type = options.get("base_type")?;
    let base_share = config.package_share(BASE_CONTROLLER_CONFIGURATION_PKG);
    let share = config.package_share(CONTROLLER_CONFIGURATION_PKG);

    let mut actions = vec![
        CompositionAction::LoadController(base_controller(options, config)?),
        CompositionAction::LoadController(ControllerDescriptor::new(
            "joint_state_broadcaster",
            JOINT_STATE_BROADCASTER,
            ParameterSource::file(param_file_path(
                &base_share,
                CONFIG_DIR,
                &controller_name(&[base_type, "joint_state_broadcaster"], true),
            )),
        )),
    ];

    let fixed = [
        ("imu_sensor_broadcaster", IMU_SENSOR_BROADCASTER),
        ("torso_controller", JOINT_TRAJECTORY_CONTROLLER),
        ("head_controller", JOINT_TRAJECTORY_CONTROLLER),
    ];
    for (name, controller_type) in fixed {
        actions.push(CompositionAction::LoadController(ControllerDescriptor::new(
            name,
            controller_type,
            ParameterSource::file(param_file_path(&share, CONFIG_DIR, name)),
        )));
    }

    for side in Side::ALL {
        let side_config = SideConfig::from_options(options, side)?;
        actions.extend(side_controllers(&side_config, &share));
    }

    Ok(actions)
}

/// Mobile base controller, with the calibration override merged in when present.
pub fn base_controller(options: &OptionSet, config: &ResolverConfig) -> Result<ControllerDescriptor> {
    let base_type = options.get("base_type")?;

    let base_params = param_file_path(
        &config.package_share(BASE_CONTROLLER_CONFIGURATION_PKG),
        CONFIG_DIR,
        &controller_name(&[base_type, "controller"], true),
    );
    let parameters = ParameterSource::with_override(base_params, config.calibration_override());

    let controller_type = if base_type == "pmb2" {
        DIFF_DRIVE_CONTROLLER
    } else {
        OMNI_DRIVE_CONTROLLER
    };

    Ok(
        ControllerDescriptor::new("mobile_base_controller", controller_type, parameters)
            .enabled_if(base_controller_enabled(options)?),
    )
}

/// Arm controller, end effector include and FT sensor broadcaster of one side.
pub fn side_controllers(side: &SideConfig, share: &Path) -> Vec<CompositionAction> {
    let side_name = side.side.as_str();

    let arm_controller_name = controller_name(&["arm", side_name, "controller"], true);
    let arm_controller = ControllerDescriptor::new(
        arm_controller_name.as_str(),
        JOINT_TRAJECTORY_CONTROLLER,
        ParameterSource::file(param_file_path(share, CONFIG_DIR, &arm_controller_name)),
    )
    .enabled_if(side.arm_enabled());

    let end_effector = end_effector_package(&side.end_effector);
    let end_effector_controller = IncludeDescriptor {
        package: end_effector.package,
        launch_file: end_effector.launch_file,
        arguments: vec![("side".to_string(), side_name.to_string())],
        enabled: side.arm_enabled(),
    };

    let ft_sensor_controller_name = controller_name(&["ft_sensor", side_name, "controller"], true);
    let ft_sensor_controller = ControllerDescriptor::new(
        ft_sensor_controller_name.as_str(),
        FORCE_TORQUE_SENSOR_BROADCASTER,
        ParameterSource::file(param_file_path(share, CONFIG_DIR, &ft_sensor_controller_name)),
    )
    .enabled_if(side.ft_sensor_enabled());

    vec![
        CompositionAction::LoadController(arm_controller),
        CompositionAction::Include(end_effector_controller),
        CompositionAction::LoadController(ft_sensor_controller),
    ]
}
