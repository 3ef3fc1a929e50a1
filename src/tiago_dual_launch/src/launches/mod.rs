//! Launch entry points of the TIAGo Dual packages
//!
//! Each submodule mirrors one launch file: it declares the arguments the
//! launch file accepts and composes the actions derived from them.

pub mod default_controllers;
pub mod gravity_compensation;
pub mod joystick_teleop;
pub mod robot_state_publisher;

use crate::{
    arguments::ArgumentSchema,
    config::ResolverConfig,
    error::{LaunchError, Result},
    options::OptionSet,
    plan::CompositionAction,
};
use std::{fmt, str::FromStr};

pub const CONTROLLER_CONFIGURATION_PKG: &str = "tiago_dual_controller_configuration";
/// Base controllers are shared with the single-arm robot.
pub const BASE_CONTROLLER_CONFIGURATION_PKG: &str = "tiago_controller_configuration";
pub const DESCRIPTION_PKG: &str = "tiago_dual_description";
pub const BRINGUP_PKG: &str = "tiago_dual_bringup";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchFile {
    DefaultControllers,
    GravityCompensationController,
    RobotStatePublisher,
    JoystickTeleop,
}

impl LaunchFile {
    pub const ALL: [LaunchFile; 4] = [
        LaunchFile::DefaultControllers,
        LaunchFile::GravityCompensationController,
        LaunchFile::RobotStatePublisher,
        LaunchFile::JoystickTeleop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LaunchFile::DefaultControllers => "default_controllers",
            LaunchFile::GravityCompensationController => "gravity_compensation_controller",
            LaunchFile::RobotStatePublisher => "robot_state_publisher",
            LaunchFile::JoystickTeleop => "joystick_teleop",
        }
    }

    pub fn package(&self) -> &'static str {
        match self {
            LaunchFile::DefaultControllers | LaunchFile::GravityCompensationController => {
                CONTROLLER_CONFIGURATION_PKG
            }
            LaunchFile::RobotStatePublisher => DESCRIPTION_PKG,
            LaunchFile::JoystickTeleop => BRINGUP_PKG,
        }
    }

    pub fn schema(&self) -> &'static ArgumentSchema {
        match self {
            LaunchFile::DefaultControllers => &default_controllers::ARGUMENTS,
            LaunchFile::GravityCompensationController => &gravity_compensation::ARGUMENTS,
            LaunchFile::RobotStatePublisher => &robot_state_publisher::ARGUMENTS,
            LaunchFile::JoystickTeleop => &joystick_teleop::ARGUMENTS,
        }
    }

    pub(crate) fn compose(
        &self,
        options: &OptionSet,
        config: &ResolverConfig,
    ) -> Result<Vec<CompositionAction>> {
        match self {
            LaunchFile::DefaultControllers => default_controllers::compose(options, config),
            LaunchFile::GravityCompensationController => {
                gravity_compensation::compose(options, config)
            }
            LaunchFile::RobotStatePublisher => robot_state_publisher::compose(options, config),
            LaunchFile::JoystickTeleop => joystick_teleop::compose(options, config),
        }
    }
}

impl fmt::Display for LaunchFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LaunchFile {
    type Err = LaunchError;

    /// Accepts the bare name or the launch file name, e.g. `joystick_teleop.launch.py`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_suffix(".launch.py").unwrap_or(s);
        LaunchFile::ALL
            .into_iter()
            .find(|launch| launch.name() == name)
            .ok_or_else(|| LaunchError::UnknownLaunch(s.to_string()))
    }
}
