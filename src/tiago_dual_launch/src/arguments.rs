//! Launch argument declarations and validation

use crate::{
    error::{LaunchError, Result},
    options::{OptionSet, Side},
};
use serde::Serialize;
use std::collections::HashMap;

/// A launch argument declaration with metadata and an optional choice set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeclareArgument {
    pub name: String,
    pub default: Option<String>,
    pub description: String,
    pub choices: Option<Vec<String>>,
}

impl DeclareArgument {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: description.into(),
            choices: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_choices(mut self, choices: &[&str]) -> Self {
        self.choices = Some(choices.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Check `value` against the declared choices. Free-form arguments accept anything.
    pub fn validate(&self, value: &str) -> Result<()> {
        match &self.choices {
            Some(choices) if !choices.iter().any(|c| c == value) => {
                Err(LaunchError::SchemaViolation {
                    name: self.name.clone(),
                    value: value.to_string(),
                    choices: choices.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Argument declarations shared by the TIAGo Dual launch files
pub struct TiagoDualArgs;

impl TiagoDualArgs {
    pub fn base_type() -> DeclareArgument {
        DeclareArgument::new("base_type", "Define base type of the robot.")
            .with_default("pmb2")
            .with_choices(&["pmb2", "omni_base"])
    }

    pub fn arm_type(side: Side) -> DeclareArgument {
        DeclareArgument::new(
            side.option_name("arm_type"),
            format!("Which type of the {} arm.", side),
        )
        .with_default("tiago-arm")
        .with_choices(&["no-arm", "tiago-arm", "sea"])
    }

    pub fn end_effector(side: Side) -> DeclareArgument {
        DeclareArgument::new(
            side.option_name("end_effector"),
            format!("End effector model of the {} arm.", side),
        )
        .with_default("pal-gripper")
        .with_choices(&[
            "pal-gripper",
            "pal-hey5",
            "custom",
            "no-end-effector",
            "robotiq-2f-85",
            "robotiq-2f-140",
            "robotiq-epick",
        ])
    }

    pub fn ft_sensor(side: Side) -> DeclareArgument {
        DeclareArgument::new(side.option_name("ft_sensor"), "FT sensor model.")
            .with_default("schunk-ft")
            .with_choices(&["schunk-ft", "no-ft-sensor"])
    }

    pub fn wrist_model(side: Side) -> DeclareArgument {
        DeclareArgument::new(side.option_name("wrist_model"), "Wrist model.")
            .with_default("wrist-2010")
            .with_choices(&["wrist-2010", "wrist-2017"])
    }

    pub fn camera_model() -> DeclareArgument {
        DeclareArgument::new("camera_model", "Head camera model.")
            .with_default("orbbec-astra")
            .with_choices(&["no-camera", "orbbec-astra", "orbbec-astra-pro", "asus-xtion"])
    }

    pub fn laser_model() -> DeclareArgument {
        DeclareArgument::new("laser_model", "Base laser model.")
            .with_default("sick-571")
            .with_choices(&["no-laser", "sick-571", "sick-561", "sick-551", "hokuyo"])
    }

    pub fn has_screen() -> DeclareArgument {
        DeclareArgument::new("has_screen", "Define if the robot has a screen.")
            .with_default("False")
            .with_choices(&["True", "False"])
    }

    pub fn robot_name() -> DeclareArgument {
        DeclareArgument::new("robot_name", "Name of the robot.")
            .with_default("tiago_dual")
            .with_choices(&["pmb2", "tiago", "pmb3", "tiago_dual"])
    }
}

/// Arguments common to every PAL launch file
pub struct CommonArgs;

impl CommonArgs {
    pub fn use_sim_time() -> DeclareArgument {
        DeclareArgument::new("use_sim_time", "Use simulation time")
            .with_default("False")
            .with_choices(&["True", "False"])
    }

    pub fn namespace() -> DeclareArgument {
        DeclareArgument::new("namespace", "Define namespace of the robot.").with_default("")
    }
}

/// Ordered set of argument declarations for one launch file
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArgumentSchema {
    arguments: Vec<DeclareArgument>,
}

impl ArgumentSchema {
    pub fn new(arguments: Vec<DeclareArgument>) -> Self {
        Self { arguments }
    }

    pub fn arguments(&self) -> &[DeclareArgument] {
        &self.arguments
    }

    pub fn get(&self, name: &str) -> Option<&DeclareArgument> {
        self.arguments.iter().find(|a| a.name == name)
    }

    /// Resolve supplied values against the schema.
    ///
    /// Priority: 1) supplied value, 2) declared default. Every value is checked
    /// against its choices before the option set is returned, so a violation
    /// never yields a partial result. Supplied names the schema does not
    /// declare are ignored.
    pub fn resolve(&self, supplied: &HashMap<String, String>) -> Result<OptionSet> {
        let mut undeclared: Vec<&String> = supplied
            .keys()
            .filter(|name| self.get(name).is_none())
            .collect();
        undeclared.sort();
        for name in undeclared {
            log::warn!("Ignoring undeclared launch argument: {}", name);
        }

        let mut values = Vec::with_capacity(self.arguments.len());
        for arg in &self.arguments {
            let value = supplied
                .get(&arg.name)
                .cloned()
                .or_else(|| arg.default.clone())
                .ok_or_else(|| LaunchError::MissingArgument(arg.name.clone()))?;
            arg.validate(&value)?;
            log::debug!("Resolved argument {} = '{}'", arg.name, value);
            values.push((arg.name.clone(), value));
        }

        Ok(OptionSet::from_iter(values))
    }
}
