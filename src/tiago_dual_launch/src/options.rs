//! Resolved option set and per-side configuration

use crate::{
    condition::{is_truthy, NO_ARM, NO_FT_SENSOR},
    error::{LaunchError, Result},
    naming::concatenate_strings,
};
use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Resolved launch options, keyed by argument name.
///
/// Built once by [`ArgumentSchema::resolve`](crate::arguments::ArgumentSchema::resolve)
/// and never modified afterwards. Iteration is sorted by name so that plans
/// derived from equal option sets serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OptionSet {
    values: BTreeMap<String, String>,
}

impl OptionSet {
    pub fn get(&self, name: &str) -> Result<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| LaunchError::UndeclaredOption(name.to_string()))
    }

    pub fn is_true(&self, name: &str) -> Result<bool> {
        self.get(name).map(is_truthy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Arm side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// Sides in composition order.
    pub const ALL: [Side; 2] = [Side::Right, Side::Left];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Right => "right",
            Side::Left => "left",
        }
    }

    /// Name of a per-side option, e.g. `arm_type` -> `arm_type_right`.
    pub fn option_name(&self, prefix: &str) -> String {
        concatenate_strings(&[prefix, self.as_str()], "_", true)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hardware options of one arm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideConfig {
    pub side: Side,
    pub arm_type: String,
    pub end_effector: String,
    pub ft_sensor: String,
    pub wrist_model: Option<String>,
}

impl SideConfig {
    /// Read the per-side options for `side`.
    ///
    /// The wrist model only matters for description generation, so launch
    /// files that do not declare it still get a usable config.
    pub fn from_options(options: &OptionSet, side: Side) -> Result<Self> {
        Ok(Self {
            side,
            arm_type: options.get(&side.option_name("arm_type"))?.to_string(),
            end_effector: options.get(&side.option_name("end_effector"))?.to_string(),
            ft_sensor: options.get(&side.option_name("ft_sensor"))?.to_string(),
            wrist_model: options
                .get(&side.option_name("wrist_model"))
                .ok()
                .map(str::to_string),
        })
    }

    pub fn arm_enabled(&self) -> bool {
        self.arm_type != NO_ARM
    }

    /// An FT sensor is only present when there is an arm to mount it on.
    pub fn ft_sensor_enabled(&self) -> bool {
        self.arm_enabled() && self.ft_sensor != NO_FT_SENSOR
    }
}
