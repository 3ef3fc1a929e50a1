//! Predicates gating composition actions

use crate::{error::Result, options::OptionSet};

pub const NO_ARM: &str = "no-arm";
pub const NO_FT_SENSOR: &str = "no-ft-sensor";
pub const OMNI_BASE: &str = "omni_base";

/// Equivalent of a `LaunchConfigurationEquals` condition
pub fn option_equals(options: &OptionSet, name: &str, expected: &str) -> Result<bool> {
    Ok(options.get(name)? == expected)
}

/// Whether the mobile base controller is loaded.
///
/// The only suppressed combination is simulated time on an omni base; the
/// simulator provides its own drive plugin there. Every other combination,
/// including simulated pmb2, loads the controller.
pub fn base_controller_enabled(options: &OptionSet) -> Result<bool> {
    let use_sim_time = options.is_true("use_sim_time")?;
    let omni_base = option_equals(options, "base_type", OMNI_BASE)?;
    Ok(!(use_sim_time && omni_base))
}

/// Determine if a string value is "truthy"
pub(crate) fn is_truthy(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    matches!(
        normalized.as_str(),
        "true" | "1" | "yes" | "y" | "on" | "enabled"
    )
}
