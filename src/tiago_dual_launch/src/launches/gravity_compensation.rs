//! Gravity compensation controller, loaded inactive so it can be switched to on demand

use super::CONTROLLER_CONFIGURATION_PKG;
use crate::{
    arguments::ArgumentSchema,
    config::ResolverConfig,
    error::Result,
    naming::param_file_path,
    options::OptionSet,
    params::ParameterSource,
    plan::{CompositionAction, ControllerDescriptor},
};
use once_cell::sync::Lazy;

pub const GRAVITY_COMPENSATION_CONTROLLER: &str = "pal_controllers/GravityCompensationController";

pub(crate) static ARGUMENTS: Lazy<ArgumentSchema> = Lazy::new(ArgumentSchema::default);

pub(crate) fn compose(
    _options: &OptionSet,
    config: &ResolverConfig,
) -> Result<Vec<CompositionAction>> {
    let name = "gravity_compensation_controller";
    let params = param_file_path(
        &config.package_share(CONTROLLER_CONFIGURATION_PKG),
        "config",
        name,
    );

    Ok(vec![CompositionAction::LoadController(
        ControllerDescriptor::new(
            name,
            GRAVITY_COMPENSATION_CONTROLLER,
            ParameterSource::file(params),
        )
        .inactive(),
    )])
}
