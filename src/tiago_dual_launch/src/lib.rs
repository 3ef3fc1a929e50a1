//! tiago_dual_launch library
//!
//! Resolves TIAGo Dual launch arguments into composition plans: which
//! controllers to load with which parameters, which end effector launch
//! files to include, which nodes to start and how to generate the robot
//! description.

pub mod arguments;
pub mod condition;
pub mod config;
pub mod error;
pub mod launches;
pub mod naming;
pub mod options;
pub mod params;
pub mod plan;
pub mod record;

use config::ResolverConfig;
use error::Result;
use launches::LaunchFile;
use plan::CompositionPlan;
use std::collections::HashMap;

/// Resolves launch arguments into composition plans
#[derive(Debug, Clone)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Validate `cli_args` against the launch file's arguments and compose its plan.
    ///
    /// Validation completes before any action is derived; an invalid value
    /// aborts without producing a plan.
    pub fn resolve(
        &self,
        launch: LaunchFile,
        cli_args: &HashMap<String, String>,
    ) -> Result<CompositionPlan> {
        let options = launch.schema().resolve(cli_args)?;
        log::info!("Resolving {} with {} arguments", launch, options.len());

        let actions = launch.compose(&options, &self.config)?;
        let mut plan = CompositionPlan::new(launch.name(), options);
        for action in actions {
            plan.push(action);
        }
        Ok(plan)
    }
}

/// Resolve a launch file's plan
pub fn resolve_launch(
    launch: LaunchFile,
    cli_args: HashMap<String, String>,
    config: ResolverConfig,
) -> Result<CompositionPlan> {
    Resolver::new(config).resolve(launch, &cli_args)
}
