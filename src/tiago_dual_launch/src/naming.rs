//! Name and path derivation rules

use serde::Serialize;
use std::path::{Path, PathBuf};

const ROBOTIQ_MARKER: &str = "robotiq";
const ROBOTIQ_PACKAGE: &str = "pal_robotiq_controller_configuration";
const ROBOTIQ_LAUNCH_FILE: &str = "robotiq_gripper_controller.launch.py";

/// Join `parts` with `delimiter`, optionally dropping empty parts first.
pub fn concatenate_strings<S: AsRef<str>>(parts: &[S], delimiter: &str, skip_empty: bool) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|part| !skip_empty || !part.is_empty())
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Controller name from its parts, e.g. `["arm", "right", "controller"]` -> `arm_right_controller`.
pub fn controller_name<S: AsRef<str>>(parts: &[S], skip_empty: bool) -> String {
    concatenate_strings(parts, "_", skip_empty)
}

/// `base_dir/subdir/<name>.yaml`. The file is not required to exist.
pub fn param_file_path(base_dir: &Path, subdir: &str, computed_name: &str) -> PathBuf {
    base_dir.join(subdir).join(format!("{}.yaml", computed_name))
}

/// Package and launch file that load the controllers of an end effector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndEffectorPackage {
    pub package: String,
    pub launch_file: String,
}

/// Route an end effector model to its controller configuration package.
///
/// All Robotiq models share one package; any other model maps to
/// `<model>_controller_configuration` with hyphens turned into underscores.
pub fn end_effector_package(end_effector: &str) -> EndEffectorPackage {
    if end_effector.contains(ROBOTIQ_MARKER) {
        return EndEffectorPackage {
            package: ROBOTIQ_PACKAGE.to_string(),
            launch_file: ROBOTIQ_LAUNCH_FILE.to_string(),
        };
    }

    let underscored = end_effector.replace('-', "_");
    EndEffectorPackage {
        package: format!("{}_controller_configuration", underscored),
        launch_file: format!("{}_controller.launch.py", underscored),
    }
}
