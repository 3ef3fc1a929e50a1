use std::{collections::HashMap, fs};
use tempfile::TempDir;
use tiago_dual_launch::{
    config::ResolverConfig, error::LaunchError, launches::LaunchFile, record::generate_record,
    resolve_launch,
};

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn config() -> ResolverConfig {
    ResolverConfig::new("/nonexistent/share")
        .with_calibration_file("/nonexistent/master_calibration.yaml")
}

#[test]
fn test_invalid_choice_is_reported() {
    let result = resolve_launch(
        LaunchFile::DefaultControllers,
        args(&[("end_effector_left", "pal_gripper")]),
        config(),
    );

    let err = result.unwrap_err();
    let err_msg = err.to_string();
    assert!(
        err_msg.contains("end_effector_left") && err_msg.contains("pal_gripper"),
        "Error should name the argument and the value: {}",
        err_msg
    );
    assert!(err_msg.contains("pal-gripper"), "Error should list the choices: {}", err_msg);
}

#[test]
fn test_invalid_value_in_any_argument_aborts() {
    // A valid arm choice does not rescue an invalid sensor choice
    let result = resolve_launch(
        LaunchFile::RobotStatePublisher,
        args(&[("arm_type_right", "sea"), ("camera_model", "kinect")]),
        config(),
    );
    assert!(matches!(
        result,
        Err(LaunchError::SchemaViolation { name, .. }) if name == "camera_model"
    ));
}

#[test]
fn test_boolean_arguments_are_case_sensitive() {
    // Choices are declared as True/False
    let result = resolve_launch(
        LaunchFile::DefaultControllers,
        args(&[("use_sim_time", "true")]),
        config(),
    );
    assert!(matches!(result, Err(LaunchError::SchemaViolation { .. })));
}

#[test]
fn test_undeclared_arguments_are_ignored() {
    let plan = resolve_launch(
        LaunchFile::DefaultControllers,
        args(&[("laser_model", "not-a-laser"), ("robot_name", "pmb3")]),
        config(),
    )
    .unwrap();
    assert!(plan.options.get("laser_model").is_err());
}

#[test]
fn test_missing_parameter_files_do_not_fail_planning() {
    // Single parameter files are only referenced, never read
    let plan = resolve_launch(LaunchFile::DefaultControllers, HashMap::new(), config()).unwrap();
    let merge_dir = TempDir::new().unwrap();
    let record = generate_record(&plan, &config(), merge_dir.path()).unwrap();
    assert_eq!(record.controller.len(), 9);
    assert_eq!(fs::read_dir(merge_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_base_file_fails_merge() {
    let dir = TempDir::new().unwrap();
    let calibration = dir.path().join("master_calibration.yaml");
    fs::write(&calibration, "mobile_base_controller: {}\n").unwrap();
    let config = ResolverConfig::new(dir.path().join("share")).with_calibration_file(&calibration);

    let plan =
        resolve_launch(LaunchFile::DefaultControllers, HashMap::new(), config.clone()).unwrap();
    let result = generate_record(&plan, &config, &dir.path().join("merged"));
    assert!(matches!(result, Err(LaunchError::IoError(_))));
}

#[test]
fn test_malformed_calibration_fails_merge() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("share/tiago_controller_configuration/config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("pmb2_controller.yaml"), "a: 1\n").unwrap();
    let calibration = dir.path().join("master_calibration.yaml");
    fs::write(&calibration, "a: [unclosed\n").unwrap();
    let config = ResolverConfig::new(dir.path().join("share")).with_calibration_file(&calibration);

    let plan =
        resolve_launch(LaunchFile::DefaultControllers, HashMap::new(), config.clone()).unwrap();
    let result = generate_record(&plan, &config, &dir.path().join("merged"));
    assert!(matches!(result, Err(LaunchError::YamlError(_))));
}

#[test]
fn test_both_arms_disabled() {
    let plan = resolve_launch(
        LaunchFile::DefaultControllers,
        args(&[("arm_type_right", "no-arm"), ("arm_type_left", "no-arm")]),
        config(),
    )
    .unwrap();

    let names: Vec<&str> = plan.controllers().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "mobile_base_controller",
            "joint_state_broadcaster",
            "imu_sensor_broadcaster",
            "torso_controller",
            "head_controller",
        ]
    );
    assert_eq!(plan.includes().count(), 0);
    // Disabled descriptors stay in the plan with their flag cleared
    assert_eq!(plan.actions.len(), 11);
}
