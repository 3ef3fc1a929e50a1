//! Robot description generation and the state publisher consuming it

use super::DESCRIPTION_PKG;
use crate::{
    arguments::{ArgumentSchema, CommonArgs, TiagoDualArgs},
    config::ResolverConfig,
    error::Result,
    options::{OptionSet, Side},
    plan::{CompositionAction, DescriptionRequest, NodeDescriptor, NodeParameter},
};
use once_cell::sync::Lazy;

pub const ROBOT_DESCRIPTION_SLOT: &str = "robot_description";

/// Template argument name and the option it is read from, in template order.
const TEMPLATE_ARGUMENTS: [(&str, &str); 14] = [
    ("arm_right", "arm_type_right"),
    ("arm_left", "arm_type_left"),
    ("camera_model", "camera_model"),
    ("end_effector_right", "end_effector_right"),
    ("end_effector_left", "end_effector_left"),
    ("ft_sensor_right", "ft_sensor_right"),
    ("ft_sensor_left", "ft_sensor_left"),
    ("laser_model", "laser_model"),
    ("wrist_model_right", "wrist_model_right"),
    ("wrist_model_left", "wrist_model_left"),
    ("has_screen", "has_screen"),
    ("base_type", "base_type"),
    ("use_sim", "use_sim_time"),
    ("namespace", "namespace"),
];

pub(crate) static ARGUMENTS: Lazy<ArgumentSchema> = Lazy::new(|| {
    ArgumentSchema::new(vec![
        CommonArgs::use_sim_time(),
        TiagoDualArgs::robot_name(),
        TiagoDualArgs::arm_type(Side::Right),
        TiagoDualArgs::arm_type(Side::Left),
        TiagoDualArgs::end_effector(Side::Right),
        TiagoDualArgs::end_effector(Side::Left),
        TiagoDualArgs::ft_sensor(Side::Right),
        TiagoDualArgs::ft_sensor(Side::Left),
        TiagoDualArgs::wrist_model(Side::Right),
        TiagoDualArgs::wrist_model(Side::Left),
        TiagoDualArgs::camera_model(),
        TiagoDualArgs::laser_model(),
        TiagoDualArgs::has_screen(),
        TiagoDualArgs::base_type(),
        CommonArgs::namespace(),
    ])
});

pub(crate) fn compose(
    options: &OptionSet,
    config: &ResolverConfig,
) -> Result<Vec<CompositionAction>> {
    let request = description_request(options, config)?;

    let robot_state_publisher = NodeDescriptor::new("robot_state_publisher", "robot_state_publisher")
        .with_parameter(NodeParameter::FromSlot {
            name: "robot_description".to_string(),
            slot: request.target_slot.clone(),
        });

    Ok(vec![
        CompositionAction::GenerateDescription(request),
        CompositionAction::Node(robot_state_publisher),
    ])
}

/// Collect every template argument from the option set.
pub fn description_request(
    options: &OptionSet,
    config: &ResolverConfig,
) -> Result<DescriptionRequest> {
    let arguments = TEMPLATE_ARGUMENTS
        .iter()
        .map(|(template_arg, option)| -> Result<(String, String)> {
            Ok((template_arg.to_string(), options.get(option)?.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DescriptionRequest {
        template: config
            .package_share(DESCRIPTION_PKG)
            .join("robots")
            .join("tiago_dual.urdf.xacro"),
        target_slot: ROBOT_DESCRIPTION_SLOT.to_string(),
        arguments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn test_description_request_defaults() {
        let options = ARGUMENTS.resolve(&HashMap::new()).unwrap();
        let request = description_request(&options, &ResolverConfig::new("/share")).unwrap();

        assert_eq!(
            request.template,
            PathBuf::from("/share/tiago_dual_description/robots/tiago_dual.urdf.xacro")
        );
        assert_eq!(request.target_slot, "robot_description");
        assert_eq!(request.arguments.len(), 14);

        let lookup: HashMap<_, _> = request.arguments.iter().cloned().collect();
        assert_eq!(lookup["arm_right"], "tiago-arm");
        assert_eq!(lookup["camera_model"], "orbbec-astra");
        assert_eq!(lookup["laser_model"], "sick-571");
        assert_eq!(lookup["use_sim"], "False");
        assert_eq!(lookup["namespace"], "");
        assert!(!lookup.contains_key("robot_name"));
    }

    #[test]
    fn test_arguments_passed_verbatim() {
        let mut supplied = HashMap::new();
        supplied.insert("arm_type_left".to_string(), "no-arm".to_string());
        supplied.insert("wrist_model_right".to_string(), "wrist-2017".to_string());
        supplied.insert("namespace".to_string(), "robot_2".to_string());
        let options = ARGUMENTS.resolve(&supplied).unwrap();

        let request = description_request(&options, &ResolverConfig::new("/share")).unwrap();
        assert_eq!(request.arguments[1], ("arm_left".to_string(), "no-arm".to_string()));
        assert_eq!(
            request.arguments[8],
            ("wrist_model_right".to_string(), "wrist-2017".to_string())
        );
        assert_eq!(
            request.arguments[13],
            ("namespace".to_string(), "robot_2".to_string())
        );
    }

    #[test]
    fn test_state_publisher_reads_description_slot() {
        let options = ARGUMENTS.resolve(&HashMap::new()).unwrap();
        let actions = compose(&options, &ResolverConfig::new("/share")).unwrap();
        assert_eq!(actions.len(), 2);
        match &actions[1] {
            CompositionAction::Node(node) => {
                assert_eq!(node.package, "robot_state_publisher");
                assert_eq!(
                    node.parameters,
                    vec![NodeParameter::FromSlot {
                        name: "robot_description".to_string(),
                        slot: "robot_description".to_string(),
                    }]
                );
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
