//! Record module for generating launch records

pub mod generator;
pub mod types;

pub use generator::{default_merge_dir, generate_record, RecordGenerator};
pub use types::{ControllerRecord, DescriptionRecord, IncludeRecord, LaunchRecord, NodeRecord};
