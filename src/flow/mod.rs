//! Question flow - catalog, answer records, question groups and sequencing

pub mod answers;
pub mod catalog;
pub mod groups;
pub mod steps;
pub mod validate;

pub use answers::*;
pub use catalog::Catalog;
pub use steps::{Step, StepSpec, Wizard, INSTALL_FLOW, OPTIONS_FLOW};
