//! Configuration document, assembly from answers, and persistence

pub mod assembler;
pub mod document;
pub mod store;

pub use assembler::assemble;
pub use document::*;
pub use store::{InitFile, INIT_FILE_NAME};
