//! ofc-wizard: Configuration Wizard for OpenFaaS Cloud
//!
//! Asks a sequence of conditional questions and assembles the answers into the
//! `init.yml` document read by the OpenFaaS Cloud bootstrap tool.

pub mod cli;
pub mod config;
pub mod error;
pub mod flow;
pub mod report;
pub mod utils;
