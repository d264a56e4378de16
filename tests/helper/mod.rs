//! Shared test utilities

#![allow(dead_code)]

mod runner;
mod workspace;

pub use runner::{ScriptedRunner, failure, success};
pub use workspace::Workspace;
