//! Shared-password gate for the Gantt chart tool.

pub mod cli;
pub mod gate;
