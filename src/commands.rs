//! Implementation of fieldkey CLI commands.

pub mod generate;
