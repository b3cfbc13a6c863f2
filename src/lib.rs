//! Ringside: a seeded, round-by-round boxing match simulator.

pub mod cli;
pub mod combat;
pub mod config;
pub mod data;
pub mod error;
pub mod report;
