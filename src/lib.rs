//! Contract Manager - Healthcare contract management dashboard backend.
//!
//! Serves a revenue impact simulator, a contract lifecycle tracker over a
//! fixed contract table, and a stub contract analyzer.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
