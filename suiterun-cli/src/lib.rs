//! suiterun CLI library.
//!
//! This library exposes internal modules for integration testing.
//! In production, `suiterun` is used as a binary (main.rs).

pub mod app;
pub mod cli;
pub mod error;
pub mod logging;
