//! personal-color - seasonal personal-color classification
//!
//! Turns a face photograph into one of four seasons with a confidence
//! score and a recommended palette.
//! This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod ingest;
pub mod models;
pub mod services;
