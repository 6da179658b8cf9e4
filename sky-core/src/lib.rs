//! Core library for the converging star-point simulation.
//!
//! Main components:
//! - [`point`] — moving points and the point field.
//! - [`bounds`] — per-step bounding-box measurements.
//! - [`sim`] — the simulation loop and convergence detection.
//! - [`parse`] — input record parsing.
//! - [`render`] — ASCII rendering of the converged field.
//! - [`config`] — simulation configuration.
//! - [`error`] — crate-wide error type and `Result` alias.
//! - [`types`] — shared type aliases.

pub mod bounds;
pub mod config;
pub mod error;
pub mod parse;
pub mod point;
pub mod render;
pub mod sim;
pub mod types;
