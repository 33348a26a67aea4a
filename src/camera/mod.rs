//! Camera system for 3D scene viewing.
//!
//! Provides a perspective camera and an orbital controller with rotation,
//! panning, and zoom.

/// Orbital camera controller managing rotation, pan, and zoom.
pub mod controller;
/// Core camera struct and projection math.
pub mod core;

pub use controller::CameraController;
pub use core::Camera;
