// ABOUTME: Physiological estimation algorithms over a run history
// ABOUTME: VDOT, critical speed and running economy with fail-open defaults

//! Algorithm Module
//!
//! Each estimator is a pure function of a run history. Insufficient data never
//! errors: every estimator returns a documented conservative default instead.

/// Two-point critical speed model
pub mod critical_speed;
/// Heart-rate-reserve running economy
pub mod running_economy;
/// Daniels VDOT model
pub mod vdot;

pub use critical_speed::{CriticalSpeedEstimate, CriticalSpeedModel};
pub use running_economy::RunningEconomy;
pub use vdot::{VdotCalculator, VdotEstimate, VdotSource};
