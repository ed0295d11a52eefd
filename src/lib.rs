//! Time based motion profiles for animating game values.
//!
//! A profile maps a query time to a value between two endpoints, plus the
//! speed at that time. Three shapes are provided:
//!
//! - [`Interpolate`]: straight linear interpolation over a fixed duration.
//! - [`AccelDecel`] with [`Ramp::Linear`]: accelerate, cruise, decelerate with
//!   constant acceleration on the ramps. Speed is continuous.
//! - [`AccelDecel`] with [`Ramp::Sine`]: the same with sinusoidal ramps, so
//!   acceleration is continuous as well.
//!
//! Both accel/decel shapes are built from [`Extrapolate`], a closed-form
//! single phase primitive that can also be used on its own.
//!
//! Any [`Animatable`] value can be animated: `f32`, `f64`, [`kurbo::Vec2`],
//! and the crate's [`Vec3`], [`Angles`] and [`Color`].
//!
//! # Clock convention
//!
//! Times are milliseconds, speeds are units per second (see [`MS_PER_SEC`]).
//!
//! # Errors
//!
//! Evaluating a profile never fails. Degenerate input is handled by policy:
//! a duration `<= 0` gives an inert profile that snaps to its end value, and
//! ramps longer than the duration are shrunk proportionally. [`MotionError`]
//! is only produced when validating a [`ProfileDef`] or a sampling request.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod profile;
mod sample;

pub use foundation::core::{Angles, Color, MS_PER_SEC, SEC_PER_MS, Vec3};
pub use foundation::error::{MotionError, MotionResult};
pub use foundation::value::Animatable;
pub use profile::accel_decel::{AccelDecel, Phase, Ramp};
pub use profile::def::{Profile, ProfileDef};
pub use profile::extrapolate::{Extrapolate, Extrapolation};
pub use profile::linear::Interpolate;
pub use sample::sampler::{MAX_SAMPLES, Sample, sample_range};
