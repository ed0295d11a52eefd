use std::ops::{Add, Sub};

use crate::foundation::core::{Angles, Color, Vec3};

/// Value types a motion profile can animate.
///
/// A profile only ever adds, subtracts and scales its endpoints, so anything
/// closed under those operations works: scalars, vectors, colors, angles.
/// `Default` must produce the additive zero; it is the value of an unarmed
/// profile and the speed reported outside the active interval.
pub trait Animatable: Copy + Default + Add<Output = Self> + Sub<Output = Self> {
    /// Multiply every component by `factor`.
    fn scale(self, factor: f32) -> Self;
}

impl Animatable for f32 {
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Animatable for f64 {
    fn scale(self, factor: f32) -> Self {
        self * f64::from(factor)
    }
}

impl Animatable for kurbo::Vec2 {
    fn scale(self, factor: f32) -> Self {
        self * f64::from(factor)
    }
}

impl Animatable for Vec3 {
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Animatable for Angles {
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

impl Animatable for Color {
    fn scale(self, factor: f32) -> Self {
        self * factor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/value.rs"]
mod tests;
