use std::f32::consts::{FRAC_2_PI, FRAC_PI_2};

use crate::foundation::core::SEC_PER_MS;
use crate::foundation::value::Animatable;

/// Shape of a single extrapolation phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Constant motion at the base speed only.
    #[default]
    None,
    /// Constant motion at base speed plus speed.
    Linear,
    /// Speed ramps linearly from zero up to `speed`.
    AccelLinear,
    /// Speed ramps linearly from `speed` down to zero.
    DecelLinear,
    /// Speed follows a quarter sine from zero up to `speed`.
    AccelSine,
    /// Speed follows a quarter cosine from `speed` down to zero.
    DecelSine,
}

/// Closed-form position and speed over one phase.
///
/// Times are milliseconds, speeds are units per second. The value before
/// `start_time` is `start_value`; past `start_time + duration` the phase
/// holds its final value and reports zero speed, unless `no_stop` is set in
/// which case the formulas keep running.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extrapolate<T> {
    kind: Extrapolation,
    no_stop: bool,
    start_time: f32,
    duration: f32,
    start_value: T,
    base_speed: T,
    speed: T,
}

impl<T: Animatable> Extrapolate<T> {
    /// Configure a phase.
    pub fn new(
        start_time: f32,
        duration: f32,
        start_value: T,
        base_speed: T,
        speed: T,
        kind: Extrapolation,
    ) -> Self {
        Self {
            kind,
            no_stop: false,
            start_time,
            duration,
            start_value,
            base_speed,
            speed,
        }
    }

    /// Keep extrapolating past the end of the phase instead of holding.
    pub fn with_no_stop(mut self, no_stop: bool) -> Self {
        self.no_stop = no_stop;
        self
    }

    /// Value at absolute `time`.
    pub fn value_at(&self, time: f32) -> T {
        if time < self.start_time {
            return self.start_value;
        }
        let time = self.clamp_time(time);
        let dt = (time - self.start_time) * SEC_PER_MS;
        let span = self.duration * SEC_PER_MS;

        match self.kind {
            Extrapolation::None => self.start_value + self.base_speed.scale(dt),
            Extrapolation::Linear => self.start_value + (self.base_speed + self.speed).scale(dt),
            _ if self.duration == 0.0 => self.start_value,
            Extrapolation::AccelLinear => {
                let f = self.fraction(time);
                self.ramped(f, 0.5 * f * f * span)
            }
            Extrapolation::DecelLinear => {
                let f = self.fraction(time);
                self.ramped(f, (f - 0.5 * f * f) * span)
            }
            Extrapolation::AccelSine => {
                let f = self.fraction(time);
                self.ramped(f, (1.0 - (f * FRAC_PI_2).cos()) * span * FRAC_2_PI)
            }
            Extrapolation::DecelSine => {
                let f = self.fraction(time);
                self.ramped(f, (f * FRAC_PI_2).sin() * span * FRAC_2_PI)
            }
        }
    }

    /// Speed at absolute `time`.
    pub fn speed_at(&self, time: f32) -> T {
        if time < self.start_time || self.duration == 0.0 {
            return T::default();
        }
        if !self.no_stop && time > self.end_time() {
            return T::default();
        }

        let f = self.fraction(time);
        match self.kind {
            Extrapolation::None => self.base_speed,
            Extrapolation::Linear => self.base_speed + self.speed,
            Extrapolation::AccelLinear => self.base_speed + self.speed.scale(f),
            Extrapolation::DecelLinear => self.base_speed + self.speed.scale(1.0 - f),
            Extrapolation::AccelSine => self.base_speed + self.speed.scale((f * FRAC_PI_2).sin()),
            Extrapolation::DecelSine => self.base_speed + self.speed.scale((f * FRAC_PI_2).cos()),
        }
    }

    fn fraction(&self, time: f32) -> f32 {
        (time - self.start_time) / self.duration
    }

    fn ramped(&self, f: f32, s: f32) -> T {
        self.start_value + self.base_speed.scale(f) + self.speed.scale(s)
    }

    fn clamp_time(&self, time: f32) -> f32 {
        if !self.no_stop && time > self.end_time() {
            self.end_time()
        } else {
            time
        }
    }

    /// Phase start, in milliseconds.
    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    /// Phase end, in milliseconds.
    pub fn end_time(&self) -> f32 {
        self.start_time + self.duration
    }

    /// Phase length, in milliseconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Same as [`Self::duration`].
    pub fn delta_time(&self) -> f32 {
        self.duration
    }

    /// Value at the start of the phase.
    pub fn start_value(&self) -> T {
        self.start_value
    }

    /// Constant speed component, units per second.
    pub fn base_speed(&self) -> T {
        self.base_speed
    }

    /// Shaped speed component, units per second.
    pub fn speed(&self) -> T {
        self.speed
    }

    /// Phase shape.
    pub fn kind(&self) -> Extrapolation {
        self.kind
    }

    /// Whether the phase keeps running past its end.
    pub fn no_stop(&self) -> bool {
        self.no_stop
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/extrapolate.rs"]
mod tests;
