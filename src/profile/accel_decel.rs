use std::f32::consts::FRAC_2_PI;

use crate::foundation::core::{MS_PER_SEC, SEC_PER_MS};
use crate::foundation::value::Animatable;
use crate::profile::extrapolate::{Extrapolate, Extrapolation};

/// Shape of the acceleration and deceleration ramps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ramp {
    /// Constant acceleration. Speed is continuous, acceleration is not.
    #[default]
    Linear,
    /// Sinusoidal acceleration. Speed and acceleration are both continuous.
    Sine,
}

impl Ramp {
    /// Fraction of `ramp_time * cruise_speed` covered while ramping.
    fn area(self) -> f32 {
        match self {
            Self::Linear => 0.5,
            Self::Sine => FRAC_2_PI,
        }
    }

    fn accel(self) -> Extrapolation {
        match self {
            Self::Linear => Extrapolation::AccelLinear,
            Self::Sine => Extrapolation::AccelSine,
        }
    }

    fn decel(self) -> Extrapolation {
        match self {
            Self::Linear => Extrapolation::DecelLinear,
            Self::Sine => Extrapolation::DecelSine,
        }
    }
}

/// Which part of the motion a query time falls in.
///
/// Boundary times belong to the later phase; times before the start resolve
/// to `Accelerating`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Speed ramps up from zero to the cruise speed.
    Accelerating,
    /// Constant cruise speed.
    Cruising,
    /// Speed ramps down from the cruise speed to zero.
    Decelerating,
}

/// Three phase motion: ramp up, cruise at constant speed, ramp down.
///
/// The cruise speed is chosen so the three phases cover exactly
/// `end_value - start_value`. Ramps that do not fit in `duration` are scaled
/// down proportionally and the cruise phase disappears.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AccelDecel<T> {
    ramp: Ramp,
    start_time: f32,
    accel_time: f32,
    linear_time: f32,
    decel_time: f32,
    start_value: T,
    end_value: T,
    cruise_speed: T,
}

impl<T: Animatable> AccelDecel<T> {
    /// Unarmed profile with the given ramp shape.
    pub fn new(ramp: Ramp) -> Self {
        Self {
            ramp,
            start_time: 0.0,
            accel_time: 0.0,
            linear_time: 0.0,
            decel_time: 0.0,
            start_value: T::default(),
            end_value: T::default(),
            cruise_speed: T::default(),
        }
    }

    /// Unarmed profile with linear ramps.
    pub fn linear() -> Self {
        Self::new(Ramp::Linear)
    }

    /// Unarmed profile with sine ramps.
    pub fn sine() -> Self {
        Self::new(Ramp::Sine)
    }

    /// Arm the profile.
    ///
    /// A `duration <= 0` leaves the profile inert: it holds `start_value`
    /// before `start_time` and `end_value` from then on.
    pub fn init(
        &mut self,
        start_time: f32,
        accel_time: f32,
        decel_time: f32,
        duration: f32,
        start_value: T,
        end_value: T,
    ) {
        self.start_time = start_time;
        self.start_value = start_value;
        self.end_value = end_value;

        if duration <= 0.0 {
            tracing::trace!(
                start_time,
                duration,
                ramp = ?self.ramp,
                "accel/decel profile armed inert"
            );
            self.accel_time = 0.0;
            self.linear_time = 0.0;
            self.decel_time = 0.0;
            self.cruise_speed = T::default();
            return;
        }

        self.accel_time = accel_time;
        self.decel_time = decel_time;
        if accel_time + decel_time > duration {
            tracing::debug!(
                accel_time,
                decel_time,
                duration,
                "ramps exceed duration, rescaling"
            );
            self.accel_time = accel_time * duration / (accel_time + decel_time);
            self.decel_time = duration - self.accel_time;
        }
        self.linear_time = duration - self.accel_time - self.decel_time;
        self.refresh_cruise_speed();
    }

    fn refresh_cruise_speed(&mut self) {
        let ramps = self.accel_time + self.decel_time;
        let effective = self.linear_time + ramps * self.ramp.area();
        self.cruise_speed = if effective > 0.0 {
            (self.end_value - self.start_value).scale(MS_PER_SEC / effective)
        } else {
            T::default()
        };
    }

    /// Phase containing `time`.
    pub fn phase_at(&self, time: f32) -> Phase {
        let delta = time - self.start_time;
        if delta < self.accel_time {
            Phase::Accelerating
        } else if delta < self.accel_time + self.linear_time {
            Phase::Cruising
        } else {
            Phase::Decelerating
        }
    }

    fn extrapolation(&self, phase: Phase) -> Extrapolate<T> {
        let zero = T::default();
        let area = self.ramp.area();
        match phase {
            Phase::Accelerating => Extrapolate::new(
                self.start_time,
                self.accel_time,
                self.start_value,
                zero,
                self.cruise_speed,
                self.ramp.accel(),
            ),
            Phase::Cruising => Extrapolate::new(
                self.start_time + self.accel_time,
                self.linear_time,
                self.start_value + self.cruise_speed.scale(self.accel_time * SEC_PER_MS * area),
                zero,
                self.cruise_speed,
                Extrapolation::Linear,
            ),
            Phase::Decelerating => Extrapolate::new(
                self.start_time + self.accel_time + self.linear_time,
                self.decel_time,
                self.end_value - self.cruise_speed.scale(self.decel_time * SEC_PER_MS * area),
                zero,
                self.cruise_speed,
                self.ramp.decel(),
            ),
        }
    }

    /// Value at `time`.
    pub fn current_value(&self, time: f32) -> T {
        if time < self.start_time {
            return self.start_value;
        }
        if self.is_done(time) {
            return self.end_value;
        }
        self.extrapolation(self.phase_at(time)).value_at(time)
    }

    /// Speed at `time`, in units per second.
    pub fn current_speed(&self, time: f32) -> T {
        if time < self.start_time || self.is_done(time) {
            return T::default();
        }
        self.extrapolation(self.phase_at(time)).speed_at(time)
    }

    /// Whether `end_value` has been reached at `time`.
    pub fn is_done(&self, time: f32) -> bool {
        time >= self.end_time()
    }

    /// Move the profile in time, keeping its shape.
    pub fn set_start_time(&mut self, time: f32) {
        self.start_time = time;
    }

    /// Change the start value; the cruise speed is recomputed.
    pub fn set_start_value(&mut self, value: T) {
        self.start_value = value;
        self.refresh_cruise_speed();
    }

    /// Change the end value; the cruise speed is recomputed.
    pub fn set_end_value(&mut self, value: T) {
        self.end_value = value;
        self.refresh_cruise_speed();
    }

    /// Ramp shape.
    pub fn ramp(&self) -> Ramp {
        self.ramp
    }

    /// Start of the acceleration phase, in milliseconds.
    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    /// End of the deceleration phase, in milliseconds.
    pub fn end_time(&self) -> f32 {
        self.start_time + self.accel_time + self.linear_time + self.decel_time
    }

    /// Total length after rescaling, in milliseconds.
    pub fn duration(&self) -> f32 {
        self.accel_time + self.linear_time + self.decel_time
    }

    /// Length of the acceleration phase.
    pub fn accel_time(&self) -> f32 {
        self.accel_time
    }

    /// Length of the cruise phase.
    pub fn linear_time(&self) -> f32 {
        self.linear_time
    }

    /// Length of the deceleration phase.
    pub fn decel_time(&self) -> f32 {
        self.decel_time
    }

    /// Value before the start.
    pub fn start_value(&self) -> T {
        self.start_value
    }

    /// Value from the end on.
    pub fn end_value(&self) -> T {
        self.end_value
    }

    /// Speed held during the cruise phase, units per second.
    pub fn cruise_speed(&self) -> T {
        self.cruise_speed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/accel_decel.rs"]
mod tests;
