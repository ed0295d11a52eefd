use std::cell::Cell;

use crate::foundation::core::MS_PER_SEC;
use crate::foundation::value::Animatable;

/// Linear interpolation between two values over a fixed duration.
///
/// Before `start_time` the value is `start_value`, from
/// `start_time + duration` on it is `end_value`. The last evaluation is
/// memoized, so repeated queries at the same time (several readers in one
/// frame) do not recompute.
#[derive(Clone, Debug)]
pub struct Interpolate<T: Animatable> {
    enabled: bool,
    start_time: f32,
    duration: f32,
    start_value: T,
    end_value: T,
    last: Cell<Option<(f32, T)>>,
}

impl<T: Animatable> Default for Interpolate<T> {
    fn default() -> Self {
        Self {
            enabled: true,
            start_time: 0.0,
            duration: 0.0,
            start_value: T::default(),
            end_value: T::default(),
            last: Cell::new(None),
        }
    }
}

impl<T: Animatable> Interpolate<T> {
    /// Unarmed interpolation: zero times and zero values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition; this also enables the interpolation.
    pub fn init(&mut self, start_time: f32, duration: f32, start_value: T, end_value: T) {
        if duration <= 0.0 {
            tracing::trace!(start_time, duration, "linear profile armed inert");
        }
        self.start_time = start_time;
        self.duration = duration;
        self.start_value = start_value;
        self.end_value = end_value;
        self.enabled = true;
        self.last.set(None);
    }

    /// Value at `time`.
    pub fn current_value(&self, time: f32) -> T {
        if let Some((t, v)) = self.last.get()
            && t == time
        {
            return v;
        }

        let delta = time - self.start_time;
        let value = if delta <= 0.0 {
            self.start_value
        } else if delta >= self.duration {
            self.end_value
        } else {
            self.start_value + (self.end_value - self.start_value).scale(delta / self.duration)
        };
        self.last.set(Some((time, value)));
        value
    }

    /// Rate of change at `time`, in units per second.
    ///
    /// Constant inside the active interval, zero outside it.
    pub fn current_speed(&self, time: f32) -> T {
        let delta = time - self.start_time;
        if self.duration <= 0.0 || delta <= 0.0 || delta >= self.duration {
            return T::default();
        }
        (self.end_value - self.start_value).scale(MS_PER_SEC / self.duration)
    }

    /// Whether the transition has reached its end value at `time`.
    pub fn is_done(&self, time: f32) -> bool {
        time >= self.start_time + self.duration
    }

    /// Move the transition in time.
    pub fn set_start_time(&mut self, time: f32) {
        self.start_time = time;
        self.last.set(None);
    }

    /// Change the transition length, in milliseconds.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = duration;
        self.last.set(None);
    }

    /// Change the value held before the start.
    pub fn set_start_value(&mut self, value: T) {
        self.start_value = value;
        self.last.set(None);
    }

    /// Change the value reached at the end.
    pub fn set_end_value(&mut self, value: T) {
        self.end_value = value;
        self.last.set(None);
    }

    /// Transition start, in milliseconds.
    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    /// Transition end, in milliseconds.
    pub fn end_time(&self) -> f32 {
        self.start_time + self.duration
    }

    /// Transition length, in milliseconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Value before the start.
    pub fn start_value(&self) -> T {
        self.start_value
    }

    /// Value from the end on.
    pub fn end_value(&self) -> T {
        self.end_value
    }

    /// Whether the owner should be driving this interpolation.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Mark the interpolation as driven or idle.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/linear.rs"]
mod tests;
