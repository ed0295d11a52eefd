use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::value::Animatable;
use crate::profile::def::Profile;

/// Upper bound on samples produced by a single request.
pub const MAX_SAMPLES: usize = 1 << 20;

/// One evaluation of a profile.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample<T> {
    /// Query time, in milliseconds.
    pub time: f32,
    /// Profile value at `time`.
    pub value: T,
    /// Profile speed at `time`, in units per second.
    pub speed: T,
    /// Whether the profile had finished at `time`.
    pub done: bool,
}

/// Evaluate `profile` at `from`, `from + step`, ... up to and including `to`.
///
/// Times are computed as `from + i * step` so long ranges do not drift.
#[tracing::instrument(skip(profile))]
pub fn sample_range<T: Animatable>(
    profile: &Profile<T>,
    from: f32,
    to: f32,
    step: f32,
) -> MotionResult<Vec<Sample<T>>> {
    if !(from.is_finite() && to.is_finite() && step.is_finite()) {
        return Err(MotionError::sampling("range and step must be finite"));
    }
    if step <= 0.0 {
        return Err(MotionError::sampling("step must be > 0"));
    }
    if to < from {
        return Err(MotionError::sampling("range end must be >= start"));
    }

    let steps = ((f64::from(to) - f64::from(from)) / f64::from(step)).floor();
    if steps >= MAX_SAMPLES as f64 {
        return Err(MotionError::sampling(format!(
            "{} samples requested, limit is {MAX_SAMPLES}",
            steps + 1.0
        )));
    }
    let count = steps as usize + 1;

    let samples: Vec<Sample<T>> = (0..count)
        .map(|i| {
            let time = from + i as f32 * step;
            Sample {
                time,
                value: profile.current_value(time),
                speed: profile.current_speed(time),
                done: profile.is_done(time),
            }
        })
        .collect();
    tracing::debug!(count = samples.len(), "sampled profile");
    Ok(samples)
}

#[cfg(test)]
#[path = "../../tests/unit/sample/sampler.rs"]
mod tests;
