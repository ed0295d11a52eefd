use crate::foundation::error::{MotionError, MotionResult};
use crate::foundation::value::Animatable;
use crate::profile::accel_decel::{AccelDecel, Ramp};
use crate::profile::linear::Interpolate;

/// An armed profile of any shape.
#[derive(Clone, Debug)]
pub enum Profile<T: Animatable> {
    /// Plain linear interpolation.
    Linear(Interpolate<T>),
    /// Three phase accel/cruise/decel motion.
    AccelDecel(AccelDecel<T>),
}

impl<T: Animatable> Profile<T> {
    /// Value at `time`.
    pub fn current_value(&self, time: f32) -> T {
        match self {
            Self::Linear(p) => p.current_value(time),
            Self::AccelDecel(p) => p.current_value(time),
        }
    }

    /// Speed at `time`, in units per second.
    pub fn current_speed(&self, time: f32) -> T {
        match self {
            Self::Linear(p) => p.current_speed(time),
            Self::AccelDecel(p) => p.current_speed(time),
        }
    }

    /// Whether the end value has been reached at `time`.
    pub fn is_done(&self, time: f32) -> bool {
        match self {
            Self::Linear(p) => p.is_done(time),
            Self::AccelDecel(p) => p.is_done(time),
        }
    }

    /// Start of the motion, in milliseconds.
    pub fn start_time(&self) -> f32 {
        match self {
            Self::Linear(p) => p.start_time(),
            Self::AccelDecel(p) => p.start_time(),
        }
    }

    /// End of the motion, in milliseconds.
    pub fn end_time(&self) -> f32 {
        match self {
            Self::Linear(p) => p.end_time(),
            Self::AccelDecel(p) => p.end_time(),
        }
    }

    /// Length of the motion, in milliseconds.
    pub fn duration(&self) -> f32 {
        match self {
            Self::Linear(p) => p.duration(),
            Self::AccelDecel(p) => p.duration(),
        }
    }
}

impl<T: Animatable> From<Interpolate<T>> for Profile<T> {
    fn from(p: Interpolate<T>) -> Self {
        Self::Linear(p)
    }
}

impl<T: Animatable> From<AccelDecel<T>> for Profile<T> {
    fn from(p: AccelDecel<T>) -> Self {
        Self::AccelDecel(p)
    }
}

/// Declarative description of a profile, as found in JSON.
///
/// ```json
/// { "kind": "accel_decel", "ramp": "sine", "start_time": 0,
///   "accel_time": 200, "decel_time": 200, "duration": 1000,
///   "from": 0.0, "to": 100.0 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileDef<T> {
    /// Builds an [`Interpolate`].
    Linear {
        /// Start time in milliseconds, `0` when omitted.
        #[serde(default)]
        start_time: f32,
        /// Length in milliseconds; `<= 0` snaps to `to`.
        duration: f32,
        /// Start value.
        from: T,
        /// End value.
        to: T,
    },
    /// Builds an [`AccelDecel`].
    AccelDecel {
        /// Ramp shape, linear when omitted.
        #[serde(default)]
        ramp: Ramp,
        /// Start time in milliseconds, `0` when omitted.
        #[serde(default)]
        start_time: f32,
        /// Acceleration ramp length in milliseconds.
        #[serde(default)]
        accel_time: f32,
        /// Deceleration ramp length in milliseconds.
        #[serde(default)]
        decel_time: f32,
        /// Total length in milliseconds; `<= 0` snaps to `to`.
        duration: f32,
        /// Start value.
        from: T,
        /// End value.
        to: T,
    },
}

impl<T: Animatable> ProfileDef<T> {
    /// Check timing parameters.
    ///
    /// Non-positive durations are accepted; they describe an inert profile.
    pub fn validate(&self) -> MotionResult<()> {
        fn finite(name: &str, v: f32) -> MotionResult<()> {
            if v.is_finite() {
                Ok(())
            } else {
                Err(MotionError::validation(format!("{name} must be finite")))
            }
        }

        match self {
            Self::Linear {
                start_time,
                duration,
                ..
            } => {
                finite("start_time", *start_time)?;
                finite("duration", *duration)
            }
            Self::AccelDecel {
                start_time,
                accel_time,
                decel_time,
                duration,
                ..
            } => {
                finite("start_time", *start_time)?;
                finite("accel_time", *accel_time)?;
                finite("decel_time", *decel_time)?;
                finite("duration", *duration)?;
                if *accel_time < 0.0 {
                    return Err(MotionError::validation("accel_time must be >= 0"));
                }
                if *decel_time < 0.0 {
                    return Err(MotionError::validation("decel_time must be >= 0"));
                }
                Ok(())
            }
        }
    }

    /// Validate and arm the described profile.
    pub fn build(&self) -> MotionResult<Profile<T>> {
        self.validate()?;
        let profile = match *self {
            Self::Linear {
                start_time,
                duration,
                from,
                to,
            } => {
                let mut p = Interpolate::new();
                p.init(start_time, duration, from, to);
                Profile::Linear(p)
            }
            Self::AccelDecel {
                ramp,
                start_time,
                accel_time,
                decel_time,
                duration,
                from,
                to,
            } => {
                let mut p = AccelDecel::new(ramp);
                p.init(start_time, accel_time, decel_time, duration, from, to);
                Profile::AccelDecel(p)
            }
        };
        Ok(profile)
    }
}

impl<T> ProfileDef<T>
where
    T: Animatable + serde::de::DeserializeOwned,
{
    /// Parse and validate a definition from JSON text.
    pub fn from_json(s: &str) -> MotionResult<Self> {
        let def: Self = serde_json::from_str(s)?;
        def.validate()?;
        Ok(def)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/def.rs"]
mod tests;
