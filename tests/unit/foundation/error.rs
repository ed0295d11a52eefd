use super::*;
use crate::profile::def::{Profile, ProfileDef};
use crate::profile::linear::Interpolate;
use crate::sample::sampler::sample_range;

#[test]
fn rejected_definitions_name_the_field() {
    let def = ProfileDef::<f32>::AccelDecel {
        ramp: Default::default(),
        start_time: 0.0,
        accel_time: -5.0,
        decel_time: 0.0,
        duration: 100.0,
        from: 0.0,
        to: 1.0,
    };
    let err = def.build().unwrap_err();
    assert!(matches!(err, MotionError::Validation(_)));
    assert_eq!(err.to_string(), "validation error: accel_time must be >= 0");
}

#[test]
fn rejected_sampling_requests_report_the_cause() {
    let p = Profile::Linear(Interpolate::<f32>::new());
    let err = sample_range(&p, 0.0, 10.0, 0.0).unwrap_err();
    assert_eq!(err.to_string(), "sampling error: step must be > 0");

    let err = sample_range(&p, 0.0, 1.0e20, 1.0).unwrap_err();
    assert!(err.to_string().starts_with("sampling error:"));
    assert!(err.to_string().ends_with(&format!("limit is {}", crate::MAX_SAMPLES)));
}

#[test]
fn malformed_json_maps_to_serde_variant() {
    let err = ProfileDef::<f32>::from_json(r#"{ "kind": "bounce", "duration": 1 }"#).unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn anyhow_errors_pass_through_other() {
    fn load() -> MotionResult<()> {
        let table: anyhow::Result<()> = Err(anyhow::anyhow!("profile table missing"));
        table?;
        Ok(())
    }

    let err = load().unwrap_err();
    assert!(matches!(err, MotionError::Other(_)));
    assert_eq!(err.to_string(), "profile table missing");
}
