use super::*;
use crate::foundation::core::Vec3;

#[test]
fn parses_linear_with_default_start() {
    let def: ProfileDef<f32> =
        ProfileDef::from_json(r#"{ "kind": "linear", "duration": 1000, "from": 0, "to": 100 }"#)
            .unwrap();
    assert_eq!(
        def,
        ProfileDef::Linear {
            start_time: 0.0,
            duration: 1000.0,
            from: 0.0,
            to: 100.0,
        }
    );

    let p = def.build().unwrap();
    assert!(matches!(p, Profile::Linear(_)));
    assert_eq!(p.current_value(500.0), 50.0);
    assert_eq!(p.end_time(), 1000.0);
}

#[test]
fn parses_accel_decel_with_vector_values() {
    let json = r#"{
        "kind": "accel_decel",
        "ramp": "sine",
        "start_time": 100,
        "accel_time": 3,
        "decel_time": 3,
        "duration": 4,
        "from": { "x": 0, "y": 0, "z": 0 },
        "to": { "x": 8, "y": 0, "z": -8 }
    }"#;
    let def: ProfileDef<Vec3> = ProfileDef::from_json(json).unwrap();
    let p = def.build().unwrap();
    let Profile::AccelDecel(inner) = &p else {
        panic!("expected accel/decel profile");
    };
    assert_eq!(inner.ramp(), Ramp::Sine);
    assert_eq!(inner.accel_time(), 2.0);
    assert_eq!(inner.decel_time(), 2.0);
    assert_eq!(p.start_time(), 100.0);
    assert_eq!(p.end_time(), 104.0);
    assert_eq!(p.duration(), 4.0);
    assert_eq!(p.current_value(104.0), Vec3::new(8.0, 0.0, -8.0));
    assert!(p.is_done(104.0));
}

#[test]
fn ramp_defaults_to_linear() {
    let def: ProfileDef<f32> = ProfileDef::from_json(
        r#"{ "kind": "accel_decel", "accel_time": 100, "duration": 500, "from": 1, "to": 2 }"#,
    )
    .unwrap();
    let ProfileDef::AccelDecel {
        ramp, decel_time, ..
    } = def
    else {
        panic!("expected accel/decel definition");
    };
    assert_eq!(ramp, Ramp::Linear);
    assert_eq!(decel_time, 0.0);
}

#[test]
fn rejects_negative_ramps_and_non_finite_times() {
    let def = ProfileDef::AccelDecel {
        ramp: Ramp::Linear,
        start_time: 0.0,
        accel_time: -1.0,
        decel_time: 0.0,
        duration: 10.0,
        from: 0.0f32,
        to: 1.0,
    };
    let err = def.build().unwrap_err();
    assert!(err.to_string().contains("accel_time"));

    let def = ProfileDef::Linear {
        start_time: f32::NAN,
        duration: 10.0,
        from: 0.0f32,
        to: 1.0,
    };
    assert!(matches!(def.validate(), Err(MotionError::Validation(_))));

    let def = ProfileDef::AccelDecel {
        ramp: Ramp::Sine,
        start_time: 0.0,
        accel_time: 0.0,
        decel_time: f32::INFINITY,
        duration: 10.0,
        from: 0.0f32,
        to: 1.0,
    };
    assert!(def.validate().is_err());
}

#[test]
fn zero_duration_is_accepted_as_inert() {
    let def = ProfileDef::AccelDecel {
        ramp: Ramp::Sine,
        start_time: 10.0,
        accel_time: 5.0,
        decel_time: 5.0,
        duration: 0.0,
        from: 0.0f32,
        to: 1.0,
    };
    let p = def.build().unwrap();
    assert_eq!(p.current_value(9.0), 0.0);
    assert_eq!(p.current_value(10.0), 1.0);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ProfileDef::<f32>::from_json(r#"{ "kind": "bezier", "duration": 1 }"#).unwrap_err();
    assert!(matches!(err, MotionError::Serde(_)));
}

#[test]
fn serializes_with_kind_tag() {
    let def = ProfileDef::Linear {
        start_time: 0.0,
        duration: 250.0,
        from: 1.0f32,
        to: 2.0,
    };
    let v = serde_json::to_value(&def).unwrap();
    assert_eq!(v["kind"], "linear");
    assert_eq!(v["duration"], 250.0);
}

#[test]
fn profiles_convert_from_concrete_shapes() {
    let mut lin = Interpolate::new();
    lin.init(0.0, 100.0, 0.0f32, 1.0);
    let p: Profile<f32> = lin.into();
    assert_eq!(p.current_speed(50.0), 10.0);

    let mut ad = AccelDecel::linear();
    ad.init(0.0, 0.0, 0.0, 100.0, 0.0f32, 1.0);
    let p: Profile<f32> = ad.into();
    assert!((p.current_speed(50.0) - 10.0).abs() < 1e-4);
}
