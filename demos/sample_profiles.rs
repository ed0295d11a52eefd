use motion_profile::{AccelDecel, Interpolate, Profile, Vec3, sample_range};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // A door swinging open, a camera dolly and a lift, all over one second.
    let mut door = Interpolate::new();
    door.init(0.0, 1000.0, 0.0f32, 90.0);

    let mut dolly = AccelDecel::linear();
    dolly.init(0.0, 250.0, 250.0, 1000.0, 0.0f32, 512.0);

    let mut lift = AccelDecel::sine();
    lift.init(0.0, 400.0, 400.0, 1000.0, Vec3::ZERO, Vec3::new(0.0, 0.0, 128.0));

    let door = Profile::from(door);
    let dolly = Profile::from(dolly);
    let lift = Profile::from(lift);

    println!("{:>6} {:>8} {:>8} {:>8} {:>8}", "ms", "door", "dolly", "lift z", "lift vz");
    let times = sample_range(&door, 0.0, 1000.0, 100.0)?;
    for s in times {
        let t = s.time;
        println!(
            "{t:>6.0} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            s.value,
            dolly.current_value(t),
            lift.current_value(t).z,
            lift.current_speed(t).z
        );
    }

    Ok(())
}
