use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use motion_profile::{Angles, Animatable, Color, Profile, ProfileDef, Sample, Vec3};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "motion-profile", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a profile over a time range.
    Sample(SampleArgs),
    /// Print the resolved timing of a profile.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input profile definition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First sample time, in milliseconds.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    from: f32,

    /// Last sample time, in milliseconds.
    #[arg(long, allow_negative_numbers = true)]
    to: f32,

    /// Sampling step, in milliseconds.
    #[arg(long, default_value_t = 16.0)]
    step: f32,

    /// Type of the `from`/`to` values in the definition.
    #[arg(long, value_enum, default_value_t = ValueKind::Scalar)]
    value: ValueKind,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input profile definition JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Type of the `from`/`to` values in the definition.
    #[arg(long, value_enum, default_value_t = ValueKind::Scalar)]
    value: ValueKind,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ValueKind {
    Scalar,
    Vec3,
    Angles,
    Color,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Csv,
}

/// Flat column view of a value for CSV output.
trait Columns: Animatable + serde::Serialize + serde::de::DeserializeOwned {
    const NAMES: &'static [&'static str];

    fn columns(&self) -> Vec<f32>;
}

impl Columns for f32 {
    const NAMES: &'static [&'static str] = &["v"];

    fn columns(&self) -> Vec<f32> {
        vec![*self]
    }
}

impl Columns for Vec3 {
    const NAMES: &'static [&'static str] = &["x", "y", "z"];

    fn columns(&self) -> Vec<f32> {
        vec![self.x, self.y, self.z]
    }
}

impl Columns for Angles {
    const NAMES: &'static [&'static str] = &["pitch", "yaw", "roll"];

    fn columns(&self) -> Vec<f32> {
        vec![self.pitch, self.yaw, self.roll]
    }
}

impl Columns for Color {
    const NAMES: &'static [&'static str] = &["r", "g", "b", "a"];

    fn columns(&self) -> Vec<f32> {
        vec![self.r, self.g, self.b, self.a]
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => match args.value {
            ValueKind::Scalar => cmd_sample::<f32>(&args),
            ValueKind::Vec3 => cmd_sample::<Vec3>(&args),
            ValueKind::Angles => cmd_sample::<Angles>(&args),
            ValueKind::Color => cmd_sample::<Color>(&args),
        },
        Command::Info(args) => match args.value {
            ValueKind::Scalar => cmd_info::<f32>(&args),
            ValueKind::Vec3 => cmd_info::<Vec3>(&args),
            ValueKind::Angles => cmd_info::<Angles>(&args),
            ValueKind::Color => cmd_info::<Color>(&args),
        },
    }
}

fn read_def<T: Columns>(path: &Path) -> anyhow::Result<ProfileDef<T>> {
    let f = File::open(path).with_context(|| format!("open profile '{}'", path.display()))?;
    let r = BufReader::new(f);
    let def: ProfileDef<T> = serde_json::from_reader(r).with_context(|| "parse profile JSON")?;
    Ok(def)
}

fn cmd_sample<T: Columns>(args: &SampleArgs) -> anyhow::Result<()> {
    let def = read_def::<T>(&args.in_path)?;
    let profile = def.build()?;
    let samples = motion_profile::sample_range(&profile, args.from, args.to, args.step)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &samples).with_context(|| "write samples")?;
            writeln!(out)?;
        }
        Format::Csv => write_csv(&mut out, &samples).with_context(|| "write samples")?,
    }
    out.flush()?;
    Ok(())
}

fn write_csv<T: Columns>(out: impl std::io::Write, samples: &[Sample<T>]) -> anyhow::Result<()> {
    let mut w = csv::Writer::from_writer(out);

    let mut header = vec!["time".to_string()];
    header.extend(T::NAMES.iter().map(|n| n.to_string()));
    header.extend(T::NAMES.iter().map(|n| format!("speed_{n}")));
    header.push("done".to_string());
    w.write_record(&header)?;

    for s in samples {
        let mut row = vec![s.time.to_string()];
        row.extend(s.value.columns().iter().map(f32::to_string));
        row.extend(s.speed.columns().iter().map(f32::to_string));
        row.push(s.done.to_string());
        w.write_record(&row)?;
    }
    w.flush()?;
    Ok(())
}

#[derive(Debug, serde::Serialize)]
struct Timing {
    kind: &'static str,
    start_time: f32,
    end_time: f32,
    duration: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    phases: Option<Phases>,
}

#[derive(Debug, serde::Serialize)]
struct Phases {
    ramp: motion_profile::Ramp,
    accel_time: f32,
    linear_time: f32,
    decel_time: f32,
}

fn cmd_info<T: Columns>(args: &InfoArgs) -> anyhow::Result<()> {
    let def = read_def::<T>(&args.in_path)?;
    let profile = def.build()?;

    let timing = match &profile {
        Profile::Linear(p) => Timing {
            kind: "linear",
            start_time: p.start_time(),
            end_time: p.end_time(),
            duration: p.duration(),
            phases: None,
        },
        Profile::AccelDecel(p) => Timing {
            kind: "accel_decel",
            start_time: p.start_time(),
            end_time: p.end_time(),
            duration: p.duration(),
            phases: Some(Phases {
                ramp: p.ramp(),
                accel_time: p.accel_time(),
                linear_time: p.linear_time(),
                decel_time: p.decel_time(),
            }),
        },
    };

    println!("{}", serde_json::to_string_pretty(&timing)?);
    Ok(())
}
