// main.rs
//
// Builds a flower in an in-memory scene and writes it out as STL and/or SVG.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rosette::float_types::{Real, set_tolerance};
use rosette::scene::SceneCall;
use rosette::{FlowerParams, MemoryScene, RecordingScene, build_flower};
use std::fs;
use std::path::PathBuf;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// Binary STL
    Stl,
    /// ASCII STL
    StlAscii,
    /// SVG outlines seen from above
    Svg,
    /// Binary STL and SVG
    All,
}

#[derive(Parser, Debug)]
#[command(name = "rosette")]
#[command(about = "Place a flower of circles around a central circle", long_about = None)]
struct Cli {
    /// Radius of every circle and of the ring they sit on
    #[arg(long, default_value_t = rosette::flower::DEFAULT_RADIUS)]
    radius: Real,

    /// Degrees between consecutive petals
    #[arg(long, default_value_t = rosette::flower::DEFAULT_ANGULAR_STEP, allow_negative_numbers = true)]
    step: Real,

    /// Angle of the first petal, in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start_angle: Real,

    /// Vertices per circle
    #[arg(long, default_value_t = rosette::primitive::DEFAULT_VERTICES)]
    vertices: usize,

    /// Directory the files are written to
    #[arg(long, default_value = "stl")]
    output_dir: PathBuf,

    /// Base file name (extension is added)
    #[arg(long, default_value = "flower")]
    name: String,

    /// Geometric tolerance, overriding the build-time default
    #[arg(long)]
    tolerance: Option<Real>,

    #[arg(long, value_enum, default_value_t = Format::All)]
    format: Format,

    /// Print the scene calls instead of writing files
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    if let Some(tolerance) = cli.tolerance {
        set_tolerance(tolerance);
    }

    let params = FlowerParams {
        radius: cli.radius,
        start_angle: cli.start_angle,
        angular_step: cli.step,
        vertices: cli.vertices,
    };

    if cli.dry_run {
        let mut scene = RecordingScene::new();
        build_flower(&mut scene, &params)?;
        for call in &scene.calls {
            match call {
                SceneCall::Reset => println!("reset"),
                SceneCall::PlaceCircle(c) => println!(
                    "place_circle radius={} location=({:.6}, {:.6}, {:.6}) vertices={}",
                    c.radius, c.location.x, c.location.y, c.location.z, c.vertices
                ),
            }
        }
        return Ok(());
    }

    let mut scene = MemoryScene::new();
    let summary = build_flower(&mut scene, &params)?;

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;

    if matches!(cli.format, Format::Stl | Format::All) {
        write_file(&cli, "stl", scene.to_stl_binary(&cli.name)?)?;
    }
    if cli.format == Format::StlAscii {
        write_file(&cli, "stl", scene.to_stl_ascii(&cli.name).into_bytes())?;
    }
    if matches!(cli.format, Format::Svg | Format::All) {
        let path = cli.output_dir.join(&cli.name).with_extension("svg");
        let mut file = fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        scene.write_svg(&mut file)?;
        info!("wrote {}", path.display());
    }

    info!("{} circles written to {}", summary.total(), cli.output_dir.display());
    Ok(())
}

fn write_file(cli: &Cli, extension: &str, bytes: Vec<u8>) -> Result<()> {
    let path = cli.output_dir.join(&cli.name).with_extension(extension);
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}
