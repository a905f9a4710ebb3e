/// OV3D - flat-shaded OBJ viewer for the terminal
///
/// Loads an OBJ file (and the MTL files it references), fits it into the
/// terminal and draws its faces back to front.
/// Controls:
///   - R: Reload the file
///   - Q/ESC: Quit
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::terminal;
use ov3d_core::{CameraConfig, Scene};
use ov3d_terminal::{CellCanvas, TerminalApp, Viewer};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// OBJ file to show; a cube is shown when omitted
    path: Option<PathBuf>,

    /// Rotation about the X axis, in radians
    #[arg(long, default_value_t = 0.6, allow_negative_numbers = true)]
    rx: f64,

    /// Rotation in the X/Z plane, in radians
    #[arg(long, default_value_t = 0.6, allow_negative_numbers = true)]
    ry: f64,

    /// Print the draw list instead of opening the terminal view
    #[arg(long, default_value_t = false)]
    dump: bool,

    /// Viewport width for --dump
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Viewport height for --dump
    #[arg(long, default_value_t = 600)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep log lines off the alternate screen unless asked for
    let default_filter = if args.dump { "warn" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if args.dump {
        let config = CameraConfig {
            width: args.width,
            height: args.height,
            rx: args.rx,
            ry: args.ry,
            ..CameraConfig::default()
        };
        let viewer = open(&args, config)?;
        return dump(&viewer, &mut io::stdout().lock()).context("failed to write draw list");
    }

    let (columns, rows) = terminal::size().context("failed to query terminal size")?;
    let canvas = CellCanvas::for_terminal(columns as usize, rows as usize);
    let config = CameraConfig {
        width: canvas.width() as u32,
        height: canvas.height() as u32,
        rx: args.rx,
        ry: args.ry,
        ..CameraConfig::default()
    };
    let viewer = open(&args, config)?;

    let mut app = TerminalApp::new(viewer, canvas);
    app.run().context("terminal session failed")?;
    Ok(())
}

fn open(args: &Args, config: CameraConfig) -> anyhow::Result<Viewer> {
    let mut viewer = Viewer::new(config);
    match &args.path {
        Some(path) => {
            viewer
                .load(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
        }
        None => {
            viewer
                .show(None, Scene::cube(2.0), Vec::new())
                .context("failed to show the built-in cube")?;
        }
    }
    Ok(viewer)
}

/// One line per polygon, farthest first: face, depth, color, then the points
fn dump<W: Write>(viewer: &Viewer, out: &mut W) -> io::Result<()> {
    let camera = viewer.camera();
    writeln!(
        out,
        "# viewport {}x{} scale {:.6} shift {:.6} {:.6} {:.6}",
        camera.width, camera.height, camera.scale, camera.shift.x, camera.shift.y, camera.shift.z
    )?;

    for item in viewer.draw_list() {
        write!(
            out,
            "face {} depth {:.6} {}",
            item.face,
            item.depth,
            item.color.to_hex()
        )?;
        for point in &item.points {
            write!(out, " {:.3},{:.3}", point.x, point.y)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
