use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use curve2svg::{ExportOptions, RenderStrategy, TransformSpace, export_scene, parse_snapshot};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SpaceArg {
    World,
    Local,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RenderArg {
    Defs,
    Direct,
}

#[derive(Parser)]
#[command(name = "curve2svg", about = "Export a 2D curve scene snapshot to SVG")]
struct Cli {
    /// Scene snapshot XML file
    snapshot: PathBuf,

    /// Output SVG file
    output: PathBuf,

    /// Canvas width in px
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Canvas height in px
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Scene-unit to canvas-unit scale factor
    #[arg(long, default_value_t = 100.0)]
    scale: f64,

    /// Draw a full-canvas background rectangle
    #[arg(long)]
    background: bool,

    /// Background color as linear RGBA in [0,1]
    #[arg(long, value_name = "R,G,B,A", default_value = "0.8,0.8,0.8,0.8")]
    background_color: String,

    /// Coordinate space for path data
    #[arg(long, value_enum, default_value_t = SpaceArg::World)]
    space: SpaceArg,

    /// Output structure: shared definitions or inline paths
    #[arg(long, value_enum, default_value_t = RenderArg::Defs)]
    render: RenderArg,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_rgba(s: &str) -> Option<[f64; 4]> {
    let parts: Vec<f64> = s.split(',').filter_map(|t| t.trim().parse().ok()).collect();
    if parts.len() == 4 {
        Some([parts[0], parts[1], parts[2], parts[3]])
    } else {
        None
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let background_color = match parse_rgba(&cli.background_color) {
        Some(rgba) => rgba,
        None => {
            eprintln!(
                "Invalid background color '{}', expected R,G,B,A",
                cli.background_color
            );
            process::exit(1);
        }
    };

    let xml = match fs::read_to_string(&cli.snapshot) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading snapshot '{}': {}", cli.snapshot.display(), e);
            process::exit(2);
        }
    };

    let scene = match parse_snapshot(&xml) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing snapshot: {}", e);
            process::exit(3);
        }
    };

    let options = ExportOptions {
        width: cli.width,
        height: cli.height,
        scale: cli.scale,
        use_background: cli.background,
        background_color,
        space: match cli.space {
            SpaceArg::World => TransformSpace::World,
            SpaceArg::Local => TransformSpace::Local,
        },
        strategy: match cli.render {
            RenderArg::Defs => RenderStrategy::Definitions,
            RenderArg::Direct => RenderStrategy::Direct,
        },
        output: cli.output.clone(),
    };

    match export_scene(&scene, &options) {
        Ok(report) => {
            for line in &report.diagnostics {
                eprintln!("note: {}", line);
            }
            println!(
                "Exported {} shapes, {} instances to '{}'",
                report.document.shapes.len(),
                report.document.instances.len(),
                cli.output.display()
            );
        }
        Err(e) => {
            eprintln!("Export failed: {}", e);
            process::exit(4);
        }
    }
}
