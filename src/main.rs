//! Vector Sketch CLI
//!
//! Usage:
//!   vector-sketch [OPTIONS] [FILE]
//!
//! Reads an SVG drawing (from FILE or stdin), decodes its line segments and
//! writes a normalized document, or a stroke summary with --stats.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vector_sketch::codec::config::is_valid_dimension;
use vector_sketch::{decode, encode_with_config, Settings, Stroke};

#[derive(Parser)]
#[command(name = "vector-sketch")]
#[command(about = "Normalize and inspect freehand line drawings stored as SVG")]
struct Cli {
    /// Input SVG file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write the normalized document here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the canvas width
    #[arg(long, value_parser = parse_dimension)]
    width: Option<f64>,

    /// Override the canvas height
    #[arg(long, value_parser = parse_dimension)]
    height: Option<f64>,

    /// Write everything on one line without the XML declaration
    #[arg(long)]
    compact: bool,

    /// Print a summary of the decoded strokes instead of SVG
    #[arg(long)]
    stats: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let mut settings = match &cli.config {
        Some(path) => match Settings::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading settings '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    if let Some(width) = cli.width {
        settings.canvas_width = width;
    }
    if let Some(height) = cli.height {
        settings.canvas_height = height;
    }
    if cli.compact {
        settings.pretty_print = false;
        settings.standalone = false;
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            (buffer, "<stdin>".to_string())
        }
    };

    let strokes = match decode(&source) {
        Ok(strokes) => strokes,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            return ExitCode::FAILURE;
        }
    };

    let text = if cli.stats {
        summarize(&strokes)
    } else {
        encode_with_config(&strokes, &settings.svg_config()).into_string()
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, text) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", text),
    }

    ExitCode::SUCCESS
}

/// Canvas dimensions must be finite and non-negative
fn parse_dimension(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if is_valid_dimension(value) {
        Ok(value)
    } else {
        Err(format!("expected a finite, non-negative number, got {raw}"))
    }
}

/// One line per stroke plus a total
fn summarize(strokes: &[Stroke]) -> String {
    let mut out = String::new();
    for (i, stroke) in strokes.iter().enumerate() {
        let points = stroke.points();
        let (first, last) = (points[0], points[points.len() - 1]);
        out.push_str(&format!(
            "{:>4}  ({}, {}) -> ({}, {})  stroke={} width={}\n",
            i,
            first.x,
            first.y,
            last.x,
            last.y,
            stroke.color(),
            stroke.width()
        ));
    }
    out.push_str(&format!("{} strokes\n", strokes.len()));
    out
}
