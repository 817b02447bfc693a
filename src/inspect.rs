use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use tinyatlas::{Atlas, Frame};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

/// Decode an atlas string and print it as JSON or YAML.
#[derive(Debug, Parser)]
#[command(name = "atlas-inspect", version)]
struct Args {
    /// File holding the atlas string; `-` or nothing reads stdin
    input: Option<PathBuf>,

    /// Decode this atlas string instead of reading a file
    #[arg(long, conflicts_with = "input")]
    format: Option<String>,

    /// Input is a JSON document whose value is the atlas string
    #[arg(long)]
    json_input: bool,

    #[arg(long, value_enum, default_value = "json")]
    output: OutputFormat,

    /// Only print the frames of this animation
    #[arg(long)]
    animation: Option<String>,
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match path {
        Some(path) if path.as_os_str() != "-" => {
            File::open(path)
                .with_context(|| format!("failed to open atlas file at {}", path.display()))?
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read atlas file at {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read atlas from stdin")?;
        }
    }
    Ok(buf)
}

/// Drops one trailing line ending so `echo`-ed input decodes.
fn strip_line_ending(bytes: &[u8]) -> &[u8] {
    bytes
        .strip_suffix(b"\r\n")
        .or_else(|| bytes.strip_suffix(b"\n"))
        .unwrap_or(bytes)
}

fn decode(args: &Args) -> Result<Atlas> {
    if let Some(format) = &args.format {
        return tinyatlas::parse(format).context("failed to decode atlas string");
    }

    let raw = read_input(args.input.as_ref())?;
    if args.json_input {
        let value: serde_json::Value =
            serde_json::from_slice(&raw).context("failed to read json input")?;
        tinyatlas::parse_value(&value).context("failed to decode atlas from json input")
    } else {
        tinyatlas::parse_bytes(strip_line_ending(&raw)).context("failed to decode atlas")
    }
}

fn write_output<T: serde::Serialize>(out: &mut impl Write, value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, value)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let atlas = decode(&args)?;
    info!(
        "Decoded atlas version {} with {} frames and {} animations",
        atlas.version,
        atlas.frames.len(),
        atlas.animations.len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let written = match &args.animation {
        Some(name) => {
            let animation = atlas
                .animation(name)
                .ok_or_else(|| anyhow!("atlas has no animation named \"{}\"", name))?;
            let frames: &[Frame] = atlas
                .animation_frames(animation)
                .ok_or_else(|| anyhow!("animation \"{}\" is out of range", name))?;
            info!("Animation {} spans {} frames", name, frames.len());
            write_output(&mut out, &frames, args.output)
        }
        None => write_output(&mut out, &atlas, args.output),
    };
    written.context("failed to write output")
}
