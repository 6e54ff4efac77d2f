//! wavetable2sysex - user wavetable export tool
//!
//! Converts raw 2048-sample wavetables (.bin) to a SysEx dump wrapped in a
//! MIDI file (.mid) or to a bare SysEx file (.syx).
//!
//! ```bash
//! wavetable2sysex saw.bin                 # -> saw.mid
//! wavetable2sysex --syx saw.bin           # -> saw.syx
//! wavetable2sysex -c -o out.mid saw.bin   # with comment tracks
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use nether_wavetable::{convert, resolve_options, Overrides, Profile};

#[derive(Parser)]
#[command(name = "wavetable2sysex")]
#[command(about = "Build a user wavetable SysEx dump from a raw 2048-sample file")]
#[command(version)]
struct Cli {
    /// Raw wavetable files (exactly 2048 bytes each)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write output to FILE (default: input name with .mid/.syx)
    #[arg(short, long, alias = "output_file", value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Manufacturer ID as hex (default: 00 21 02)
    #[arg(short, long, alias = "manufacturer_id", value_name = "HEX")]
    manufacturer_id: Option<String>,

    /// Device ID as hex (default: 00 02)
    #[arg(short = 'v', long, alias = "device_id", value_name = "HEX")]
    device_id: Option<String>,

    /// Wavetable transfer command as hex (default: 03 00)
    #[arg(short, long, alias = "update_command", value_name = "HEX")]
    update_command: Option<String>,

    /// Produce a .syx file instead of a MIDI file
    #[arg(short, long)]
    syx: bool,

    /// Prepend descriptive text tracks (MIDI output only)
    #[arg(short, long)]
    comments: bool,

    /// Terminate every track with an end-of-track event
    #[arg(long)]
    end_of_track: bool,

    /// Device profile (TOML) with default header bytes
    #[arg(short, long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let profile = cli.profile.as_deref().map(Profile::load).transpose()?;
    let overrides = Overrides {
        manufacturer_id: cli.manufacturer_id,
        device_id: cli.device_id,
        update_command: cli.update_command,
        syx: cli.syx,
        comments: cli.comments,
        end_of_track: cli.end_of_track,
    };
    let options = resolve_options(profile.as_ref(), &overrides)?;

    if options.comments && cli.syx {
        tracing::warn!("--comments has no effect on .syx output");
    }
    if cli.output_file.is_some() && cli.inputs.len() > 1 {
        tracing::warn!(
            "{} inputs share one output file; only the last conversion is kept",
            cli.inputs.len()
        );
    }

    for input in &cli.inputs {
        let output = cli
            .output_file
            .clone()
            .unwrap_or_else(|| convert::default_output_path(input, options.format));
        tracing::info!("Converting {:?} -> {:?}", input, output);
        let written = convert::convert_file(input, &output, &options)?;
        tracing::info!("Done! ({} bytes)", written);
    }

    Ok(())
}
