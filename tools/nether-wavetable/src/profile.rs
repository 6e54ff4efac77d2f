//! Device profiles and option resolution
//!
//! A profile is an optional TOML file describing the target synthesizer.
//! Command-line flags override profile values, which override the built-in
//! defaults.
//!
//! ```toml
//! device_name = "Shruthi-1"
//! manufacturer_id = "00 21 02"
//! device_id = "00 02"
//! update_command = "03 00"
//! comments = false
//! end_of_track = false
//! ```

use anyhow::{Context, Result};
use nether_smf::{
    ExportOptions, OutputFormat, SysExHeader, DEFAULT_DEVICE_ID, DEFAULT_DEVICE_NAME,
    DEFAULT_MANUFACTURER_ID, DEFAULT_UPDATE_COMMAND,
};
use serde::Deserialize;
use std::path::Path;

/// Wavetable target profile
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Device named in the comment tracks
    pub device_name: Option<String>,
    /// Hex string, e.g. "00 21 02"
    pub manufacturer_id: Option<String>,
    /// Hex string, e.g. "00 02"
    pub device_id: Option<String>,
    /// Hex string, e.g. "03 00"
    pub update_command: Option<String>,
    #[serde(default)]
    pub comments: bool,
    #[serde(default)]
    pub end_of_track: bool,
}

impl Profile {
    /// Load profile from file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse profile: {}", path.display()))
    }

    /// Parse profile from string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub manufacturer_id: Option<String>,
    pub device_id: Option<String>,
    pub update_command: Option<String>,
    pub syx: bool,
    pub comments: bool,
    pub end_of_track: bool,
}

/// Decode a header id given as hex ("002102", "00 21 02", "00:21:02", "0x00 0x21 0x02")
pub fn parse_id_bytes(text: &str) -> Result<Vec<u8>> {
    let digits: String = text
        .split(|c: char| c.is_whitespace() || c == ':' || c == ',' || c == '-')
        .map(|part| part.trim_start_matches("0x").trim_start_matches("0X"))
        .collect();
    hex::decode(&digits).with_context(|| format!("Invalid hex byte string: {:?}", text))
}

/// Merge defaults, profile and command-line overrides into export options
pub fn resolve_options(profile: Option<&Profile>, overrides: &Overrides) -> Result<ExportOptions> {
    let pick = |flag: &Option<String>, from_profile: Option<&String>| -> Option<String> {
        flag.clone().or_else(|| from_profile.cloned())
    };

    let manufacturer_id = match pick(
        &overrides.manufacturer_id,
        profile.and_then(|p| p.manufacturer_id.as_ref()),
    ) {
        Some(text) => parse_id_bytes(&text).context("Invalid manufacturer id")?,
        None => DEFAULT_MANUFACTURER_ID.to_vec(),
    };
    let device_id = match pick(
        &overrides.device_id,
        profile.and_then(|p| p.device_id.as_ref()),
    ) {
        Some(text) => parse_id_bytes(&text).context("Invalid device id")?,
        None => DEFAULT_DEVICE_ID.to_vec(),
    };
    let update_command = match pick(
        &overrides.update_command,
        profile.and_then(|p| p.update_command.as_ref()),
    ) {
        Some(text) => parse_id_bytes(&text).context("Invalid update command")?,
        None => DEFAULT_UPDATE_COMMAND.to_vec(),
    };

    let header = SysExHeader::new(&manufacturer_id, &device_id, &update_command)?;

    Ok(ExportOptions {
        header,
        format: if overrides.syx {
            OutputFormat::Syx
        } else {
            OutputFormat::Midi
        },
        comments: overrides.comments || profile.is_some_and(|p| p.comments),
        device_name: profile
            .and_then(|p| p.device_name.clone())
            .unwrap_or_else(|| DEFAULT_DEVICE_NAME.to_string()),
        end_of_track: overrides.end_of_track || profile.is_some_and(|p| p.end_of_track),
    })
}
