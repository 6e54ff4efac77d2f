//! Wavetable export pipeline
//!
//! Turns one raw wavetable capture into either a multi-track container or a
//! bare SysEx dump, using the options supplied by the caller.

use crate::container::Container;
use crate::error::Result;
use crate::event::{EventPayload, Track};
use crate::nibble::nibblize_into;
use crate::sysex::{SysExHeader, SysExMessage, build_message};
use crate::wavetable::{PackedWavetable, pack_wavetable};

/// Device named in the descriptive comments
pub const DEFAULT_DEVICE_NAME: &str = "Shruthi-1";

/// Tempo of the data track
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Delta between the tempo event and the SysEx event
const SYSEX_DELTA_TICKS: u32 = 1;

/// Output flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Multi-track container (.mid)
    #[default]
    Midi,
    /// Bare SysEx message (.syx)
    Syx,
}

impl OutputFormat {
    /// File extension including the leading dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Midi => ".mid",
            OutputFormat::Syx => ".syx",
        }
    }
}

/// Everything that controls one export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub header: SysExHeader,
    pub format: OutputFormat,
    /// Prepend one text-only track per comment line (container output only)
    pub comments: bool,
    pub device_name: String,
    pub end_of_track: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            header: SysExHeader::default(),
            format: OutputFormat::default(),
            comments: false,
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            end_of_track: false,
        }
    }
}

/// Descriptive comment lines for a wavetable dump
pub fn wavetable_comments(source_name: &str, size: usize, device_name: &str) -> Vec<String> {
    vec![
        format!("Contains wavetable data for {}", device_name),
        format!("Created from {}", source_name),
        format!("Size: {}", size),
    ]
}

/// Pack, nibblize and frame a raw wavetable
///
/// The update command is sent verbatim, followed by the nibblized cycles.
pub fn build_wavetable_message(samples: &[u8], header: &SysExHeader) -> Result<SysExMessage> {
    let packed = pack_wavetable(samples)?;
    frame_wavetable(&packed, header)
}

fn frame_wavetable(packed: &PackedWavetable, header: &SysExHeader) -> Result<SysExMessage> {
    let mut payload = Vec::with_capacity(packed.len() * 2);
    nibblize_into(packed.as_bytes(), &mut payload);
    build_message(header, &payload)
}

/// Build the container for a wavetable, along with its SysEx message
pub fn build_wavetable_container(
    source_name: &str,
    samples: &[u8],
    options: &ExportOptions,
) -> Result<(Container, SysExMessage)> {
    let packed = pack_wavetable(samples)?;
    let message = frame_wavetable(&packed, &options.header)?;
    let mut container = Container::new().with_end_of_track(options.end_of_track);

    if options.comments {
        for comment in wavetable_comments(source_name, packed.len(), &options.device_name) {
            let track = container.add_track();
            track.add_event(0, EventPayload::text(comment));
        }
    }

    let mut data_track = Track::new();
    data_track
        .add_event(0, EventPayload::tempo(DEFAULT_TEMPO_BPM))
        .add_event(SYSEX_DELTA_TICKS, EventPayload::sysex(message.clone()));
    container.push_track(data_track);

    Ok((container, message))
}

/// Export a raw wavetable to output bytes
///
/// `source_name` only appears in comments; pass the file name, not a path.
pub fn export_wavetable(
    source_name: &str,
    samples: &[u8],
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    let (container, message) = build_wavetable_container(source_name, samples, options)?;

    let bytes = match options.format {
        OutputFormat::Midi => container.to_bytes()?,
        OutputFormat::Syx => {
            let mut out = Vec::with_capacity(message.len());
            crate::writer::write_raw(&message, &mut out)?;
            out
        }
    };

    tracing::debug!(
        "Exported {} ({:?}): {} bytes",
        source_name,
        options.format,
        bytes.len()
    );

    Ok(bytes)
}
