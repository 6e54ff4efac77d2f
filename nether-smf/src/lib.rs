//! Nether-SMF: SysEx and Standard MIDI File encoder for wavetable dumps
//!
//! This crate turns a raw 2048-sample wavetable into the byte stream a hardware
//! synthesizer expects for its user wavetable memory. It is a **pure encoder** -
//! it never reads files, never talks to a device and never decodes MIDI back
//! into samples. The caller supplies byte buffers and receives byte buffers.
//!
//! # Pipeline
//!
//! ```text
//! raw samples (2048)
//!   -> pack_wavetable      8 closed cycles of 129 samples (1032 bytes)
//!   -> nibblize            low nibble, high nibble (2064 bytes)
//!   -> build_message       F0 <manufacturer> <device> <command> <payload> F7
//!   -> Track / Container   tempo + sysex events, optional comment tracks
//!   -> write_container     MThd + MTrk chunks
//!      or write_raw        bare F0 ... F7 (.syx)
//! ```
//!
//! # Container Layout
//!
//! ```text
//! Header chunk:
//!   "MThd" | u32 BE length (6) | u16 BE format (1) | u16 BE tracks | u16 BE division
//!
//! Track chunk (repeats):
//!   "MTrk" | u32 BE length | events...
//!
//! Event:
//!   <vlq delta> FF 01 <vlq len> <text>      text meta-event
//!   <vlq delta> FF 51 03 <u24 BE usec/qn>   tempo meta-event
//!   <vlq delta> F0 ... F7                   framed sysex, written verbatim
//! ```
//!
//! Tracks carry no end-of-track meta-event unless [`Container::end_of_track`]
//! is enabled.
//!
//! # Usage
//!
//! ```
//! use nether_smf::{export_wavetable, ExportOptions, OutputFormat, WAVETABLE_SIZE};
//!
//! let samples = vec![0u8; WAVETABLE_SIZE];
//! let options = ExportOptions {
//!     format: OutputFormat::Syx,
//!     ..Default::default()
//! };
//! let bytes = export_wavetable("saw.bin", &samples, &options).unwrap();
//! assert_eq!(bytes.len(), 2073);
//! assert_eq!(bytes[0], 0xF0);
//! ```

mod container;
mod error;
mod event;
mod export;
mod nibble;
mod sysex;
mod vlq;
mod wavetable;
mod writer;

pub use container::Container;
pub use error::{Result, SmfError};
pub use event::{EventPayload, TimedEvent, Track};
pub use export::{
    DEFAULT_DEVICE_NAME, DEFAULT_TEMPO_BPM, ExportOptions, OutputFormat, build_wavetable_container,
    build_wavetable_message, export_wavetable, wavetable_comments,
};
pub use nibble::{nibblize, nibblize_into};
pub use sysex::{
    DEFAULT_DEVICE_ID, DEFAULT_MANUFACTURER_ID, DEFAULT_UPDATE_COMMAND, SysExHeader, SysExMessage,
    build_message,
};
pub use vlq::{VLQ_MAX, encode_vlq, write_vlq};
pub use wavetable::{PackedWavetable, pack_wavetable};
pub use writer::{encode_track, write_container, write_raw};

// =============================================================================
// Constants
// =============================================================================

/// Number of samples in a raw wavetable capture
pub const WAVETABLE_SIZE: usize = 2048;

/// Samples per waveform group in the raw capture
pub const WAVETABLE_CYCLE_LEN: usize = 128;

/// Number of cycles kept after packing (every second group of 16)
pub const WAVETABLE_PACKED_CYCLES: usize = 8;

/// Bytes per packed cycle (128 samples + the repeated first sample)
pub const PACKED_CYCLE_LEN: usize = WAVETABLE_CYCLE_LEN + 1;

/// Size of a packed wavetable (8 x 129)
pub const PACKED_WAVETABLE_SIZE: usize = WAVETABLE_PACKED_CYCLES * PACKED_CYCLE_LEN;

/// SysEx start byte
pub const SYSEX_START: u8 = 0xF0;

/// SysEx end byte
pub const SYSEX_END: u8 = 0xF7;

/// Header chunk tag
pub const HEADER_CHUNK_TAG: &[u8; 4] = b"MThd";

/// Track chunk tag
pub const TRACK_CHUNK_TAG: &[u8; 4] = b"MTrk";

/// Header chunk body length (format + tracks + division)
pub const HEADER_CHUNK_LEN: u32 = 6;

/// Multi-track, synchronous container format
pub const FORMAT_MULTI_TRACK: u16 = 1;

/// Default ticks per quarter note
pub const DEFAULT_TICKS_PER_QUARTER: u16 = 96;

/// Meta-event prefix byte
pub const META_PREFIX: u8 = 0xFF;

/// Meta-event type: text
pub const META_TEXT: u8 = 0x01;

/// Meta-event type: set tempo
pub const META_TEMPO: u8 = 0x51;

/// Meta-event type: end of track
pub const META_END_OF_TRACK: u8 = 0x2F;

/// Microseconds per minute, used for BPM conversion
pub const MICROS_PER_MINUTE: f64 = 60_000_000.0;
