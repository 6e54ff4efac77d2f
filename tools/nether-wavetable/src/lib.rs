//! nether-wavetable library
//!
//! File handling and option resolution for the `wavetable2sysex` tool. The
//! encoding itself lives in `nether-smf`.

pub mod convert;
pub mod profile;

pub use convert::{convert_file, default_output_path, load_wavetable, write_output};
pub use profile::{parse_id_bytes, resolve_options, Overrides, Profile};
