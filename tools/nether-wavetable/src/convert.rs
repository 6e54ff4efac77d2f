//! Wavetable file conversion

use anyhow::{Context, Result};
use nether_smf::{export_wavetable, ExportOptions, OutputFormat, SmfError, WAVETABLE_SIZE};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Derive the output path from the input path
///
/// `.bin` is replaced by the output extension wherever it appears; other
/// inputs get the extension appended.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let input = input.to_string_lossy();
    let extension = format.extension();
    if input.contains(".bin") {
        PathBuf::from(input.replace(".bin", extension))
    } else {
        PathBuf::from(format!("{}{}", input, extension))
    }
}

/// Read a raw wavetable, rejecting anything that is not exactly 2048 bytes
pub fn load_wavetable(path: &Path) -> Result<Vec<u8>> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;
    if metadata.len() != WAVETABLE_SIZE as u64 {
        return Err(SmfError::InvalidInputSize {
            expected: WAVETABLE_SIZE,
            actual: metadata.len() as usize,
        })
        .with_context(|| format!("Invalid wavetable: {}", path.display()));
    }

    let data =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    if data.len() != WAVETABLE_SIZE {
        return Err(SmfError::InvalidInputSize {
            expected: WAVETABLE_SIZE,
            actual: data.len(),
        })
        .with_context(|| format!("Invalid wavetable: {}", path.display()));
    }
    Ok(data)
}

/// Write output bytes, replacing any existing file
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}

/// Convert one wavetable file, returning the number of bytes written
pub fn convert_file(input: &Path, output: &Path, options: &ExportOptions) -> Result<usize> {
    let samples = load_wavetable(input)?;
    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());

    let bytes = export_wavetable(&source_name, &samples, options)
        .with_context(|| format!("Failed to export wavetable: {}", input.display()))?;
    write_output(output, &bytes)?;

    tracing::debug!("Wrote {} bytes to {:?}", bytes.len(), output);
    Ok(bytes.len())
}
