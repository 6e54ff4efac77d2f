//! Encoder error types

/// Errors produced while packing, framing or serializing
#[derive(Debug, thiserror::Error)]
pub enum SmfError {
    /// Input buffer has the wrong number of samples
    #[error("invalid input size: {actual} bytes (expected {expected})")]
    InvalidInputSize { expected: usize, actual: usize },

    /// SysEx header field has the wrong number of bytes
    #[error("invalid {field} length: {actual} bytes (expected {expected})")]
    InvalidHeaderLength {
        field: &'static str,
        expected: &'static str,
        actual: usize,
    },

    /// SysEx header byte is not a 7-bit data byte
    #[error("{field} byte {index} is 0x{value:02X} (must be below 0x80)")]
    HeaderByteOutOfRange {
        field: &'static str,
        index: usize,
        value: u8,
    },

    /// SysEx payload byte is not a 7-bit data byte
    #[error("payload byte {index} is 0x{value:02X} (must be below 0x80)")]
    DataByteOutOfRange { index: usize, value: u8 },

    /// Tempo cannot be expressed as a 24-bit microseconds-per-quarter value
    #[error("invalid tempo: {0} BPM")]
    InvalidTempo(f64),

    /// Value does not fit in a 4-byte variable-length quantity
    #[error("value {0} exceeds variable-length quantity range (max 0x0FFFFFFF)")]
    VlqOutOfRange(u64),

    /// Container or track exceeds the sizes the chunk headers can express
    #[error("container too large: {0}")]
    ContainerTooLarge(String),

    /// Output sink failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, SmfError>;
