//! Wavetable packing
//!
//! The raw capture holds 16 groups of 128 samples, but only the even groups
//! carry usable waveform data. Packing keeps groups 0, 2, ..., 14 and closes
//! each cycle by repeating its first sample so the device can interpolate
//! across the wrap point.

use crate::error::{Result, SmfError};
use crate::{PACKED_CYCLE_LEN, PACKED_WAVETABLE_SIZE, WAVETABLE_CYCLE_LEN, WAVETABLE_SIZE};

/// Eight closed 129-sample cycles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedWavetable {
    data: Vec<u8>,
}

impl PackedWavetable {
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the closed cycles
    pub fn cycles(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(PACKED_CYCLE_LEN)
    }
}

/// Pack a raw 2048-sample capture into 8 closed cycles
///
/// # Errors
/// `InvalidInputSize` unless `samples.len() == 2048`.
pub fn pack_wavetable(samples: &[u8]) -> Result<PackedWavetable> {
    if samples.len() != WAVETABLE_SIZE {
        return Err(SmfError::InvalidInputSize {
            expected: WAVETABLE_SIZE,
            actual: samples.len(),
        });
    }

    let mut data = Vec::with_capacity(PACKED_WAVETABLE_SIZE);
    for cycle in samples.chunks_exact(WAVETABLE_CYCLE_LEN).step_by(2) {
        data.extend_from_slice(cycle);
        data.push(cycle[0]);
    }

    tracing::debug!(
        "Packed wavetable: {} -> {} bytes",
        samples.len(),
        data.len()
    );

    Ok(PackedWavetable { data })
}
