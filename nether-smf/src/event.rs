//! Timed events and tracks

use crate::MICROS_PER_MINUTE;
use crate::error::{Result, SmfError};
use crate::sysex::SysExMessage;

/// Largest tempo value the 3-byte tempo meta-event can carry
const MAX_TEMPO_MICROS: u32 = 0xFF_FFFF;

/// Event body
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    /// Free-form text meta-event
    Text(String),
    /// Tempo in beats per minute, written as microseconds per quarter note
    Tempo { bpm: f64 },
    /// Complete framed SysEx message, written verbatim
    SysEx(SysExMessage),
}

impl EventPayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn tempo(bpm: f64) -> Self {
        Self::Tempo { bpm }
    }

    pub fn sysex(message: SysExMessage) -> Self {
        Self::SysEx(message)
    }
}

/// Convert BPM to microseconds per quarter note
///
/// Truncates toward zero. Fails unless the result fits in 24 bits and is non-zero.
pub(crate) fn tempo_micros(bpm: f64) -> Result<u32> {
    if !bpm.is_finite() || bpm <= 0.0 {
        return Err(SmfError::InvalidTempo(bpm));
    }
    let micros = (MICROS_PER_MINUTE / bpm).trunc();
    if !(1.0..=MAX_TEMPO_MICROS as f64).contains(&micros) {
        return Err(SmfError::InvalidTempo(bpm));
    }
    Ok(micros as u32)
}

/// Event with a delta time relative to the previous event in its track
#[derive(Debug, Clone, PartialEq)]
pub struct TimedEvent {
    pub delta_ticks: u32,
    pub payload: EventPayload,
}

/// Ordered sequence of timed events
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    events: Vec<TimedEvent>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event `delta_ticks` after the previous one
    pub fn add_event(&mut self, delta_ticks: u32, payload: EventPayload) -> &mut Self {
        self.events.push(TimedEvent {
            delta_ticks,
            payload,
        });
        self
    }

    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
