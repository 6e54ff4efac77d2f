//! Container serialization
//!
//! Chunked mode writes the header chunk followed by one track chunk per
//! track. Raw mode writes a framed SysEx message and nothing else.

use std::io::Write;

use crate::container::Container;
use crate::error::{Result, SmfError};
use crate::event::{EventPayload, Track, tempo_micros};
use crate::sysex::SysExMessage;
use crate::vlq::{write_vlq, write_vlq_len};
use crate::{
    HEADER_CHUNK_LEN, HEADER_CHUNK_TAG, META_END_OF_TRACK, META_PREFIX, META_TEMPO, META_TEXT,
    TRACK_CHUNK_TAG,
};

/// Write a complete multi-track container
pub fn write_container<W: Write>(container: &Container, w: &mut W) -> Result<()> {
    let count = container.track_count();
    if count > u16::MAX as usize {
        let detail = format!("{} tracks (max {})", count, u16::MAX);
        return Err(SmfError::ContainerTooLarge(detail));
    }
    let track_count = count as u16;

    // Header chunk
    w.write_all(HEADER_CHUNK_TAG)?;
    w.write_all(&HEADER_CHUNK_LEN.to_be_bytes())?;
    w.write_all(&container.format().to_be_bytes())?;
    w.write_all(&track_count.to_be_bytes())?;
    w.write_all(&container.ticks_per_quarter.to_be_bytes())?;

    // Track chunks
    for (index, track) in container.tracks().iter().enumerate() {
        let body = encode_track(track, container.end_of_track)?;
        if body.len() > u32::MAX as usize {
            let detail = format!("track {} is {} bytes", index, body.len());
            return Err(SmfError::ContainerTooLarge(detail));
        }
        let body_len = body.len() as u32;

        tracing::debug!(
            "Track {}: {} events, {} bytes",
            index,
            track.len(),
            body_len
        );

        w.write_all(TRACK_CHUNK_TAG)?;
        w.write_all(&body_len.to_be_bytes())?;
        w.write_all(&body)?;
    }

    Ok(())
}

/// Write only the framed SysEx bytes
pub fn write_raw<W: Write>(message: &SysExMessage, w: &mut W) -> Result<()> {
    w.write_all(message.as_bytes())?;
    Ok(())
}

/// Encode the event body of one track chunk
pub fn encode_track(track: &Track, end_of_track: bool) -> Result<Vec<u8>> {
    let mut body = Vec::new();

    for event in track.events() {
        write_vlq(&mut body, event.delta_ticks)?;

        match &event.payload {
            EventPayload::Text(text) => {
                body.push(META_PREFIX);
                body.push(META_TEXT);
                write_vlq_len(&mut body, text.len())?;
                body.extend_from_slice(text.as_bytes());
            }
            EventPayload::Tempo { bpm } => {
                let micros = tempo_micros(*bpm)?;
                body.push(META_PREFIX);
                body.push(META_TEMPO);
                body.push(3);
                body.extend_from_slice(&micros.to_be_bytes()[1..]);
            }
            EventPayload::SysEx(message) => {
                body.extend_from_slice(message.as_bytes());
            }
        }
    }

    if end_of_track {
        body.extend_from_slice(&[0x00, META_PREFIX, META_END_OF_TRACK, 0x00]);
    }

    Ok(body)
}
