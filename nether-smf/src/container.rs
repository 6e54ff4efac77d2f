//! In-memory container model
//!
//! A container is assembled track by track, then serialized once by
//! [`crate::write_container`]. Nothing here touches I/O.

use crate::error::Result;
use crate::event::Track;
use crate::{DEFAULT_TICKS_PER_QUARTER, FORMAT_MULTI_TRACK};

/// Multi-track container: header fields plus ordered tracks
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Ticks per quarter note written to the header chunk
    pub ticks_per_quarter: u16,
    /// Append an end-of-track meta-event to every track.
    ///
    /// Off by default, so tracks end right after their last event.
    pub end_of_track: bool,
    tracks: Vec<Track>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            ticks_per_quarter: DEFAULT_TICKS_PER_QUARTER,
            end_of_track: false,
            tracks: Vec::new(),
        }
    }
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_end_of_track(mut self, end_of_track: bool) -> Self {
        self.end_of_track = end_of_track;
        self
    }

    /// Append an empty track and return it for filling
    pub fn add_track(&mut self) -> &mut Track {
        self.tracks.push(Track::new());
        let last = self.tracks.len() - 1;
        &mut self.tracks[last]
    }

    /// Append an already built track
    pub fn push_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Header format field (always multi-track)
    pub fn format(&self) -> u16 {
        FORMAT_MULTI_TRACK
    }

    /// Serialize to a byte vector
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        crate::writer::write_container(self, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventPayload;

    #[test]
    fn test_defaults() {
        let container = Container::new();
        assert_eq!(container.ticks_per_quarter, 96);
        assert_eq!(container.format(), 1);
        assert!(!container.end_of_track);
        assert_eq!(container.track_count(), 0);
    }

    #[test]
    fn test_tracks_keep_insertion_order() {
        let mut container = Container::new();
        let first = container.add_track();
        first.add_event(0, EventPayload::text("first"));
        let mut second = Track::new();
        second.add_event(0, EventPayload::text("second"));
        container.push_track(second);
        let third = container.add_track();
        third.add_event(0, EventPayload::tempo(120.0));

        let tracks = container.tracks();
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].events()[0].payload, EventPayload::text("first"));
        assert_eq!(tracks[1].events()[0].payload, EventPayload::text("second"));
        assert_eq!(tracks[2].events()[0].payload, EventPayload::tempo(120.0));
    }

    #[test]
    fn test_builders() {
        let container = Container::new().with_end_of_track(true);
        assert!(container.end_of_track);
        assert_eq!(container.ticks_per_quarter, 96);
    }
}
