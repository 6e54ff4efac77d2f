//! SysEx message framing
//!
//! ```text
//! F0 | manufacturer id (1 or 3) | device id (2) | command (2) | payload... | F7
//! ```
//!
//! Every byte between the markers must be a 7-bit data byte.

use crate::error::{Result, SmfError};
use crate::{SYSEX_END, SYSEX_START};

/// Mutable Instruments manufacturer id
pub const DEFAULT_MANUFACTURER_ID: [u8; 3] = [0x00, 0x21, 0x02];

/// Shruthi-1 device id
pub const DEFAULT_DEVICE_ID: [u8; 2] = [0x00, 0x02];

/// User wavetable transfer command
pub const DEFAULT_UPDATE_COMMAND: [u8; 2] = [0x03, 0x00];

const MANUFACTURER_FIELD: &str = "manufacturer id";
const DEVICE_FIELD: &str = "device id";
const COMMAND_FIELD: &str = "update command";

/// Addressing bytes placed after the SysEx start marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysExHeader {
    manufacturer_id: Vec<u8>,
    device_id: Vec<u8>,
    command: Vec<u8>,
}

impl SysExHeader {
    /// Create a validated header
    ///
    /// The manufacturer id is either one non-zero byte or three bytes
    /// starting with 0x00. Device id and command are two bytes each.
    pub fn new(manufacturer_id: &[u8], device_id: &[u8], command: &[u8]) -> Result<Self> {
        let manufacturer_ok = match manufacturer_id {
            [id] => *id != 0x00,
            [0x00, _, _] => true,
            _ => false,
        };
        if !manufacturer_ok {
            return Err(SmfError::InvalidHeaderLength {
                field: MANUFACTURER_FIELD,
                expected: "1 non-zero byte, or 3 bytes starting with 0x00",
                actual: manufacturer_id.len(),
            });
        }
        check_two_bytes(DEVICE_FIELD, device_id)?;
        check_two_bytes(COMMAND_FIELD, command)?;

        check_data_bytes(MANUFACTURER_FIELD, manufacturer_id)?;
        check_data_bytes(DEVICE_FIELD, device_id)?;
        check_data_bytes(COMMAND_FIELD, command)?;

        Ok(Self {
            manufacturer_id: manufacturer_id.to_vec(),
            device_id: device_id.to_vec(),
            command: command.to_vec(),
        })
    }

    pub fn manufacturer_id(&self) -> &[u8] {
        &self.manufacturer_id
    }

    pub fn device_id(&self) -> &[u8] {
        &self.device_id
    }

    pub fn command(&self) -> &[u8] {
        &self.command
    }

    /// Number of addressing bytes (excluding the start marker)
    pub fn len(&self) -> usize {
        self.manufacturer_id.len() + self.device_id.len() + self.command.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SysExHeader {
    fn default() -> Self {
        Self {
            manufacturer_id: DEFAULT_MANUFACTURER_ID.to_vec(),
            device_id: DEFAULT_DEVICE_ID.to_vec(),
            command: DEFAULT_UPDATE_COMMAND.to_vec(),
        }
    }
}

fn check_two_bytes(field: &'static str, bytes: &[u8]) -> Result<()> {
    if bytes.len() != 2 {
        return Err(SmfError::InvalidHeaderLength {
            field,
            expected: "2 bytes",
            actual: bytes.len(),
        });
    }
    Ok(())
}

fn check_data_bytes(field: &'static str, bytes: &[u8]) -> Result<()> {
    match bytes.iter().position(|&b| b >= 0x80) {
        Some(index) => Err(SmfError::HeaderByteOutOfRange {
            field,
            index,
            value: bytes[index],
        }),
        None => Ok(()),
    }
}

/// A complete, framed SysEx message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysExMessage {
    bytes: Vec<u8>,
    header_len: usize,
}

impl SysExMessage {
    /// Full message including the F0/F7 markers
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Payload bytes between the header and the end marker
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1 + self.header_len..self.bytes.len() - 1]
    }
}

/// Frame `payload` with the start marker, header bytes and end marker
///
/// # Errors
/// `DataByteOutOfRange` if any payload byte has its high bit set.
pub fn build_message(header: &SysExHeader, payload: &[u8]) -> Result<SysExMessage> {
    if let Some(index) = payload.iter().position(|&b| b >= 0x80) {
        return Err(SmfError::DataByteOutOfRange {
            index,
            value: payload[index],
        });
    }

    let mut bytes = Vec::with_capacity(header.len() + payload.len() + 2);
    bytes.push(SYSEX_START);
    bytes.extend_from_slice(header.manufacturer_id());
    bytes.extend_from_slice(header.device_id());
    bytes.extend_from_slice(header.command());
    bytes.extend_from_slice(payload);
    bytes.push(SYSEX_END);

    tracing::debug!("Framed SysEx message: {} bytes", bytes.len());

    Ok(SysExMessage {
        bytes,
        header_len: header.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with(device_id: &[u8], command: &[u8]) -> Result<SysExHeader> {
        SysExHeader::new(&DEFAULT_MANUFACTURER_ID, device_id, command)
    }

    #[test]
    fn test_default_header() {
        let header = SysExHeader::default();
        assert_eq!(header.manufacturer_id(), &[0x00, 0x21, 0x02]);
        assert_eq!(header.device_id(), &[0x00, 0x02]);
        assert_eq!(header.command(), &[0x03, 0x00]);
        assert_eq!(header.len(), 7);

        let rebuilt = header_with(&DEFAULT_DEVICE_ID, &DEFAULT_UPDATE_COMMAND).unwrap();
        assert_eq!(rebuilt, header);
    }

    #[test]
    fn test_single_byte_manufacturer() {
        let header = SysExHeader::new(&[0x7D], &[0x00, 0x01], &[0x01, 0x02]).unwrap();
        assert_eq!(header.len(), 5);
    }

    #[test]
    fn test_rejects_bad_manufacturer() {
        let ids: [&[u8]; 5] = [
            &[],
            &[0x00],
            &[0x00, 0x21],
            &[0x01, 0x21, 0x02],
            &[0, 0, 0, 0],
        ];
        for id in ids {
            let result = SysExHeader::new(id, &DEFAULT_DEVICE_ID, &DEFAULT_UPDATE_COMMAND);
            match result {
                Err(SmfError::InvalidHeaderLength { field, actual, .. }) => {
                    assert_eq!(field, "manufacturer id");
                    assert_eq!(actual, id.len());
                }
                other => panic!("Unexpected result for {:02X?}: {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_rejects_bad_lengths() {
        match header_with(&[0x00], &DEFAULT_UPDATE_COMMAND) {
            Err(SmfError::InvalidHeaderLength { field, actual, .. }) => {
                assert_eq!(field, "device id");
                assert_eq!(actual, 1);
            }
            other => panic!("Unexpected result: {:?}", other),
        }

        match header_with(&DEFAULT_DEVICE_ID, &[3, 0, 0]) {
            Err(SmfError::InvalidHeaderLength { field, actual, .. }) => {
                assert_eq!(field, "update command");
                assert_eq!(actual, 3);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_high_bytes() {
        let result = SysExHeader::new(&[0x00, 0xA1, 0x02], &DEFAULT_DEVICE_ID, &[0x03, 0x00]);
        match result {
            Err(SmfError::HeaderByteOutOfRange {
                field,
                index,
                value,
            }) => {
                assert_eq!(field, "manufacturer id");
                assert_eq!(index, 1);
                assert_eq!(value, 0xA1);
            }
            other => panic!("Unexpected result: {:?}", other),
        }

        match header_with(&DEFAULT_DEVICE_ID, &[0x03, 0xF7]) {
            Err(SmfError::HeaderByteOutOfRange { field, index, .. }) => {
                assert_eq!(field, "update command");
                assert_eq!(index, 1);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_message_framing() {
        let header = SysExHeader::default();
        let message = build_message(&header, &[0x01, 0x02, 0x0F]).unwrap();
        let bytes = message.as_bytes();

        assert_eq!(
            &bytes[..8],
            &[0xF0, 0x00, 0x21, 0x02, 0x00, 0x02, 0x03, 0x00]
        );
        assert_eq!(&bytes[8..], &[0x01, 0x02, 0x0F, 0xF7]);
        assert_eq!(message.payload(), &[0x01, 0x02, 0x0F]);
    }

    #[test]
    fn test_interior_bytes_are_data_bytes() {
        let payload: Vec<u8> = (0..0x80).collect();
        let message = build_message(&SysExHeader::default(), &payload).unwrap();
        let bytes = message.as_bytes();

        assert_eq!(bytes.first(), Some(&SYSEX_START));
        assert_eq!(bytes.last(), Some(&SYSEX_END));
        assert!(bytes[1..bytes.len() - 1].iter().all(|&b| b < 0x80));
    }

    #[test]
    fn test_empty_payload() {
        let message = build_message(&SysExHeader::default(), &[]).unwrap();
        assert_eq!(message.len(), 9);
        assert!(message.payload().is_empty());
    }

    #[test]
    fn test_rejects_high_payload_byte() {
        let result = build_message(&SysExHeader::default(), &[0x00, 0x7F, 0x80]);
        match result {
            Err(SmfError::DataByteOutOfRange { index, value }) => {
                assert_eq!(index, 2);
                assert_eq!(value, 0x80);
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }
}
