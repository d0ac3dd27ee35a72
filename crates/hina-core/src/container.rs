//! The hina container record: the framing that packs one file (bytes + name)
//! into a single byte stream for the pixel-domain codec.
//!
//! Wire layout, byte exact:
//!
//! ```text
//! FF FE | file payload .. | FE FF | file name .. | FE FF 98 0A 14 FD FE FF
//! ```
//!
//! The format carries no length fields, so the unpacker scans for the *last*
//! occurrence of the end marker and, within what precedes it, the *last*
//! occurrence of the name marker. A missing header is not an error: a carrier
//! may legitimately hold no record at all.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::result::Result;
use crate::HinaError;

/// Marks the start of a packed record.
pub const HEADER: [u8; 2] = [0xFF, 0xFE];

/// Separates the file payload from the file name.
pub const NAME_MARKER: [u8; 2] = [0xFE, 0xFF];

/// Terminates the record.
pub const END_MARKER: [u8; 8] = [0xFE, 0xFF, 0x98, 0x0A, 0x14, 0xFD, 0xFE, 0xFF];

/// One unpacked container record.
#[derive(Debug, PartialEq, Eq)]
pub struct Record {
    pub payload: Vec<u8>,
    pub file_name: String,
}

/// Packs raw file bytes and a file name into a container record.
pub fn pack(payload: &[u8], file_name: &str) -> Vec<u8> {
    let mut record =
        Vec::with_capacity(HEADER.len() + payload.len() + NAME_MARKER.len() + file_name.len() + END_MARKER.len());

    record.extend_from_slice(&HEADER);
    record.extend_from_slice(payload);
    record.extend_from_slice(&NAME_MARKER);
    record.extend_from_slice(file_name.as_bytes());
    record.extend_from_slice(&END_MARKER);
    record
}

/// Packs a file from disk, taking its base name as the record file name.
pub fn pack_file(path: &Path) -> Result<Vec<u8>> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(HinaError::InvalidFileName)?;

    let mut payload = Vec::new();
    File::open(path)
        .map_err(|source| HinaError::ReadError { source })?
        .read_to_end(&mut payload)
        .map_err(|source| HinaError::ReadError { source })?;

    Ok(pack(&payload, file_name))
}

/// Unpacks a container record from a decoded byte stream.
///
/// Returns `Ok(None)` when the stream does not start with the record header,
/// which is the normal "nothing hidden" outcome.
pub fn unpack(data: &[u8]) -> Result<Option<Record>> {
    let Some((payload, name)) = split_record(data)? else {
        return Ok(None);
    };

    Ok(Some(Record {
        payload: payload.to_vec(),
        file_name: String::from_utf8(name.to_vec())?,
    }))
}

/// Name-only query: decodes the record file name without materializing the payload.
pub fn unpack_file_name(data: &[u8]) -> Result<Option<String>> {
    let Some((_, name)) = split_record(data)? else {
        return Ok(None);
    };

    Ok(Some(String::from_utf8(name.to_vec())?))
}

fn split_record(data: &[u8]) -> Result<Option<(&[u8], &[u8])>> {
    if data.len() < HEADER.len() || data[..HEADER.len()] != HEADER {
        return Ok(None);
    }

    // scan behind the header only, an end marker overlapping the header's
    // trailing 0xFE byte does not terminate anything
    let body = &data[HEADER.len()..];
    let end = rfind(body, &END_MARKER).ok_or(HinaError::MissingEndMarker)?;
    let body = &body[..end];

    let name_beg = rfind(body, &NAME_MARKER).ok_or(HinaError::MissingNameMarker)?;

    Ok(Some((
        &body[..name_beg],
        &body[name_beg + NAME_MARKER.len()..],
    )))
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).rev().find(|&i| &haystack[i..i + needle.len()] == needle)
}

/// Length-prefixed record variant. Not wire compatible with the default
/// marker-scanned format and therefore opt-in only.
#[cfg(feature = "length-prefix")]
pub mod prefixed {
    use std::io::Cursor;

    use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

    use super::{Record, HEADER};
    use crate::result::Result;
    use crate::HinaError;

    /// Packs a record as `FF FE | u32 payload len | payload | u32 name len | name`.
    pub fn pack(payload: &[u8], file_name: &str) -> Vec<u8> {
        let mut record = Vec::with_capacity(HEADER.len() + 8 + payload.len() + file_name.len());
        record.extend_from_slice(&HEADER);
        record
            .write_u32::<BigEndian>(payload.len() as u32)
            .expect("writing to a Vec cannot fail");
        record.extend_from_slice(payload);
        record
            .write_u32::<BigEndian>(file_name.len() as u32)
            .expect("writing to a Vec cannot fail");
        record.extend_from_slice(file_name.as_bytes());
        record
    }

    /// Unpacks a length-prefixed record. `Ok(None)` on a missing header.
    pub fn unpack(data: &[u8]) -> Result<Option<Record>> {
        if data.len() < HEADER.len() || data[..HEADER.len()] != HEADER {
            return Ok(None);
        }

        let mut cursor = Cursor::new(&data[HEADER.len()..]);
        let payload_len = cursor.read_u32::<BigEndian>()? as usize;
        let mut payload = vec![0u8; payload_len];
        std::io::Read::read_exact(&mut cursor, &mut payload)?;

        let name_len = cursor.read_u32::<BigEndian>()? as usize;
        let mut name = vec![0u8; name_len];
        std::io::Read::read_exact(&mut cursor, &mut name)?;

        Ok(Some(Record {
            payload,
            file_name: String::from_utf8(name).map_err(HinaError::InvalidTextData)?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_pack_the_documented_wire_layout() {
        let record = pack(b"data", "a.txt");

        assert_eq!(&record[..2], &[0xFF, 0xFE]);
        assert_eq!(&record[2..6], b"data");
        assert_eq!(&record[6..8], &[0xFE, 0xFF]);
        assert_eq!(&record[8..13], b"a.txt");
        assert_eq!(
            &record[13..],
            &[0xFE, 0xFF, 0x98, 0x0A, 0x14, 0xFD, 0xFE, 0xFF]
        );
    }

    #[test]
    fn should_roundtrip_payload_and_name() {
        let record = pack(b"hello world", "note.bin");
        let unpacked = unpack(&record).unwrap().unwrap();

        assert_eq!(unpacked.payload, b"hello world");
        assert_eq!(unpacked.file_name, "note.bin");
    }

    #[test]
    fn should_treat_a_missing_header_as_nothing_hidden() {
        assert_eq!(unpack(b"no record here at all").unwrap(), None);
        assert_eq!(unpack(&[]).unwrap(), None);
        assert_eq!(unpack_file_name(&[0x00, 0x01, 0x02]).unwrap(), None);
    }

    #[test]
    fn should_fail_with_missing_end_marker() {
        let mut record = pack(b"data", "a.txt");
        record.truncate(record.len() - END_MARKER.len());

        match unpack(&record) {
            Err(HinaError::MissingEndMarker) => (),
            other => panic!("expected MissingEndMarker, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_with_missing_name_marker() {
        let mut record = Vec::new();
        record.extend_from_slice(&HEADER);
        record.extend_from_slice(b"payload without a name");
        record.extend_from_slice(&END_MARKER);

        match unpack(&record) {
            Err(HinaError::MissingNameMarker) => (),
            other => panic!("expected MissingNameMarker, got {other:?}"),
        }
    }

    #[test]
    fn should_not_split_on_an_end_marker_overlapping_the_header() {
        // the header's trailing 0xFE doubles as the marker's first byte here;
        // the only end marker occurrence starts inside the header
        let mut data = vec![0xFF];
        data.extend_from_slice(&END_MARKER);
        data.extend_from_slice(&[0u8; 16]);
        assert_eq!(&data[..2], &HEADER);

        match unpack(&data) {
            Err(HinaError::MissingEndMarker) => (),
            other => panic!("expected MissingEndMarker, got {other:?}"),
        }
        match unpack_file_name(&data) {
            Err(HinaError::MissingEndMarker) => (),
            other => panic!("expected MissingEndMarker, got {other:?}"),
        }
    }

    #[test]
    fn should_return_typed_results_for_arbitrary_bytes_behind_a_header() {
        // short pseudo-random streams, any outcome but a panic is fine
        let mut state = 0x2545_F491_4F6C_DD1Du64;
        for len in 0..64 {
            let mut data = vec![0xFF, 0xFE];
            for _ in 0..len {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                data.push((state >> 56) as u8);
            }
            let _ = unpack(&data);
            let _ = unpack_file_name(&data);
        }
    }

    #[test]
    fn should_use_the_last_name_marker_when_the_payload_contains_one() {
        // payload bytes that collide with the name marker must not split the record early
        let payload = [b'x', 0xFE, 0xFF, b'y'];
        let record = pack(&payload, "a.txt");
        let unpacked = unpack(&record).unwrap().unwrap();

        assert_eq!(unpacked.payload, payload);
        assert_eq!(unpacked.file_name, "a.txt");
    }

    #[test]
    fn should_answer_a_name_only_query() {
        let record = pack(&[0u8; 1024], "big.dat");
        assert_eq!(unpack_file_name(&record).unwrap().unwrap(), "big.dat");
    }

    #[test]
    fn should_pack_an_empty_file() {
        let record = pack(b"", "empty");
        let unpacked = unpack(&record).unwrap().unwrap();

        assert!(unpacked.payload.is_empty());
        assert_eq!(unpacked.file_name, "empty");
    }

    #[cfg(feature = "length-prefix")]
    #[test]
    fn should_roundtrip_the_length_prefixed_variant() {
        // a payload that embeds the end marker is fine with explicit lengths
        let payload = END_MARKER.to_vec();
        let record = prefixed::pack(&payload, "tricky.bin");
        let unpacked = prefixed::unpack(&record).unwrap().unwrap();

        assert_eq!(unpacked.payload, payload);
        assert_eq!(unpacked.file_name, "tricky.bin");
    }
}
