// Vorbis comment header
//
// Layout after the 7 byte packet preamble (0x03 "vorbis"):
// - vendor length (u32 LE) + vendor string
// - comment count (u32 LE)
// - per comment: length (u32 LE) + "FIELD=value"
// - framing bit (tolerated if missing)

use std::io::Read;

use crate::utils::encoding::decode_utf8_lossy;
use crate::utils::io::{read_le_prefixed, read_le_u32};

/// Packet type byte of the comment header
pub const COMMENT_PACKET_TYPE: u8 = 0x03;

/// Vorbis comment structure
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct VorbisComment {
    pub vendor_string: String,
    pub comments: Vec<(String, String)>,
}

impl VorbisComment {
    /// Parse a full comment header packet, preamble included
    pub fn from_packet(packet: &[u8]) -> std::io::Result<Self> {
        if packet.len() < 7
            || packet[0] != COMMENT_PACKET_TYPE
            || &packet[1..7] != super::vorbis::VORBIS_MAGIC
        {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a Vorbis comment header",
            ));
        }
        Self::read(&mut &packet[7..])
    }

    /// Read Vorbis comment body from reader
    pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        let vendor_string = decode_utf8_lossy(&read_le_prefixed(reader)?);

        let comment_count = read_le_u32(reader)? as usize;

        // Each comment needs at least its 4 byte length, so cap the
        // preallocation instead of trusting the count.
        let mut comments = Vec::with_capacity(comment_count.min(64));
        for _ in 0..comment_count {
            let comment_string = decode_utf8_lossy(&read_le_prefixed(reader)?);

            // Parse comment (format: FIELD=value); entries without '=' are skipped
            if let Some((field, value)) = comment_string.split_once('=') {
                comments.push((field.to_string(), value.to_string()));
            }
        }

        Ok(VorbisComment {
            vendor_string,
            comments,
        })
    }

    /// Get a comment value by field name
    pub fn get(&self, field: &str) -> Option<&String> {
        self.comments
            .iter()
            .find(|(f, _)| f.eq_ignore_ascii_case(field))
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ogg::fixtures;

    #[test]
    fn parses_vendor_and_comments() {
        let packet = fixtures::comment_header("Xiph.Org libVorbis", &["TITLE=Rain", "artist=Someone"]);
        let comment = VorbisComment::from_packet(&packet).unwrap();

        assert_eq!(comment.vendor_string, "Xiph.Org libVorbis");
        assert_eq!(comment.get("title").map(String::as_str), Some("Rain"));
        assert_eq!(comment.get("ARTIST").map(String::as_str), Some("Someone"));
        assert_eq!(comment.get("ALBUM"), None);
    }

    #[test]
    fn skips_entries_without_separator() {
        let packet = fixtures::comment_header("v", &["garbage", "GENRE=Ambient"]);
        let comment = VorbisComment::from_packet(&packet).unwrap();
        assert_eq!(comment.comments, vec![("GENRE".to_string(), "Ambient".to_string())]);
    }

    #[test]
    fn rejects_wrong_packet_type() {
        let mut packet = fixtures::comment_header("v", &[]);
        packet[0] = 0x01;
        assert!(VorbisComment::from_packet(&packet).is_err());
    }

    #[test]
    fn rejects_truncated_body() {
        let packet = fixtures::comment_header("a long vendor string", &["TITLE=x"]);
        assert!(VorbisComment::from_packet(&packet[..15]).is_err());
    }
}
