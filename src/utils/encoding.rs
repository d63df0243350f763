// Encoding utilities

use encoding_rs::UTF_8;

/// Decode Vorbis comment text.
///
/// Comments are specified as UTF-8, but real-world taggers sometimes write
/// other encodings. Invalid sequences become U+FFFD instead of failing the
/// whole header.
pub fn decode_utf8_lossy(data: &[u8]) -> String {
    UTF_8.decode_without_bom_handling(data).0.into_owned()
}
