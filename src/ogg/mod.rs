// OGG Vorbis header support
//
// OGG File Structure:
// - OGG Page Header (27 bytes)
//   - Capture Pattern: "OggS" (4 bytes)
//   - Version: 0 (1 byte)
//   - Header Type: 1=continuation, 2=bos, 4=eos (1 byte)
//   - Granule Position (8 bytes)
//   - Bitstream Serial Number (4 bytes)
//   - Page Sequence Number (4 bytes)
//   - CRC Checksum (4 bytes)
//   - Number of Page Segments (1 byte)
//   - Segment Table (variable)
//
// Vorbis Structure:
// 1. Identification Header (packet type 1)
// 2. Comment Header (packet type 3) - Contains Vorbis Comment
// 3. Setup Header (packet type 5)
// 4. Audio packets; each page's granule position counts PCM frames so far
//
// Page framing and CRCs are handled by the `ogg` crate, the identification
// header by `lewton`.

pub mod comment;
pub mod vorbis;

#[cfg(test)]
pub(crate) mod fixtures;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use comment::VorbisComment;
pub use vorbis::{read_compressed_info, read_vorbis_info, VorbisAudioInfo};

// OGG signature
pub const OGG_SIGNATURE: &[u8; 4] = b"OggS";

// Smallest possible first page: 27 byte header, 1 segment, 30 byte ident packet
pub const MIN_HEADER_SIZE: usize = 27 + 1 + 30;

/// Check whether a buffer starts with the Ogg capture pattern
pub fn is_ogg(data: &[u8]) -> bool {
    data.starts_with(OGG_SIGNATURE)
}

/// Detect if file is OGG format
pub fn is_ogg_file<P: AsRef<Path>>(path: P) -> bool {
    if let Ok(mut file) = File::open(path) {
        let mut signature = [0u8; 4];
        if file.read_exact(&mut signature).is_ok() {
            return is_ogg(&signature);
        }
    }
    false
}
