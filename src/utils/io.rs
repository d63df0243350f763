// I/O utilities for loading audio files and reading header fields

use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a whole file into memory.
///
/// Any failure (missing file, permission denied, ...) means there is no
/// buffer to work with; callers treat it as an overall load failure.
pub fn load_file_to_vec<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<u8>> {
    fs::read(path)
}

/// Read little-endian 32-bit integer
pub fn read_le_u32<R: Read>(reader: &mut R) -> std::io::Result<u32> {
    let mut buffer = [0u8; 4];
    reader.read_exact(&mut buffer)?;
    Ok(u32::from_le_bytes(buffer))
}

/// Read a length-prefixed (little-endian u32) byte string
pub fn read_le_prefixed<R: Read>(reader: &mut R) -> std::io::Result<Vec<u8>> {
    let length = read_le_u32(reader)? as usize;
    let mut bytes = Vec::new();
    // take() keeps a bogus length from allocating past the end of the packet
    reader.take(length as u64).read_to_end(&mut bytes)?;
    if bytes.len() != length {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "length prefix runs past end of data",
        ));
    }
    Ok(bytes)
}
