// Synthetic Ogg Vorbis streams for tests.
//
// Only the headers are real; audio packets are filler since nothing here
// decodes them.

use ogg::writing::{PacketWriteEndInfo, PacketWriter};

pub const SERIAL: u32 = 0x0a55_f00d;

/// Identification header: blocksizes 256/2048, framing bit set
pub fn ident_header(channels: u8, sample_rate: u32) -> Vec<u8> {
    let mut header = Vec::with_capacity(30);
    header.push(0x01);
    header.extend_from_slice(b"vorbis");
    header.extend_from_slice(&0u32.to_le_bytes());
    header.push(channels);
    header.extend_from_slice(&sample_rate.to_le_bytes());
    header.extend_from_slice(&0i32.to_le_bytes());
    header.extend_from_slice(&128_000i32.to_le_bytes());
    header.extend_from_slice(&0i32.to_le_bytes());
    header.push(0xB8);
    header.push(0x01);
    header
}

pub fn comment_header(vendor: &str, comments: &[&str]) -> Vec<u8> {
    let mut header = Vec::new();
    header.push(0x03);
    header.extend_from_slice(b"vorbis");
    header.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    header.extend_from_slice(vendor.as_bytes());
    header.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for comment in comments {
        header.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        header.extend_from_slice(comment.as_bytes());
    }
    header.push(0x01);
    header
}

pub fn setup_header() -> Vec<u8> {
    let mut header = Vec::new();
    header.push(0x05);
    header.extend_from_slice(b"vorbis");
    header.extend_from_slice(&[0x42, 0x43, 0x56, 0x00, 0x01]);
    header
}

/// Build a full stream from the three header packets, followed by `pages`
/// audio pages whose granule positions climb evenly to `total_frames`.
pub fn ogg_stream(ident: Vec<u8>, comment: Vec<u8>, setup: Vec<u8>, total_frames: u64, pages: u64) -> Vec<u8> {
    ogg_link(SERIAL, ident, comment, setup, total_frames, pages)
}

/// Like [`ogg_stream`] with a chosen serial. Concatenating the output of
/// several calls gives a chained file.
pub fn ogg_link(
    serial: u32,
    ident: Vec<u8>,
    comment: Vec<u8>,
    setup: Vec<u8>,
    total_frames: u64,
    pages: u64,
) -> Vec<u8> {
    let mut output = Vec::new();
    {
        let mut writer = PacketWriter::new(&mut output);
        writer
            .write_packet(ident, serial, PacketWriteEndInfo::EndPage, 0)
            .unwrap();
        writer
            .write_packet(comment, serial, PacketWriteEndInfo::NormalPacket, 0)
            .unwrap();
        let setup_end = if pages == 0 {
            PacketWriteEndInfo::EndStream
        } else {
            PacketWriteEndInfo::EndPage
        };
        writer.write_packet(setup, serial, setup_end, 0).unwrap();

        for page in 1..=pages {
            let end = if page == pages {
                PacketWriteEndInfo::EndStream
            } else {
                PacketWriteEndInfo::EndPage
            };
            // stepping by a fraction keeps huge granules from overflowing
            let granule = total_frames / pages * page + if page == pages { total_frames % pages } else { 0 };
            writer.write_packet(vec![0u8; 64], serial, end, granule).unwrap();
        }
    }
    output
}

pub fn vorbis_stream(channels: u8, sample_rate: u32, total_frames: u64) -> Vec<u8> {
    vorbis_link(SERIAL, channels, sample_rate, total_frames)
}

pub fn vorbis_link(serial: u32, channels: u8, sample_rate: u32, total_frames: u64) -> Vec<u8> {
    ogg_link(
        serial,
        ident_header(channels, sample_rate),
        comment_header("oggwave test encoder", &["TITLE=Fixture"]),
        setup_header(),
        total_frames,
        10,
    )
}

/// 2 channels, 44100 Hz, 3.0 seconds
pub fn stereo_three_seconds() -> Vec<u8> {
    vorbis_stream(2, 44_100, 132_300)
}
