// Vorbis header metadata extraction
//
// Reads the three Vorbis header packets from the front of an Ogg buffer and
// walks the remaining pages to find each link's final granule position,
// which is that link's length in PCM frames. Chained files (one Vorbis
// stream after another) report the sum of their links; channel count and
// sample rate come from the first link.

use std::io::Cursor;

use lewton::header::read_header_ident;
use ogg::reading::PacketReader;
use ogg::Packet;
use serde::Serialize;
use tracing::debug;

use super::comment::VorbisComment;
use super::{is_ogg, MIN_HEADER_SIZE};
use crate::error::HeaderError;
use crate::quality::SoundQualityInfo;

/// Codec identifier following the packet type byte of every header
pub const VORBIS_MAGIC: &[u8; 6] = b"vorbis";

/// Packet type byte of the setup header
pub const SETUP_PACKET_TYPE: u8 = 0x05;

// Granule value of a page on which no packet ends
const NO_GRANULE: u64 = u64::MAX;

/// Everything the headers say about a Vorbis stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VorbisAudioInfo {
    pub quality: SoundQualityInfo,
    /// PCM frames across all chained links
    pub total_frames: u64,
    pub stream_serial: u32,
    /// Encoder's nominal bitrate in bits per second, 0 when unset
    pub bitrate_nominal: i32,
    pub comment: VorbisComment,
}

/// Read channel count, sample rate, duration and decoded size from the
/// front of an Ogg Vorbis buffer.
///
/// Either all four values are returned or none are.
pub fn read_compressed_info(data: &[u8]) -> Result<SoundQualityInfo, HeaderError> {
    read_vorbis_info(data).map(|info| info.quality)
}

/// Like [`read_compressed_info`], also returning the comment header and
/// stream details.
pub fn read_vorbis_info(data: &[u8]) -> Result<VorbisAudioInfo, HeaderError> {
    let result = parse(data);
    match &result {
        Ok(info) => debug!(
            channels = info.quality.num_channels,
            sample_rate = info.quality.sample_rate,
            duration = info.quality.duration,
            sample_data_size = info.quality.sample_data_size,
            "read Vorbis header"
        ),
        Err(e) => debug!(len = data.len(), "{}", e),
    }
    result
}

fn parse(data: &[u8]) -> Result<VorbisAudioInfo, HeaderError> {
    if data.len() < MIN_HEADER_SIZE {
        return Err(HeaderError::new(format!(
            "buffer of {} bytes is shorter than a Vorbis header",
            data.len()
        )));
    }
    if !is_ogg(data) {
        return Err(HeaderError::new("missing Ogg capture pattern"));
    }

    let mut reader = PacketReader::new(Cursor::new(data));

    let ident_packet = next_header_packet(&mut reader, None, "identification")?;
    let serial = ident_packet.stream_serial();
    let ident = read_header_ident(&ident_packet.data)
        .map_err(|e| HeaderError::new(format!("bad identification header: {:?}", e)))?;
    if ident.audio_channels == 0 || ident.audio_sample_rate == 0 {
        return Err(HeaderError::new("identification header has no channels or no sample rate"));
    }

    let comment_packet = next_header_packet(&mut reader, Some(serial), "comment")?;
    let comment = VorbisComment::from_packet(&comment_packet.data)
        .map_err(|e| HeaderError::new(format!("bad comment header: {}", e)))?;

    let setup_packet = next_header_packet(&mut reader, Some(serial), "setup")?;
    if !is_setup_header(&setup_packet.data) {
        return Err(HeaderError::new("third packet is not a setup header"));
    }

    let length = chained_length(
        &mut reader,
        Link::new(serial, ident.audio_sample_rate, setup_packet.last_in_stream()),
    )?;

    let mut quality = SoundQualityInfo::from_frames(
        u32::from(ident.audio_channels),
        ident.audio_sample_rate,
        length.frames,
    )
    .ok_or_else(|| HeaderError::new("stream length overflows"))?;
    // links may differ in sample rate, so time is summed per link
    quality.duration = length.seconds as f32;

    Ok(VorbisAudioInfo {
        quality,
        total_frames: length.frames,
        stream_serial: serial,
        bitrate_nominal: ident.bitrate_nominal,
        comment,
    })
}

/// Next packet of the given logical stream (any stream when `serial` is None)
fn next_header_packet(
    reader: &mut PacketReader<Cursor<&[u8]>>,
    serial: Option<u32>,
    name: &str,
) -> Result<Packet, HeaderError> {
    loop {
        match reader.read_packet() {
            Ok(Some(packet)) => {
                if serial.map_or(true, |s| s == packet.stream_serial()) {
                    return Ok(packet);
                }
            }
            Ok(None) => {
                return Err(HeaderError::new(format!(
                    "stream ends before the {} header",
                    name
                )))
            }
            Err(e) => {
                return Err(HeaderError::new(format!(
                    "can't read {} header page: {}",
                    name, e
                )))
            }
        }
    }
}

fn is_setup_header(packet: &[u8]) -> bool {
    packet.len() > 7 && packet[0] == SETUP_PACKET_TYPE && &packet[1..7] == VORBIS_MAGIC
}

/// One logical Vorbis stream of a (possibly chained) file
struct Link {
    serial: u32,
    sample_rate: u32,
    frames: u64,
    ended: bool,
}

impl Link {
    fn new(serial: u32, sample_rate: u32, ended: bool) -> Self {
        Link {
            serial,
            sample_rate,
            frames: 0,
            ended,
        }
    }
}

/// Frames and seconds summed over every link
#[derive(Debug, Default)]
struct StreamLength {
    frames: u64,
    seconds: f64,
}

impl StreamLength {
    fn add(&mut self, link: &Link) -> Result<(), HeaderError> {
        self.frames = self
            .frames
            .checked_add(link.frames)
            .ok_or_else(|| HeaderError::new("stream length overflows"))?;
        self.seconds += link.frames as f64 / link.sample_rate as f64;
        Ok(())
    }
}

/// Walk the pages after the first link's headers and total up its length
/// along with any links chained after it.
///
/// Each link's length is the granule position of its last readable page.
/// A new link starts when a stream begins after the current one has ended.
/// A damaged or truncated tail, or a chained link that isn't Vorbis, ends
/// the walk early; whatever was read up to that point stands.
fn chained_length(
    reader: &mut PacketReader<Cursor<&[u8]>>,
    first: Link,
) -> Result<StreamLength, HeaderError> {
    let mut total = StreamLength::default();
    let mut link = first;
    loop {
        let packet = match reader.read_packet() {
            Ok(Some(packet)) => packet,
            Ok(None) => break,
            Err(e) => {
                debug!(frames = link.frames, "stopped reading audio pages: {}", e);
                break;
            }
        };

        if link.ended && packet.first_in_stream() {
            match read_header_ident(&packet.data) {
                Ok(ident) if ident.audio_sample_rate != 0 => {
                    total.add(&link)?;
                    link = Link::new(packet.stream_serial(), ident.audio_sample_rate, false);
                }
                _ => {
                    debug!(serial = packet.stream_serial(), "chained stream is not Vorbis");
                    break;
                }
            }
            continue;
        }
        if packet.stream_serial() != link.serial {
            continue;
        }

        let granule = packet.absgp_page();
        if granule != NO_GRANULE {
            // granule positions are signed 64-bit in Ogg
            if granule > i64::MAX as u64 {
                return Err(HeaderError::new(format!("granule position {} out of range", granule)));
            }
            link.frames = granule;
        }
        if packet.last_in_stream() {
            link.ended = true;
        }
    }
    total.add(&link)?;
    Ok(total)
}
