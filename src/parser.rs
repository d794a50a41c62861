use log::{debug, trace};

use crate::error::ErrorKind;
use crate::header::{FrameHeader, HEADER_SIZE};

/// Cuts a live MPEG audio stream into whole frames.
///
/// Data arrives in arbitrary chunks. Each call to [`FrameParser::feed`]
/// returns the frames completed so far and keeps the rest buffered, so
/// every packet it hands out starts and ends on a frame boundary. Bytes
/// that do not belong to a frame are dropped until the parser finds its
/// way back to a valid header.
///
/// ```
/// use mp3_frames::FrameParser;
///
/// // MPEG-1 Layer III, 128 kbit/s, 44.1 kHz: 417 byte frames
/// let mut frame = vec![0; 417];
/// frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
///
/// let mut parser = FrameParser::new();
/// assert!(parser.feed(&frame[..300]).is_empty());
/// assert_eq!(frame, parser.feed(&frame[300..]));
/// ```
#[derive(Debug, Default)]
pub struct FrameParser {
    buffer: Vec<u8>,
    last_header: Option<FrameHeader>,
    frames: u64,
    skipped: u64,
}

impl FrameParser {
    pub fn new() -> Self {
        FrameParser::default()
    }

    pub fn feed(&mut self, data: &[u8]) -> Vec<u8> {
        self.buffer.extend_from_slice(data);

        let mut output = Vec::new();
        let mut position = 0;
        let mut skipped = 0;

        while self.buffer.len() - position >= HEADER_SIZE {
            let header = match self.header_at(position) {
                Ok(header) => header,
                Err(kind) => {
                    match kind {
                        ErrorKind::UnexpectedFrame { .. } => (),
                        _ => debug!("Rejected header at {}: {}", position, kind),
                    }
                    position += 1;
                    skipped += 1;
                    self.last_header = None;
                    continue;
                }
            };

            let frame_length = header.frame_length();
            let available = self.buffer.len() - position;
            if available < frame_length {
                break;
            }

            // A header found while resyncing is only trusted once the frame
            // after it checks out too, when those bytes are already here.
            if self.last_header.is_none() && available >= frame_length + HEADER_SIZE {
                let follows = self
                    .header_at(position + frame_length)
                    .map_or(false, |next| header.same_stream(&next));
                if !follows {
                    position += 1;
                    skipped += 1;
                    continue;
                }
            }

            trace!("Frame of {} bytes at {}", frame_length, position);
            output.extend_from_slice(&self.buffer[position..position + frame_length]);
            position += frame_length;
            self.frames += 1;
            self.last_header = Some(header);
        }

        if skipped > 0 {
            debug!("Skipped {} bytes looking for a frame header", skipped);
            self.skipped += skipped;
        }
        self.buffer.drain(..position);
        output
    }

    /// Forgets any buffered data, for when the stream starts over.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_header = None;
    }

    /// Bytes waiting for the rest of their frame.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Number of frames returned so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Number of bytes dropped while looking for frame headers.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    fn header_at(&self, position: usize) -> Result<FrameHeader, ErrorKind> {
        let bytes = &self.buffer[position..position + HEADER_SIZE];
        self.check_header([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Decodes `bytes` as the next header of the stream being parsed.
    pub(crate) fn check_header(&self, bytes: [u8; 4]) -> Result<FrameHeader, ErrorKind> {
        let header = FrameHeader::parse(bytes)?;
        match &self.last_header {
            Some(last) if !last.same_stream(&header) => {
                Err(ErrorKind::MismatchedStream { header: header.raw })
            }
            _ => Ok(header),
        }
    }
}
