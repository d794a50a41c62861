use log::{debug, warn};
use std::io::prelude::*;
use std::time::Duration;

use crate::constants::Layer;
use crate::context::Context;
use crate::error::*;
use crate::header::{FrameHeader, HEADER_SIZE};

/// One complete MPEG audio frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub header: FrameHeader,
    /// Frame bytes, header included.
    pub data: Vec<u8>,
}

impl Frame {
    /// Total number of frames in the stream, as stored by an encoder in a
    /// Xing or Info tag inside this frame.
    pub fn xing_frame_count(&self) -> Option<u32> {
        if self.header.layer != Layer::Layer3 {
            return None;
        }
        let mut offset = HEADER_SIZE + self.header.side_information_size();
        if self.header.protected {
            offset += 2;
        }
        let tag = self.data.get(offset..offset + 12)?;
        if &tag[0..4] != b"Xing" && &tag[0..4] != b"Info" {
            return None;
        }
        let has_frames = 0 != (tag[7] & 1);
        if !has_frames {
            return None;
        }
        Some(u32::from_be_bytes([tag[8], tag[9], tag[10], tag[11]]))
    }

    pub fn duration(&self) -> Duration {
        self.header.duration()
    }
}

/// Iterates over the frames of an MPEG audio stream, skipping ID3v1,
/// ID3v2 and APEv2 tags on the way.
///
/// Iteration ends at the end of the stream, or after the first error.
pub struct FrameReader<R> {
    context: Context<R>,
    done: bool,
}

impl<R: Read> FrameReader<R> {
    pub fn new(reader: R) -> Self {
        FrameReader {
            context: Context::new(reader),
            done: false,
        }
    }

    /// Combined duration of the frames returned so far.
    pub fn duration(&self) -> Duration {
        self.context.duration
    }

    /// Number of bytes consumed from the underlying reader.
    pub fn offset(&self) -> usize {
        self.context.offset()
    }

    pub fn into_inner(self) -> R {
        self.context.into_inner()
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, MP3FrameError> {
        let context = &mut self.context;
        let mut header_buffer = [0; HEADER_SIZE];

        loop {
            // Skip over all 0x00 bytes (probably incorrectly added padding bytes for id3v2)
            header_buffer[0] = 0;
            while header_buffer[0] == 0 {
                match context.read_exact(&mut header_buffer[0..1]) {
                    Ok(_) => (),
                    Err(_) if context.reached_eof() => return Ok(None),
                    Err(e) => return Err(e),
                };
            }

            match context.read_exact(&mut header_buffer[1..]) {
                Ok(_) => (),
                Err(_) if context.reached_eof() => {
                    warn!("Stream ends with a partial header at offset {}", context.offset());
                    return Ok(None);
                }
                Err(e) => return Err(e),
            };

            let word = u32::from_be_bytes(header_buffer);

            // MPEG frame
            if word >> 21 == 0x7FF {
                let header =
                    FrameHeader::parse(header_buffer).map_err(|kind| context.error(kind))?;
                let frame_length = header.frame_length();
                let mut data = Vec::with_capacity(frame_length);
                data.extend_from_slice(&header_buffer);
                if let Err(e) = context.read_append(&mut data, frame_length - HEADER_SIZE) {
                    if context.reached_eof() {
                        warn!("Stream truncated inside a frame at offset {}", context.offset());
                    }
                    return Err(e);
                }
                context.duration += header.duration();
                return Ok(Some(Frame { header, data }));
            }

            // ID3v2 frame
            if &header_buffer[0..3] == b"ID3" {
                let mut id3v2 = [0; 6]; // 4 bytes already read
                context.read_exact(&mut id3v2)?;
                let flags = id3v2[1];
                let footer_size: usize = if 0 != (flags & 0b0001_0000) { 10 } else { 0 };
                let tag_size: usize = ((id3v2[5] as u32)
                    | ((id3v2[4] as u32) << 7)
                    | ((id3v2[3] as u32) << 14)
                    | ((id3v2[2] as u32) << 21)) as usize;
                debug!("Skipping {} byte ID3v2 tag", tag_size + footer_size);
                context.skip(tag_size + footer_size)?;
                continue;
            }

            // ID3v1 frame
            if &header_buffer[0..3] == b"TAG" {
                debug!("Skipping ID3v1 tag");
                context.skip(128 - header_buffer.len())?;
                continue;
            }

            // APEv2 frame
            if &header_buffer == b"APET" {
                let mut ape_header = [0; 12];
                context.read_exact(&mut ape_header)?;
                if &ape_header[0..4] == b"AGEX" {
                    let tag_size = u32::from_le_bytes([
                        ape_header[8],
                        ape_header[9],
                        ape_header[10],
                        ape_header[11],
                    ]) as usize;
                    debug!("Skipping {} byte APEv2 tag", tag_size + 16);
                    context.skip(tag_size + 16)?;
                    continue;
                }
            }

            return Err(context.error(ErrorKind::UnexpectedFrame { header: word }));
        }
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<Frame, MP3FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.next_frame();
        match result {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
