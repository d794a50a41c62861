//! MPEG audio lookup tables, frame header decoding and frame-aligned
//! stream parsing.
//!
//! [`FrameParser`] is for live streams fed in chunks, [`FrameReader`] for
//! anything implementing `Read`. Shoutcast streams that interleave metadata
//! go through [`IcyMetadata`] before the frame parser.

extern crate failure;

use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

pub mod constants;
mod context;
mod error;
mod header;
mod icy;
mod parser;
mod reader;

pub use crate::constants::{
    bitrate_table, Emphasis, Layer, Mode, Version, FREQUENCIES, MPEG_1_LAYER_1, MPEG_1_LAYER_2,
    MPEG_1_LAYER_3, MPEG_2_LAYER_1, MPEG_2_LAYER_2_3,
};
pub use crate::error::{ErrorKind, MP3FrameError};
pub use crate::header::{FrameHeader, HEADER_SIZE};
pub use crate::icy::IcyMetadata;
pub use crate::parser::FrameParser;
pub use crate::reader::{Frame, FrameReader};

fn xing_duration(frame: &Frame, num_frames: u32) -> Duration {
    let rate = frame.header.sampling_rate() as u64;
    let billion = 1_000_000_000;
    let frames_x_samples = num_frames as u64 * frame.header.samples_per_frame() as u64;
    let seconds = frames_x_samples / rate;
    let nanoseconds = (frames_x_samples % rate) * billion / rate;
    Duration::new(seconds, nanoseconds as u32)
}

/// Measures the duration of an mp3 stream contained in any struct implementing Read.
///
/// A Xing or Info tag, when present, gives the answer directly. Otherwise
/// every frame is read and their durations are added up.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
///
/// let mut frame = vec![0; 417];
/// frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x90, 0x64]);
/// let stream = frame.repeat(100);
///
/// let duration = mp3_frames::from_read(&mut Cursor::new(stream)).unwrap();
/// assert_eq!(2, duration.as_secs());
/// ```
pub fn from_read<T>(reader: &mut T) -> Result<Duration, MP3FrameError>
where
    T: Read,
{
    let mut frames = FrameReader::new(reader);
    for frame in &mut frames {
        let frame = frame?;
        if let Some(num_frames) = frame.xing_frame_count() {
            return Ok(xing_duration(&frame, num_frames));
        }
    }
    Ok(frames.duration())
}

/// Measures the duration of a file.
pub fn from_file(file: &File) -> Result<Duration, MP3FrameError> {
    let mut reader = BufReader::new(file);
    from_read(&mut reader)
}

/// Measures the duration of the file at `path`.
pub fn from_path<P>(path: P) -> Result<Duration, MP3FrameError>
where
    P: AsRef<Path>,
{
    File::open(path)
        .map_err(|e| MP3FrameError {
            kind: e.into(),
            offset: 0,
            at_duration: Duration::from_secs(0),
        })
        .and_then(|file| from_file(&file))
}
