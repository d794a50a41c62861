use std::time::Duration;

use crate::constants::*;
use crate::error::ErrorKind;

pub const HEADER_SIZE: usize = 4;

/// A decoded MPEG audio frame header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    pub raw: u32,
    pub version: Version,
    pub layer: Layer,
    /// A 16 bit CRC follows the header.
    pub protected: bool,
    pub bitrate_index: u8,
    pub sampling_rate_index: u8,
    pub padding: bool,
    pub private: bool,
    pub mode: Mode,
    pub mode_extension: u8,
    pub copyright: bool,
    pub original: bool,
    pub emphasis: Emphasis,
}

impl FrameHeader {
    /// Decodes the four header bytes of a frame.
    ///
    /// Free format frames are rejected since their length cannot be known
    /// from the header alone.
    ///
    /// ```
    /// use mp3_frames::{FrameHeader, Layer, Version};
    ///
    /// let header = FrameHeader::parse([0xFF, 0xFB, 0x90, 0x64]).unwrap();
    /// assert_eq!(Version::Mpeg1, header.version);
    /// assert_eq!(Layer::Layer3, header.layer);
    /// assert_eq!(128_000, header.bitrate());
    /// assert_eq!(44100, header.sampling_rate());
    /// assert_eq!(417, header.frame_length());
    /// ```
    pub fn parse(bytes: [u8; 4]) -> Result<FrameHeader, ErrorKind> {
        let header = u32::from_be_bytes(bytes);
        if header >> 21 != 0x7FF {
            return Err(ErrorKind::UnexpectedFrame { header });
        }

        let version = match (header >> 19) & 0b11 {
            0 => Version::Mpeg25,
            1 => return Err(ErrorKind::ForbiddenVersion),
            2 => Version::Mpeg2,
            _ => Version::Mpeg1,
        };

        let layer = match (header >> 17) & 0b11 {
            0 => return Err(ErrorKind::ForbiddenLayer),
            1 => Layer::Layer3,
            2 => Layer::Layer2,
            _ => Layer::Layer1,
        };

        let bitrate_index = ((header >> 12) & 0b1111) as u8;
        match bitrate_index {
            0 => return Err(ErrorKind::FreeFormatBitrate),
            15 => {
                return Err(ErrorKind::InvalidBitrate {
                    bitrate: bitrate_index,
                })
            }
            _ => (),
        }

        let sampling_rate_index = ((header >> 10) & 0b11) as u8;
        if sampling_rate_index == 3 {
            return Err(ErrorKind::InvalidSamplingRate {
                sampling_rate: sampling_rate_index,
            });
        }

        let mode = match (header >> 6) & 0b11 {
            0 => Mode::Stereo,
            1 => Mode::JointStereo,
            2 => Mode::DualChannel,
            _ => Mode::Mono,
        };

        let emphasis = match header & 0b11 {
            0 => Emphasis::None,
            1 => Emphasis::Ms5015,
            2 => return Err(ErrorKind::ReservedEmphasis),
            _ => Emphasis::CcittJ17,
        };

        Ok(FrameHeader {
            raw: header,
            version,
            layer,
            protected: (header >> 16) & 1 == 0,
            bitrate_index,
            sampling_rate_index,
            padding: (header >> 9) & 1 != 0,
            private: (header >> 8) & 1 != 0,
            mode,
            mode_extension: ((header >> 4) & 0b11) as u8,
            copyright: (header >> 3) & 1 != 0,
            original: (header >> 2) & 1 != 0,
            emphasis,
        })
    }

    /// Bitrate in bits per second.
    pub fn bitrate(&self) -> u32 {
        1000 * bitrate_table(self.version, self.layer)[self.bitrate_index as usize]
    }

    /// Sampling rate in Hz.
    pub fn sampling_rate(&self) -> u32 {
        FREQUENCIES[self.version as usize][self.sampling_rate_index as usize]
    }

    pub fn samples_per_frame(&self) -> u32 {
        SAMPLES_PER_FRAME[self.version as usize][self.layer as usize]
    }

    pub fn side_information_size(&self) -> usize {
        SIDE_INFORMATION_SIZES[self.version as usize][self.mode as usize] as usize
    }

    /// Length of the whole frame in bytes, header included.
    pub fn frame_length(&self) -> usize {
        let bitrate = self.bitrate();
        let sampling_rate = self.sampling_rate();
        let padding = self.padding as u32;
        let length = match (self.layer, self.version) {
            (Layer::Layer1, _) => (12 * bitrate / sampling_rate + padding) * 4,
            (Layer::Layer2, _) | (Layer::Layer3, Version::Mpeg1) => {
                144 * bitrate / sampling_rate + padding
            }
            (Layer::Layer3, _) => 72 * bitrate / sampling_rate + padding,
        };
        length as usize
    }

    /// Playback time of the frame.
    pub fn duration(&self) -> Duration {
        let nanos = self.samples_per_frame() as u64 * 1_000_000_000 / self.sampling_rate() as u64;
        Duration::from_nanos(nanos)
    }

    /// Whether `other` can follow this header in the same stream.
    pub fn same_stream(&self, other: &FrameHeader) -> bool {
        self.version == other.version
            && self.layer == other.layer
            && self.sampling_rate_index == other.sampling_rate_index
    }
}
