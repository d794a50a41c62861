//! Lookup tables for turning MPEG audio header bit-fields into physical units.
//!
//! Bitrates are in kbit/s and indexed by the 4-bit bitrate index of a frame
//! header. Index 0 is the free format marker and index 15 is reserved; both
//! hold 0. Frequencies are in Hz, indexed by [`Version`] and the 2-bit
//! sampling rate index, where index 3 is reserved.

/// MPEG version, in `FREQUENCIES` row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Version {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

/// MPEG audio layer. The discriminant starts at 0 for Layer I.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Layer1,
    Layer2,
    Layer3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    None,
    Ms5015,
    CcittJ17,
}

pub static MPEG_1_LAYER_1: [u32; 16] = [
    0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0,
];

pub static MPEG_1_LAYER_2: [u32; 16] = [
    0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0,
];

pub static MPEG_1_LAYER_3: [u32; 16] = [
    0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
];

pub static MPEG_2_LAYER_1: [u32; 16] = [
    0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
];

/// Shared by Layer II and Layer III of MPEG-2 and MPEG-2.5.
pub static MPEG_2_LAYER_2_3: [u32; 16] = [
    0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
];

pub static FREQUENCIES: [[u32; 4]; 3] = [
    [44100, 48000, 32000, 0], // Mpeg1
    [22050, 24000, 16000, 0], // Mpeg2
    [11025, 12000, 8000, 0],  // Mpeg25
];

pub static SAMPLES_PER_FRAME: [[u32; 3]; 3] = [
    [384, 1152, 1152], // Mpeg1
    [384, 1152, 576],  // Mpeg2
    [384, 1152, 576],  // Mpeg25
];

/// Layer III side information size in bytes, by version and channel mode.
pub static SIDE_INFORMATION_SIZES: [[u32; 4]; 3] = [
    [32, 32, 32, 17], // Mpeg1
    [17, 17, 17, 9],  // Mpeg2
    [17, 17, 17, 9],  // Mpeg25
];

/// Selects the bitrate table for a version and layer.
///
/// ```
/// use mp3_frames::{bitrate_table, Layer, Version};
///
/// assert_eq!(320, bitrate_table(Version::Mpeg1, Layer::Layer3)[14]);
/// assert_eq!(160, bitrate_table(Version::Mpeg25, Layer::Layer2)[14]);
/// ```
pub fn bitrate_table(version: Version, layer: Layer) -> &'static [u32; 16] {
    match (version, layer) {
        (Version::Mpeg1, Layer::Layer1) => &MPEG_1_LAYER_1,
        (Version::Mpeg1, Layer::Layer2) => &MPEG_1_LAYER_2,
        (Version::Mpeg1, Layer::Layer3) => &MPEG_1_LAYER_3,
        (_, Layer::Layer1) => &MPEG_2_LAYER_1,
        (_, Layer::Layer2) | (_, Layer::Layer3) => &MPEG_2_LAYER_2_3,
    }
}
