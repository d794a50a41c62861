use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Audio { left: usize },
    Length,
    Metadata { left: usize },
}

/// Separates in-band Shoutcast metadata from the audio of a stream sent
/// with an `Icy-MetaInt` header.
///
/// Every `metaint` audio bytes the server inserts one length byte followed
/// by `16 × length` bytes of metadata. A length of 0 means no update.
///
/// ```
/// use mp3_frames::IcyMetadata;
///
/// let mut icy = IcyMetadata::new(4);
/// let mut data = b"abcd\x01".to_vec();
/// data.extend_from_slice(b"StreamTitle='x';\0");
/// data.extend_from_slice(b"efgh\x00ij");
///
/// let (audio, metadata) = icy.split(&data);
/// assert_eq!(b"abcdefghij".to_vec(), audio);
/// assert_eq!(Some(b"StreamTitle='x';\0".to_vec()), metadata);
/// assert_eq!(Some("x".to_string()), icy.stream_title());
/// ```
#[derive(Debug)]
pub struct IcyMetadata {
    metaint: usize,
    state: State,
    pending: Vec<u8>,
    current: Option<Vec<u8>>,
}

impl IcyMetadata {
    /// A `metaint` of 0 means the stream carries no metadata at all.
    pub fn new(metaint: usize) -> Self {
        IcyMetadata {
            metaint,
            state: State::Audio { left: metaint },
            pending: Vec::new(),
            current: None,
        }
    }

    pub fn metaint(&self) -> usize {
        self.metaint
    }

    /// Splits a chunk into its audio bytes and the last metadata block
    /// completed within it, if any.
    pub fn split(&mut self, data: &[u8]) -> (Vec<u8>, Option<Vec<u8>>) {
        if self.metaint == 0 {
            return (data.to_vec(), None);
        }

        let mut audio = Vec::with_capacity(data.len());
        let mut completed = None;
        let mut rest = data;

        while !rest.is_empty() {
            match self.state {
                State::Audio { left } => {
                    let n = left.min(rest.len());
                    audio.extend_from_slice(&rest[..n]);
                    rest = &rest[n..];
                    self.state = if n == left {
                        State::Length
                    } else {
                        State::Audio { left: left - n }
                    };
                }
                State::Length => {
                    let length = rest[0] as usize * 16;
                    rest = &rest[1..];
                    self.state = if length == 0 {
                        State::Audio { left: self.metaint }
                    } else {
                        self.pending.clear();
                        State::Metadata { left: length }
                    };
                }
                State::Metadata { left } => {
                    let n = left.min(rest.len());
                    self.pending.extend_from_slice(&rest[..n]);
                    rest = &rest[n..];
                    if n == left {
                        debug!("Metadata block of {} bytes", self.pending.len());
                        completed = Some(self.pending.clone());
                        self.current = Some(std::mem::take(&mut self.pending));
                        self.state = State::Audio { left: self.metaint };
                    } else {
                        self.state = State::Metadata { left: left - n };
                    }
                }
            }
        }

        (audio, completed)
    }

    /// Most recent complete metadata block, NUL padding included.
    pub fn current(&self) -> Option<&[u8]> {
        self.current.as_deref()
    }

    /// The `StreamTitle` field of the most recent metadata block.
    pub fn stream_title(&self) -> Option<String> {
        let text = String::from_utf8_lossy(self.current.as_ref()?);
        let start = text.find("StreamTitle='")? + "StreamTitle='".len();
        let end = text[start..].find("';").map_or(text.len(), |end| start + end);
        Some(text[start..end].to_string())
    }

    /// Starts over at an audio boundary, for a source that reconnected.
    pub fn reset(&mut self) {
        self.state = State::Audio { left: self.metaint };
        self.pending.clear();
    }
}
