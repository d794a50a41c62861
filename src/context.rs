use std::io;
use std::io::prelude::*;
use std::time::Duration;

use crate::error::*;

/// Wraps a reader and remembers how far into the stream we are, so errors
/// can report where they happened.
pub struct Context<R> {
	reader: R,
	bytes_read: usize,
	reached_eof: bool,
	pub duration: Duration,
}

impl<R: Read> Context<R> {
	pub fn new(reader: R) -> Self {
		Context {
			reader,
			bytes_read: 0,
			duration: Duration::from_secs(0),
			reached_eof: false,
		}
	}

	pub fn read_exact(&mut self, buffer: &mut [u8]) -> Result<(), MP3FrameError> {
		let result = self.reader.read_exact(buffer);
		if result.is_ok() {
			self.bytes_read += buffer.len();
		}
		self.reached_eof = match &result {
			Err(e) => e.kind() == io::ErrorKind::UnexpectedEof,
			_ => false,
		};
		result.map_err(|e| self.error(e.into()))
	}

	/// Reads `num_bytes` more bytes onto the end of `buffer`.
	pub fn read_append(
		&mut self,
		buffer: &mut Vec<u8>,
		num_bytes: usize,
	) -> Result<(), MP3FrameError> {
		let start = buffer.len();
		buffer.resize(start + num_bytes, 0);
		self.read_exact(&mut buffer[start..])
	}

	pub fn skip(&mut self, num_bytes: usize) -> Result<(), MP3FrameError> {
		let num_bytes_skipped = {
			let mut limited = (&mut self.reader).take(num_bytes as u64);
			io::copy(&mut limited, &mut io::sink())
		};
		match num_bytes_skipped {
			Err(e) => Err(self.error(e.into())),
			Ok(n) if n < num_bytes as u64 => {
				self.bytes_read += n as usize;
				self.reached_eof = true;
				Err(self.error(ErrorKind::UnexpectedEOF))
			}
			_ => {
				self.bytes_read += num_bytes;
				Ok(())
			}
		}
	}

	pub fn reached_eof(&self) -> bool {
		self.reached_eof
	}

	pub fn offset(&self) -> usize {
		self.bytes_read
	}

	pub fn into_inner(self) -> R {
		self.reader
	}

	pub fn error(&self, e: ErrorKind) -> MP3FrameError {
		MP3FrameError {
			kind: e,
			offset: self.bytes_read,
			at_duration: self.duration,
		}
	}
}
