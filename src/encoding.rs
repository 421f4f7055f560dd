// Copyright 2016 Pierre-Étienne Meunier
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The Pascal-style length-prefixed byte stream every sub-object of the
//! `openssh-key-v1` format is read from or written to, and a small
//! format-instruction interpreter (the `Decode`/`Encode` traits) built on
//! top of it.

use byteorder::{BigEndian, ByteOrder};
use num_bigint::{BigInt, Sign};

use crate::error::{Error, Result};

/// A seekable, length-prefixed binary reader/writer over an owned buffer.
///
/// Reading and writing share a single cursor: a stream built with
/// [`ByteStream::new`] is written to from position zero, then can be
/// rewound with [`ByteStream::rewind`] and read back, exactly like the
/// `PascalStyleByteStream` this type replaces.
#[derive(Debug, Default, Clone)]
pub struct ByteStream {
	buf: Vec<u8>,
	pos: usize,
}

impl ByteStream {
	pub fn new() -> Self {
		ByteStream { buf: Vec::new(), pos: 0 }
	}

	pub fn from_bytes(buf: Vec<u8>) -> Self {
		ByteStream { buf, pos: 0 }
	}

	/// Rewind the cursor to the start, keeping the buffer contents.
	pub fn rewind(&mut self) {
		self.pos = 0;
	}

	pub fn tell(&self) -> usize {
		self.pos
	}

	pub fn len(&self) -> usize {
		self.buf.len()
	}

	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	pub fn remaining_len(&self) -> usize {
		self.buf.len() - self.pos
	}

	pub fn is_finished(&self) -> bool {
		self.pos >= self.buf.len()
	}

	/// The full backing buffer, regardless of cursor position.
	pub fn getvalue(&self) -> &[u8] {
		&self.buf
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	/// Read up to `n` bytes, or every remaining byte if fewer than `n` remain.
	pub fn read(&mut self, n: usize) -> Vec<u8> {
		let end = (self.pos + n).min(self.buf.len());
		let out = self.buf[self.pos..end].to_vec();
		self.pos = end;
		out
	}

	/// Read every remaining byte.
	pub fn read_to_end(&mut self) -> Vec<u8> {
		self.read(self.remaining_len())
	}

	pub fn write(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
		if self.remaining_len() < n {
			return Err(Error::InsufficientData);
		}
		Ok(self.read(n))
	}

	pub fn read_fixed(&mut self, n: usize) -> Result<Vec<u8>> {
		self.read_exact(n)
	}

	pub fn write_fixed(&mut self, bytes: &[u8]) {
		self.write(bytes);
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	pub fn write_u8(&mut self, value: u8) {
		self.write(&[value]);
	}

	pub fn read_u32(&mut self) -> Result<u32> {
		let bytes = self.read_exact(4)?;
		Ok(BigEndian::read_u32(&bytes))
	}

	pub fn write_u32(&mut self, value: u32) {
		let mut bytes = [0u8; 4];
		BigEndian::write_u32(&mut bytes, value);
		self.write(&bytes);
	}

	pub fn read_i32(&mut self) -> Result<i32> {
		let bytes = self.read_exact(4)?;
		Ok(BigEndian::read_i32(&bytes))
	}

	pub fn write_i32(&mut self, value: i32) {
		let mut bytes = [0u8; 4];
		BigEndian::write_i32(&mut bytes, value);
		self.write(&bytes);
	}

	pub fn read_u64(&mut self) -> Result<u64> {
		let bytes = self.read_exact(8)?;
		Ok(BigEndian::read_u64(&bytes))
	}

	pub fn write_u64(&mut self, value: u64) {
		let mut bytes = [0u8; 8];
		BigEndian::write_u64(&mut bytes, value);
		self.write(&bytes);
	}

	/// `BYTES`: a 4-byte big-endian length prefix followed by that many
	/// opaque bytes.
	pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
		let len = self.read_u32()? as usize;
		self.read_exact(len)
	}

	pub fn write_bytes(&mut self, bytes: &[u8]) {
		self.write_u32(bytes.len() as u32);
		self.write(bytes);
	}

	/// `STRING`: a `BYTES` field additionally required to be valid UTF-8.
	pub fn read_string(&mut self) -> Result<String> {
		let bytes = self.read_bytes()?;
		String::from_utf8(bytes).map_err(|_| Error::Decoding)
	}

	pub fn write_string(&mut self, value: &str) {
		self.write_bytes(value.as_bytes());
	}

	/// `MPINT`: a `BYTES` field encoding a two's-complement big-endian
	/// integer per RFC 4251 §5.
	pub fn read_mpint(&mut self) -> Result<BigInt> {
		let bytes = self.read_bytes()?;
		if bytes.is_empty() {
			return Ok(BigInt::from(0));
		}
		if bytes[0] & 0x80 != 0 {
			// Negative: two's complement.
			let mut inverted: Vec<u8> = bytes.iter().map(|b| !b).collect();
			let mut carry = true;
			for byte in inverted.iter_mut().rev() {
				let (sum, overflow) = byte.overflowing_add(carry as u8);
				*byte = sum;
				carry = overflow;
			}
			Ok(BigInt::from_bytes_be(Sign::Minus, &inverted))
		} else {
			Ok(BigInt::from_bytes_be(Sign::Plus, &bytes))
		}
	}

	pub fn write_mpint(&mut self, value: &BigInt) {
		let (sign, mut bytes) = value.to_bytes_be();
		match sign {
			Sign::NoSign => {}
			Sign::Plus => {
				if bytes.first().is_some_and(|b| *b & 0x80 != 0) {
					bytes.insert(0, 0);
				}
			}
			Sign::Minus => {
				let mut carry = true;
				for byte in bytes.iter_mut().rev() {
					*byte = !*byte;
					let (sum, overflow) = byte.overflowing_add(carry as u8);
					*byte = sum;
					carry = overflow;
				}
				if bytes.first().is_some_and(|b| *b & 0x80 == 0) {
					bytes.insert(0, 0xff);
				}
			}
		}
		self.write_bytes(&bytes);
	}
}

/// A value that can be read from a [`ByteStream`] in a fixed field order.
pub trait Decode: Sized {
	fn decode(stream: &mut ByteStream) -> Result<Self>;
}

/// A value that can be written to a [`ByteStream`] in a fixed field order.
pub trait Encode {
	fn encode(&self, stream: &mut ByteStream);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_string() {
		let mut s = ByteStream::new();
		s.write_string("ssh-ed25519");
		s.rewind();
		assert_eq!(s.read_string().unwrap(), "ssh-ed25519");
	}

	#[test]
	fn round_trips_bytes() {
		let mut s = ByteStream::new();
		s.write_bytes(&[1, 2, 3, 4]);
		s.rewind();
		assert_eq!(s.read_bytes().unwrap(), vec![1, 2, 3, 4]);
	}

	#[test]
	fn round_trips_u32_and_i32() {
		let mut s = ByteStream::new();
		s.write_u32(0xdead_beef);
		s.write_i32(-1);
		s.rewind();
		assert_eq!(s.read_u32().unwrap(), 0xdead_beef);
		assert_eq!(s.read_i32().unwrap(), -1);
	}

	#[test]
	fn rejects_negative_num_keys_as_signed() {
		let mut s = ByteStream::new();
		s.write_i32(-1);
		s.rewind();
		assert!(s.read_i32().unwrap() < 0);
	}

	#[test]
	fn round_trips_mpint_negative_and_positive() {
		for value in [0i64, 1, -1, 255, -255, 0x7fff_ffff, -0x8000_0000] {
			let mut s = ByteStream::new();
			s.write_mpint(&BigInt::from(value));
			s.rewind();
			assert_eq!(s.read_mpint().unwrap(), BigInt::from(value));
		}
	}

	#[test]
	fn short_read_is_insufficient_data() {
		let mut s = ByteStream::new();
		s.write(&[0, 0, 0, 5, 1, 2]);
		s.rewind();
		assert!(matches!(s.read_bytes(), Err(Error::InsufficientData)));
	}

	#[test]
	fn invalid_utf8_is_decoding_error() {
		let mut s = ByteStream::new();
		s.write_bytes(&[0xff, 0xfe]);
		s.rewind();
		assert!(matches!(s.read_string(), Err(Error::Decoding)));
	}
}
