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

//! Key-pair records. The algorithm-specific parameter encodings
//! ([`PublicKeyData`], [`PrivateKeyData`]) are the one opaque collaborator
//! this crate still ships an implementation of, keyed by `key_type`; the
//! list codec in [`crate::format::openssh`] never looks inside them beyond
//! asking for the public projection of a private key.

use num_bigint::BigInt;

use crate::encoding::ByteStream;
use crate::error::{Error, Result};

/// `{key_type: STRING}`, shared by the public and private key headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHeader {
	pub key_type: String,
}

impl KeyHeader {
	pub fn decode(stream: &mut ByteStream) -> Result<Self> {
		Ok(KeyHeader { key_type: stream.read_string()? })
	}

	pub fn encode(&self, stream: &mut ByteStream) {
		stream.write_string(&self.key_type);
	}
}

/// The public-key footer is empty in this format, but kept as a named type
/// so the schema shape matches the private footer's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicKeyFooter;

impl PublicKeyFooter {
	pub fn decode(_stream: &mut ByteStream) -> Result<Self> {
		Ok(PublicKeyFooter)
	}

	pub fn encode(&self, _stream: &mut ByteStream) {}
}

/// `{comment: STRING}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivateKeyFooter {
	pub comment: String,
}

impl PrivateKeyFooter {
	pub fn decode(stream: &mut ByteStream) -> Result<Self> {
		Ok(PrivateKeyFooter { comment: stream.read_string()? })
	}

	pub fn encode(&self, stream: &mut ByteStream) {
		stream.write_string(&self.comment);
	}
}

/// Algorithm-specific public parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicKeyData {
	Ed25519 { public: Vec<u8> },
	Rsa { e: BigInt, n: BigInt },
}

impl PublicKeyData {
	pub fn key_type(&self) -> &'static str {
		match self {
			PublicKeyData::Ed25519 { .. } => "ssh-ed25519",
			PublicKeyData::Rsa { .. } => "ssh-rsa",
		}
	}

	pub fn decode(key_type: &str, stream: &mut ByteStream) -> Result<Self> {
		match key_type {
			"ssh-ed25519" => {
				let public = stream.read_bytes()?;
				Ok(PublicKeyData::Ed25519 { public })
			}
			"ssh-rsa" => {
				let e = stream.read_mpint()?;
				let n = stream.read_mpint()?;
				Ok(PublicKeyData::Rsa { e, n })
			}
			other => Err(Error::UnknownAlgorithm(other.to_string())),
		}
	}

	pub fn encode(&self, stream: &mut ByteStream) {
		match self {
			PublicKeyData::Ed25519 { public } => stream.write_bytes(public),
			PublicKeyData::Rsa { e, n } => {
				stream.write_mpint(e);
				stream.write_mpint(n);
			}
		}
	}
}

/// Algorithm-specific private parameters. Each variant carries the fields
/// that duplicate the public params (the "public subset") alongside the
/// secret fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrivateKeyData {
	Ed25519 { public: Vec<u8>, private: Vec<u8> },
	Rsa {
		n: BigInt,
		e: BigInt,
		d: BigInt,
		iqmp: BigInt,
		p: BigInt,
		q: BigInt,
	},
}

impl PrivateKeyData {
	pub fn key_type(&self) -> &'static str {
		match self {
			PrivateKeyData::Ed25519 { .. } => "ssh-ed25519",
			PrivateKeyData::Rsa { .. } => "ssh-rsa",
		}
	}

	pub fn decode(key_type: &str, stream: &mut ByteStream) -> Result<Self> {
		match key_type {
			"ssh-ed25519" => {
				let public = stream.read_bytes()?;
				let private = stream.read_bytes()?;
				Ok(PrivateKeyData::Ed25519 { public, private })
			}
			"ssh-rsa" => {
				let n = stream.read_mpint()?;
				let e = stream.read_mpint()?;
				let d = stream.read_mpint()?;
				let iqmp = stream.read_mpint()?;
				let p = stream.read_mpint()?;
				let q = stream.read_mpint()?;
				Ok(PrivateKeyData::Rsa { n, e, d, iqmp, p, q })
			}
			other => Err(Error::UnknownAlgorithm(other.to_string())),
		}
	}

	pub fn encode(&self, stream: &mut ByteStream) {
		match self {
			PrivateKeyData::Ed25519 { public, private } => {
				stream.write_bytes(public);
				stream.write_bytes(private);
			}
			PrivateKeyData::Rsa { n, e, d, iqmp, p, q } => {
				stream.write_mpint(n);
				stream.write_mpint(e);
				stream.write_mpint(d);
				stream.write_mpint(iqmp);
				stream.write_mpint(p);
				stream.write_mpint(q);
			}
		}
	}

	/// The fields of this private key that are also present, verbatim, in
	/// the corresponding public key. Used by the consistency checker and
	/// by `override_public_with_private`.
	pub fn public_subset(&self) -> PublicKeyData {
		match self {
			PrivateKeyData::Ed25519 { public, .. } => {
				PublicKeyData::Ed25519 { public: public.clone() }
			}
			PrivateKeyData::Rsa { n, e, .. } => {
				PublicKeyData::Rsa { e: e.clone(), n: n.clone() }
			}
		}
	}
}

/// The public half of a key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
	pub header: KeyHeader,
	pub params: PublicKeyData,
	pub footer: PublicKeyFooter,
	/// Bytes left over inside the public-key sub-stream after `footer` was
	/// read. Non-empty only for damaged or forward-versioned input.
	pub remainder: Vec<u8>,
}

impl PublicKey {
	pub fn new(params: PublicKeyData) -> Self {
		PublicKey {
			header: KeyHeader { key_type: params.key_type().to_string() },
			params,
			footer: PublicKeyFooter,
			remainder: Vec::new(),
		}
	}
}

/// The private half of a key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
	pub header: KeyHeader,
	pub params: PrivateKeyData,
	pub footer: PrivateKeyFooter,
}

impl PrivateKey {
	pub fn new(params: PrivateKeyData, comment: impl Into<String>) -> Self {
		PrivateKey {
			header: KeyHeader { key_type: params.key_type().to_string() },
			params,
			footer: PrivateKeyFooter { comment: comment.into() },
		}
	}
}

/// A public/private key pair, as stored at one index of a private key
/// list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPrivateKeyPair {
	pub public: PublicKey,
	pub private: PrivateKey,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ed25519_public() -> PublicKeyData {
		PublicKeyData::Ed25519 { public: vec![0x42; 32] }
	}

	fn ed25519_private() -> PrivateKeyData {
		PrivateKeyData::Ed25519 { public: vec![0x42; 32], private: vec![0x11; 64] }
	}

	#[test]
	fn ed25519_public_subset_matches_public_params() {
		assert_eq!(ed25519_private().public_subset(), ed25519_public());
	}

	#[test]
	fn rsa_public_subset_matches_public_params() {
		let private = PrivateKeyData::Rsa {
			n: BigInt::from(91),
			e: BigInt::from(7),
			d: BigInt::from(31),
			iqmp: BigInt::from(1),
			p: BigInt::from(7),
			q: BigInt::from(13),
		};
		let expected = PublicKeyData::Rsa { e: BigInt::from(7), n: BigInt::from(91) };
		assert_eq!(private.public_subset(), expected);
	}

	#[test]
	fn public_key_round_trips_through_stream() {
		let key = PublicKey::new(ed25519_public());
		let mut stream = ByteStream::new();
		key.header.encode(&mut stream);
		key.params.encode(&mut stream);
		key.footer.encode(&mut stream);
		stream.rewind();

		let header = KeyHeader::decode(&mut stream).unwrap();
		let params = PublicKeyData::decode(&header.key_type, &mut stream).unwrap();
		let footer = PublicKeyFooter::decode(&mut stream).unwrap();
		assert_eq!(header, key.header);
		assert_eq!(params, key.params);
		assert_eq!(footer, key.footer);
		assert!(stream.is_finished());
	}

	#[test]
	fn unknown_key_type_errors() {
		let mut stream = ByteStream::new();
		stream.write_bytes(&[0; 4]);
		stream.rewind();
		assert!(matches!(
			PublicKeyData::decode("ssh-dss", &mut stream),
			Err(Error::UnknownAlgorithm(_))
		));
	}
}
