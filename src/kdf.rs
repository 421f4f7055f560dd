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

//! The kdf registry: named lookup of key-derivation functions, each
//! declaring its own options schema (a length-prefixed sub-stream) and a
//! `derive_key` operation that turns a passphrase into cipher key material.

use serde::{Deserialize, Serialize};

use crate::encoding::ByteStream;
use crate::error::{Error, Result};

/// Options for a kdf, decoded from the `kdf_options` sub-stream of the
/// outer header. Shipped kdfs: `none` (no options) and `bcrypt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum KdfOptions {
	None,
	Bcrypt { salt: Vec<u8>, rounds: u32 },
}

impl Default for KdfOptions {
	fn default() -> Self {
		KdfOptions::None
	}
}

impl KdfOptions {
	fn decode(kdf: Kdf, bytes: &[u8]) -> Result<Self> {
		let mut stream = ByteStream::from_bytes(bytes.to_vec());
		match kdf {
			Kdf::None => Ok(KdfOptions::None),
			Kdf::Bcrypt => {
				let salt = stream.read_bytes()?;
				let rounds = stream.read_u32()?;
				Ok(KdfOptions::Bcrypt { salt, rounds })
			}
		}
	}

	fn encode(&self) -> Vec<u8> {
		let mut stream = ByteStream::new();
		match self {
			KdfOptions::None => {}
			KdfOptions::Bcrypt { salt, rounds } => {
				stream.write_bytes(salt);
				stream.write_u32(*rounds);
			}
		}
		stream.into_bytes()
	}
}

/// The named kdf a private key list's header selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kdf {
	None,
	Bcrypt,
}

impl Kdf {
	pub fn name(self) -> &'static str {
		match self {
			Kdf::None => "none",
			Kdf::Bcrypt => "bcrypt",
		}
	}

	pub fn from_name(name: &str) -> Result<Self> {
		match name {
			"none" => Ok(Kdf::None),
			"bcrypt" => Ok(Kdf::Bcrypt),
			other => Err(Error::UnknownKdf(other.to_string())),
		}
	}

	pub fn decode_options(self, bytes: &[u8]) -> Result<KdfOptions> {
		KdfOptions::decode(self, bytes)
	}

	pub fn encode_options(self, options: &KdfOptions) -> Vec<u8> {
		options.encode()
	}

	/// Derive `(cipher_key, initialization_vector)` of the requested
	/// lengths from `passphrase` and this kdf's options.
	///
	/// For `none`, both outputs are empty regardless of the requested
	/// lengths, matching a cipher that ignores key material entirely.
	pub fn derive_key(
		self,
		options: &KdfOptions,
		passphrase: &str,
		key_len: usize,
		iv_len: usize,
	) -> Result<(Vec<u8>, Vec<u8>)> {
		match (self, options) {
			(Kdf::None, KdfOptions::None) => Ok((Vec::new(), Vec::new())),
			(Kdf::Bcrypt, KdfOptions::Bcrypt { salt, rounds }) => {
				let mut output = vec![0u8; key_len + iv_len];
				bcrypt_pbkdf::bcrypt_pbkdf(passphrase.as_bytes(), salt, *rounds, &mut output)
					.map_err(|e| Error::Kdf(e.to_string()))?;
				let iv = output.split_off(key_len);
				Ok((output, iv))
			}
			_ => Err(Error::Kdf("kdf name and kdf options disagree".to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn none_kdf_round_trips_empty_options() {
		let opts = Kdf::None.decode_options(&[]).unwrap();
		assert_eq!(opts, KdfOptions::None);
		assert!(Kdf::None.encode_options(&opts).is_empty());
	}

	#[test]
	fn none_kdf_derives_empty_key_and_iv() {
		let (key, iv) = Kdf::None
			.derive_key(&KdfOptions::None, "whatever", 32, 16)
			.unwrap();
		assert!(key.is_empty());
		assert!(iv.is_empty());
	}

	#[test]
	fn bcrypt_options_round_trip() {
		let opts = KdfOptions::Bcrypt {
			salt: vec![0x8c, 0x63, 0x6d, 0xe8],
			rounds: 16,
		};
		let bytes = Kdf::Bcrypt.encode_options(&opts);
		let decoded = Kdf::Bcrypt.decode_options(&bytes).unwrap();
		assert_eq!(decoded, opts);
	}

	#[test]
	fn bcrypt_derives_requested_lengths() {
		let opts = KdfOptions::Bcrypt {
			salt: vec![1; 16],
			rounds: 4,
		};
		let (key, iv) = Kdf::Bcrypt
			.derive_key(&opts, "passphrase", 32, 16)
			.unwrap();
		assert_eq!(key.len(), 32);
		assert_eq!(iv.len(), 16);
	}

	#[test]
	fn unknown_kdf_name_errors() {
		assert!(matches!(Kdf::from_name("scrypt"), Err(Error::UnknownKdf(_))));
	}
}
