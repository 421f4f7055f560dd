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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("{0}")]
	Format(&'static str),

	#[error("Not a key pair")]
	NotAKeyPair,

	#[error("Key index out of range")]
	Index,

	#[error("Attempted to read past the end of the buffer")]
	InsufficientData,

	#[error("Invalid UTF-8 in length-prefixed string")]
	Decoding,

	#[error("Unknown key algorithm {0:?}")]
	UnknownAlgorithm(String),

	#[error("Unknown kdf {0:?}")]
	UnknownKdf(String),

	#[error("Unknown cipher {0:?}")]
	UnknownCipher(String),

	#[error("A passphrase is required to decrypt this key but none was provided")]
	PassphraseRequired,

	#[error("Cipher error: {0}")]
	Cipher(String),

	#[error("Key derivation error: {0}")]
	Kdf(String),

	#[error("Base64 error: {0}")]
	Base64(#[from] base64::DecodeError),
}
