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

//! Parse and pack `openssh-key-v1` private key files: the framing, the
//! length-prefixed byte stream every sub-object is read from or written
//! to, the encryption envelope around the private key bodies, and the
//! consistency checks between a pair's public and private half.
//!
//! The per-algorithm key parameter encodings and the kdf/cipher
//! primitives are part of this crate ([`key`], [`kdf`], [`cipher`]), but
//! the [`format::openssh`] codec only ever talks to them through the
//! narrow interface described in its module docs; swapping in a new
//! algorithm or cipher doesn't touch the codec.
//!
//! ```
//! use sshkey_codec::format::openssh::PrivateKeyList;
//! use sshkey_codec::key::{PrivateKey, PrivateKeyData, PublicKey, PublicKeyData, PublicPrivateKeyPair};
//! use sshkey_codec::kdf::KdfOptions;
//! use sshkey_codec::passphrase::NoPassphrase;
//! use sshkey_codec::diagnostics::NullDiagnostics;
//!
//! let public = vec![0x42; 32];
//! let private = vec![0x11; 64];
//! let pair = PublicPrivateKeyPair {
//!     public: PublicKey::new(PublicKeyData::Ed25519 { public: public.clone() }),
//!     private: PrivateKey::new(
//!         PrivateKeyData::Ed25519 { public, private },
//!         "me@example",
//!     ),
//! };
//!
//! let list = PrivateKeyList::from_list(vec![pair], "none", "none", KdfOptions::None)?;
//! let armored = list.pack_string(&NoPassphrase, None)?;
//! let mut diagnostics = NullDiagnostics;
//! let parsed = PrivateKeyList::from_string(&armored, &NoPassphrase, &mut diagnostics)?;
//! assert_eq!(parsed, list);
//! # Ok::<(), sshkey_codec::error::Error>(())
//! ```

pub mod cipher;
pub mod config;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod format;
pub mod kdf;
pub mod key;
pub mod passphrase;

pub use config::PackConfig;
pub use error::{Error, Result};
pub use format::openssh::PrivateKeyList;
