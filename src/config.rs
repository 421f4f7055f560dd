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

//! Bundles the cipher/kdf choice that `from_list`/`pack` otherwise take as
//! three positional arguments, so a caller can load their key-generation
//! policy from a config file the same way the rest of this codebase loads
//! settings, without this crate depending on any particular file format.

use serde::{Deserialize, Serialize};

use crate::kdf::KdfOptions;

/// Cipher, kdf, and kdf options to use when packing a [`crate::format::openssh::PrivateKeyList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackConfig {
	pub cipher: String,
	pub kdf: String,
	pub kdf_options: KdfOptions,
}

impl Default for PackConfig {
	fn default() -> Self {
		PackConfig {
			cipher: "none".to_string(),
			kdf: "none".to_string(),
			kdf_options: KdfOptions::None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_is_unencrypted() {
		let config = PackConfig::default();
		assert_eq!(config.cipher, "none");
		assert_eq!(config.kdf, "none");
		assert_eq!(config.kdf_options, KdfOptions::None);
	}

	#[test]
	fn config_is_cloneable_and_comparable() {
		let config = PackConfig {
			cipher: "aes256-ctr".to_string(),
			kdf: "bcrypt".to_string(),
			kdf_options: KdfOptions::Bcrypt { salt: vec![1, 2, 3], rounds: 16 },
		};
		assert_eq!(config.clone(), config);
	}
}
