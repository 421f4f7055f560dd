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

//! The passphrase provider is the one place this crate calls out to the
//! caller mid-operation. It's invoked at most once per parse or pack, and
//! only when the chosen kdf isn't `"none"`.

use crate::error::{Error, Result};

/// Supplies the passphrase used to derive a key-encryption key.
///
/// Implementors decide how (interactive prompt, fixed string, keychain
/// lookup, …); this crate only ever calls `provide` once per operation.
pub trait PassphraseProvider {
	fn provide(&self) -> Result<String>;
}

/// Always fails. The right default for callers who know ahead of time that
/// every key they handle is unencrypted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPassphrase;

impl PassphraseProvider for NoPassphrase {
	fn provide(&self) -> Result<String> {
		Err(Error::PassphraseRequired)
	}
}

/// A fixed passphrase, known ahead of time. Mainly useful for tests and for
/// callers who already collected the passphrase through their own UI.
#[derive(Debug, Clone)]
pub struct FixedPassphrase(pub String);

impl PassphraseProvider for FixedPassphrase {
	fn provide(&self) -> Result<String> {
		Ok(self.0.clone())
	}
}

impl<F> PassphraseProvider for F
where
	F: Fn() -> Result<String>,
{
	fn provide(&self) -> Result<String> {
		self()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_passphrase_errors() {
		assert!(matches!(
			NoPassphrase.provide(),
			Err(Error::PassphraseRequired)
		));
	}

	#[test]
	fn fixed_passphrase_returns_value() {
		let p = FixedPassphrase("hunter2".to_string());
		assert_eq!(p.provide().unwrap(), "hunter2");
	}

	#[test]
	fn closure_provider_works() {
		let p = || Ok("closure".to_string());
		assert_eq!(p.provide().unwrap(), "closure");
	}
}
