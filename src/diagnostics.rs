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

//! Soft-warning channel. Structural failures abort parsing via [`crate::Error`];
//! everything recoverable is reported here instead, and parsing continues.

use std::fmt;

/// A single non-fatal condition observed while parsing a private key list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// Surplus bytes at the end of a public-key blob.
	ExcessBytesInKey { index: usize },
	/// `check_int_1 != check_int_2` in the deciphered header.
	CheckIntMismatch { check_int_1: u32, check_int_2: u32 },
	/// `public.header.key_type != private.header.key_type` for a pair.
	KeyTypeMismatch { index: usize },
	/// The public-subset projection of `private.params` doesn't match `public.params`.
	KeyParamsMismatch { index: usize },
	/// The padding tail wasn't `1, 2, 3, …, k` up to a block boundary.
	BadPadding,
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::ExcessBytesInKey { .. } => write!(f, "Excess bytes in key"),
			Diagnostic::CheckIntMismatch { .. } => {
				write!(f, "Cipher header check numbers do not match")
			}
			Diagnostic::KeyTypeMismatch { index } => write!(
				f,
				"Inconsistency between private and public key types for key {index}"
			),
			Diagnostic::KeyParamsMismatch { index } => write!(
				f,
				"Inconsistency between private and public values for key {index}"
			),
			Diagnostic::BadPadding => write!(f, "Incorrect padding at end of ciphertext"),
		}
	}
}

/// A sink that soft warnings are reported into. Parsing never aborts because
/// of what a `Diagnostics` implementation does with a report.
pub trait Diagnostics {
	fn report(&mut self, diagnostic: Diagnostic);
}

impl Diagnostics for Vec<Diagnostic> {
	fn report(&mut self, diagnostic: Diagnostic) {
		self.push(diagnostic);
	}
}

/// Forwards every diagnostic to the `log` crate at `warn` level. This is the
/// default sink for callers who don't need to inspect diagnostics
/// programmatically.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
	fn report(&mut self, diagnostic: Diagnostic) {
		log::warn!("{diagnostic}");
	}
}

/// A sink that discards every diagnostic. Useful in tests that only care
/// about the hard-failure path.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
	fn report(&mut self, _diagnostic: Diagnostic) {}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn vec_sink_collects_in_order() {
		let mut sink: Vec<Diagnostic> = Vec::new();
		sink.report(Diagnostic::BadPadding);
		sink.report(Diagnostic::ExcessBytesInKey { index: 0 });
		assert_eq!(sink.len(), 2);
		assert_eq!(sink[0], Diagnostic::BadPadding);
	}

	#[test]
	fn display_messages_match_spec_wording() {
		assert_eq!(
			Diagnostic::KeyTypeMismatch { index: 0 }.to_string(),
			"Inconsistency between private and public key types for key 0"
		);
		assert_eq!(
			Diagnostic::KeyParamsMismatch { index: 3 }.to_string(),
			"Inconsistency between private and public values for key 3"
		);
	}
}
