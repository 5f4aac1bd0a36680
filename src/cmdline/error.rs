/*!
# Tartan: Errors.
*/

use std::fmt;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Registration Error.
///
/// The parse pass itself never fails; the only fallible operation in the
/// core is schema registration, which rejects unusable option names.
pub enum TartanError {
	/// # Unusable Long Name.
	InvalidLong(&'static str),

	/// # Unusable Short Name.
	InvalidShort(&'static str),
}

impl std::error::Error for TartanError {}

impl fmt::Display for TartanError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidLong(s) => write!(f, "Invalid long name: {s:?}"),
			Self::InvalidShort(s) => write!(f, "Invalid short name: {s:?}"),
		}
	}
}

impl TartanError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::InvalidLong(_) => "Invalid long name.",
			Self::InvalidShort(_) => "Invalid short name.",
		}
	}
}
