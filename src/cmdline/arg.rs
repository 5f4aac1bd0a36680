/*!
# Tartan: Argument Descriptors.
*/



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Argument Descriptor.
///
/// An `Arg` declares one expected option: its long name, its short name,
/// and whether its absence should trip the missing-required callback after
/// a parse. (See [`Cmdline::parse_with`](crate::Cmdline::parse_with).)
///
/// Names are stored _bare_; the leading dashes are implied. On the command
/// line, `Arg::required("in", "i")` answers to `--in` and `-i`, both keyed
/// under `"in"` in the results.
///
/// Matching is whole-token, case-sensitive, and first-come-first-served in
/// registration order. Registering the same name twice is not an error, but
/// only the earlier entry will ever match.
///
/// ## Examples
///
/// ```
/// use tartan::Arg;
///
/// let a = Arg::required("in", "i");
/// let b = Arg::optional("out", "o");
/// assert!(a.is_required() && ! b.is_required());
/// assert_eq!(a.long(), "in");
/// assert_eq!(b.short(), "o");
/// ```
pub struct Arg {
	/// # Long Name.
	long: &'static str,

	/// # Short Name.
	short: &'static str,

	/// # Required?
	required: bool,
}

impl Arg {
	#[must_use]
	/// # New Descriptor.
	///
	/// Declare an option with an explicit `required` flag. The
	/// [`Arg::required`] and [`Arg::optional`] shorthands read better in
	/// most schemas.
	pub const fn new(long: &'static str, short: &'static str, required: bool) -> Self {
		Self { long, short, required }
	}

	#[must_use]
	/// # New Required Descriptor.
	pub const fn required(long: &'static str, short: &'static str) -> Self {
		Self::new(long, short, true)
	}

	#[must_use]
	/// # New Optional Descriptor.
	pub const fn optional(long: &'static str, short: &'static str) -> Self {
		Self::new(long, short, false)
	}
}

impl Arg {
	#[must_use]
	/// # Long Name.
	pub const fn long(&self) -> &'static str { self.long }

	#[must_use]
	/// # Short Name.
	pub const fn short(&self) -> &'static str { self.short }

	#[must_use]
	/// # Required?
	pub const fn is_required(&self) -> bool { self.required }

	/// # Does `token` Name This Option?
	///
	/// True when the token equals `--long` or `-short` exactly.
	pub(crate) fn matches(&self, token: &str) -> bool {
		match token.as_bytes() {
			[b'-', b'-', rest @ ..] if rest == self.long.as_bytes() => true,
			[b'-', rest @ ..] => rest == self.short.as_bytes(),
			_ => false,
		}
	}
}



/// # Valid Name?
///
/// Names must be non-empty and cannot begin with a dash, as the dashes are
/// added during matching. Anything else goes, though lowercase ASCII is the
/// convention.
pub(super) const fn valid_name(name: &[u8]) -> bool {
	! matches!(name, [] | [b'-', ..])
}



#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn t_matches() {
		let arg = Arg::required("in", "i");
		assert!(arg.matches("--in"));
		assert!(arg.matches("-i"));

		// Near misses.
		assert!(! arg.matches("in"));
		assert!(! arg.matches("-in"));
		assert!(! arg.matches("--i"));
		assert!(! arg.matches("--IN"));
		assert!(! arg.matches("--in "));
		assert!(! arg.matches("---in"));
		assert!(! arg.matches(""));
		assert!(! arg.matches("-"));
		assert!(! arg.matches("--"));

		// Multi-byte shorts are unconventional but legal.
		let arg = Arg::optional("verbose", "vv");
		assert!(arg.matches("--verbose"));
		assert!(arg.matches("-vv"));
		assert!(! arg.matches("-v"));
	}

	#[test]
	fn t_valid_name() {
		for name in ["in", "out", "dry-run", "v", "2", "UPPER"] {
			assert!(valid_name(name.as_bytes()), "Bug: {name:?} should be valid.");
		}
		for name in ["", "-", "-i", "--in"] {
			assert!(! valid_name(name.as_bytes()), "Bug: {name:?} shouldn't be valid.");
		}
	}
}
