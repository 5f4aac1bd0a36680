/*!
# Tartan: Parse Results.
*/

use std::{
	collections::BTreeMap,
	fmt,
};



/// # Reserved App-Path Key.
///
/// When app-path capture is enabled — see
/// [`Cmdline::with_app_path`](crate::Cmdline::with_app_path) — the first
/// token of a parse is stored under this key.
pub const KEY_APP: &str = "app";



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Parse Results.
///
/// A mapping from option long-name to string value, filled in by
/// [`Cmdline::parse`](crate::Cmdline::parse). An absent key means the
/// option never appeared; an empty value means it appeared as a bare flag.
///
/// Only the parser writes to this set. Everything else — help callbacks,
/// report sinks, the application proper — reads it through the accessors
/// here, or iterates/prints it wholesale.
pub struct Parsed(BTreeMap<&'static str, String>);

impl fmt::Display for Parsed {
	/// # Dump.
	///
	/// One `["key"]: value` line per entry, in key order.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (k, v) in &self.0 {
			writeln!(f, "[{k:?}]: {v}")?;
		}
		Ok(())
	}
}

impl Parsed {
	#[must_use]
	/// # Value For Key.
	///
	/// Keys are option long names, or [`KEY_APP`] for the invocation path.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::Arg;
	///
	/// let mut cli = tartan::cmdline()
	///     .with_app_path(false)
	///     .with_arg(Arg::optional("out", "o")).unwrap();
	///
	/// let results = cli.parse(["-o", "result.json"]);
	/// assert_eq!(results.get("out"), Some("result.json"));
	/// assert_eq!(results.get("in"), None);
	/// ```
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	#[must_use]
	/// # Key Present?
	pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

	#[must_use]
	/// # App Path.
	///
	/// The first token of the last parse, if app-path capture was enabled.
	pub fn app(&self) -> Option<&str> { self.get(KEY_APP) }

	#[must_use]
	/// # Number of Entries.
	pub fn len(&self) -> usize { self.0.len() }

	#[must_use]
	/// # Empty?
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// # Iterate.
	///
	/// Yield the entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
		self.0.iter().map(|(k, v)| (*k, v.as_str()))
	}
}

impl Parsed {
	/// # Record a Value.
	///
	/// Repeat keys overwrite; the last occurrence on the command line wins.
	pub(super) fn set(&mut self, key: &'static str, value: String) {
		self.0.insert(key, value);
	}

	/// # Reset.
	pub(super) fn reset(&mut self) { self.0.clear(); }
}



/// # Strip Shell Quotes.
///
/// Some platforms re-quote arguments on their way into the process. If a
/// value is wrapped in exactly one pair of double quotes, peel it; interior
/// quotes and anything unbalanced pass through untouched.
pub(super) fn strip_quotes(mut raw: String) -> String {
	if let [b'"', .., b'"'] = raw.as_bytes() {
		raw.pop();
		raw.remove(0);
	}
	raw
}
