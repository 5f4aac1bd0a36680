/*!
# Tartan: Command-Line Context.

This module contains the crate's one working part: [`Cmdline`], a
caller-owned parsing context that turns a declared option schema and a raw
token vector into a [`Parsed`] result set.

The context replaces the process-wide registry a tool like this would
historically hang its results on: the most recent results live on the
instance, survive across calls (accumulating, unless [`Cmdline::clear`] is
used between parses), and are readable any time via [`Cmdline::results`].
*/

mod arg;
mod error;
mod parsed;

pub use arg::Arg;
pub use error::TartanError;
pub use parsed::{
	KEY_APP,
	Parsed,
};

use arg::valid_name;
use parsed::strip_quotes;
use std::fmt;



#[derive(Debug, Clone)]
/// # Command-Line Parser.
///
/// `Cmdline` holds a schema of [`Arg`] descriptors, a couple of runtime
/// switches, and the results of its most recent parse. Build one with
/// [`cmdline()`], register the expected options, then feed it tokens.
///
/// Parsing is a single forgiving pass: unrecognized tokens are dropped,
/// matched options record the following token as their value — or an empty
/// string when the next token looks like another option — and nothing ever
/// fails. The only hard feedback channel is the missing-required callback
/// accepted by [`Cmdline::parse_with`], invoked at most once per parse.
///
/// Values that themselves begin with a dash must arrive quoted _inside_ the
/// token (`--msg "\"-whee\""`) or they'll be mistaken for options. That is
/// the documented contract, not a bug.
///
/// ## Examples
///
/// ```
/// use tartan::Arg;
///
/// let mut cli = tartan::cmdline()
///     .with_args([
///         Arg::required("in", "i"),
///         Arg::optional("out", "o"),
///     ])
///     .unwrap(); // Only unusable names error.
///
/// let results = cli.parse([
///     "./mock.app",
///     "--in", "input.json",
///     "-o", "result.json",
/// ]);
///
/// assert_eq!(results.app(), Some("./mock.app"));
/// assert_eq!(results.get("in"), Some("input.json"));
/// assert_eq!(results.get("out"), Some("result.json"));
/// ```
pub struct Cmdline {
	/// # Declared Options.
	args: Vec<Arg>,

	/// # Record the First Token as the App Path?
	app_path: bool,

	/// # Most Recent Results.
	out: Parsed,
}

impl Default for Cmdline {
	#[inline]
	fn default() -> Self {
		Self {
			args: Vec::new(),
			app_path: true,
			out: Parsed::default(),
		}
	}
}

impl Cmdline {
	/// # With Argument.
	///
	/// Add one descriptor to the schema.
	///
	/// Schema order is scan order; if two descriptors answer to the same
	/// token, the one registered first wins. (Duplicates are tolerated,
	/// not flagged.)
	///
	/// ## Errors
	///
	/// Names that are empty or begin with a dash are returned as
	/// [`TartanError::InvalidLong`]/[`TartanError::InvalidShort`].
	pub fn with_arg(mut self, arg: Arg) -> Result<Self, TartanError> {
		if ! valid_name(arg.long().as_bytes()) {
			Err(TartanError::InvalidLong(arg.long()))
		}
		else if ! valid_name(arg.short().as_bytes()) {
			Err(TartanError::InvalidShort(arg.short()))
		}
		else {
			self.args.push(arg);
			Ok(self)
		}
	}

	/// # With Arguments.
	///
	/// Add any number of descriptors to the schema.
	///
	/// ## Examples
	///
	/// ```
	/// use tartan::Arg;
	///
	/// let cli = tartan::cmdline()
	///     .with_args([
	///         Arg::required("in", "i"),
	///         Arg::optional("out", "o"),
	///     ])
	///     .unwrap();
	/// ```
	///
	/// ## Errors
	///
	/// Same deal as [`Cmdline::with_arg`]: unusable names bounce.
	pub fn with_args<I: IntoIterator<Item = Arg>>(self, args: I)
	-> Result<Self, TartanError> {
		args.into_iter().try_fold(self, Self::with_arg)
	}

	/// # With Required Arguments.
	///
	/// Add `(long, short)` pairs that the missing-required check should
	/// insist upon. Saves tuple-izing when a whole batch shares the flag.
	///
	/// ## Errors
	///
	/// Same deal as [`Cmdline::with_arg`]: unusable names bounce.
	pub fn with_required<I: IntoIterator<Item = (&'static str, &'static str)>>(self, args: I)
	-> Result<Self, TartanError> {
		args.into_iter().try_fold(self, |acc, (l, s)| acc.with_arg(Arg::required(l, s)))
	}

	/// # With Optional Arguments.
	///
	/// The counterpart to [`Cmdline::with_required`] for options that may
	/// freely stay home.
	///
	/// ## Errors
	///
	/// Same deal as [`Cmdline::with_arg`]: unusable names bounce.
	pub fn with_optional<I: IntoIterator<Item = (&'static str, &'static str)>>(self, args: I)
	-> Result<Self, TartanError> {
		args.into_iter().try_fold(self, |acc, (l, s)| acc.with_arg(Arg::optional(l, s)))
	}

	#[must_use]
	/// # Toggle App-Path Capture.
	///
	/// Enabled — the default — the first token is taken to be the program's
	/// invocation path and recorded under [`KEY_APP`], with option scanning
	/// starting at the second token. Disabled, no `"app"` entry is made and
	/// scanning starts with the very first token.
	pub const fn with_app_path(mut self, yes: bool) -> Self {
		self.app_path = yes;
		self
	}
}

impl Cmdline {
	/// # Parse!
	///
	/// Run the token scan and return a borrow of the results, which also
	/// remain on the context for later [`Cmdline::results`] calls.
	///
	/// Note that results _accumulate_: parsing twice without an intervening
	/// [`Cmdline::clear`] merges the second pass over the first.
	pub fn parse<I>(&mut self, tokens: I) -> &Parsed
	where I: IntoIterator, I::Item: Into<String> {
		self.parse_with(tokens, || ())
	}

	/// # Parse With Missing-Required Callback.
	///
	/// Same scan as [`Cmdline::parse`], but if any descriptor marked
	/// required failed to show up, `on_missing` is invoked — once, however
	/// many options are absent. Which ones went missing is left for the
	/// caller to work out from the results; the usual move is printing
	/// [`Cmdline::usage`] and bailing.
	///
	/// The scan itself never fails and the (possibly partial) results are
	/// returned either way.
	pub fn parse_with<I, F>(&mut self, tokens: I, on_missing: F) -> &Parsed
	where I: IntoIterator, I::Item: Into<String>, F: FnOnce() {
		let mut tokens = tokens.into_iter().map(Into::into).peekable();

		if self.app_path {
			if let Some(app) = tokens.next() { self.out.set(KEY_APP, app); }
		}

		while let Some(token) = tokens.next() {
			if let Some(key) = self.find(&token) {
				// The next token is this option's value unless it is
				// missing or dash-led, in which case the option stands
				// alone (and the token gets its own turn).
				let value = tokens.next_if(|v| ! v.starts_with('-'))
					.map_or_else(String::new, strip_quotes);
				self.out.set(key, value);
			}
			// Unregistered tokens fall away.
		}

		if self.args.iter().any(|a| a.is_required() && ! self.out.contains(a.long())) {
			on_missing();
		}

		&self.out
	}

	/// # Find the Descriptor Matching `token`.
	///
	/// First registered wins. Returns the long name, which doubles as the
	/// result key.
	fn find(&self, token: &str) -> Option<&'static str> {
		// Matches always start with a dash; skip the scan otherwise.
		if ! token.starts_with('-') { return None; }
		self.args.iter().find(|a| a.matches(token)).map(Arg::long)
	}
}

impl Cmdline {
	#[must_use]
	/// # Last Results.
	///
	/// Borrow the current result set — empty until the first parse, or
	/// after a [`Cmdline::clear`]. Clone it if it needs to outlive the
	/// context.
	pub const fn results(&self) -> &Parsed { &self.out }

	/// # Clear Results.
	///
	/// Reset the result set to empty. Do this between parses unless
	/// accumulation is actually wanted.
	pub fn clear(&mut self) { self.out.reset(); }

	#[must_use]
	/// # Usage Text.
	///
	/// A ready-made [`Display`](fmt::Display) rendering of the schema, one
	/// `--long, -short: [required|optional]` line per option, for help
	/// screens and missing-required callbacks.
	///
	/// ## Examples
	///
	/// ```
	/// let cli = tartan::cmdline()
	///     .with_required([("in", "i")]).unwrap()
	///     .with_optional([("out", "o")]).unwrap();
	///
	/// assert_eq!(
	///     cli.usage().to_string(),
	///     "Command Line Options:\n  --in, -i: [required]\n  --out, -o: [optional]",
	/// );
	/// ```
	pub fn usage(&self) -> Usage<'_> { Usage(&self.args) }
}



#[must_use]
/// # New Parsing Context.
///
/// Return a fresh [`Cmdline`] with an empty schema, app-path capture
/// enabled, and no results.
pub fn cmdline() -> Cmdline { Cmdline::default() }



#[derive(Debug, Clone, Copy)]
/// # Usage Text.
///
/// A borrowed [`Display`](fmt::Display) adapter over a schema, returned by
/// [`Cmdline::usage`].
pub struct Usage<'a>(&'a [Arg]);

impl fmt::Display for Usage<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Command Line Options:")?;
		for a in self.0 {
			write!(
				f, "\n  --{}, -{}: [{}]",
				a.long(),
				a.short(),
				if a.is_required() { "required" } else { "optional" },
			)?;
		}
		Ok(())
	}
}



#[cfg(test)]
mod test {
	use super::*;

	/// # Test Schema.
	///
	/// The `{in/required, out/optional}` schema used throughout, app-path
	/// capture off so token vectors can omit the program path.
	fn schema() -> Cmdline {
		cmdline()
			.with_app_path(false)
			.with_args([
				Arg::required("in", "i"),
				Arg::optional("out", "o"),
			])
			.expect("Schema registration failed.")
	}

	#[test]
	fn t_parse() {
		let mut cli = schema().with_app_path(true);
		let results = cli.parse([
			"./a.out", "--ignored", "-o", "output.txt", "--in", "input.json",
		]);

		assert_eq!(results.len(), 3);
		assert_eq!(results.app(), Some("./a.out"));
		assert_eq!(results.get("in"), Some("input.json"));
		assert_eq!(results.get("out"), Some("output.txt"));
	}

	#[test]
	fn t_alias() {
		let mut long = schema();
		let mut short = schema();

		long.parse(["--in", "input.json", "--out", "result.json"]);
		short.parse(["-i", "input.json", "-o", "result.json"]);

		// Long and short forms are interchangeable; both key under the
		// long name.
		assert_eq!(long.results(), short.results());
		assert_eq!(long.results().get("in"), Some("input.json"));
	}

	#[test]
	fn t_flag_without_value() {
		let mut cli = schema().with_app_path(true);
		let results = cli.parse(["app", "-o", "--in", "input.json"]);

		// -o kept nothing for itself; --in still got its value.
		assert_eq!(results.get("out"), Some(""));
		assert_eq!(results.get("in"), Some("input.json"));
	}

	#[test]
	fn t_flag_at_end() {
		let mut cli = schema();
		let results = cli.parse(["--in"]);
		assert_eq!(results.get("in"), Some(""));
		assert_eq!(results.len(), 1);
	}

	#[test]
	fn t_missing_required() {
		let mut hits = 0_u32;
		let mut cli = schema().with_app_path(true);
		let results = cli.parse_with(
			["app", "-o", "output.json", "--ignored"],
			|| hits += 1,
		);

		assert!(! results.contains("in"));
		assert_eq!(results.get("out"), Some("output.json"));
		assert_eq!(hits, 1, "Callback should fire exactly once.");

		// And not at all when the requirements are met.
		let mut hits = 0_u32;
		let mut cli = schema();
		cli.parse_with(["-i", "input.json"], || hits += 1);
		assert_eq!(hits, 0, "Callback shouldn't fire when nothing's missing.");

		// Empty input is maximally missing; still just the one call.
		let mut hits = 0_u32;
		let mut cli = schema();
		cli.parse_with(Vec::<String>::new(), || hits += 1);
		assert_eq!(hits, 1);
	}

	#[test]
	fn t_unregistered_ignored() {
		let mut cli = schema().with_app_path(true);
		let results = cli.parse([
			"app", "--ignored", "-o", "output.json", "-i", "input.json",
		]);

		assert_eq!(results.len(), 3);
		assert!(! results.contains("ignored"));
		assert_eq!(results.get("in"), Some("input.json"));
		assert_eq!(results.get("out"), Some("output.json"));
	}

	#[test]
	fn t_app_path_toggle() {
		// Enabled: the first token is the app path, no questions asked,
		// even when it looks like an option.
		let mut cli = schema().with_app_path(true);
		let results = cli.parse(["--in", "input.json"]);
		assert_eq!(results.app(), Some("--in"));
		assert!(! results.contains("in"));

		// Disabled: no "app" entry, and scanning starts at the very first
		// token.
		let mut cli = schema();
		let results = cli.parse(["--in", "input.json"]);
		assert!(results.app().is_none());
		assert_eq!(results.get("in"), Some("input.json"));
	}

	#[test]
	fn t_accumulate_and_clear() {
		let mut cli = schema();
		cli.parse(["--in", "input.json"]);
		cli.parse(["-o", "result.json"]);

		// No clear between parses: both passes are present.
		assert_eq!(cli.results().len(), 2);
		assert_eq!(cli.results().get("in"), Some("input.json"));

		cli.clear();
		assert!(cli.results().is_empty());

		// Clear-then-parse is repeatable.
		let first = cli.parse(["--in", "input.json"]).clone();
		cli.clear();
		let second = cli.parse(["--in", "input.json"]).clone();
		assert_eq!(first, second);
	}

	#[test]
	fn t_last_write_wins() {
		let mut cli = schema();
		let results = cli.parse(["--in", "one.json", "-i", "two.json"]);
		assert_eq!(results.get("in"), Some("two.json"));

		// Even a late bare flag clobbers an earlier value.
		let mut cli = schema();
		let results = cli.parse(["--in", "one.json", "--in", "-o", "result.json"]);
		assert_eq!(results.get("in"), Some(""));
		assert_eq!(results.get("out"), Some("result.json"));
	}

	#[test]
	fn t_quoted_values() {
		let mut cli = schema();
		let results = cli.parse(["--in", "\"foo bar\""]);
		assert_eq!(results.get("in"), Some("foo bar"));

		// Quoting is also the escape hatch for dash-led values.
		let mut cli = schema();
		let results = cli.parse(["--in", "\"-dashed value\""]);
		assert_eq!(results.get("in"), Some("-dashed value"));
	}

	#[test]
	fn t_registration() {
		assert_eq!(
			cmdline().with_arg(Arg::required("", "i")).unwrap_err(),
			TartanError::InvalidLong(""),
		);
		assert_eq!(
			cmdline().with_arg(Arg::optional("in", "-i")).unwrap_err(),
			TartanError::InvalidShort("-i"),
		);

		// Duplicates register fine; the first matching descriptor wins,
		// so both spellings land under the first long name.
		let mut cli = cmdline()
			.with_app_path(false)
			.with_args([
				Arg::optional("in", "i"),
				Arg::optional("out", "i"),
			])
			.expect("Schema registration failed.");
		let results = cli.parse(["-i", "input.json"]);
		assert_eq!(results.get("in"), Some("input.json"));
		assert!(! results.contains("out"));
	}

	#[test]
	fn t_usage() {
		let cli = schema();
		assert_eq!(
			cli.usage().to_string(),
			"Command Line Options:\n  --in, -i: [required]\n  --out, -o: [optional]",
		);

		// An empty schema still gets its header.
		assert_eq!(cmdline().usage().to_string(), "Command Line Options:");
	}
}
