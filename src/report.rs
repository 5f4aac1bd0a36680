/*!
# Tartan: Markdown Report Sink.

Parsing never fails, so "how did it go?" is a question for whoever holds
the results. [`MdReport`] is a small outcome log for exactly that: point it
at a file and it accumulates a markdown record — a timestamp, a title, and
one SUCCEEDED/FAILED line per check — suitable for dropping straight into a
test run's artifacts.

Lines end with the markdown two-space hard break so viewers keep them
separate. The color spans are plain HTML `<font>` tags; renderers that
don't allow them (GitHub) simply show the text.
*/

use crate::Parsed;
use std::{
	fs::File,
	io::{
		self,
		BufWriter,
		Write,
	},
	path::Path,
};
use time::{
	format_description::well_known::Rfc2822,
	OffsetDateTime,
};



/// # Success Span.
const SUCCEEDED: &str = "<font color='#2E8B57'>SUCCEEDED</font>";

/// # Failure Span.
const FAILED: &str = "<font color='#C34A2C'>FAILED</font>";



#[derive(Debug)]
/// # Markdown Report.
///
/// A buffered outcome log. Entries are written as they're recorded;
/// [`MdReport::finish`] flushes explicitly, and dropping the report
/// flushes best-effort.
///
/// ## Examples
///
/// ```no_run
/// use tartan::MdReport;
///
/// let mut report = MdReport::create(
///     "./results.md",
///     "Command Line Parser Testing",
/// ).unwrap();
/// report.record("Parsing with all required arguments.", true).unwrap();
/// report.finish().unwrap();
/// ```
pub struct MdReport {
	/// # Output.
	out: BufWriter<File>,
}

impl MdReport {
	/// # Create a Report.
	///
	/// Open (or truncate) the file at `path` and write the header: the
	/// current UTC time, RFC 2822 style, followed by the bolded `title`.
	///
	/// ## Errors
	///
	/// Returns an error if the file cannot be created or written.
	pub fn create<P: AsRef<Path>>(path: P, title: &str) -> io::Result<Self> {
		let now = OffsetDateTime::now_utc()
			.format(&Rfc2822)
			.map_err(io::Error::other)?;

		let mut out = BufWriter::new(File::create(path)?);
		writeln!(out, "{now}  ")?;
		writeln!(out, "**{title}:**  ")?;
		Ok(Self { out })
	}

	/// # Record an Outcome.
	///
	/// Append one pass/fail line for `label`.
	///
	/// ## Errors
	///
	/// Returns an error if the line cannot be written.
	pub fn record(&mut self, label: &str, passed: bool) -> io::Result<()> {
		let result = if passed { SUCCEEDED } else { FAILED };
		writeln!(self.out, "{result} - {label}  ")
	}

	/// # Record a Result Set.
	///
	/// Append the [`Parsed`] dump as an indented code block, handy for
	/// showing exactly what a scan produced alongside its verdict.
	///
	/// ## Errors
	///
	/// Returns an error if the block cannot be written.
	pub fn results(&mut self, results: &Parsed) -> io::Result<()> {
		writeln!(self.out, "```\n{results}```  ")
	}

	/// # Finish.
	///
	/// Flush everything to disk. Skipping this isn't fatal — the buffer
	/// also flushes on drop — but only an explicit finish surfaces errors.
	///
	/// ## Errors
	///
	/// Returns an error if the flush fails.
	pub fn finish(mut self) -> io::Result<()> { self.out.flush() }
}
