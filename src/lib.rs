/*!
# Tartan

This crate provides a featherweight, declarative CLI argument parser called
[`Cmdline`], for programs whose needs stop at "a few named options, as
strings" — a couple of rungs below full-service crates like
[clap](https://crates.io/crates/clap).

Declare the options you expect — long name, short name, required or not —
then hand over the raw token vector. Back comes a string-to-string result
set: one entry per option that actually appeared, the program path under a
reserved `"app"` key if you want it, and nothing else. Unrecognized tokens
are dropped, an option followed by another option records an empty string
(a bare flag), and incidental shell re-quoting is stripped from values.

Parsing never fails. The one feedback hook is a callback invoked (at most
once) when a required option didn't show, which is the natural place to
print [`Cmdline::usage`] and bail.

## Example

```
use tartan::Arg;

let mut cli = tartan::cmdline()
    .with_args([
        Arg::required("in", "i"),
        Arg::optional("out", "o"),
    ])
    .unwrap(); // Only unusable names error.

// Real programs would feed it std::env::args().
let results = cli.parse([
    "./mock.app",
    "--ignored",
    "-o", "output.txt",
    "--in", "input.json",
]);

assert_eq!(results.app(), Some("./mock.app"));
assert_eq!(results.get("in"), Some("input.json"));
assert_eq!(results.get("out"), Some("output.txt"));
assert_eq!(results.get("ignored"), None); // Dropped, not collected.
```

When something required goes missing:

```
let mut cli = tartan::cmdline()
    .with_required([("in", "i")]).unwrap()
    .with_optional([("out", "o")]).unwrap();

let mut missing = false;
cli.parse_with(["./mock.app", "-o", "output.txt"], || missing = true);

assert!(missing); // --in never showed.
println!("Error: Missing required options!\n{}", cli.usage());
```

## Caveats

Options and values are matched whole-token. There is no `-abc` clustering,
no `--key=value` shorthand, and no way for an *unquoted* value to begin
with a dash — `--msg -hello` reads as two options. Quote such values into
a single token (`--msg "\"-hello\""`) and the wrapping quotes are stripped
on storage. These are documented limitations of the matching scheme, not
bugs.
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_extern_crates,
	unused_import_braces,
)]



mod cmdline;
mod report;

pub use cmdline::{
	cmdline,
	Arg,
	Cmdline,
	KEY_APP,
	Parsed,
	TartanError,
	Usage,
};
pub use report::MdReport;
