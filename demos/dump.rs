/*!
# Tartan: Argument Dump

This demo parses whatever arguments are fed to it against a small sample
schema and prints the raw tokens followed by the parsed results, e.g.

cargo run --example dump -- --ignored -o output.txt --in input.json
*/

use tartan::Arg;

fn main() {
	let tokens: Vec<String> = std::env::args().collect();

	println!("Command Line Args:");
	for (i, token) in tokens.iter().enumerate() {
		println!("  [{i}]: {token}");
	}

	let mut cli = tartan::cmdline()
		.with_args([
			Arg::optional("in", "i"),
			Arg::optional("out", "o"),
		])
		.expect("Schema registration failed.");

	println!("\nCommand Line Parse Results:\n{}", cli.parse(tokens));
}
