/*!
# Tartan: Missing-Required Demo

This demo requires an --in/-i option; leave it off to see the usage text
arrive via the missing-required callback.

cargo run --example missing
cargo run --example missing -- --in input.json
*/

fn main() {
	let mut cli = tartan::cmdline()
		.with_required([("in", "i")])
		.expect("Schema registration failed.")
		.with_optional([("out", "o")])
		.expect("Schema registration failed.");

	let mut missing = false;
	cli.parse_with(std::env::args(), || missing = true);

	if missing {
		eprintln!("Error: Missing required options!\n{}", cli.usage());
		std::process::exit(1);
	}

	println!("{}", cli.results());
}
