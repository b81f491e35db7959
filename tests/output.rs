use std::process::Command;

const EXPECTED: &str = include_str!("htoz_table.h");

fn run() -> Vec<u8> {
	let output = Command::new(env!("CARGO_BIN_EXE_htoz-tablegen"))
		.env("RUST_LOG", "off")
		.output()
		.unwrap();
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	output.stdout
}

#[test]
fn prints_known_table() {
	assert_eq!(String::from_utf8(run()).unwrap(), EXPECTED);
}

#[test]
fn output_is_stable() {
	assert_eq!(run(), run());
}

#[test]
fn matches_library_rendering() {
	let table = htoz_tablegen::default_mapping().unwrap();
	assert_eq!(htoz_tablegen::render_table(&table), EXPECTED);
}
