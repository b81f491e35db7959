use std::io::{self, Write};

use crate::mapping::MappingEntry;

pub const HEADER: &str = "static htoz_table_entry htoz_table[] = {";
pub const FOOTER: &str = "};";

/// Writes the table as a C array initializer.
pub fn write_table(w: &mut impl Write, table: &[MappingEntry]) -> io::Result<()> {
	writeln!(w, "{HEADER}")?;
	for &MappingEntry { byte_index, zenkaku: [b0, b1], .. } in table {
		writeln!(w, "    {{ 0x{byte_index:02x}, {{ 0x{b0:02x}, 0x{b1:02x} }} }},")?;
	}
	writeln!(w, "{FOOTER}")
}

pub fn render_table(table: &[MappingEntry]) -> String {
	let mut out = Vec::new();
	write_table(&mut out, table).expect("writing to a Vec cannot fail");
	String::from_utf8(out).expect("table text is ASCII")
}

#[test]
fn entry_lines() {
	let table = crate::mapping::default_mapping().unwrap();
	let text = render_table(&table);
	let lines = text.lines().collect::<Vec<_>>();
	assert_eq!(lines.len(), table.len() + 2);
	assert_eq!(lines[1], "    { 0xa0, { 0x81, 0x40 } },");
	assert_eq!(lines[5], "    { 0xa1, { 0x81, 0x42 } },");
	assert_eq!(lines[33], "    { 0xbe, { 0x82, 0xb9 } },");
	assert_eq!(lines[64], "    { 0xdd, { 0x82, 0xf1 } },");
}

#[test]
fn header_and_footer() {
	let text = render_table(&[]);
	assert_eq!(text, format!("{HEADER}\n{FOOTER}\n"));

	let text = render_table(&crate::mapping::default_mapping().unwrap());
	assert!(text.starts_with(&format!("{HEADER}\n")));
	assert!(text.ends_with(&format!("\n{FOOTER}\n")));
}

#[test]
fn small_values_are_padded() {
	let entry = MappingEntry { byte_index: 0x05, zenkaku: [0x0A, 0x5C], fallback: true };
	assert_eq!(render_table(&[entry]).lines().nth(1), Some("    { 0x05, { 0x0a, 0x5c } },"));
}

#[test]
fn deterministic() {
	let a = render_table(&crate::mapping::default_mapping().unwrap());
	let b = render_table(&crate::mapping::default_mapping().unwrap());
	assert_eq!(a.as_bytes(), b.as_bytes());
}
