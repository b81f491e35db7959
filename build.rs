use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

#[allow(dead_code)]
#[path = "src/mapping.rs"]
mod mapping;

fn main() -> anyhow::Result<()> {
	println!("cargo:rerun-if-changed=build.rs");
	println!("cargo:rerun-if-changed=src/mapping.rs");
	let out = PathBuf::from(env::var("OUT_DIR")?);

	let mut table = phf_codegen::Map::new();
	let mut dup = HashSet::new();
	for entry in mapping::default_mapping()? {
		// First entry wins for a repeated byte.
		if dup.insert(entry.byte_index) {
			let [b0, b1] = entry.zenkaku;
			table.entry(entry.byte_index, &format!("[{b0:#04x}, {b1:#04x}]"));
		}
	}
	std::fs::write(out.join("htoz.rs"), table.build().to_string())?;

	Ok(())
}
