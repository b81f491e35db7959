use std::io::{self, Write};

use anyhow::Result;
use log::{info, LevelFilter};

/// Prints the hankaku→zenkaku table to stdout as a C initializer.
fn main() -> Result<()> {
	env_logger::Builder::new()
		.format_timestamp_secs()
		.filter_level(LevelFilter::Info)
		.parse_default_env()
		.init();

	let table = htoz_tablegen::default_mapping()?;
	let fallbacks = table.iter().filter(|e| e.fallback).count();
	info!("generated {} entries ({} using the escape fallback)", table.len(), fallbacks);

	let mut out = io::stdout().lock();
	htoz_tablegen::write_table(&mut out, &table)?;
	out.flush()?;
	Ok(())
}
