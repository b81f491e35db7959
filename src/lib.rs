mod mapping;
mod printer;

pub use mapping::{
	build_mapping, default_mapping, encode_hankaku, encode_zenkaku, MappingEntry, MappingError, HANKAKU,
	NBSP_BYTE, ZENKAKU,
};
pub use printer::{render_table, write_table, FOOTER, HEADER};

// Generated by build.rs from `default_mapping`.
static HTOZ: phf::Map<u8, [u8; 2]> = include!(concat!(env!("OUT_DIR"), "/htoz.rs"));

/// Full-width Shift JIS bytes for a half-width byte, if the table has one.
pub fn htoz(byte: u8) -> Option<[u8; 2]> {
	HTOZ.get(&byte).copied()
}

/// Converts the half-width characters of a Shift JIS string to full width.
///
/// Two-byte characters are copied through untouched, as are single bytes with
/// no table entry. A lead byte at the very end is copied alone.
pub fn convert_htoz(bytes: &[u8]) -> Vec<u8> {
	let mut out = Vec::with_capacity(bytes.len() * 2);
	let mut iter = bytes.iter().copied();
	while let Some(a) = iter.next() {
		match a {
			0x81..=0x9F | 0xE0..=0xFC => {
				out.push(a);
				out.extend(iter.next());
			}
			_ => match htoz(a) {
				Some(zk) => out.extend(zk),
				None => out.push(a),
			},
		}
	}
	out
}

#[test]
fn compiled_table_matches_builder() {
	let table = default_mapping().unwrap();
	assert_eq!(HTOZ.len(), table.len());
	for entry in table {
		assert_eq!(htoz(entry.byte_index), Some(entry.zenkaku));
	}
	assert_eq!(htoz(b'A'), None);
	assert_eq!(htoz(0xDE), None); // ﾞ has no entry
}

#[test]
fn convert_halfwidth_text() {
	// ｱｲｳ!
	assert_eq!(convert_htoz(&[0xB1, 0xB2, 0xB3, 0x21]), [0x82, 0xA0, 0x82, 0xA2, 0x82, 0xA4, 0x81, 0x49]);
	// plain ASCII other than ! and ? is untouched
	assert_eq!(convert_htoz(b"abc"), b"abc");
	assert!(convert_htoz(&[]).is_empty());
}

#[test]
fn convert_keeps_double_byte() {
	// 漢 is 0x8A 0xBF; its trail byte also has a table entry as a half-width byte
	assert_eq!(convert_htoz(&[0x8A, 0xBF, 0xBF]), [0x8A, 0xBF, 0x82, 0xBB]);
	// 、 is 0x81 0x41, trail byte is 'A'
	assert_eq!(convert_htoz(&[0x81, 0x41, 0xA1]), [0x81, 0x41, 0x81, 0x42]);
	// dangling lead byte
	assert_eq!(convert_htoz(&[0xA4, 0x82]), [0x81, 0x41, 0x82]);
}
