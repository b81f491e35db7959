//! The hankaku→zenkaku correspondence and the builder that turns it into bytes.
//!
//! This file is also compiled into `build.rs`, so it must stay free of `crate::` paths.

use encoding_rs::SHIFT_JIS;

/// Full-width side of the mapping used by `convert_htoz`. Not in Shift JIS byte order.
pub const ZENKAKU: &str = "　！？…。「」、をぁぃぅぇぉゃゅょっーあいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわん";
/// Half-width side, aligned with [`ZENKAKU`] by position.
pub const HANKAKU: &str = "\u{a0}!?･｡｢｣､ｦｧｨｩｪｫｬｭｮｯｰｱｲｳｴｵｶｷｸｹｺｻｼｽｾｿﾀﾁﾂﾃﾄﾅﾆﾇﾈﾉﾊﾋﾌﾍﾎﾏﾐﾑﾒﾓﾔﾕﾖﾗﾘﾙﾚﾛﾜﾝ";

/// Byte used for the no-break space slot at position zero.
pub const NBSP_BYTE: u8 = 0xA0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MappingEntry {
	/// Half-width source byte.
	pub byte_index: u8,
	/// Full-width target bytes.
	pub zenkaku: [u8; 2],
	/// The target bytes are the start of a backslash escape, not a real glyph.
	pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
	#[error("mapping strings differ in length: {hankaku} hankaku vs {zenkaku} zenkaku characters")]
	LengthMismatch { hankaku: usize, zenkaku: usize },
	#[error("{char:?} at position {index} has no single-byte Shift JIS encoding")]
	NotSingleByte { index: usize, char: char },
	#[error("{char:?} at position {index} encodes to {len} byte(s), expected two")]
	NotDoubleByte { index: usize, char: char, len: usize },
}

pub fn encode_hankaku(char: char) -> Option<u8> {
	if char.is_ascii() {
		Some(char as u8)
	} else if ('｡'..='ﾟ').contains(&char) {
		Some((char as u32 - '｡' as u32) as u8 + 0xA1)
	} else {
		match encode(char) {
			Some(bytes) if bytes.len() == 1 => Some(bytes[0]),
			_ => None,
		}
	}
}

/// Encodes a full-width character. Unmappable characters become an ASCII
/// backslash escape instead, and the returned flag is set.
pub fn encode_zenkaku(char: char) -> (Vec<u8>, bool) {
	match encode(char) {
		Some(bytes) => (bytes, false),
		None => (backslash_escape(char).into_bytes(), true),
	}
}

fn encode(char: char) -> Option<Vec<u8>> {
	let mut buf = [0; 4];
	let (bytes, _, had_errors) = SHIFT_JIS.encode(char.encode_utf8(&mut buf));
	if had_errors {
		None
	} else {
		Some(bytes.into_owned())
	}
}

fn backslash_escape(char: char) -> String {
	match char as u32 {
		c @ ..=0xFF => format!("\\x{c:02x}"),
		c @ ..=0xFFFF => format!("\\u{c:04x}"),
		c => format!("\\U{c:08x}"),
	}
}

pub fn build_mapping(hankaku: &str, zenkaku: &str) -> Result<Vec<MappingEntry>, MappingError> {
	let (h_len, z_len) = (hankaku.chars().count(), zenkaku.chars().count());
	if h_len != z_len {
		return Err(MappingError::LengthMismatch { hankaku: h_len, zenkaku: z_len });
	}

	let mut table = Vec::with_capacity(h_len);
	for (index, (hk, zk)) in hankaku.chars().zip(zenkaku.chars()).enumerate() {
		// Slot zero holds a no-break space standing in for the half-width blank.
		// It has no Shift JIS encoding, so its byte is fixed rather than encoded.
		let byte_index = if index == 0 {
			NBSP_BYTE
		} else {
			encode_hankaku(hk).ok_or(MappingError::NotSingleByte { index, char: hk })?
		};

		let (bytes, fallback) = encode_zenkaku(zk);
		let &[b0, b1, ..] = bytes.as_slice() else {
			return Err(MappingError::NotDoubleByte { index, char: zk, len: bytes.len() });
		};
		if fallback {
			log::warn!("{zk:?} at position {index} is not Shift JIS encodable, using {:?}", String::from_utf8_lossy(&bytes));
		}

		table.push(MappingEntry { byte_index, zenkaku: [b0, b1], fallback });
	}
	Ok(table)
}

pub fn default_mapping() -> Result<Vec<MappingEntry>, MappingError> {
	build_mapping(HANKAKU, ZENKAKU)
}

#[test]
fn mapping_strings_align() {
	assert_eq!(HANKAKU.chars().count(), ZENKAKU.chars().count());
	assert_eq!(default_mapping().unwrap().len(), 64);
}

#[test]
fn length_mismatch_fails() {
	assert_eq!(
		build_mapping("\u{a0}ｱｲ", "　あ"),
		Err(MappingError::LengthMismatch { hankaku: 3, zenkaku: 2 }),
	);
	assert!(build_mapping("", "あ").is_err());
}

#[test]
fn known_entries() {
	let table = default_mapping().unwrap();
	let entry = |i: usize| (table[i].byte_index, table[i].zenkaku);
	assert_eq!(entry(0), (0xA0, [0x81, 0x40])); // no-break space → ideographic space
	assert_eq!(entry(4), (0xA1, [0x81, 0x42])); // ｡ → 。
	assert_eq!(entry(32), (0xBE, [0x82, 0xB9])); // ｾ → せ
	assert_eq!(entry(63), (0xDD, [0x82, 0xF1])); // ﾝ → ん
	assert_eq!(entry(1), (0x21, [0x81, 0x49])); // ! → ！
}

#[test]
fn nbsp_slot_is_fixed() {
	assert_eq!(encode_hankaku('\u{a0}'), None);
	let table = default_mapping().unwrap();
	assert_eq!(table[0].byte_index, NBSP_BYTE);
	assert!(!table[0].fallback);
}

#[test]
fn default_table_has_no_fallbacks() {
	let table = default_mapping().unwrap();
	let flagged = table.iter().enumerate().filter(|(_, e)| e.fallback).map(|(i, _)| i).collect::<Vec<_>>();
	assert!(flagged.is_empty(), "fallback entries at {flagged:?}");
	for e in &table {
		assert!(matches!(e.zenkaku[0], 0x81..=0x9F | 0xE0..=0xFC), "{e:02X?}");
	}
}

#[test]
fn halfwidth_range() {
	assert_eq!(encode_hankaku('｡'), Some(0xA1));
	assert_eq!(encode_hankaku('･'), Some(0xA5));
	assert_eq!(encode_hankaku('ﾟ'), Some(0xDF));
	assert_eq!(encode_hankaku('?'), Some(0x3F));
	assert_eq!(encode_hankaku('あ'), None);
}

#[test]
fn unmappable_zenkaku_uses_escape() {
	assert_eq!(encode_zenkaku('あ'), (vec![0x82, 0xA0], false));
	assert_eq!(encode_zenkaku('\u{a0}'), (b"\\xa0".to_vec(), true));
	assert_eq!(encode_zenkaku('\u{1f980}'), (b"\\U0001f980".to_vec(), true));

	let table = build_mapping("\u{a0}ｱ", "　\u{1f980}").unwrap();
	assert_eq!(table[1], MappingEntry { byte_index: 0xB1, zenkaku: [0x5C, 0x55], fallback: true });
}

#[test]
fn single_byte_targets_fail() {
	assert_eq!(
		build_mapping("\u{a0}ｱ", "　a"),
		Err(MappingError::NotDoubleByte { index: 1, char: 'a', len: 1 }),
	);
	assert_eq!(
		build_mapping("\u{a0}あ", "　あ"),
		Err(MappingError::NotSingleByte { index: 1, char: 'あ' }),
	);
}
