use thiserror::Error;

/// The character a writing cell asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Glyph {
	#[display("{_0}")]
	Letter(char),
	#[display("{_0}")]
	Number(u8),
}

/// Lowercase letters that reach the top line. Every uppercase letter does as well.
const TALL_LOWERCASE: [char; 7] = ['b', 'd', 'f', 'h', 'k', 'l', 't'];

pub const MAX_SHEET_NUMBER: u8 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
	#[error("expected a single ASCII letter, got {0:?}")]
	NotALetter(String),

	#[error("expected a number from 0 to {MAX_SHEET_NUMBER}, got {0:?}")]
	NotASheetNumber(String),
}

static_assertions::assert_impl_all!(GlyphError: std::error::Error, Send, Sync);

impl Glyph {
	/// Whether the glyph is written from the top line down to the baseline. Short glyphs start at
	/// the mid line.
	pub fn is_tall(&self) -> bool {
		match *self {
			Glyph::Letter(c) => c.is_ascii_uppercase() || TALL_LOWERCASE.contains(&c),
			Glyph::Number(_) => false,
		}
	}

	pub fn parse_letter(s: &str) -> Result<Self, GlyphError> {
		let mut chars = s.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) if c.is_ascii_alphabetic() => Ok(Glyph::Letter(c)),
			_ => Err(GlyphError::NotALetter(s.to_owned())),
		}
	}

	pub fn parse_number(s: &str) -> Result<Self, GlyphError> {
		s.trim()
			.parse::<u8>()
			.ok()
			.filter(|n| *n <= MAX_SHEET_NUMBER)
			.map(Glyph::Number)
			.ok_or_else(|| GlyphError::NotASheetNumber(s.to_owned()))
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMode {
	#[default]
	Upper,
	Lower,
	/// Each letter independently upper or lower case.
	Mixed,
}

/// One entry of a letter sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetItem {
	/// The uppercase letter, regardless of how it is shown.
	pub base: char,
	pub glyph: Glyph,
}

/// The alphabet in order, cased according to `case`.
pub fn letter_sheet(case: CaseMode, rng: &mut fastrand::Rng) -> Vec<SheetItem> {
	('A'..='Z')
		.map(|base| {
			let upper = match case {
				CaseMode::Upper => true,
				CaseMode::Lower => false,
				CaseMode::Mixed => rng.bool(),
			};
			let shown = if upper {
				base
			} else {
				base.to_ascii_lowercase()
			};
			SheetItem {
				base,
				glyph: Glyph::Letter(shown),
			}
		})
		.collect()
}

pub fn number_sheet() -> Vec<Glyph> {
	(0..=MAX_SHEET_NUMBER).map(Glyph::Number).collect()
}
