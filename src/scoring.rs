//! Handwriting quality scoring.
//!
//! A written glyph is judged only by its vertical extent: how close its lowest point sits to the
//! baseline, how close its highest point sits to the line the glyph should start from, and how
//! its height compares to the distance between those two lines. Horizontal position and the
//! path of the strokes do not contribute.

use crate::glyph::Glyph;
use crate::guides::GuideLines;
use crate::stroke::StrokeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Grade {
	#[display("Not Written")]
	NotWritten,
	#[display("Keep Trying")]
	KeepTrying,
	#[display("Needs Practice")]
	NeedsPractice,
	#[display("Good")]
	Good,
	#[display("Excellent")]
	Excellent,
}

pub const PASSING_SCORE: u8 = 70;

impl Grade {
	/// The grade for a glyph that was written. `NotWritten` is never returned.
	pub fn from_score(score: u8) -> Self {
		match score {
			85.. => Grade::Excellent,
			70.. => Grade::Good,
			50.. => Grade::NeedsPractice,
			_ => Grade::KeepTrying,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
	/// 0 to 100.
	pub score: u8,
	pub grade: Grade,
}

impl ScoreResult {
	pub fn not_written() -> Self {
		Self {
			score: 0,
			grade: Grade::NotWritten,
		}
	}

	/// Fixed result for a mark too small to be an attempt at the glyph.
	pub fn too_few_points() -> Self {
		Self {
			score: 20,
			grade: Grade::KeepTrying,
		}
	}

	pub fn from_score(score: u8) -> Self {
		Self {
			score,
			grade: Grade::from_score(score),
		}
	}

	pub fn is_written(&self) -> bool {
		self.score > 0
	}

	pub fn is_passing(&self) -> bool {
		self.score >= PASSING_SCORE
	}
}

/// Which guide line the top of a glyph is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopReference {
	/// The top line for tall glyphs and the mid line for short ones.
	#[default]
	ByGlyph,
	/// Always the top line.
	TopLine,
}

#[derive(Debug, Clone, Copy, PartialEq, bon::Builder)]
pub struct HandwritingScorer {
	#[builder(default)]
	pub guides: GuideLines,
	#[builder(default)]
	pub top_reference: TopReference,
	/// Fewer points than this are treated as an accidental tap.
	#[builder(default = 5)]
	pub min_points: usize,
}

impl Default for HandwritingScorer {
	fn default() -> Self {
		Self::letters()
	}
}

const BASELINE_WEIGHT: f64 = 0.35;
const TOP_WEIGHT: f64 = 0.35;
const HEIGHT_WEIGHT: f64 = 0.30;

/// Score for an edge `distance` away from its guide line.
pub fn line_score(distance: f64, tolerance: f64, cell_height: f64) -> f64 {
	if distance <= tolerance {
		100.0 - (distance / tolerance) * 30.0
	} else {
		(70.0 - (distance / cell_height) * 100.0).max(30.0)
	}
}

/// Score for a glyph `ratio` times as tall as expected.
pub fn height_score(ratio: f64) -> f64 {
	let deviation = (1.0 - ratio).abs();
	if (0.5..=1.5).contains(&ratio) {
		100.0 - deviation * 60.0
	} else {
		(50.0 - deviation * 30.0).max(20.0)
	}
}

impl HandwritingScorer {
	/// Letter sheets: tall letters are measured from the top line, short ones from the mid line.
	pub fn letters() -> Self {
		Self::builder().build()
	}

	/// Number sheets: every number is measured from the top line.
	pub fn numbers() -> Self {
		Self::builder().top_reference(TopReference::TopLine).build()
	}

	pub fn score(&self, strokes: &StrokeSet, cell_height: f64, glyph: &Glyph) -> ScoreResult {
		let result = self.score_inner(strokes, cell_height, glyph);
		tracing::trace!(%glyph, score = result.score, grade = %result.grade);
		result
	}

	fn score_inner(&self, strokes: &StrokeSet, cell_height: f64, glyph: &Glyph) -> ScoreResult {
		let point_count = strokes.point_count();
		if point_count == 0 {
			return ScoreResult::not_written();
		}
		if point_count < self.min_points {
			return ScoreResult::too_few_points();
		}

		let bounds = strokes.bounds();
		let min_y = bounds.min().y;
		let max_y = bounds.max().y;

		let lines = self.guides.positions(cell_height);
		let expected_top = match self.top_reference {
			TopReference::TopLine => lines.top_line,
			TopReference::ByGlyph if glyph.is_tall() => lines.top_line,
			TopReference::ByGlyph => lines.mid_line,
		};

		let baseline = line_score((max_y - lines.base_line).abs(), lines.tolerance, cell_height);
		let top = line_score((min_y - expected_top).abs(), lines.tolerance, cell_height);

		let expected_height = lines.base_line - expected_top;
		let ratio = if expected_height > 0.0 {
			(max_y - min_y) / expected_height
		} else {
			0.0
		};
		let height = height_score(ratio);

		let total = baseline * BASELINE_WEIGHT + top * TOP_WEIGHT + height * HEIGHT_WEIGHT;
		ScoreResult::from_score(total.clamp(0.0, 100.0).round() as u8)
	}
}
