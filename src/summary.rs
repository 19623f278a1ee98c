use crate::glyph::Glyph;
use crate::scoring::{ScoreResult, PASSING_SCORE};
use itertools::Itertools;

/// How many weak glyphs a results screen lists.
pub const FOCUS_AREA_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeItem {
	/// Position of the glyph on its sheet.
	pub index: usize,
	pub glyph: Glyph,
	pub score: u8,
}

/// Statistics over every cell of a scored sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
	pub total: usize,
	pub written: usize,
	/// Mean score of the written cells, 0 if nothing was written.
	pub average_score: f64,
	/// Written cells scoring below passing, weakest first.
	pub needs_practice: Vec<PracticeItem>,
}

impl SheetSummary {
	pub fn new<'a>(items: impl IntoIterator<Item = (Glyph, &'a ScoreResult)>) -> Self {
		let items = items.into_iter().collect_vec();
		let written_scores = items
			.iter()
			.filter(|(_, result)| result.is_written())
			.map(|(_, result)| result.score as f64)
			.collect_vec();
		let average_score = if written_scores.is_empty() {
			0.0
		} else {
			written_scores.iter().sum::<f64>() / written_scores.len() as f64
		};
		let needs_practice = items
			.iter()
			.enumerate()
			.filter(|(_, (_, result))| result.is_written() && result.score < PASSING_SCORE)
			.map(|(index, (glyph, result))| PracticeItem {
				index,
				glyph: *glyph,
				score: result.score,
			})
			// Stable, so equal scores stay in sheet order.
			.sorted_by_key(|item| item.score)
			.collect_vec();
		Self {
			total: items.len(),
			written: written_scores.len(),
			average_score,
			needs_practice,
		}
	}

	pub fn rounded_average(&self) -> u8 {
		self.average_score.round() as u8
	}

	pub fn focus_areas(&self, limit: usize) -> &[PracticeItem] {
		&self.needs_practice[..self.needs_practice.len().min(limit)]
	}
}

/// One answer given during a multiple-choice quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
	pub expected: u32,
	pub selected: u32,
	pub correct: bool,
}

impl QuizResult {
	pub fn new(expected: u32, selected: u32) -> Self {
		Self {
			expected,
			selected,
			correct: expected == selected,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
	pub total: usize,
	pub correct: usize,
	pub incorrect: usize,
	/// Share of correct answers, rounded to a whole percent.
	pub percentage: u8,
	/// Expected answers of the wrong responses, in the order they were given.
	pub missed: Vec<u32>,
}

impl QuizSummary {
	pub fn new<'a>(results: impl IntoIterator<Item = &'a QuizResult>) -> Self {
		let (right, wrong): (Vec<&QuizResult>, Vec<&QuizResult>) = results.into_iter().partition(|r| r.correct);
		Self {
			total: right.len() + wrong.len(),
			correct: right.len(),
			incorrect: wrong.len(),
			percentage: percentage(right.len(), right.len() + wrong.len()),
			missed: wrong.iter().map(|r| r.expected).collect(),
		}
	}
}

/// One glyph marked right or wrong by the adult running the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProctoredResult {
	/// Position in the order the glyphs were shown.
	pub index: usize,
	pub glyph: Glyph,
	pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProctoredSummary {
	pub total: usize,
	pub correct: usize,
	pub incorrect: usize,
	pub percentage: u8,
	pub correct_glyphs: Vec<Glyph>,
	pub incorrect_glyphs: Vec<Glyph>,
}

impl ProctoredSummary {
	pub fn new<'a>(results: impl IntoIterator<Item = &'a ProctoredResult>) -> Self {
		let (right, wrong): (Vec<&ProctoredResult>, Vec<&ProctoredResult>) = results.into_iter().partition(|r| r.correct);
		Self {
			total: right.len() + wrong.len(),
			correct: right.len(),
			incorrect: wrong.len(),
			percentage: percentage(right.len(), right.len() + wrong.len()),
			correct_glyphs: right.iter().map(|r| r.glyph).collect(),
			incorrect_glyphs: wrong.iter().map(|r| r.glyph).collect(),
		}
	}
}

/// `correct` out of `total` as a whole percent, 0 when nothing was asked.
fn percentage(correct: usize, total: usize) -> u8 {
	if total == 0 {
		0
	} else {
		(100.0 * correct as f64 / total as f64).round() as u8
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;

	fn sheet(scores: &[u8]) -> Vec<(Glyph, ScoreResult)> {
		scores
			.iter()
			.enumerate()
			.map(|(i, &score)| {
				let result = if score == 0 {
					ScoreResult::not_written()
				} else {
					ScoreResult::from_score(score)
				};
				(Glyph::Number(i as u8), result)
			})
			.collect()
	}

	#[test]
	fn nothing_written() {
		let items = sheet(&[0, 0, 0]);
		let summary = SheetSummary::new(items.iter().map(|(g, r)| (*g, r)));
		assert_eq!(summary.total, 3);
		assert_eq!(summary.written, 0);
		assert_eq!(summary.average_score, 0.0);
		assert!(summary.needs_practice.is_empty());
	}

	#[test]
	fn averages_written_cells_only() {
		let items = sheet(&[0, 90, 45, 0, 20, 69, 70, 45]);
		let summary = SheetSummary::new(items.iter().map(|(g, r)| (*g, r)));
		assert_eq!(summary.total, 8);
		assert_eq!(summary.written, 6);
		assert_abs_diff_eq!(summary.average_score, 339.0 / 6.0, epsilon = 1e-9);
		assert_eq!(summary.rounded_average(), 57);

		let weak = summary
			.needs_practice
			.iter()
			.map(|item| (item.index, item.score))
			.collect_vec();
		assert_eq!(weak, [(4, 20), (2, 45), (7, 45), (5, 69)]);
		assert_eq!(summary.focus_areas(2).len(), 2);
		assert_eq!(summary.focus_areas(FOCUS_AREA_LIMIT).len(), 4);
	}

	#[test]
	fn quiz_summary() {
		let results = [
			QuizResult::new(3, 3),
			QuizResult::new(4, 5),
			QuizResult::new(7, 7),
		];
		let summary = QuizSummary::new(&results);
		assert_eq!(
			summary,
			QuizSummary {
				total: 3,
				correct: 2,
				incorrect: 1,
				percentage: 67,
				missed: vec![4],
			}
		);
		assert_eq!(QuizSummary::new(&[]).percentage, 0);
	}

	#[test]
	fn proctored_summary_lists_glyphs() {
		let results = [
			(Glyph::Letter('M'), true),
			(Glyph::Letter('b'), false),
			(Glyph::Letter('Q'), true),
			(Glyph::Letter('d'), false),
			(Glyph::Letter('S'), true),
			(Glyph::Letter('e'), true),
		]
		.into_iter()
		.enumerate()
		.map(|(index, (glyph, correct))| ProctoredResult { index, glyph, correct })
		.collect_vec();
		let summary = ProctoredSummary::new(&results);
		assert_eq!(summary.total, 6);
		assert_eq!(summary.correct, 4);
		assert_eq!(summary.incorrect, 2);
		assert_eq!(summary.percentage, 67);
		assert_eq!(
			summary.incorrect_glyphs,
			[Glyph::Letter('b'), Glyph::Letter('d')]
		);
		assert_eq!(summary.correct_glyphs.len(), 4);
		assert_eq!(ProctoredSummary::new(&[]).percentage, 0);
	}
}
