use super::{Prompt, PICTURE_ITEMS};
use std::collections::HashSet;

pub const NUMERAL_COMPARISONS: usize = 6;
pub const QUANTITY_COMPARISONS: usize = 6;

/// How the two numbers are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
	Numerals,
	/// Each number drawn as that many copies of `item`.
	Quantities { item: &'static str },
}

/// "Which is bigger?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonProblem {
	pub shown_as: Comparison,
	pub choices: [u32; 2],
}

impl ComparisonProblem {
	pub fn answer(&self) -> u32 {
		self.choices[0].max(self.choices[1])
	}
}

impl Prompt for ComparisonProblem {
	fn expected(&self, _step: usize) -> u32 {
		self.answer()
	}

	fn choices(&self, _step: usize) -> &[u32] {
		&self.choices
	}
}

/// Numeral pairs from 0 to 10 and picture pairs from 1 to 10, shuffled together. The two
/// numbers of a pair always differ and no pair repeats within its kind.
pub fn comparison_problems(rng: &mut fastrand::Rng) -> Vec<ComparisonProblem> {
	let mut seen = HashSet::new();
	let mut problems = Vec::with_capacity(NUMERAL_COMPARISONS + QUANTITY_COMPARISONS);
	push_pairs(rng, &mut seen, false, NUMERAL_COMPARISONS, &mut problems);
	push_pairs(rng, &mut seen, true, QUANTITY_COMPARISONS, &mut problems);
	rng.shuffle(&mut problems);
	problems
}

fn push_pairs(
	rng: &mut fastrand::Rng,
	seen: &mut HashSet<(bool, u32, u32)>,
	quantities: bool,
	count: usize,
	out: &mut Vec<ComparisonProblem>,
) {
	let range = if quantities { 1..=10 } else { 0..=10 };
	let mut made = 0;
	while made < count {
		let a = rng.u32(range.clone());
		let b = rng.u32(range.clone());
		if a == b || !seen.insert((quantities, a.min(b), a.max(b))) {
			continue;
		}
		let shown_as = if quantities {
			Comparison::Quantities {
				item: PICTURE_ITEMS[rng.usize(..PICTURE_ITEMS.len())],
			}
		} else {
			Comparison::Numerals
		};
		out.push(ComparisonProblem {
			shown_as,
			choices: [a, b],
		});
		made += 1;
	}
}
