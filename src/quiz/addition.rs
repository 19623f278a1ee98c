use super::{Distractors, Prompt};
use std::collections::HashSet;
use std::ops::RangeInclusive;

pub const ADDITION_PROBLEMS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AdditionPart {
	#[display("Part 1: 0-5")]
	SingleDigitToFive,
	#[display("Part 2: 0-9")]
	SingleDigitToNine,
	#[display("Part 1: 10-20")]
	TeensPlusOne,
	#[display("Part 2: 10-90")]
	TensPlusOne,
}

impl AdditionPart {
	/// Ranges the first and second addends are drawn from.
	pub fn addends(&self) -> (RangeInclusive<u32>, RangeInclusive<u32>) {
		match self {
			AdditionPart::SingleDigitToFive => (0..=5, 0..=5),
			AdditionPart::SingleDigitToNine => (0..=9, 0..=9),
			AdditionPart::TeensPlusOne => (10..=20, 1..=9),
			AdditionPart::TensPlusOne => (10..=90, 1..=9),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionProblem {
	pub a: u32,
	pub b: u32,
	pub choices: Vec<u32>,
}

impl AdditionProblem {
	pub fn answer(&self) -> u32 {
		self.a + self.b
	}
}

impl Prompt for AdditionProblem {
	fn expected(&self, _step: usize) -> u32 {
		self.answer()
	}

	fn choices(&self, _step: usize) -> &[u32] {
		&self.choices
	}
}

/// [`ADDITION_PROBLEMS`] distinct sums for `part`.
pub fn addition_problems(part: AdditionPart, rng: &mut fastrand::Rng) -> Vec<AdditionProblem> {
	let (first, second) = part.addends();
	let distractors = Distractors::near(3);
	let mut seen = HashSet::new();
	let mut problems = Vec::with_capacity(ADDITION_PROBLEMS);
	while problems.len() < ADDITION_PROBLEMS {
		let a = rng.u32(first.clone());
		let b = rng.u32(second.clone());
		if !seen.insert((a, b)) {
			continue;
		}
		problems.push(AdditionProblem {
			a,
			b,
			choices: distractors.choices(rng, a + b),
		});
	}
	problems
}
