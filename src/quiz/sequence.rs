use super::{Distractors, Prompt};
use itertools::Itertools;

pub const SEQUENCE_PROBLEMS: usize = 8;
const SHOWN: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SequencePart {
	#[display("Part 1: One Number")]
	One,
	#[display("Part 2: Two Numbers")]
	Two,
	#[display("Part 3: Three Numbers")]
	Three,
}

impl SequencePart {
	pub fn answers_needed(&self) -> u32 {
		match self {
			SequencePart::One => 1,
			SequencePart::Two => 2,
			SequencePart::Three => 3,
		}
	}

	/// The largest number a sequence may reach.
	fn max_number(&self) -> u32 {
		10 + self.answers_needed()
	}
}

/// "What comes next?" Three consecutive numbers are shown and the following ones are asked
/// for one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceProblem {
	pub start: u32,
	pub answers: Vec<u32>,
	/// Choices offered for each answer.
	pub choices: Vec<Vec<u32>>,
}

impl SequenceProblem {
	pub fn shown(&self) -> [u32; SHOWN as usize] {
		[self.start, self.start + 1, self.start + 2]
	}
}

impl Prompt for SequenceProblem {
	fn steps(&self) -> usize {
		self.answers.len()
	}

	fn expected(&self, step: usize) -> u32 {
		self.answers[step]
	}

	fn choices(&self, step: usize) -> &[u32] {
		&self.choices[step]
	}
}

/// Up to [`SEQUENCE_PROBLEMS`] sequences with distinct starting numbers.
pub fn sequence_problems(part: SequencePart, rng: &mut fastrand::Rng) -> Vec<SequenceProblem> {
	let needed = part.answers_needed();
	let max_start = part.max_number() - (SHOWN - 1) - needed;
	let mut starts = (0..=max_start).collect_vec();
	rng.shuffle(&mut starts);
	starts.truncate(SEQUENCE_PROBLEMS);

	let distractors = Distractors::near(2);
	starts
		.into_iter()
		.map(|start| {
			let answers = (0..needed).map(|i| start + SHOWN + i).collect_vec();
			let choices = answers.iter().map(|a| distractors.choices(rng, *a)).collect();
			SequenceProblem {
				start,
				answers,
				choices,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assessment::Phase;
	use crate::quiz::QuizSession;

	#[test]
	fn answers_continue_the_sequence() {
		let mut rng = fastrand::Rng::with_seed(31);
		for part in [SequencePart::One, SequencePart::Two, SequencePart::Three] {
			let problems = sequence_problems(part, &mut rng);
			assert_eq!(problems.len(), SEQUENCE_PROBLEMS);
			assert!(problems.iter().map(|p| p.start).all_unique());
			for p in &problems {
				assert!(p.start <= 8);
				assert_eq!(p.steps(), part.answers_needed() as usize);
				let [_, _, last] = p.shown();
				assert_eq!(p.answers[0], last + 1);
				for (step, answer) in p.answers.iter().enumerate() {
					assert!(p.choices(step).contains(answer));
				}
			}
		}
	}

	#[test]
	fn session_over_sequences() {
		let problems = sequence_problems(SequencePart::Two, &mut fastrand::Rng::with_seed(32));
		let mut session = QuizSession::new();
		session.start(problems).unwrap();
		while session.phase() == Phase::Assessing {
			let (problem, step) = session.current().unwrap();
			let answer = problem.expected(step);
			session.answer(answer).unwrap();
		}
		let summary = session.summary().unwrap();
		assert_eq!(summary.total, SEQUENCE_PROBLEMS * 2);
		assert_eq!(summary.percentage, 100);
	}
}
