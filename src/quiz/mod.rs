//! Multiple-choice number quizzes.
//!
//! Problem sets are generated from an explicit [`fastrand::Rng`] so that a seeded generator
//! reproduces the same quiz. A [`QuizSession`] then walks a child through the problems one
//! answer at a time. A [`ProctoredSession`] instead shows glyphs that an adult marks right or
//! wrong.

use crate::assessment::Phase;
use crate::summary::{QuizResult, QuizSummary};
use std::ops::RangeInclusive;
use thiserror::Error;

mod addition;
pub use addition::*;

mod compare;
pub use compare::*;

mod names;
pub use names::*;

mod proctored;
pub use proctored::*;

mod quantity;
pub use quantity::*;

mod sequence;
pub use sequence::*;

/// Pictures used when a quiz shows a quantity instead of a numeral.
pub const PICTURE_ITEMS: [&str; 8] = ["⭐", "🍎", "🔵", "❤️", "🌸", "🐟", "🦋", "🎈"];

pub const CHOICE_COUNT: usize = 3;

/// How wrong answers are picked for a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distractors {
	/// Distractors lie within this distance of the answer.
	pub spread: u32,
	/// Distractors are clamped into this range.
	pub bounds: RangeInclusive<u32>,
	/// Whether a failed near pick is followed by a pick from anywhere in `bounds`.
	pub top_up: bool,
}

impl Distractors {
	pub fn near(spread: u32) -> Self {
		Self {
			spread,
			bounds: 0..=u32::MAX,
			top_up: false,
		}
	}

	/// [`CHOICE_COUNT`] distinct values including `answer`, in random order. Fewer when `bounds`
	/// and `spread` leave too few values to pick from.
	pub fn choices(&self, rng: &mut fastrand::Rng, answer: u32) -> Vec<u32> {
		let mut choices = Vec::with_capacity(CHOICE_COUNT);
		choices.push(answer);
		let wanted = CHOICE_COUNT.min(1 + self.available(answer));
		let spread = self.spread as i64;
		let (lo, hi) = (*self.bounds.start() as i64, *self.bounds.end() as i64);
		while choices.len() < wanted {
			let candidate = (answer as i64 + rng.i64(-spread..=spread)).clamp(lo, hi) as u32;
			if !choices.contains(&candidate) {
				choices.push(candidate);
			}
			if self.top_up && choices.len() < wanted {
				let candidate = rng.u32(self.bounds.clone());
				if !choices.contains(&candidate) {
					choices.push(candidate);
				}
			}
		}
		rng.shuffle(&mut choices);
		choices
	}

	/// How many values other than `answer` can be drawn.
	fn available(&self, answer: u32) -> usize {
		if self.bounds.is_empty() {
			return 0;
		}
		let pool = if self.top_up {
			self.bounds.clone()
		} else {
			let (lo, hi) = (*self.bounds.start(), *self.bounds.end());
			answer.saturating_sub(self.spread).clamp(lo, hi)..=answer.saturating_add(self.spread).clamp(lo, hi)
		};
		let size = u64::from(*pool.end()) - u64::from(*pool.start()) + 1;
		let others = size - u64::from(pool.contains(&answer));
		usize::try_from(others).unwrap_or(usize::MAX)
	}
}

/// A question that may ask for several answers in turn.
pub trait Prompt {
	fn steps(&self) -> usize {
		1
	}

	fn expected(&self, step: usize) -> u32;

	fn choices(&self, step: usize) -> &[u32];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
	#[error("cannot {action} during {phase}")]
	WrongPhase { action: &'static str, phase: Phase },

	#[error("a quiz needs at least one problem")]
	NoProblems,
}

static_assertions::assert_impl_all!(QuizError: std::error::Error, Send, Sync);

#[derive(Debug, Clone)]
pub struct QuizSession<P> {
	phase: Phase,
	problems: Vec<P>,
	current: usize,
	step: usize,
	results: Vec<QuizResult>,
}

impl<P> Default for QuizSession<P> {
	fn default() -> Self {
		Self {
			phase: Phase::Setup,
			problems: Vec::new(),
			current: 0,
			step: 0,
			results: Vec::new(),
		}
	}
}

impl<P: Prompt> QuizSession<P> {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn problems(&self) -> &[P] {
		&self.problems
	}

	pub fn results(&self) -> &[QuizResult] {
		&self.results
	}

	/// The problem being asked and which of its answers is wanted.
	pub fn current(&self) -> Option<(&P, usize)> {
		if self.phase != Phase::Assessing {
			return None;
		}
		Some((&self.problems[self.current], self.step))
	}

	pub fn start(&mut self, problems: Vec<P>) -> Result<(), QuizError> {
		if self.phase != Phase::Setup {
			return Err(QuizError::WrongPhase {
				action: "start",
				phase: self.phase,
			});
		}
		if problems.is_empty() {
			return Err(QuizError::NoProblems);
		}
		tracing::debug!(problems = problems.len(), "quiz started");
		*self = Self {
			phase: Phase::Assessing,
			problems,
			..Self::default()
		};
		Ok(())
	}

	/// Records `selected` for the current step. A correct answer moves on to the problem's next
	/// step; a wrong one abandons the rest of the problem.
	pub fn answer(&mut self, selected: u32) -> Result<QuizResult, QuizError> {
		let Some((problem, step)) = self.current() else {
			return Err(QuizError::WrongPhase {
				action: "answer",
				phase: self.phase,
			});
		};
		let result = QuizResult::new(problem.expected(step), selected);
		let more_steps = result.correct && step + 1 < problem.steps();
		self.results.push(result);

		if more_steps {
			self.step += 1;
		} else if self.current + 1 < self.problems.len() {
			self.current += 1;
			self.step = 0;
		} else {
			tracing::debug!(answers = self.results.len(), "quiz complete");
			self.phase = Phase::Complete;
		}
		Ok(result)
	}

	pub fn summary(&self) -> Option<QuizSummary> {
		(self.phase == Phase::Complete).then(|| QuizSummary::new(&self.results))
	}

	pub fn restart(&mut self) {
		*self = Self::default();
	}
}
