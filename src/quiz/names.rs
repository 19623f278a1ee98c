use super::{Prompt, CHOICE_COUNT};
use itertools::Itertools;

/// Pick the right name for a shown item, such as a shape. Names are indices into a list the
/// caller owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameProblem {
	pub answer: u32,
	/// The answer and up to two other names, in random order.
	pub choices: Vec<u32>,
}

impl NameProblem {
	pub fn choice_names<'a>(&self, names: &[&'a str]) -> Vec<&'a str> {
		self.choices.iter().map(|&i| names[i as usize]).collect()
	}
}

impl Prompt for NameProblem {
	fn expected(&self, _step: usize) -> u32 {
		self.answer
	}

	fn choices(&self, _step: usize) -> &[u32] {
		&self.choices
	}
}

/// One problem per name, in random order.
pub fn name_problems(names: usize, rng: &mut fastrand::Rng) -> Vec<NameProblem> {
	let names = names as u32;
	let mut order = (0..names).collect_vec();
	rng.shuffle(&mut order);
	order
		.into_iter()
		.map(|answer| {
			let mut others = (0..names).filter(|&i| i != answer).collect_vec();
			rng.shuffle(&mut others);
			others.truncate(CHOICE_COUNT - 1);
			let mut choices = std::iter::once(answer).chain(others).collect_vec();
			rng.shuffle(&mut choices);
			NameProblem { answer, choices }
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::quiz::QuizSession;

	const FLAT_SHAPES: [&str; 5] = ["Circle", "Triangle", "Square", "Rectangle", "Hexagon"];

	#[test]
	fn every_name_asked_once() {
		let problems = name_problems(FLAT_SHAPES.len(), &mut fastrand::Rng::with_seed(6));
		assert_eq!(problems.len(), 5);
		assert!(problems.iter().map(|p| p.answer).all_unique());
		for problem in &problems {
			assert_eq!(problem.choices.len(), CHOICE_COUNT);
			assert!(problem.choices.contains(&problem.answer));
			assert!(problem.choices.iter().all_unique());
			assert!(problem
				.choice_names(&FLAT_SHAPES)
				.contains(&FLAT_SHAPES[problem.answer as usize]));
		}
	}

	#[test]
	fn short_lists_offer_every_name() {
		let problems = name_problems(2, &mut fastrand::Rng::with_seed(1));
		assert!(problems.iter().all(|p| p.choices.iter().sorted().eq(&[0, 1])));
		assert!(name_problems(0, &mut fastrand::Rng::with_seed(1)).is_empty());
	}

	#[test]
	fn runs_in_a_session() {
		let mut session = QuizSession::new();
		session
			.start(name_problems(4, &mut fastrand::Rng::with_seed(8)))
			.unwrap();
		while let Some((problem, step)) = session.current() {
			session.answer(problem.expected(step)).unwrap();
		}
		assert_eq!(session.summary().map(|s| s.percentage), Some(100));
	}
}
