use super::{Distractors, Prompt, PICTURE_ITEMS};

pub const MAX_QUANTITY: u32 = 20;

/// "How many are there?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityQuestion {
	pub count: u32,
	pub item: &'static str,
	pub choices: Vec<u32>,
}

impl Prompt for QuantityQuestion {
	fn expected(&self, _step: usize) -> u32 {
		self.count
	}

	fn choices(&self, _step: usize) -> &[u32] {
		&self.choices
	}
}

/// One question for every count from 0 to [`MAX_QUANTITY`], in random order.
pub fn quantity_questions(rng: &mut fastrand::Rng) -> Vec<QuantityQuestion> {
	let distractors = Distractors {
		spread: 2,
		bounds: 0..=MAX_QUANTITY,
		top_up: true,
	};
	let mut questions = (0..=MAX_QUANTITY)
		.map(|count| QuantityQuestion {
			count,
			item: PICTURE_ITEMS[rng.usize(..PICTURE_ITEMS.len())],
			choices: distractors.choices(rng, count),
		})
		.collect::<Vec<_>>();
	rng.shuffle(&mut questions);
	questions
}
