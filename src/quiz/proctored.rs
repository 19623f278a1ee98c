use super::QuizError;
use crate::assessment::Phase;
use crate::glyph::Glyph;
use crate::summary::{ProctoredResult, ProctoredSummary};

/// Shows one glyph at a time while an adult marks each response right or wrong.
#[derive(Debug, Clone)]
pub struct ProctoredSession {
	phase: Phase,
	glyphs: Vec<Glyph>,
	results: Vec<ProctoredResult>,
}

impl Default for ProctoredSession {
	fn default() -> Self {
		Self {
			phase: Phase::Setup,
			glyphs: Vec::new(),
			results: Vec::new(),
		}
	}
}

impl ProctoredSession {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// The glyphs in the order they are shown.
	pub fn glyphs(&self) -> &[Glyph] {
		&self.glyphs
	}

	pub fn results(&self) -> &[ProctoredResult] {
		&self.results
	}

	pub fn current(&self) -> Option<Glyph> {
		if self.phase != Phase::Assessing {
			return None;
		}
		self.glyphs.get(self.results.len()).copied()
	}

	/// Starts showing `glyphs`, in sheet order or shuffled with `shuffle`.
	pub fn start(
		&mut self,
		mut glyphs: Vec<Glyph>,
		shuffle: Option<&mut fastrand::Rng>,
	) -> Result<(), QuizError> {
		if self.phase != Phase::Setup {
			return Err(QuizError::WrongPhase {
				action: "start",
				phase: self.phase,
			});
		}
		if glyphs.is_empty() {
			return Err(QuizError::NoProblems);
		}
		if let Some(rng) = shuffle {
			rng.shuffle(&mut glyphs);
		}
		tracing::debug!(glyphs = glyphs.len(), "proctored assessment started");
		*self = Self {
			phase: Phase::Assessing,
			glyphs,
			results: Vec::new(),
		};
		Ok(())
	}

	/// Marks the current glyph and moves on to the next one.
	pub fn record(&mut self, correct: bool) -> Result<ProctoredResult, QuizError> {
		let Some(glyph) = self.current() else {
			return Err(QuizError::WrongPhase {
				action: "record",
				phase: self.phase,
			});
		};
		let result = ProctoredResult {
			index: self.results.len(),
			glyph,
			correct,
		};
		self.results.push(result);
		if self.results.len() == self.glyphs.len() {
			tracing::debug!(results = self.results.len(), "proctored assessment complete");
			self.phase = Phase::Complete;
		}
		Ok(result)
	}

	pub fn summary(&self) -> Option<ProctoredSummary> {
		(self.phase == Phase::Complete).then(|| ProctoredSummary::new(&self.results))
	}

	pub fn restart(&mut self) {
		*self = Self::default();
	}
}
