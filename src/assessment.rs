//! The writing-sheet flow: a sheet of cells is handed out, strokes are written into the cells,
//! the whole sheet is scored at once, and the results are summarized.

use crate::geom::Point;
use crate::glyph::{letter_sheet, number_sheet, CaseMode, Glyph};
use crate::guides::CELL_SIZE;
use crate::scoring::{HandwritingScorer, ScoreResult};
use crate::stroke::{ActiveStroke, StrokeSet};
use crate::summary::SheetSummary;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Phase {
	Setup,
	Assessing,
	Complete,
}

/// What to hand out when an assessment starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
	pub glyphs: Vec<Glyph>,
	pub scorer: HandwritingScorer,
	pub cell_size: f64,
}

impl Worksheet {
	pub fn letters(case: CaseMode, rng: &mut fastrand::Rng) -> Self {
		Self {
			glyphs: letter_sheet(case, rng).into_iter().map(|item| item.glyph).collect(),
			scorer: HandwritingScorer::letters(),
			cell_size: CELL_SIZE,
		}
	}

	pub fn numbers() -> Self {
		Self {
			glyphs: number_sheet(),
			scorer: HandwritingScorer::numbers(),
			cell_size: CELL_SIZE,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
	pub glyph: Glyph,
	pub strokes: StrokeSet,
	/// Set once the sheet has been analyzed.
	pub score: Option<ScoreResult>,
}

impl Cell {
	fn new(glyph: Glyph) -> Self {
		Self {
			glyph,
			strokes: StrokeSet::new(),
			score: None,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	Start(Worksheet),
	PenDown { cell: usize, point: Point },
	PenMove { cell: usize, point: Point },
	PenUp,
	ClearCell(usize),
	Analyze,
	Restart,
}

impl Action {
	fn name(&self) -> &'static str {
		match self {
			Action::Start(_) => "start",
			Action::PenDown { .. } => "pen down",
			Action::PenMove { .. } => "pen move",
			Action::PenUp => "pen up",
			Action::ClearCell(_) => "clear cell",
			Action::Analyze => "analyze",
			Action::Restart => "restart",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
	#[error("cannot {action} during {phase}")]
	WrongPhase { action: &'static str, phase: Phase },

	#[error("cell {cell} does not exist; the sheet has {cells} cells")]
	NoSuchCell { cell: usize, cells: usize },
}

static_assertions::assert_impl_all!(AssessmentError: std::error::Error, Send, Sync);

#[derive(Debug, Clone)]
struct Drag {
	cell: usize,
	stroke: ActiveStroke,
}

#[derive(Debug, Clone)]
pub struct WritingAssessment {
	phase: Phase,
	scorer: HandwritingScorer,
	cell_size: f64,
	cells: Vec<Cell>,
	drag: Option<Drag>,
}

impl Default for WritingAssessment {
	fn default() -> Self {
		Self::new()
	}
}

impl WritingAssessment {
	pub fn new() -> Self {
		Self {
			phase: Phase::Setup,
			scorer: HandwritingScorer::default(),
			cell_size: CELL_SIZE,
			cells: Vec::new(),
			drag: None,
		}
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn cells(&self) -> &[Cell] {
		&self.cells
	}

	pub fn cell_size(&self) -> f64 {
		self.cell_size
	}

	/// The cell currently being drawn in, if any.
	pub fn active_cell(&self) -> Option<usize> {
		self.drag.as_ref().map(|drag| drag.cell)
	}

	/// Results of the analyzed sheet. `None` before the sheet is complete.
	pub fn summary(&self) -> Option<SheetSummary> {
		if self.phase != Phase::Complete {
			return None;
		}
		Some(SheetSummary::new(
			self
				.cells
				.iter()
				.filter_map(|cell| Some((cell.glyph, cell.score.as_ref()?))),
		))
	}

	pub fn apply(&mut self, action: Action) -> Result<(), AssessmentError> {
		let name = action.name();
		match action {
			Action::Start(worksheet) => {
				self.expect_phase(Phase::Setup, name)?;
				self.cells = worksheet.glyphs.into_iter().map(Cell::new).collect();
				self.scorer = worksheet.scorer;
				self.cell_size = worksheet.cell_size;
				self.drag = None;
				self.enter(Phase::Assessing);
			}
			Action::PenDown { cell, point } => {
				self.expect_phase(Phase::Assessing, name)?;
				self.check_cell(cell)?;
				self.commit_drag();
				self.drag = Some(Drag {
					cell,
					stroke: ActiveStroke::begin(point),
				});
			}
			Action::PenMove { cell, point } => {
				self.expect_phase(Phase::Assessing, name)?;
				self.check_cell(cell)?;
				match &mut self.drag {
					Some(drag) if drag.cell == cell => drag.stroke.add_point(point),
					drag => {
						tracing::debug!(cell, active = ?drag.as_ref().map(|d| d.cell), "pen move ignored");
					}
				}
			}
			Action::PenUp => {
				self.expect_phase(Phase::Assessing, name)?;
				if self.drag.is_none() {
					tracing::debug!("pen up ignored, nothing is being drawn");
				}
				self.commit_drag();
			}
			Action::ClearCell(cell) => {
				self.expect_phase(Phase::Assessing, name)?;
				self.check_cell(cell)?;
				if self.active_cell() == Some(cell) {
					self.drag = None;
				}
				let cell = &mut self.cells[cell];
				cell.strokes.clear();
				cell.score = None;
			}
			Action::Analyze => {
				self.expect_phase(Phase::Assessing, name)?;
				self.commit_drag();
				for cell in &mut self.cells {
					cell.score = Some(self.scorer.score(&cell.strokes, self.cell_size, &cell.glyph));
				}
				self.enter(Phase::Complete);
			}
			Action::Restart => {
				self.cells.clear();
				self.drag = None;
				self.enter(Phase::Setup);
			}
		}
		Ok(())
	}

	fn expect_phase(&self, phase: Phase, action: &'static str) -> Result<(), AssessmentError> {
		if self.phase != phase {
			tracing::warn!(action, phase = %self.phase, "action rejected");
			return Err(AssessmentError::WrongPhase {
				action,
				phase: self.phase,
			});
		}
		Ok(())
	}

	fn check_cell(&self, cell: usize) -> Result<(), AssessmentError> {
		if cell >= self.cells.len() {
			return Err(AssessmentError::NoSuchCell {
				cell,
				cells: self.cells.len(),
			});
		}
		Ok(())
	}

	fn commit_drag(&mut self) {
		if let Some(Drag { cell, stroke }) = self.drag.take() {
			self.cells[cell].strokes.push(stroke.finish());
		}
	}

	fn enter(&mut self, phase: Phase) {
		tracing::debug!(from = %self.phase, to = %phase, cells = self.cells.len(), "phase change");
		self.phase = phase;
	}
}
