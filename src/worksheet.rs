//! Completed writing sheets stored as JSON, e.g.
//!
//! ```json
//! { "kind": "letters", "cell_size": 80, "cells": [ { "glyph": "A", "strokes": [[[40, 12], [40, 68]]] } ] }
//! ```

use crate::geom::Point;
use crate::glyph::{Glyph, GlyphError};
use crate::guides::CELL_SIZE;
use crate::scoring::{HandwritingScorer, ScoreResult};
use crate::stroke::{Stroke, StrokeSet};
use crate::summary::SheetSummary;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetKind {
	Letters,
	Numbers,
}

impl SheetKind {
	pub fn scorer(&self) -> HandwritingScorer {
		match self {
			SheetKind::Letters => HandwritingScorer::letters(),
			SheetKind::Numbers => HandwritingScorer::numbers(),
		}
	}

	fn parse_glyph(&self, s: &str) -> Result<Glyph, GlyphError> {
		match self {
			SheetKind::Letters => Glyph::parse_letter(s),
			SheetKind::Numbers => Glyph::parse_number(s),
		}
	}
}

fn default_cell_size() -> f64 {
	CELL_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellRecord {
	pub glyph: String,
	#[serde(default)]
	pub strokes: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRecord {
	pub kind: SheetKind,
	#[serde(default = "default_cell_size")]
	pub cell_size: f64,
	pub cells: Vec<CellRecord>,
}

#[derive(Debug, Error)]
pub enum WorksheetError {
	#[error("invalid worksheet: {0}")]
	Json(#[from] serde_json::Error),

	#[error("cell {cell}: {source}")]
	Glyph {
		cell: usize,
		#[source]
		source: GlyphError,
	},

	#[error("cell size must be positive, got {0}")]
	CellSize(f64),
}

static_assertions::assert_impl_all!(WorksheetError: std::error::Error, Send, Sync);

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCell {
	pub glyph: Glyph,
	pub result: ScoreResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSheet {
	pub kind: SheetKind,
	pub cells: Vec<ScoredCell>,
	pub summary: SheetSummary,
}

impl SheetRecord {
	pub fn from_json(json: &str) -> Result<Self, WorksheetError> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn score(&self) -> Result<ScoredSheet, WorksheetError> {
		if !(self.cell_size > 0.0) {
			return Err(WorksheetError::CellSize(self.cell_size));
		}
		let scorer = self.kind.scorer();
		let cells = self
			.cells
			.iter()
			.enumerate()
			.map(|(cell, record)| {
				let glyph = self
					.kind
					.parse_glyph(&record.glyph)
					.map_err(|source| WorksheetError::Glyph { cell, source })?;
				let strokes: StrokeSet = record
					.strokes
					.iter()
					.map(|points| points.iter().map(|&p| Point::from(p)).collect::<Stroke>())
					.collect();
				let result = scorer.score(&strokes, self.cell_size, &glyph);
				Ok(ScoredCell { glyph, result })
			})
			.collect::<Result<Vec<_>, WorksheetError>>()?;
		let summary = SheetSummary::new(cells.iter().map(|c| (c.glyph, &c.result)));
		Ok(ScoredSheet {
			kind: self.kind,
			cells,
			summary,
		})
	}
}
