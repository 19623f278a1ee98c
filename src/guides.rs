/// Side length of a square writing cell, in canvas pixels.
pub const CELL_SIZE: f64 = 80.0;

/// Handwriting paper lines, as fractions of the cell height measured from the top.
#[derive(Debug, Clone, Copy, PartialEq, bon::Builder)]
pub struct GuideLines {
	#[builder(default = 0.15)]
	pub top: f64,
	#[builder(default = 0.5)]
	pub mid: f64,
	#[builder(default = 0.85)]
	pub base: f64,
	/// How far an edge may sit from its line and still score in the near band.
	#[builder(default = 0.2)]
	pub tolerance: f64,
}

impl Default for GuideLines {
	fn default() -> Self {
		Self::builder().build()
	}
}

/// [`GuideLines`] resolved against a concrete cell height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidePositions {
	pub cell_height: f64,
	pub top_line: f64,
	pub mid_line: f64,
	pub base_line: f64,
	pub tolerance: f64,
}

impl GuideLines {
	pub fn positions(&self, cell_height: f64) -> GuidePositions {
		GuidePositions {
			cell_height,
			top_line: cell_height * self.top,
			mid_line: cell_height * self.mid,
			base_line: cell_height * self.base,
			tolerance: cell_height * self.tolerance,
		}
	}
}
