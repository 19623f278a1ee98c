use crate::geom::{AABox, Point};
use glam::DVec2;

/// Points captured between one pointer-down and the matching pointer-up, in the order they
/// arrived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
	points: Vec<Point>,
}

impl Stroke {
	pub fn new(points: Vec<Point>) -> Self {
		Self { points }
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

impl FromIterator<Point> for Stroke {
	fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

/// Every stroke written in one cell since it was last cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeSet {
	strokes: Vec<Stroke>,
}

impl StrokeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `stroke`. Strokes without points carry nothing and are dropped.
	pub fn push(&mut self, stroke: Stroke) {
		if stroke.is_empty() {
			return;
		}
		self.strokes.push(stroke);
	}

	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	/// All points of all strokes, stroke by stroke.
	pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
		self.strokes.iter().flat_map(|s| s.points.iter().copied())
	}

	pub fn point_count(&self) -> usize {
		self.strokes.iter().map(Stroke::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.point_count() == 0
	}

	pub fn clear(&mut self) {
		self.strokes.clear();
	}

	pub fn bounds(&self) -> AABox {
		AABox::containing(self.points())
	}
}

impl FromIterator<Stroke> for StrokeSet {
	fn from_iter<T: IntoIterator<Item = Stroke>>(iter: T) -> Self {
		let mut set = Self::new();
		for stroke in iter {
			set.push(stroke);
		}
		set
	}
}

/// A stroke that is still being drawn.
#[derive(Debug, Clone)]
pub struct ActiveStroke {
	stroke: Stroke,
}

impl ActiveStroke {
	pub fn begin(point: Point) -> Self {
		Self {
			stroke: Stroke::new(vec![point]),
		}
	}

	pub fn add_point(&mut self, point: Point) {
		self.stroke.points.push(point);
	}

	pub fn len(&self) -> usize {
		self.stroke.len()
	}

	pub fn finish(self) -> Stroke {
		self.stroke
	}
}

/// Maps pointer coordinates reported relative to the page into the canvas' own pixel space,
/// which differs whenever the canvas is displayed at a size other than its backing size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasScale {
	origin: DVec2,
	scale: DVec2,
}

impl CanvasScale {
	/// `rect_origin` and `rect_size` are the canvas' on-screen bounds, `canvas_size` its backing
	/// size.
	pub fn new(rect_origin: DVec2, rect_size: DVec2, canvas_size: DVec2) -> Self {
		Self {
			origin: rect_origin,
			scale: canvas_size / rect_size,
		}
	}

	pub fn to_canvas(&self, client: DVec2) -> Point {
		(client - self.origin) * self.scale
	}
}
