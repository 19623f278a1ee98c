use glam::DVec2;

/// A position in canvas pixel space. `y` grows downward.
pub type Point = DVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
	min: DVec2,
	max: DVec2,
}

impl AABox {
	pub fn new(min: DVec2, max: DVec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(DVec2::MAX, DVec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: DVec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = DVec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn min(&self) -> DVec2 {
		self.min
	}

	pub fn max(&self) -> DVec2 {
		self.max
	}

	/// Vertical extent, zero for an empty box.
	pub fn height(&self) -> f64 {
		if self.is_empty() {
			0.0
		} else {
			self.max.y - self.min.y
		}
	}
}
