pub mod util;

mod geom;
pub use geom::*;

mod stroke;
pub use stroke::*;

mod guides;
pub use guides::*;

mod glyph;
pub use glyph::*;

mod scoring;
pub use scoring::*;

mod summary;
pub use summary::*;

mod assessment;
pub use assessment::*;

pub mod quiz;

mod worksheet;
pub use worksheet::*;
