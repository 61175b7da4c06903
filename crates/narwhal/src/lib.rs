#![forbid(unsafe_code)]

//! Headless paginated grid layout.
//!
//! `narwhal` tiles already-rendered images (chromatograms, spectra, mask panels) onto
//! fixed-size canvases such as slides or mosaic pages. It only computes rectangles; callers
//! paste the images and serialize the result in whatever format they need.

pub mod cell;
pub mod error;
pub mod geom;
pub mod mosaic;
pub mod place;
pub mod spec;
pub mod units;

pub use cell::{available_area, center_grid, compute_cell_size, grid_extent};
pub use error::{Error, Result};
pub use geom::{Axis, Point, Rect, Size, Unit};
pub use mosaic::{Mosaic, fit_single, stack_vertical};
pub use place::{Layout, Placement, fit_rect, place_items, place_sections};
pub use spec::{CellSizing, FillOrder, FitPolicy, GridSpec};

/// Headless layout entry point.
pub fn layout(items: &[Size], spec: &GridSpec) -> Result<Layout> {
    place_items(items, spec)
}
