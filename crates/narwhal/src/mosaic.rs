//! Free-form arrangements that do not use a fixed grid.

use crate::geom::{Rect, Size, Unit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mosaic {
    pub canvas_size: Size,
    /// One rectangle per input item, in input order.
    pub rects: Vec<Rect>,
}

/// Stacks items top to bottom at their natural size on a canvas as wide as the widest item.
/// Narrower items are centered horizontally.
pub fn stack_vertical(items: &[Size]) -> Mosaic {
    let width = items.iter().map(|s| s.width.max(0)).max().unwrap_or(0);
    let mut top: Unit = 0;
    let mut rects = Vec::with_capacity(items.len());
    for item in items {
        let (w, h) = (item.width.max(0), item.height.max(0));
        rects.push(Rect::new((width - w) / 2, top, w, h));
        top += h;
    }
    Mosaic {
        canvas_size: Size::new(width, top),
        rects,
    }
}

/// Places a single item on its own canvas: shrunk (never enlarged) to fit `max_box`,
/// centered horizontally, with its top edge at `top`.
pub fn fit_single(item: Size, canvas: Size, max_box: Size, top: Unit) -> Rect {
    let (mut width, mut height) = (item.width.max(1), item.height.max(1));
    if width > max_box.width || height > max_box.height {
        let scale = (max_box.width as f64 / width as f64).min(max_box.height as f64 / height as f64);
        width = ((width as f64 * scale).floor() as Unit).max(1);
        height = ((height as f64 * scale).floor() as Unit).max(1);
    }
    Rect::new((canvas.width - width) / 2, top, width, height)
}
