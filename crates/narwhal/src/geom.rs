use serde::{Deserialize, Serialize};

/// Integer layout unit. Slide decks use EMU (see [`crate::units`]); mosaics use pixels.
pub type Unit = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: Unit,
    pub height: Unit,
}

impl Size {
    pub const fn new(width: Unit, height: Unit) -> Self {
        Self { width, height }
    }

    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn along(&self, axis: Axis) -> Unit {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

impl From<(Unit, Unit)> for Size {
    fn from((width, height): (Unit, Unit)) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub left: Unit,
    pub top: Unit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: Unit,
    pub top: Unit,
    pub width: Unit,
    pub height: Unit,
}

impl Rect {
    pub const fn new(left: Unit, top: Unit, width: Unit, height: Unit) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> Unit {
        self.left + self.width
    }

    pub fn bottom(&self) -> Unit {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest rectangle covering every input, `None` for no input.
    pub fn bounding<'a>(rects: impl IntoIterator<Item = &'a Rect>) -> Option<Rect> {
        let mut it = rects.into_iter();
        let first = it.next()?;
        let (mut min_x, mut min_y) = (first.left, first.top);
        let (mut max_x, mut max_y) = (first.right(), first.bottom());
        for r in it {
            min_x = min_x.min(r.left);
            min_y = min_y.min(r.top);
            max_x = max_x.max(r.right());
            max_y = max_y.max(r.bottom());
        }
        Some(Rect::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }
}
