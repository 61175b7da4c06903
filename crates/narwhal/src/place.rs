//! Paginated item placement.

use crate::cell::{center_grid, compute_cell_size, grid_extent, item_area};
use crate::error::Result;
use crate::geom::{Rect, Size, Unit};
use crate::spec::{FillOrder, FitPolicy, GridSpec};
use serde::{Deserialize, Serialize};

/// Where one input item lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Index of the item in the input.
    pub item: usize,
    pub canvas: usize,
    pub row: u32,
    pub column: u32,
    pub cell: Rect,
    /// The scaled item. Under [`FitPolicy::Cover`] it may extend past `cell`.
    pub rect: Rect,
    pub caption: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub canvas_size: Size,
    pub cell_size: Size,
    pub canvas_count: usize,
    /// Sorted by canvas, then by fill order within a canvas.
    pub placements: Vec<Placement>,
}

impl Layout {
    fn empty(canvas_size: Size, cell_size: Size) -> Self {
        Self {
            canvas_size,
            cell_size,
            canvas_count: 0,
            placements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements on canvas `index`.
    pub fn canvas(&self, index: usize) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(move |p| p.canvas == index)
    }

    /// Placements grouped per canvas, in canvas order.
    pub fn pages(&self) -> Vec<&[Placement]> {
        self.placements
            .chunk_by(|a, b| a.canvas == b.canvas)
            .collect()
    }
}

/// Scales `item` into `area` under `fit` and centers it there.
///
/// Items without a positive size cannot be scaled and take the whole area.
pub fn fit_rect(item: Size, area: Rect, fit: FitPolicy) -> Rect {
    if !item.is_positive() {
        tracing::warn!(
            width = item.width,
            height = item.height,
            "item has no intrinsic size; stretching it over its cell"
        );
        return area;
    }

    let sx = area.width as f64 / item.width as f64;
    let sy = area.height as f64 / item.height as f64;
    let scaled = |len: Unit, scale: f64| (len as f64 * scale).round() as Unit;

    // The binding axis takes the area's length exactly; the other is rounded and clamped so
    // rounding can never break the policy.
    let (width, height) = match fit {
        FitPolicy::Contain => {
            if sx <= sy {
                (area.width, scaled(item.height, sx).clamp(1, area.height))
            } else {
                (scaled(item.width, sy).clamp(1, area.width), area.height)
            }
        }
        FitPolicy::Cover => {
            if sx >= sy {
                (area.width, scaled(item.height, sx).max(area.height))
            } else {
                (scaled(item.width, sy).max(area.width), area.height)
            }
        }
    };

    Rect::new(
        area.left + (area.width - width) / 2,
        area.top + (area.height - height) / 2,
        width,
        height,
    )
}

/// `(row, column)` of the `slot`-th cell on a canvas.
pub fn cell_index(slot: usize, order: FillOrder, columns: u32, rows: u32) -> (u32, u32) {
    let slot = slot as u32;
    match order {
        FillOrder::RowMajor => (slot / columns, slot % columns),
        FillOrder::ColumnMajor => (slot % rows, slot / rows),
    }
}

/// Columns and rows touched by the first `count` cells of a canvas.
pub fn occupied_shape(count: usize, spec: &GridSpec) -> (u32, u32) {
    let count = count.min(spec.capacity()) as u32;
    match spec.fill_order {
        FillOrder::RowMajor => (count.min(spec.columns), count.div_ceil(spec.columns)),
        FillOrder::ColumnMajor => (count.div_ceil(spec.rows), count.min(spec.rows)),
    }
}

/// Lays `items` (intrinsic width, height) out over as many canvases as needed.
///
/// Items keep their input order. A canvas is filled to `rows * columns` before the next one
/// opens; the last canvas may be partial. Zero items give zero canvases.
pub fn place_items(items: &[Size], spec: &GridSpec) -> Result<Layout> {
    let cell = compute_cell_size(spec)?;
    let area = item_area(cell, spec.caption_height)?;
    let mut layout = Layout::empty(spec.canvas, cell);
    place_into(&mut layout, items, 0, spec, area);
    Ok(layout)
}

/// Like [`place_items`], but every section starts on a fresh canvas.
///
/// Item indices in the result count through the sections in order, as if they were one
/// concatenated list.
pub fn place_sections<S>(sections: &[S], spec: &GridSpec) -> Result<Layout>
where
    S: AsRef<[Size]>,
{
    let cell = compute_cell_size(spec)?;
    let area = item_area(cell, spec.caption_height)?;
    let mut layout = Layout::empty(spec.canvas, cell);
    let mut offset = 0;
    for section in sections {
        let items = section.as_ref();
        place_into(&mut layout, items, offset, spec, area);
        offset += items.len();
    }
    Ok(layout)
}

fn place_into(layout: &mut Layout, items: &[Size], item_offset: usize, spec: &GridSpec, area: Size) {
    let cell = layout.cell_size;
    let first_canvas = layout.canvas_count;

    for (page, chunk) in items.chunks(spec.capacity()).enumerate() {
        let canvas = first_canvas + page;
        let (used_cols, used_rows) = if spec.center_occupied {
            occupied_shape(chunk.len(), spec)
        } else {
            (spec.columns, spec.rows)
        };
        let extent = grid_extent(cell, used_cols, used_rows, spec.h_spacing, spec.v_spacing);
        let origin = center_grid(spec.canvas, extent, spec.margin);
        tracing::trace!(canvas, items = chunk.len(), used_cols, used_rows, "placing canvas");

        for (slot, item) in chunk.iter().enumerate() {
            let (row, column) = cell_index(slot, spec.fill_order, spec.columns, spec.rows);
            let cell_rect = Rect::new(
                origin.left + column as Unit * (cell.width + spec.h_spacing),
                origin.top + row as Unit * (cell.height + spec.v_spacing),
                cell.width,
                cell.height,
            );
            let item_rect = Rect::new(cell_rect.left, cell_rect.top, area.width, area.height);
            let caption = spec
                .caption_height
                .map(|h| Rect::new(cell_rect.left, item_rect.bottom(), cell.width, h));

            layout.placements.push(Placement {
                item: item_offset + page * spec.capacity() + slot,
                canvas,
                row,
                column,
                cell: cell_rect,
                rect: fit_rect(*item, item_rect, spec.fit),
                caption,
            });
        }
        layout.canvas_count = canvas + 1;
    }
}
