//! Cell sizing and grid centering.

use crate::error::{Error, Result};
use crate::geom::{Axis, Point, Size, Unit};
use crate::spec::{CellSizing, GridSpec};

/// Room left for cells after margins and inter-cell spacing.
pub fn available_area(spec: &GridSpec) -> Result<Size> {
    spec.validate()?;
    let width = inner_length(
        spec.canvas.width,
        spec.margin,
        spec.h_spacing,
        spec.columns,
        "h_spacing",
    )?;
    let height = inner_length(
        spec.canvas.height,
        spec.margin,
        spec.v_spacing,
        spec.rows,
        "v_spacing",
    )?;
    if width <= 0 {
        return Err(no_room(
            Axis::Horizontal,
            format!(
                "{} columns with spacing {} leave no width inside a {}-wide canvas with margin {}",
                spec.columns, spec.h_spacing, spec.canvas.width, spec.margin
            ),
        ));
    }
    if height <= 0 {
        return Err(no_room(
            Axis::Vertical,
            format!(
                "{} rows with spacing {} leave no height inside a {}-high canvas with margin {}",
                spec.rows, spec.v_spacing, spec.canvas.height, spec.margin
            ),
        ));
    }
    Ok(Size::new(width, height))
}

/// `total - 2 * margin - spacing * (count - 1)`, with overflow reported against the field
/// that caused it.
fn inner_length(
    total: Unit,
    margin: Unit,
    spacing: Unit,
    count: u32,
    spacing_field: &'static str,
) -> Result<Unit> {
    let margins = margin
        .checked_mul(2)
        .ok_or_else(|| overflow("margin", margin))?;
    let gaps = spacing
        .checked_mul(Unit::from(count) - 1)
        .ok_or_else(|| overflow(spacing_field, spacing))?;
    total
        .checked_sub(margins)
        .and_then(|rest| rest.checked_sub(gaps))
        .ok_or_else(|| overflow(spacing_field, spacing))
}

fn overflow(field: &'static str, value: Unit) -> Error {
    Error::InvalidSpec {
        field,
        reason: format!("{value} is too large to lay out"),
    }
}

/// Size of one grid cell.
///
/// The result always satisfies `cell * n + spacing * (n - 1) <= canvas - 2 * margin` on both
/// axes. A cell that would be empty on either axis is an [`Error::InvalidGeometry`].
pub fn compute_cell_size(spec: &GridSpec) -> Result<Size> {
    let avail = available_area(spec)?;
    let cols = spec.columns as Unit;
    let rows = spec.rows as Unit;

    let cell = match spec.cell_sizing {
        CellSizing::Fill => Size::new(avail.width / cols, avail.height / rows),
        CellSizing::Aspect { ratio } => {
            let slot_w = avail.width as f64 / cols as f64;
            let slot_h = avail.height as f64 / rows as f64;
            // Whichever axis binds first decides the size.
            let width = slot_w.min(slot_h * ratio);
            Size::new(width.floor() as Unit, (width / ratio).floor() as Unit)
        }
        CellSizing::Fixed { width, height } => {
            let grid_w = width as f64 * cols as f64;
            let grid_h = height as f64 * rows as f64;
            let scale = 1f64
                .min(avail.width as f64 / grid_w)
                .min(avail.height as f64 / grid_h);
            if scale < 1.0 {
                tracing::debug!(scale, width, height, "fixed cell size scaled down to fit the canvas");
            }
            Size::new(
                (width as f64 * scale).floor() as Unit,
                (height as f64 * scale).floor() as Unit,
            )
        }
    };

    if cell.width <= 0 {
        return Err(no_room(
            Axis::Horizontal,
            format!(
                "{} columns in {} units of width give an empty cell",
                spec.columns, avail.width
            ),
        ));
    }
    if cell.height <= 0 {
        return Err(no_room(
            Axis::Vertical,
            format!(
                "{} rows in {} units of height give an empty cell",
                spec.rows, avail.height
            ),
        ));
    }
    Ok(cell)
}

/// The part of a cell an item is fitted into: the cell minus its caption strip.
pub fn item_area(cell: Size, caption_height: Option<Unit>) -> Result<Size> {
    let caption = caption_height.unwrap_or(0);
    let height = cell.height - caption;
    if height <= 0 {
        return Err(no_room(
            Axis::Vertical,
            format!(
                "caption height {caption} leaves no room for the item in a {}-high cell",
                cell.height
            ),
        ));
    }
    Ok(Size::new(cell.width, height))
}

/// Extent of `columns x rows` cells including the spacing between them.
pub fn grid_extent(cell: Size, columns: u32, rows: u32, h_spacing: Unit, v_spacing: Unit) -> Size {
    let cols = columns as Unit;
    let rows = rows as Unit;
    Size::new(
        cell.width
            .saturating_mul(cols)
            .saturating_add(h_spacing.saturating_mul((cols - 1).max(0))),
        cell.height
            .saturating_mul(rows)
            .saturating_add(v_spacing.saturating_mul((rows - 1).max(0))),
    )
}

/// Top-left corner that centers `grid` on `canvas`, never closer to the edge than `margin`.
pub fn center_grid(canvas: Size, grid: Size, margin: Unit) -> Point {
    Point {
        left: ((canvas.width - grid.width) / 2).max(margin),
        top: ((canvas.height - grid.height) / 2).max(margin),
    }
}

fn no_room(axis: Axis, reason: String) -> Error {
    Error::InvalidGeometry { axis, reason }
}
