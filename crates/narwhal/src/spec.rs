use crate::error::{Error, Result};
use crate::geom::{Size, Unit};
use crate::units;
use serde::{Deserialize, Serialize};

/// How an item is scaled into its cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitPolicy {
    /// Largest size that fits inside the cell; nothing is cropped.
    #[default]
    Contain,
    /// Smallest size that covers the whole cell; one axis may overflow.
    Cover,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillOrder {
    #[default]
    RowMajor,
    ColumnMajor,
}

/// How the cell size is derived from the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CellSizing {
    /// Split the available area evenly.
    #[default]
    Fill,
    /// Largest cell with `width / height == ratio` that fits.
    Aspect { ratio: f64 },
    /// A requested cell size, shrunk uniformly when the grid would not fit.
    Fixed { width: Unit, height: Unit },
}

/// A layout request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub canvas: Size,
    /// Kept free on all four sides.
    pub margin: Unit,
    pub h_spacing: Unit,
    pub v_spacing: Unit,
    pub columns: u32,
    pub rows: u32,
    pub cell_sizing: CellSizing,
    pub fit: FitPolicy,
    pub fill_order: FillOrder,
    /// Height reserved at the bottom of every cell for a caption.
    pub caption_height: Option<Unit>,
    /// Center only the cells a canvas actually uses, so a half-empty last canvas is not
    /// pushed into the top-left corner.
    pub center_occupied: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            canvas: Size::new(units::inches(13.333_333_333_3), units::inches(7.5)),
            margin: units::inches(0.25),
            h_spacing: 0,
            v_spacing: units::inches(0.05),
            columns: 4,
            rows: 4,
            cell_sizing: CellSizing::Fill,
            fit: FitPolicy::Contain,
            fill_order: FillOrder::RowMajor,
            caption_height: None,
            center_occupied: true,
        }
    }
}

impl GridSpec {
    /// Items per canvas.
    pub fn capacity(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Checks the fields that are wrong regardless of canvas geometry.
    pub fn validate(&self) -> Result<()> {
        if !self.canvas.is_positive() {
            return Err(invalid(
                "canvas",
                format!(
                    "canvas must be positive, got {}x{}",
                    self.canvas.width, self.canvas.height
                ),
            ));
        }
        if self.columns == 0 {
            return Err(invalid("columns", "at least one column is required".into()));
        }
        if self.rows == 0 {
            return Err(invalid("rows", "at least one row is required".into()));
        }
        for (field, value) in [
            ("margin", self.margin),
            ("h_spacing", self.h_spacing),
            ("v_spacing", self.v_spacing),
        ] {
            if value < 0 {
                return Err(invalid(field, format!("must not be negative, got {value}")));
            }
        }
        match self.cell_sizing {
            CellSizing::Fill => {}
            CellSizing::Aspect { ratio } => {
                if !(ratio.is_finite() && ratio > 0.0) {
                    return Err(invalid(
                        "cell_sizing.ratio",
                        format!("aspect ratio must be positive and finite, got {ratio}"),
                    ));
                }
            }
            CellSizing::Fixed { width, height } => {
                if width <= 0 || height <= 0 {
                    return Err(invalid(
                        "cell_sizing",
                        format!("fixed cell size must be positive, got {width}x{height}"),
                    ));
                }
            }
        }
        if let Some(caption) = self.caption_height {
            if caption < 0 {
                return Err(invalid(
                    "caption_height",
                    format!("must not be negative, got {caption}"),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> Error {
    Error::InvalidSpec { field, reason }
}
