//! Slide-deck units. Office documents position shapes in EMU (English Metric Units).

use crate::geom::Unit;

pub const EMU_PER_INCH: Unit = 914_400;
pub const EMU_PER_POINT: Unit = 12_700;

pub fn inches(value: f64) -> Unit {
    (value * EMU_PER_INCH as f64).round() as Unit
}

pub fn points(value: f64) -> Unit {
    (value * EMU_PER_POINT as f64).round() as Unit
}

pub fn to_inches(value: Unit) -> f64 {
    value as f64 / EMU_PER_INCH as f64
}
