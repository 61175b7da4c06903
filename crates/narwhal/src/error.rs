use crate::geom::Axis;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The grid cannot give every cell a positive size on this canvas.
    #[error("unsatisfiable grid along the {axis} axis: {reason}")]
    InvalidGeometry { axis: Axis, reason: String },

    #[error("invalid grid spec `{field}`: {reason}")]
    InvalidSpec { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
