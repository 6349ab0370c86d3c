use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoQuillError {
    #[error("geometry type {geometry_type} requires dimension {expected}, got {got}")]
    DimensionMismatch {
        geometry_type: String,
        expected: u8,
        got: u8,
    },

    #[error("dimension must be 2, 3 or 4, got {0}")]
    InvalidDimension(u8),

    #[error("management requires a geometry type")]
    ManagementRequiresType,

    #[error("unknown geometry type name: {0}")]
    UnknownGeometryType(String),

    #[error("invalid EWKB: {0}")]
    InvalidEwkb(&'static str),

    #[error("geozero error: {0}")]
    Geozero(#[from] geozero::error::GeozeroError),
}

pub type Result<T> = std::result::Result<T, GeoQuillError>;
