//! Spatial function registry consumed by the SQL dispatch layer.
//!
//! Dispatch is registry-driven: a function name is valid exactly when it
//! appears here, and its declared return kind decides whether the call is
//! auto-wrapped in a client serializer when selected. Lookup is
//! case-sensitive; unregistered names fail closed at the call site.

/// Declared return kind of a registered spatial function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    Geometry,
    Geography,
    Raster,
    /// Scalar or otherwise non-spatial result; never wrapped.
    Scalar,
    /// Composite row type exposing named sub-fields.
    Composite(&'static [CompositeField]),
}

impl ReturnKind {
    /// Whether a result of this kind is wrapped in a client serializer.
    pub const fn is_spatial(self) -> bool {
        matches!(self, ReturnKind::Geometry | ReturnKind::Geography)
    }
}

/// Named sub-field of a composite return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeField {
    pub name: &'static str,
    pub returns: ReturnKind,
}

/// Registered spatial function: name, arity bounds, declared return kind.
///
/// Arity counts every SQL argument, the receiver included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: &'static str,
    pub min_args: u8,
    pub max_args: u8,
    pub returns: ReturnKind,
}

const fn spec(name: &'static str, min_args: u8, max_args: u8, returns: ReturnKind) -> FunctionSpec {
    FunctionSpec {
        name,
        min_args,
        max_args,
        returns,
    }
}

/// Sub-fields of the geometry-dump composites (`ST_Dump`, `ST_DumpPoints`).
pub const GEOMETRY_DUMP_FIELDS: &[CompositeField] = &[
    CompositeField {
        name: "path",
        returns: ReturnKind::Scalar,
    },
    CompositeField {
        name: "geom",
        returns: ReturnKind::Geometry,
    },
];

pub const SPATIAL_FUNCTIONS: &[FunctionSpec] = &[
    // I/O
    spec("ST_AsText", 1, 2, ReturnKind::Scalar),
    spec("ST_AsEWKT", 1, 1, ReturnKind::Scalar),
    spec("ST_AsBinary", 1, 2, ReturnKind::Scalar),
    spec("ST_AsEWKB", 1, 1, ReturnKind::Scalar),
    spec("ST_AsGeoJSON", 1, 3, ReturnKind::Scalar),
    spec("ST_GeomFromText", 1, 2, ReturnKind::Geometry),
    spec("ST_GeomFromEWKT", 1, 1, ReturnKind::Geometry),
    spec("ST_GeomFromWKB", 1, 2, ReturnKind::Geometry),
    spec("ST_GeomFromEWKB", 1, 1, ReturnKind::Geometry),
    spec("ST_GeogFromText", 1, 1, ReturnKind::Geography),
    // Accessors
    spec("ST_SRID", 1, 1, ReturnKind::Scalar),
    spec("ST_SetSRID", 2, 2, ReturnKind::Geometry),
    spec("ST_GeometryType", 1, 1, ReturnKind::Scalar),
    spec("ST_NDims", 1, 1, ReturnKind::Scalar),
    spec("ST_CoordDim", 1, 1, ReturnKind::Scalar),
    spec("ST_Zmflag", 1, 1, ReturnKind::Scalar),
    spec("ST_Dimension", 1, 1, ReturnKind::Scalar),
    spec("ST_IsEmpty", 1, 1, ReturnKind::Scalar),
    spec("ST_IsValid", 1, 1, ReturnKind::Scalar),
    spec("ST_IsValidReason", 1, 1, ReturnKind::Scalar),
    spec("ST_X", 1, 1, ReturnKind::Scalar),
    spec("ST_Y", 1, 1, ReturnKind::Scalar),
    spec("ST_Z", 1, 1, ReturnKind::Scalar),
    spec("ST_NPoints", 1, 1, ReturnKind::Scalar),
    spec("ST_NumPoints", 1, 1, ReturnKind::Scalar),
    spec("ST_NumGeometries", 1, 1, ReturnKind::Scalar),
    spec("ST_NumInteriorRings", 1, 1, ReturnKind::Scalar),
    spec("ST_GeometryN", 2, 2, ReturnKind::Geometry),
    spec("ST_PointN", 2, 2, ReturnKind::Geometry),
    spec("ST_StartPoint", 1, 1, ReturnKind::Geometry),
    spec("ST_EndPoint", 1, 1, ReturnKind::Geometry),
    spec("ST_ExteriorRing", 1, 1, ReturnKind::Geometry),
    spec("ST_InteriorRingN", 2, 2, ReturnKind::Geometry),
    spec("ST_Envelope", 1, 1, ReturnKind::Geometry),
    spec("ST_Centroid", 1, 1, ReturnKind::Geometry),
    spec("ST_PointOnSurface", 1, 1, ReturnKind::Geometry),
    // Measurement
    spec("ST_Area", 1, 2, ReturnKind::Scalar),
    spec("ST_Length", 1, 1, ReturnKind::Scalar),
    spec("ST_Perimeter", 1, 1, ReturnKind::Scalar),
    spec("ST_Distance", 2, 3, ReturnKind::Scalar),
    spec("ST_DWithin", 3, 4, ReturnKind::Scalar),
    spec("ST_Azimuth", 2, 2, ReturnKind::Scalar),
    spec("ST_HausdorffDistance", 2, 3, ReturnKind::Scalar),
    // Operations
    spec("ST_Buffer", 2, 3, ReturnKind::Geometry),
    spec("ST_Union", 1, 2, ReturnKind::Geometry),
    spec("ST_Intersection", 2, 2, ReturnKind::Geometry),
    spec("ST_Difference", 2, 2, ReturnKind::Geometry),
    spec("ST_SymDifference", 2, 2, ReturnKind::Geometry),
    spec("ST_Transform", 2, 4, ReturnKind::Geometry),
    spec("ST_Simplify", 2, 2, ReturnKind::Geometry),
    spec("ST_ConvexHull", 1, 1, ReturnKind::Geometry),
    spec("ST_Collect", 1, 2, ReturnKind::Geometry),
    spec("ST_MakeValid", 1, 1, ReturnKind::Geometry),
    spec("ST_Snap", 3, 3, ReturnKind::Geometry),
    // Predicates
    spec("ST_Intersects", 2, 2, ReturnKind::Scalar),
    spec("ST_Contains", 2, 2, ReturnKind::Scalar),
    spec("ST_Within", 2, 2, ReturnKind::Scalar),
    spec("ST_Covers", 2, 2, ReturnKind::Scalar),
    spec("ST_CoveredBy", 2, 2, ReturnKind::Scalar),
    spec("ST_Equals", 2, 2, ReturnKind::Scalar),
    spec("ST_Disjoint", 2, 2, ReturnKind::Scalar),
    spec("ST_Touches", 2, 2, ReturnKind::Scalar),
    spec("ST_Crosses", 2, 2, ReturnKind::Scalar),
    spec("ST_Overlaps", 2, 2, ReturnKind::Scalar),
    spec("ST_Relate", 2, 3, ReturnKind::Scalar),
    spec("ST_RelateMatch", 2, 2, ReturnKind::Scalar),
    // Composite-returning
    spec("ST_Dump", 1, 1, ReturnKind::Composite(GEOMETRY_DUMP_FIELDS)),
    spec("ST_DumpPoints", 1, 1, ReturnKind::Composite(GEOMETRY_DUMP_FIELDS)),
    // Raster
    spec("ST_Height", 1, 1, ReturnKind::Scalar),
    spec("ST_Width", 1, 1, ReturnKind::Scalar),
    spec("ST_NumBands", 1, 1, ReturnKind::Scalar),
    spec("ST_ScaleX", 1, 1, ReturnKind::Scalar),
    spec("ST_ScaleY", 1, 1, ReturnKind::Scalar),
    spec("ST_UpperLeftX", 1, 1, ReturnKind::Scalar),
    spec("ST_UpperLeftY", 1, 1, ReturnKind::Scalar),
    spec("ST_Value", 2, 4, ReturnKind::Scalar),
    spec("ST_BandPixelType", 1, 2, ReturnKind::Scalar),
    spec("ST_Polygon", 1, 2, ReturnKind::Geometry),
];

/// Look up a registered function by exact, case-sensitive name.
///
/// # Example
///
/// ```
/// use geoquill_core::catalog::{lookup, ReturnKind};
///
/// assert_eq!(lookup("ST_Buffer").unwrap().returns, ReturnKind::Geometry);
/// assert!(lookup("Buffer").is_none());
/// ```
pub fn lookup(name: &str) -> Option<&'static FunctionSpec> {
    SPATIAL_FUNCTIONS.iter().find(|spec| spec.name == name)
}
