//! Spatial column type descriptors.
//!
//! A descriptor is built once at schema-definition time and is immutable
//! afterwards. It carries everything a SQL layer needs to compile a column
//! of that type: the DDL type modifier (`geometry(POINT,4326)`), the
//! bind-side constructor function (`ST_GeomFromEWKT`), and the result-side
//! client serializer (`ST_AsEWKB`).

use std::fmt;
use std::str::FromStr;

use crate::error::{GeoQuillError, Result};

// ── WKT type names ────────────────────────────────────────────────────────────

/// Base WKT geometry type accepted in a typmod.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryBase {
    Geometry,
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Curve,
    CircularString,
}

impl GeometryBase {
    pub const ALL: [GeometryBase; 10] = [
        GeometryBase::Geometry,
        GeometryBase::Point,
        GeometryBase::LineString,
        GeometryBase::Polygon,
        GeometryBase::MultiPoint,
        GeometryBase::MultiLineString,
        GeometryBase::MultiPolygon,
        GeometryBase::GeometryCollection,
        GeometryBase::Curve,
        GeometryBase::CircularString,
    ];

    pub const fn as_wkt(self) -> &'static str {
        match self {
            GeometryBase::Geometry => "GEOMETRY",
            GeometryBase::Point => "POINT",
            GeometryBase::LineString => "LINESTRING",
            GeometryBase::Polygon => "POLYGON",
            GeometryBase::MultiPoint => "MULTIPOINT",
            GeometryBase::MultiLineString => "MULTILINESTRING",
            GeometryBase::MultiPolygon => "MULTIPOLYGON",
            GeometryBase::GeometryCollection => "GEOMETRYCOLLECTION",
            GeometryBase::Curve => "CURVE",
            GeometryBase::CircularString => "CIRCULARSTRING",
        }
    }
}

/// Coordinate-dimension suffix of a WKT type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionSuffix {
    Xy,
    Z,
    M,
    Zm,
}

impl DimensionSuffix {
    /// Column dimension the suffix demands (ZM → 4, Z/M → 3, none → 2).
    pub const fn required_dimension(self) -> u8 {
        match self {
            DimensionSuffix::Xy => 2,
            DimensionSuffix::Z | DimensionSuffix::M => 3,
            DimensionSuffix::Zm => 4,
        }
    }

    pub const fn as_wkt(self) -> &'static str {
        match self {
            DimensionSuffix::Xy => "",
            DimensionSuffix::Z => "Z",
            DimensionSuffix::M => "M",
            DimensionSuffix::Zm => "ZM",
        }
    }
}

/// Parsed WKT type name as it appears in a typmod (`POINT`, `GEOMETRYZM`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryTypeName {
    base: GeometryBase,
    suffix: DimensionSuffix,
}

impl GeometryTypeName {
    pub const fn new(base: GeometryBase, suffix: DimensionSuffix) -> Self {
        Self { base, suffix }
    }

    pub const fn base(&self) -> GeometryBase {
        self.base
    }

    pub const fn suffix(&self) -> DimensionSuffix {
        self.suffix
    }
}

impl Default for GeometryTypeName {
    fn default() -> Self {
        Self::new(GeometryBase::Geometry, DimensionSuffix::Xy)
    }
}

impl fmt::Display for GeometryTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base.as_wkt(), self.suffix.as_wkt())
    }
}

impl FromStr for GeometryTypeName {
    type Err = GeoQuillError;

    /// Parse a WKT spelling such as `"MULTIPOINTZM"`.
    ///
    /// # Example
    ///
    /// ```
    /// use geoquill_core::types::GeometryTypeName;
    ///
    /// let name: GeometryTypeName = "GEOMETRYZM".parse().unwrap();
    /// assert_eq!(name.to_string(), "GEOMETRYZM");
    /// assert!("BUFFER".parse::<GeometryTypeName>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        for base in GeometryBase::ALL {
            let Some(rest) = s.strip_prefix(base.as_wkt()) else {
                continue;
            };
            let suffix = match rest {
                "" => DimensionSuffix::Xy,
                "Z" => DimensionSuffix::Z,
                "M" => DimensionSuffix::M,
                "ZM" => DimensionSuffix::Zm,
                // `GEOMETRYCOLLECTION` reaches here via the `GEOMETRY` prefix.
                _ => continue,
            };
            return Ok(Self::new(base, suffix));
        }
        Err(GeoQuillError::UnknownGeometryType(s.to_string()))
    }
}

// ── Construction warnings ─────────────────────────────────────────────────────

/// Non-fatal condition noticed while building a descriptor.
///
/// The offending option is accepted but has no effect; the warning is stored
/// on the descriptor and logged through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeWarning {
    /// An SRID was supplied without a geometry type, so nothing enforces it.
    SridNotEnforced { srid: i32 },
    /// `use_typmod` was supplied without `management`, so it is never read.
    UseTypmodIgnored,
}

impl fmt::Display for TypeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeWarning::SridNotEnforced { srid } => {
                write!(f, "srid {srid} has no effect without a geometry type")
            }
            TypeWarning::UseTypmodIgnored => {
                write!(f, "use_typmod has no effect unless management is enabled")
            }
        }
    }
}

// ── Shared geometry/geography configuration ───────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
struct GisConfig {
    geometry_type: Option<GeometryTypeName>,
    srid: i32,
    dimension: u8,
    use_typmod: Option<bool>,
    management: bool,
    use_st_prefix: bool,
    warnings: Vec<TypeWarning>,
}

impl Default for GisConfig {
    fn default() -> Self {
        Self {
            geometry_type: Some(GeometryTypeName::default()),
            srid: -1,
            dimension: 2,
            use_typmod: None,
            management: false,
            use_st_prefix: true,
            warnings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct GisBuilder {
    // Outer `None` means "not supplied": the type defaults to GEOMETRY and
    // the SRID to the -1 sentinel, without triggering inert-option warnings.
    geometry_type: Option<Option<GeometryTypeName>>,
    srid: Option<i32>,
    dimension: u8,
    use_typmod: Option<bool>,
    management: bool,
    use_st_prefix: bool,
}

impl Default for GisBuilder {
    fn default() -> Self {
        Self {
            geometry_type: None,
            srid: None,
            dimension: 2,
            use_typmod: None,
            management: false,
            use_st_prefix: true,
        }
    }
}

impl GisBuilder {
    fn build(self) -> Result<GisConfig> {
        if !(2..=4).contains(&self.dimension) {
            return Err(GeoQuillError::InvalidDimension(self.dimension));
        }
        let geometry_type = self
            .geometry_type
            .unwrap_or_else(|| Some(GeometryTypeName::default()));

        let mut warnings = Vec::new();
        match &geometry_type {
            Some(name) => {
                let expected = name.suffix().required_dimension();
                if self.dimension != expected {
                    return Err(GeoQuillError::DimensionMismatch {
                        geometry_type: name.to_string(),
                        expected,
                        got: self.dimension,
                    });
                }
            }
            None => {
                if self.management {
                    return Err(GeoQuillError::ManagementRequiresType);
                }
                if let Some(srid) = self.srid {
                    warnings.push(TypeWarning::SridNotEnforced { srid });
                }
            }
        }
        if self.use_typmod.is_some() && !self.management {
            warnings.push(TypeWarning::UseTypmodIgnored);
        }
        for warning in &warnings {
            tracing::warn!("{warning}");
        }

        Ok(GisConfig {
            geometry_type,
            srid: self.srid.unwrap_or(-1),
            dimension: self.dimension,
            use_typmod: self.use_typmod,
            management: self.management,
            use_st_prefix: self.use_st_prefix,
            warnings,
        })
    }
}

macro_rules! gis_type {
    (
        $(#[$doc:meta])*
        $type_name:ident, $builder_name:ident, $keyword:literal,
        bind = ($from_text:literal, $legacy_from_text:literal),
        client = ($client:literal, $legacy_client:literal)
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $type_name {
            config: GisConfig,
        }

        impl $type_name {
            pub fn builder() -> $builder_name {
                $builder_name::default()
            }

            /// WKT type name rendered in the typmod, if any.
            pub fn geometry_type(&self) -> Option<&GeometryTypeName> {
                self.config.geometry_type.as_ref()
            }

            /// Spatial reference system identifier (-1 when unspecified).
            pub fn srid(&self) -> i32 {
                self.config.srid
            }

            pub fn dimension(&self) -> u8 {
                self.config.dimension
            }

            pub fn use_typmod(&self) -> Option<bool> {
                self.config.use_typmod
            }

            /// Whether DDL goes through `AddGeometryColumn` instead of a typmod.
            pub fn management(&self) -> bool {
                self.config.management
            }

            pub fn use_st_prefix(&self) -> bool {
                self.config.use_st_prefix
            }

            /// Inert-option warnings recorded while building the descriptor.
            pub fn warnings(&self) -> &[TypeWarning] {
                &self.config.warnings
            }

            /// Literal DDL type string for a column of this type.
            ///
            /// The `(TYPE,SRID)` clause is present exactly when a geometry
            /// type is configured; the SRID is always rendered once it is,
            /// including the -1 sentinel.
            pub fn col_spec(&self) -> String {
                match &self.config.geometry_type {
                    Some(name) => format!("{}({},{})", $keyword, name, self.config.srid),
                    None => $keyword.to_string(),
                }
            }

            /// SQL function wrapped around bound parameters on write.
            pub fn from_text_function(&self) -> &'static str {
                if self.config.use_st_prefix {
                    $from_text
                } else {
                    $legacy_from_text
                }
            }

            /// SQL function wrapped around result columns on read.
            pub fn client_function(&self) -> &'static str {
                if self.config.use_st_prefix {
                    $client
                } else {
                    $legacy_client
                }
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder_name {
            inner: GisBuilder,
        }

        impl $builder_name {
            /// Set or clear the WKT type name (`None` drops the typmod).
            pub fn geometry_type(mut self, geometry_type: Option<GeometryTypeName>) -> Self {
                self.inner.geometry_type = Some(geometry_type);
                self
            }

            pub fn srid(mut self, srid: i32) -> Self {
                self.inner.srid = Some(srid);
                self
            }

            pub fn dimension(mut self, dimension: u8) -> Self {
                self.inner.dimension = dimension;
                self
            }

            pub fn use_typmod(mut self, use_typmod: bool) -> Self {
                self.inner.use_typmod = Some(use_typmod);
                self
            }

            pub fn management(mut self, management: bool) -> Self {
                self.inner.management = management;
                self
            }

            pub fn use_st_prefix(mut self, use_st_prefix: bool) -> Self {
                self.inner.use_st_prefix = use_st_prefix;
                self
            }

            pub fn build(self) -> Result<$type_name> {
                Ok($type_name {
                    config: self.inner.build()?,
                })
            }
        }
    };
}

gis_type!(
    /// Descriptor for a PostGIS `geometry` column.
    ///
    /// # Example
    ///
    /// ```
    /// use geoquill_core::types::Geometry;
    ///
    /// let g = Geometry::builder().srid(900913).build().unwrap();
    /// assert_eq!(g.col_spec(), "geometry(GEOMETRY,900913)");
    /// ```
    Geometry, GeometryBuilder, "geometry",
    bind = ("ST_GeomFromEWKT", "GeomFromEWKT"),
    client = ("ST_AsEWKB", "AsEWKB")
);

gis_type!(
    /// Descriptor for a PostGIS `geography` column.
    Geography, GeographyBuilder, "geography",
    bind = ("ST_GeogFromText", "GeogFromText"),
    client = ("ST_AsBinary", "AsBinary")
);

// ── Raster ────────────────────────────────────────────────────────────────────

/// Descriptor for a PostGIS `raster` column.
///
/// Raster values are opaque bytes: neither bind parameters nor result
/// columns are wrapped, but registry dispatch (`ST_Height`, …) still works.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raster;

impl Raster {
    pub fn new() -> Self {
        Self
    }

    pub fn col_spec(&self) -> String {
        "raster".to_string()
    }
}

// ── Uniform spatial type handle ───────────────────────────────────────────────

/// A spatial column type, as attached to a column in a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialType {
    Geometry(Geometry),
    Geography(Geography),
    Raster(Raster),
}

impl SpatialType {
    pub fn col_spec(&self) -> String {
        match self {
            SpatialType::Geometry(g) => g.col_spec(),
            SpatialType::Geography(g) => g.col_spec(),
            SpatialType::Raster(r) => r.col_spec(),
        }
    }

    /// Construct-from-text function for bind parameters, if the type has one.
    pub fn bind_function(&self) -> Option<&'static str> {
        match self {
            SpatialType::Geometry(g) => Some(g.from_text_function()),
            SpatialType::Geography(g) => Some(g.from_text_function()),
            SpatialType::Raster(_) => None,
        }
    }

    /// Client-serializer function for result columns, if the type has one.
    pub fn column_function(&self) -> Option<&'static str> {
        match self {
            SpatialType::Geometry(g) => Some(g.client_function()),
            SpatialType::Geography(g) => Some(g.client_function()),
            SpatialType::Raster(_) => None,
        }
    }

    pub fn use_st_prefix(&self) -> bool {
        match self {
            SpatialType::Geometry(g) => g.use_st_prefix(),
            SpatialType::Geography(g) => g.use_st_prefix(),
            SpatialType::Raster(_) => true,
        }
    }
}

impl From<Geometry> for SpatialType {
    fn from(value: Geometry) -> Self {
        SpatialType::Geometry(value)
    }
}

impl From<Geography> for SpatialType {
    fn from(value: Geography) -> Self {
        SpatialType::Geography(value)
    }
}

impl From<Raster> for SpatialType {
    fn from(value: Raster) -> Self {
        SpatialType::Raster(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> GeometryTypeName {
        s.parse().unwrap()
    }

    #[test]
    fn col_spec_default_type_with_srid() {
        let g = Geometry::builder().srid(900913).build().unwrap();
        assert_eq!(g.col_spec(), "geometry(GEOMETRY,900913)");
    }

    #[test]
    fn col_spec_no_typmod() {
        let g = Geometry::builder().geometry_type(None).build().unwrap();
        assert_eq!(g.col_spec(), "geometry");
    }

    #[test]
    fn col_spec_renders_srid_sentinel() {
        let g = Geometry::builder().build().unwrap();
        assert_eq!(g.col_spec(), "geometry(GEOMETRY,-1)");
    }

    #[test]
    fn col_spec_every_base_type() {
        for base in [
            "POINT",
            "CURVE",
            "LINESTRING",
            "POLYGON",
            "MULTIPOINT",
            "MULTILINESTRING",
            "MULTIPOLYGON",
            "GEOMETRYCOLLECTION",
        ] {
            let g = Geometry::builder()
                .geometry_type(Some(name(base)))
                .srid(900913)
                .build()
                .unwrap();
            assert_eq!(g.col_spec(), format!("geometry({base},900913)"));
        }
    }

    #[test]
    fn col_spec_dimension_4d() {
        let g = Geometry::builder()
            .geometry_type(Some(name("GEOMETRYZM")))
            .srid(900913)
            .dimension(4)
            .build()
            .unwrap();
        assert_eq!(g.col_spec(), "geometry(GEOMETRYZM,900913)");
    }

    #[test]
    fn col_spec_dimension_3dz() {
        let g = Geometry::builder()
            .geometry_type(Some(name("GEOMETRYZ")))
            .srid(900913)
            .dimension(3)
            .build()
            .unwrap();
        assert_eq!(g.col_spec(), "geometry(GEOMETRYZ,900913)");
    }

    #[test]
    fn col_spec_dimension_3dm() {
        let g = Geometry::builder()
            .geometry_type(Some(name("GEOMETRYM")))
            .srid(900913)
            .dimension(3)
            .build()
            .unwrap();
        assert_eq!(g.col_spec(), "geometry(GEOMETRYM,900913)");
    }

    #[test]
    fn bad_dimension_combinations() {
        for (type_name, dimension) in [
            ("GEOMETRY", 4),
            ("GEOMETRYZ", 4),
            ("GEOMETRYM", 4),
            ("GEOMETRY", 3),
            ("GEOMETRYZM", 3),
            ("GEOMETRYZ", 2),
        ] {
            let result = Geometry::builder()
                .geometry_type(Some(name(type_name)))
                .dimension(dimension)
                .build();
            assert!(
                matches!(result, Err(GeoQuillError::DimensionMismatch { .. })),
                "{type_name} with dimension {dimension} should fail"
            );
        }
    }

    #[test]
    fn dimension_out_of_range() {
        let result = Geometry::builder().dimension(5).build();
        assert!(matches!(result, Err(GeoQuillError::InvalidDimension(5))));
    }

    #[test]
    fn management_requires_geometry_type() {
        let result = Geometry::builder()
            .geometry_type(None)
            .management(true)
            .build();
        assert!(matches!(result, Err(GeoQuillError::ManagementRequiresType)));
    }

    #[test]
    fn srid_without_type_warns() {
        let g = Geometry::builder()
            .geometry_type(None)
            .srid(4326)
            .build()
            .unwrap();
        assert_eq!(g.warnings(), [TypeWarning::SridNotEnforced { srid: 4326 }]);
        // The option is inert: bare DDL, srid still reported as given.
        assert_eq!(g.col_spec(), "geometry");
        assert_eq!(g.srid(), 4326);
    }

    #[test]
    fn use_typmod_without_management_warns() {
        let g = Geometry::builder()
            .management(false)
            .use_typmod(true)
            .build()
            .unwrap();
        assert_eq!(g.warnings(), [TypeWarning::UseTypmodIgnored]);
    }

    #[test]
    fn use_typmod_with_management_does_not_warn() {
        let g = Geometry::builder()
            .management(true)
            .use_typmod(false)
            .build()
            .unwrap();
        assert!(g.warnings().is_empty());
    }

    #[test]
    fn geography_col_spec() {
        let g = Geography::builder().srid(900913).build().unwrap();
        assert_eq!(g.col_spec(), "geography(GEOMETRY,900913)");

        let bare = Geography::builder().geometry_type(None).build().unwrap();
        assert_eq!(bare.col_spec(), "geography");
    }

    #[test]
    fn raster_col_spec() {
        assert_eq!(Raster::new().col_spec(), "raster");
    }

    #[test]
    fn wrap_function_names_follow_prefix_flag() {
        let g = Geometry::builder().build().unwrap();
        assert_eq!(g.from_text_function(), "ST_GeomFromEWKT");
        assert_eq!(g.client_function(), "ST_AsEWKB");

        let legacy = Geometry::builder().use_st_prefix(false).build().unwrap();
        assert_eq!(legacy.from_text_function(), "GeomFromEWKT");
        assert_eq!(legacy.client_function(), "AsEWKB");

        let geog = Geography::builder().build().unwrap();
        assert_eq!(geog.from_text_function(), "ST_GeogFromText");
        assert_eq!(geog.client_function(), "ST_AsBinary");
    }

    #[test]
    fn raster_has_no_wrap_functions() {
        let spatial = SpatialType::from(Raster::new());
        assert_eq!(spatial.bind_function(), None);
        assert_eq!(spatial.column_function(), None);
    }

    #[test]
    fn geometry_type_name_round_trip() {
        for spelling in ["POINT", "MULTIPOINTZM", "GEOMETRYCOLLECTION", "LINESTRINGM"] {
            assert_eq!(name(spelling).to_string(), spelling);
        }
        assert!("POINTX".parse::<GeometryTypeName>().is_err());
        assert!("".parse::<GeometryTypeName>().is_err());
    }
}
