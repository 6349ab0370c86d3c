//! Extension traits for method-style spatial operations on expressions.
//!
//! Import the trait for your column's SQL type (or `use
//! geoquill_diesel::prelude::*`) to call spatial functions as methods:
//!
//! ```rust,ignore
//! use geoquill_diesel::prelude::*;
//!
//! features::table
//!     .filter(features::geom.st_dwithin(st_geomfromewkt("POINT(13.4 52.5)"), 1000.0))
//!     .select((features::id, features::geom.st_asewkb()))
//!     .load(&mut conn)?;
//! ```
//!
//! For non-nullable columns, call `.nullable()` first — the standard Diesel
//! pattern.

use diesel::expression::{AsExpression, Expression};
use diesel::sql_types::{Double, Integer, Nullable};

use crate::functions;
use crate::types::{Geography, Geometry, Raster};

/// Method-style access to spatial SQL functions for `Nullable<Geometry>`
/// expressions. Each method delegates to the corresponding free function in
/// [`crate::functions`].
pub trait GeometryExpressionMethods: Expression<SqlType = Nullable<Geometry>> + Sized {
    // ── I/O ─────────────────────────────────────────────────────────────

    /// Serialize this geometry to WKT text.
    fn st_astext(self) -> functions::st_astext<Self> {
        functions::st_astext(self)
    }

    /// Serialize this geometry to EWKT text (`SRID=n;WKT`).
    fn st_asewkt(self) -> functions::st_asewkt<Self> {
        functions::st_asewkt(self)
    }

    /// Serialize this geometry to ISO WKB bytes.
    fn st_asbinary(self) -> functions::st_asbinary<Self> {
        functions::st_asbinary(self)
    }

    /// Serialize this geometry to EWKB bytes (preserves SRID).
    fn st_asewkb(self) -> functions::st_asewkb<Self> {
        functions::st_asewkb(self)
    }

    // ── Accessors ───────────────────────────────────────────────────────

    /// Return the SRID embedded in this geometry.
    fn st_srid(self) -> functions::st_srid<Self> {
        functions::st_srid(self)
    }

    /// Set (replace) the SRID of this geometry.
    fn st_setsrid<S>(self, srid: S) -> functions::st_setsrid<Self, S>
    where
        S: AsExpression<Integer>,
    {
        functions::st_setsrid(self, srid)
    }

    /// Return the OGC geometry type name (e.g. `ST_Point`).
    fn st_geometrytype(self) -> functions::st_geometrytype<Self> {
        functions::st_geometrytype(self)
    }

    /// Return the X coordinate of a Point geometry.
    fn st_x(self) -> functions::st_x<Self> {
        functions::st_x(self)
    }

    /// Return the Y coordinate of a Point geometry.
    fn st_y(self) -> functions::st_y<Self> {
        functions::st_y(self)
    }

    /// Return whether this geometry is empty.
    fn st_isempty(self) -> functions::st_isempty<Self> {
        functions::st_isempty(self)
    }

    /// Return the total point count of this geometry.
    fn st_npoints(self) -> functions::st_npoints<Self> {
        functions::st_npoints(self)
    }

    /// Return the axis-aligned envelope of this geometry.
    fn st_envelope(self) -> functions::st_envelope<Self> {
        functions::st_envelope(self)
    }

    /// Return the centroid of this geometry.
    fn st_centroid(self) -> functions::st_centroid<Self> {
        functions::st_centroid(self)
    }

    /// Return a point guaranteed to lie on or inside this geometry.
    fn st_pointonsurface(self) -> functions::st_pointonsurface<Self> {
        functions::st_pointonsurface(self)
    }

    // ── Measurement ─────────────────────────────────────────────────────

    /// Return the planar area of this geometry.
    fn st_area(self) -> functions::st_area<Self> {
        functions::st_area(self)
    }

    /// Return the planar length of this geometry.
    fn st_length(self) -> functions::st_length<Self> {
        functions::st_length(self)
    }

    /// Return the planar perimeter of this geometry.
    fn st_perimeter(self) -> functions::st_perimeter<Self> {
        functions::st_perimeter(self)
    }

    /// Return the minimum Euclidean distance to another geometry.
    fn st_distance<T>(self, other: T) -> functions::st_distance<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_distance(self, other)
    }

    /// Return whether this geometry and another are within the given distance.
    fn st_dwithin<T, D>(self, other: T, distance: D) -> functions::st_dwithin<Self, T, D>
    where
        T: AsExpression<Nullable<Geometry>>,
        D: AsExpression<Double>,
    {
        functions::st_dwithin(self, other, distance)
    }

    /// Geodesic bearing from this geometry to target in radians.
    fn st_azimuth<T>(self, target: T) -> functions::st_azimuth<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_azimuth(self, target)
    }

    // ── Operations ──────────────────────────────────────────────────────

    /// Expand or shrink this geometry by a given distance.
    fn st_buffer<D>(self, distance: D) -> functions::st_buffer<Self, D>
    where
        D: AsExpression<Double>,
    {
        functions::st_buffer(self, distance)
    }

    /// Compute the geometric union of this geometry with another.
    fn st_union<T>(self, other: T) -> functions::st_union<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_union(self, other)
    }

    /// Compute the geometric intersection of this geometry with another.
    fn st_intersection<T>(self, other: T) -> functions::st_intersection<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_intersection(self, other)
    }

    /// Compute the geometric difference of this geometry minus another.
    fn st_difference<T>(self, other: T) -> functions::st_difference<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_difference(self, other)
    }

    /// Compute the symmetric difference of this geometry and another.
    fn st_symdifference<T>(self, other: T) -> functions::st_symdifference<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_symdifference(self, other)
    }

    /// Reproject this geometry into another spatial reference system.
    fn st_transform<S>(self, srid: S) -> functions::st_transform<Self, S>
    where
        S: AsExpression<Integer>,
    {
        functions::st_transform(self, srid)
    }

    /// Simplify this geometry with the Douglas-Peucker algorithm.
    fn st_simplify<D>(self, tolerance: D) -> functions::st_simplify<Self, D>
    where
        D: AsExpression<Double>,
    {
        functions::st_simplify(self, tolerance)
    }

    /// Return the convex hull of this geometry.
    fn st_convexhull(self) -> functions::st_convexhull<Self> {
        functions::st_convexhull(self)
    }

    // ── Predicates ──────────────────────────────────────────────────────

    /// Return whether this geometry shares any points with another.
    fn st_intersects<T>(self, other: T) -> functions::st_intersects<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_intersects(self, other)
    }

    /// Return whether this geometry fully contains another.
    fn st_contains<T>(self, other: T) -> functions::st_contains<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_contains(self, other)
    }

    /// Return whether this geometry is fully contained within another.
    fn st_within<T>(self, other: T) -> functions::st_within<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_within(self, other)
    }

    /// Return whether this geometry covers another.
    fn st_covers<T>(self, other: T) -> functions::st_covers<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_covers(self, other)
    }

    /// Return whether this geometry is covered by another.
    fn st_coveredby<T>(self, other: T) -> functions::st_coveredby<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_coveredby(self, other)
    }

    /// Return whether this geometry is spatially equal to another.
    fn st_equals<T>(self, other: T) -> functions::st_equals<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_equals(self, other)
    }

    /// Return whether this geometry shares no points with another.
    fn st_disjoint<T>(self, other: T) -> functions::st_disjoint<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_disjoint(self, other)
    }

    /// Return whether this geometry touches another.
    fn st_touches<T>(self, other: T) -> functions::st_touches<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_touches(self, other)
    }

    /// Return whether this geometry crosses another.
    fn st_crosses<T>(self, other: T) -> functions::st_crosses<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_crosses(self, other)
    }

    /// Return whether this geometry overlaps another.
    fn st_overlaps<T>(self, other: T) -> functions::st_overlaps<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_overlaps(self, other)
    }

    /// Return the DE-9IM relationship matrix string to another geometry.
    fn st_relate<T>(self, other: T) -> functions::st_relate<Self, T>
    where
        T: AsExpression<Nullable<Geometry>>,
    {
        functions::st_relate(self, other)
    }
}

impl<E> GeometryExpressionMethods for E where E: Expression<SqlType = Nullable<Geometry>> + Sized {}

/// Method-style access to spatial SQL functions for `Nullable<Geography>`
/// expressions.
pub trait GeographyExpressionMethods: Expression<SqlType = Nullable<Geography>> + Sized {
    /// Serialize this geography to ISO WKB bytes.
    fn st_asbinary(self) -> functions::st_asbinary_geog<Self> {
        functions::st_asbinary_geog(self)
    }

    /// Serialize this geography to WKT text.
    fn st_astext(self) -> functions::st_astext_geog<Self> {
        functions::st_astext_geog(self)
    }

    /// Return the geodesic distance in metres to another geography.
    fn st_distance<T>(self, other: T) -> functions::st_distance_geog<Self, T>
    where
        T: AsExpression<Nullable<Geography>>,
    {
        functions::st_distance_geog(self, other)
    }

    /// Return whether this geography and another are within the given
    /// distance in metres.
    fn st_dwithin<T, D>(self, other: T, distance: D) -> functions::st_dwithin_geog<Self, T, D>
    where
        T: AsExpression<Nullable<Geography>>,
        D: AsExpression<Double>,
    {
        functions::st_dwithin_geog(self, other, distance)
    }
}

impl<E> GeographyExpressionMethods for E where E: Expression<SqlType = Nullable<Geography>> + Sized {}

/// Method-style access to raster accessors for `Nullable<Raster>` expressions.
pub trait RasterExpressionMethods: Expression<SqlType = Nullable<Raster>> + Sized {
    /// Return the pixel height of this raster.
    fn st_height(self) -> functions::st_height<Self> {
        functions::st_height(self)
    }

    /// Return the pixel width of this raster.
    fn st_width(self) -> functions::st_width<Self> {
        functions::st_width(self)
    }

    /// Return the number of bands in this raster.
    fn st_numbands(self) -> functions::st_numbands<Self> {
        functions::st_numbands(self)
    }

    /// Return the X scale (pixel width in SRS units) of this raster.
    fn st_scalex(self) -> functions::st_scalex<Self> {
        functions::st_scalex(self)
    }

    /// Return the Y scale (pixel height in SRS units) of this raster.
    fn st_scaley(self) -> functions::st_scaley<Self> {
        functions::st_scaley(self)
    }

    /// Return the value of the given band at pixel (x, y).
    fn st_value<B, X, Y>(self, band: B, x: X, y: Y) -> functions::st_value<Self, B, X, Y>
    where
        B: AsExpression<Integer>,
        X: AsExpression<Integer>,
        Y: AsExpression<Integer>,
    {
        functions::st_value(self, band, x, y)
    }
}

impl<E> RasterExpressionMethods for E where E: Expression<SqlType = Nullable<Raster>> + Sized {}
