//! Diesel SQL function definitions for the spatial function set.
//!
//! Import the functions you need and use them directly in Diesel query
//! builder expressions:
//!
//! ```rust,ignore
//! use geoquill_diesel::functions::*;
//! use diesel::prelude::*;
//!
//! let nearby: Vec<Feature> = features::table
//!     .filter(st_dwithin(features::geom, st_geomfromewkt("POINT(13.4 52.5)"), 1000.0))
//!     .load(&mut conn)?;
//! ```

use crate::types::{Geography, Geometry, Raster};
use diesel::sql_types::{Binary, Bool, Double, Integer, Nullable, Text};

// ── I/O ───────────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Parse WKT text into a geometry.
    fn st_geomfromtext(wkt: Text) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Parse WKT text with explicit SRID into a geometry.
    #[sql_name = "ST_GeomFromText"]
    fn st_geomfromtext_srid(wkt: Text, srid: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Parse extended WKT (`SRID=n;WKT`) into a geometry.
    fn st_geomfromewkt(ewkt: Text) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Legacy unprefixed spelling of `ST_GeomFromEWKT`.
    #[sql_name = "GeomFromEWKT"]
    fn geomfromewkt(ewkt: Text) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Parse EWKB bytes into a geometry.
    fn st_geomfromewkb(ewkb: Nullable<Binary>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Parse WKT text into a geography (SRID 4326).
    fn st_geogfromtext(wkt: Text) -> Nullable<Geography>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to WKT text.
    fn st_astext(geom: Nullable<Geometry>) -> Nullable<Text>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to EWKT text (`SRID=n;WKT`).
    fn st_asewkt(geom: Nullable<Geometry>) -> Nullable<Text>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to ISO WKB bytes (strips SRID).
    fn st_asbinary(geom: Nullable<Geometry>) -> Nullable<Binary>;
}

diesel::define_sql_function! {
    /// Serialize a geometry to EWKB bytes (preserves SRID).
    fn st_asewkb(geom: Nullable<Geometry>) -> Nullable<Binary>;
}

diesel::define_sql_function! {
    /// Legacy unprefixed spelling of `ST_AsEWKB`.
    #[sql_name = "AsEWKB"]
    fn asewkb(geom: Nullable<Geometry>) -> Nullable<Binary>;
}

diesel::define_sql_function! {
    /// Serialize a geography to ISO WKB bytes.
    #[sql_name = "ST_AsBinary"]
    fn st_asbinary_geog(geog: Nullable<Geography>) -> Nullable<Binary>;
}

diesel::define_sql_function! {
    /// Serialize a geography to WKT text.
    #[sql_name = "ST_AsText"]
    fn st_astext_geog(geog: Nullable<Geography>) -> Nullable<Text>;
}

// ── Accessors ─────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return the SRID embedded in the geometry.
    fn st_srid(geom: Nullable<Geometry>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Set (replace) the SRID of a geometry.
    fn st_setsrid(geom: Nullable<Geometry>, srid: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the OGC geometry type name (e.g. `ST_Point`).
    fn st_geometrytype(geom: Nullable<Geometry>) -> Nullable<Text>;
}

diesel::define_sql_function! {
    /// Return the X coordinate of a Point geometry.
    fn st_x(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the Y coordinate of a Point geometry.
    fn st_y(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return whether the geometry is empty.
    fn st_isempty(geom: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return the total point count across any geometry type.
    fn st_npoints(geom: Nullable<Geometry>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the axis-aligned envelope of a geometry.
    fn st_envelope(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the centroid of a geometry.
    fn st_centroid(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return a point guaranteed to lie on or inside the geometry.
    fn st_pointonsurface(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

// ── Measurement ───────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return the planar area of a polygon geometry.
    fn st_area(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the planar length of a linestring geometry.
    fn st_length(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the planar perimeter of a polygon geometry.
    fn st_perimeter(geom: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the minimum Euclidean distance between two geometries.
    fn st_distance(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the geodesic distance in metres between two geographies.
    #[sql_name = "ST_Distance"]
    fn st_distance_geog(a: Nullable<Geography>, b: Nullable<Geography>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return whether A and B are within the given Euclidean distance.
    fn st_dwithin(a: Nullable<Geometry>, b: Nullable<Geometry>, distance: Double) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether two geographies are within the given distance in metres.
    #[sql_name = "ST_DWithin"]
    fn st_dwithin_geog(a: Nullable<Geography>, b: Nullable<Geography>, distance: Double) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Geodesic bearing from origin to target in radians (0 = north, clockwise).
    fn st_azimuth(origin: Nullable<Geometry>, target: Nullable<Geometry>) -> Nullable<Double>;
}

// ── Operations ────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Expand or shrink a geometry by a given distance.
    fn st_buffer(geom: Nullable<Geometry>, distance: Double) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the geometric union of two geometries.
    fn st_union(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the geometric intersection of two geometries.
    fn st_intersection(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the geometric difference (A minus B) of two geometries.
    fn st_difference(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Compute the symmetric difference (XOR) of two geometries.
    fn st_symdifference(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Reproject a geometry into another spatial reference system.
    fn st_transform(geom: Nullable<Geometry>, srid: Integer) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Simplify a geometry with the Douglas-Peucker algorithm.
    fn st_simplify(geom: Nullable<Geometry>, tolerance: Double) -> Nullable<Geometry>;
}

diesel::define_sql_function! {
    /// Return the convex hull of a geometry.
    fn st_convexhull(geom: Nullable<Geometry>) -> Nullable<Geometry>;
}

// ── Predicates ────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return whether geometries share any interior or boundary points.
    fn st_intersects(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometry A fully contains geometry B.
    fn st_contains(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometry A is fully contained within geometry B.
    fn st_within(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether A covers B (every point of B lies within A).
    fn st_covers(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether A is covered by B.
    fn st_coveredby(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries are spatially equal.
    fn st_equals(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries share no points.
    fn st_disjoint(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries share boundary points but no interior points.
    fn st_touches(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries cross each other.
    fn st_crosses(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return whether geometries overlap.
    fn st_overlaps(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Bool>;
}

diesel::define_sql_function! {
    /// Return the DE-9IM relationship matrix string between two geometries.
    fn st_relate(a: Nullable<Geometry>, b: Nullable<Geometry>) -> Nullable<Text>;
}

// ── Raster ────────────────────────────────────────────────────────────────────

diesel::define_sql_function! {
    /// Return the pixel height of a raster.
    fn st_height(rast: Nullable<Raster>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the pixel width of a raster.
    fn st_width(rast: Nullable<Raster>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the number of bands in a raster.
    fn st_numbands(rast: Nullable<Raster>) -> Nullable<Integer>;
}

diesel::define_sql_function! {
    /// Return the X scale (pixel width in SRS units) of a raster.
    fn st_scalex(rast: Nullable<Raster>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the Y scale (pixel height in SRS units) of a raster.
    fn st_scaley(rast: Nullable<Raster>) -> Nullable<Double>;
}

diesel::define_sql_function! {
    /// Return the value of the given band at pixel (x, y).
    fn st_value(rast: Nullable<Raster>, band: Integer, x: Integer, y: Integer) -> Nullable<Double>;
}
