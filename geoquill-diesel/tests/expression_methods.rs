#![cfg(feature = "sqlite")]

//! Verify that every expression-methods trait method produces identical SQL
//! to the corresponding free function in `geoquill_diesel::functions`.

use diesel::dsl::select;
use diesel::sql_types::{Integer, Nullable};
use geoquill_diesel::prelude::*;

/// Geometry literal helper (not Clone, so create fresh each time via macro).
macro_rules! g {
    () => {
        diesel::dsl::sql::<Nullable<Geometry>>("x")
    };
}

macro_rules! gg {
    () => {
        diesel::dsl::sql::<Nullable<Geography>>("x")
    };
}

macro_rules! r {
    () => {
        diesel::dsl::sql::<Nullable<Raster>>("x")
    };
}

macro_rules! d {
    () => {
        diesel::dsl::sql::<diesel::sql_types::Double>("1.0")
    };
}

macro_rules! i {
    () => {
        diesel::dsl::sql::<Integer>("1")
    };
}

/// Assert method-style and function-style produce identical SQL.
macro_rules! assert_method_eq_func {
    ($method_expr:expr, $func_expr:expr) => {{
        let method_sql =
            diesel::debug_query::<diesel::sqlite::Sqlite, _>(&select($method_expr)).to_string();
        let func_sql =
            diesel::debug_query::<diesel::sqlite::Sqlite, _>(&select($func_expr)).to_string();
        assert_eq!(method_sql, func_sql);
    }};
}

// ── Geometry: I/O ───────────────────────────────────────────────────────────

#[test]
fn method_st_astext() {
    assert_method_eq_func!(g!().st_astext(), st_astext(g!()));
}

#[test]
fn method_st_asewkt() {
    assert_method_eq_func!(g!().st_asewkt(), st_asewkt(g!()));
}

#[test]
fn method_st_asbinary() {
    assert_method_eq_func!(g!().st_asbinary(), st_asbinary(g!()));
}

#[test]
fn method_st_asewkb() {
    assert_method_eq_func!(g!().st_asewkb(), st_asewkb(g!()));
}

// ── Geometry: accessors ─────────────────────────────────────────────────────

#[test]
fn method_st_srid() {
    assert_method_eq_func!(g!().st_srid(), st_srid(g!()));
}

#[test]
fn method_st_setsrid() {
    assert_method_eq_func!(g!().st_setsrid(i!()), st_setsrid(g!(), i!()));
}

#[test]
fn method_st_geometrytype() {
    assert_method_eq_func!(g!().st_geometrytype(), st_geometrytype(g!()));
}

#[test]
fn method_st_x() {
    assert_method_eq_func!(g!().st_x(), st_x(g!()));
}

#[test]
fn method_st_y() {
    assert_method_eq_func!(g!().st_y(), st_y(g!()));
}

#[test]
fn method_st_isempty() {
    assert_method_eq_func!(g!().st_isempty(), st_isempty(g!()));
}

#[test]
fn method_st_npoints() {
    assert_method_eq_func!(g!().st_npoints(), st_npoints(g!()));
}

#[test]
fn method_st_envelope() {
    assert_method_eq_func!(g!().st_envelope(), st_envelope(g!()));
}

#[test]
fn method_st_centroid() {
    assert_method_eq_func!(g!().st_centroid(), st_centroid(g!()));
}

#[test]
fn method_st_pointonsurface() {
    assert_method_eq_func!(g!().st_pointonsurface(), st_pointonsurface(g!()));
}

// ── Geometry: measurement ───────────────────────────────────────────────────

#[test]
fn method_st_area() {
    assert_method_eq_func!(g!().st_area(), st_area(g!()));
}

#[test]
fn method_st_length() {
    assert_method_eq_func!(g!().st_length(), st_length(g!()));
}

#[test]
fn method_st_perimeter() {
    assert_method_eq_func!(g!().st_perimeter(), st_perimeter(g!()));
}

#[test]
fn method_st_distance() {
    assert_method_eq_func!(g!().st_distance(g!()), st_distance(g!(), g!()));
}

#[test]
fn method_st_dwithin() {
    assert_method_eq_func!(g!().st_dwithin(g!(), d!()), st_dwithin(g!(), g!(), d!()));
}

#[test]
fn method_st_azimuth() {
    assert_method_eq_func!(g!().st_azimuth(g!()), st_azimuth(g!(), g!()));
}

// ── Geometry: operations ────────────────────────────────────────────────────

#[test]
fn method_st_buffer() {
    assert_method_eq_func!(g!().st_buffer(d!()), st_buffer(g!(), d!()));
}

#[test]
fn method_st_union() {
    assert_method_eq_func!(g!().st_union(g!()), st_union(g!(), g!()));
}

#[test]
fn method_st_intersection() {
    assert_method_eq_func!(g!().st_intersection(g!()), st_intersection(g!(), g!()));
}

#[test]
fn method_st_difference() {
    assert_method_eq_func!(g!().st_difference(g!()), st_difference(g!(), g!()));
}

#[test]
fn method_st_symdifference() {
    assert_method_eq_func!(g!().st_symdifference(g!()), st_symdifference(g!(), g!()));
}

#[test]
fn method_st_transform() {
    assert_method_eq_func!(g!().st_transform(i!()), st_transform(g!(), i!()));
}

#[test]
fn method_st_simplify() {
    assert_method_eq_func!(g!().st_simplify(d!()), st_simplify(g!(), d!()));
}

#[test]
fn method_st_convexhull() {
    assert_method_eq_func!(g!().st_convexhull(), st_convexhull(g!()));
}

// ── Geometry: predicates ────────────────────────────────────────────────────

#[test]
fn method_st_intersects() {
    assert_method_eq_func!(g!().st_intersects(g!()), st_intersects(g!(), g!()));
}

#[test]
fn method_st_contains() {
    assert_method_eq_func!(g!().st_contains(g!()), st_contains(g!(), g!()));
}

#[test]
fn method_st_within() {
    assert_method_eq_func!(g!().st_within(g!()), st_within(g!(), g!()));
}

#[test]
fn method_st_covers() {
    assert_method_eq_func!(g!().st_covers(g!()), st_covers(g!(), g!()));
}

#[test]
fn method_st_coveredby() {
    assert_method_eq_func!(g!().st_coveredby(g!()), st_coveredby(g!(), g!()));
}

#[test]
fn method_st_equals() {
    assert_method_eq_func!(g!().st_equals(g!()), st_equals(g!(), g!()));
}

#[test]
fn method_st_disjoint() {
    assert_method_eq_func!(g!().st_disjoint(g!()), st_disjoint(g!(), g!()));
}

#[test]
fn method_st_touches() {
    assert_method_eq_func!(g!().st_touches(g!()), st_touches(g!(), g!()));
}

#[test]
fn method_st_crosses() {
    assert_method_eq_func!(g!().st_crosses(g!()), st_crosses(g!(), g!()));
}

#[test]
fn method_st_overlaps() {
    assert_method_eq_func!(g!().st_overlaps(g!()), st_overlaps(g!(), g!()));
}

#[test]
fn method_st_relate() {
    assert_method_eq_func!(g!().st_relate(g!()), st_relate(g!(), g!()));
}

// ── Geography ───────────────────────────────────────────────────────────────

#[test]
fn method_geography_st_asbinary() {
    assert_method_eq_func!(gg!().st_asbinary(), st_asbinary_geog(gg!()));
}

#[test]
fn method_geography_st_astext() {
    assert_method_eq_func!(gg!().st_astext(), st_astext_geog(gg!()));
}

#[test]
fn method_geography_st_distance() {
    assert_method_eq_func!(gg!().st_distance(gg!()), st_distance_geog(gg!(), gg!()));
}

#[test]
fn method_geography_st_dwithin() {
    assert_method_eq_func!(
        gg!().st_dwithin(gg!(), d!()),
        st_dwithin_geog(gg!(), gg!(), d!())
    );
}

// ── Raster ──────────────────────────────────────────────────────────────────

#[test]
fn method_st_height() {
    assert_method_eq_func!(r!().st_height(), st_height(r!()));
}

#[test]
fn method_st_width() {
    assert_method_eq_func!(r!().st_width(), st_width(r!()));
}

#[test]
fn method_st_numbands() {
    assert_method_eq_func!(r!().st_numbands(), st_numbands(r!()));
}

#[test]
fn method_st_scalex() {
    assert_method_eq_func!(r!().st_scalex(), st_scalex(r!()));
}

#[test]
fn method_st_scaley() {
    assert_method_eq_func!(r!().st_scaley(), st_scaley(r!()));
}

#[test]
fn method_st_value() {
    assert_method_eq_func!(r!().st_value(i!(), i!(), i!()), st_value(r!(), i!(), i!(), i!()));
}
