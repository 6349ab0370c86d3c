//! Diesel SQL type definitions and `FromSql` / `ToSql` implementations.
//!
//! `Geometry` and `Geography` map to PostGIS's native types in PostgreSQL
//! and to `Binary` (BLOB) in SQLite, storing EWKB. `Raster` is opaque bytes
//! on every backend; its values are never reinterpreted.

#[cfg(any(feature = "sqlite", feature = "postgres"))]
use geoquill_core::elements::{RasterElement, WkbElement};

// ── SQL types ─────────────────────────────────────────────────────────────────

/// Diesel SQL type for a geometry column (stored as EWKB).
///
/// ```rust,ignore
/// table! {
///     features (id) {
///         id   -> Integer,
///         geom -> geoquill_diesel::Geometry,
///     }
/// }
/// ```
#[derive(diesel::sql_types::SqlType, diesel::query_builder::QueryId, Debug, Clone, Copy)]
#[diesel(sqlite_type(name = "Binary"))]
#[diesel(postgres_type(name = "geometry"))]
pub struct Geometry;

/// Diesel SQL type for a geography column (EWKB with SRID 4326).
///
/// Same wire format as [`Geometry`], but `FromSql`/`ToSql` enforce SRID 4326.
#[derive(diesel::sql_types::SqlType, diesel::query_builder::QueryId, Debug, Clone, Copy)]
#[diesel(sqlite_type(name = "Binary"))]
#[diesel(postgres_type(name = "geography"))]
pub struct Geography;

/// Diesel SQL type for a raster column (opaque bytes).
#[derive(diesel::sql_types::SqlType, diesel::query_builder::QueryId, Debug, Clone, Copy)]
#[diesel(sqlite_type(name = "Binary"))]
#[diesel(postgres_type(name = "raster"))]
pub struct Raster;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[cfg(any(feature = "sqlite", feature = "postgres"))]
fn geometry_from_blob(blob: &[u8]) -> Result<geo::Geometry<f64>, BoxedError> {
    let (geom, _srid) =
        geoquill_core::ewkb::parse_ewkb(blob).map_err(|e| Box::new(e) as BoxedError)?;
    Ok(geom)
}

#[cfg(any(feature = "sqlite", feature = "postgres"))]
fn ensure_geography_srid(element: &WkbElement) -> Result<(), BoxedError> {
    match element.srid() {
        Some(4326) => Ok(()),
        Some(other) => Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("geography EWKB must use SRID 4326 (got {other})"),
        ))),
        None => Err(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "geography EWKB must include SRID 4326",
        ))),
    }
}

#[cfg(any(feature = "sqlite", feature = "postgres"))]
fn geography_from_blob(blob: &[u8]) -> Result<geo::Geometry<f64>, BoxedError> {
    let element = WkbElement::new(blob.to_vec());
    ensure_geography_srid(&element)?;
    let (geom, _srid) = element.to_geometry().map_err(|e| Box::new(e) as BoxedError)?;
    Ok(geom)
}

// ── SQLite FromSql / ToSql ────────────────────────────────────────────────────

#[cfg(feature = "sqlite")]
mod sqlite_impls {
    use super::*;
    use diesel::deserialize::{self, FromSql};
    use diesel::serialize::{self, IsNull, Output, ToSql};
    use diesel::sql_types::Binary;
    use diesel::sqlite::Sqlite;
    // SQLite Output does NOT implement std::io::Write; binary values go
    // through `out.set_value(value)` with value: Into<SqliteBindValue>.

    // --- raw element bytes ---

    macro_rules! impl_element_bytes {
        ($sql_type:ty, $element:ty) => {
            impl FromSql<$sql_type, Sqlite> for $element {
                fn from_sql(
                    bytes: <Sqlite as diesel::backend::Backend>::RawValue<'_>,
                ) -> deserialize::Result<Self> {
                    let blob = <Vec<u8> as FromSql<Binary, Sqlite>>::from_sql(bytes)?;
                    Ok(<$element>::new(blob))
                }
            }

            impl ToSql<$sql_type, Sqlite> for $element {
                fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
                    out.set_value(self.as_bytes());
                    Ok(IsNull::No)
                }
            }
        };
    }

    impl_element_bytes!(Geometry, WkbElement);
    impl_element_bytes!(Raster, RasterElement);

    impl FromSql<Geography, Sqlite> for WkbElement {
        fn from_sql(
            bytes: <Sqlite as diesel::backend::Backend>::RawValue<'_>,
        ) -> deserialize::Result<Self> {
            let blob = <Vec<u8> as FromSql<Binary, Sqlite>>::from_sql(bytes)?;
            let element = WkbElement::new(blob);
            ensure_geography_srid(&element)?;
            Ok(element)
        }
    }

    impl ToSql<Geography, Sqlite> for WkbElement {
        fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
            ensure_geography_srid(self)?;
            out.set_value(self.as_bytes());
            Ok(IsNull::No)
        }
    }

    // --- geo::Geometry<f64> ---

    impl FromSql<Geometry, Sqlite> for geo::Geometry<f64> {
        fn from_sql(
            bytes: <Sqlite as diesel::backend::Backend>::RawValue<'_>,
        ) -> deserialize::Result<Self> {
            let blob = <Vec<u8> as FromSql<Binary, Sqlite>>::from_sql(bytes)?;
            super::geometry_from_blob(&blob)
        }
    }

    impl ToSql<Geometry, Sqlite> for geo::Geometry<f64> {
        fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
            let blob = geoquill_core::ewkb::write_ewkb(self, None)
                .map_err(|e| Box::new(e) as BoxedError)?;
            out.set_value(blob);
            Ok(IsNull::No)
        }
    }

    impl FromSql<Geography, Sqlite> for geo::Geometry<f64> {
        fn from_sql(
            bytes: <Sqlite as diesel::backend::Backend>::RawValue<'_>,
        ) -> deserialize::Result<Self> {
            let blob = <Vec<u8> as FromSql<Binary, Sqlite>>::from_sql(bytes)?;
            super::geography_from_blob(&blob)
        }
    }

    impl ToSql<Geography, Sqlite> for geo::Geometry<f64> {
        fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
            let blob = geoquill_core::ewkb::write_ewkb(self, Some(4326))
                .map_err(|e| Box::new(e) as BoxedError)?;
            out.set_value(blob);
            Ok(IsNull::No)
        }
    }
}

// ── PostgreSQL FromSql / ToSql ────────────────────────────────────────────────

#[cfg(feature = "postgres")]
mod postgres_impls {
    use super::*;
    use diesel::deserialize::{self, FromSql};
    use diesel::pg::Pg;
    use diesel::serialize::{self, IsNull, Output, ToSql};
    use std::io::Write as IoWrite;

    // PostgreSQL Output implements std::io::Write.

    macro_rules! impl_element_bytes_pg {
        ($sql_type:ty, $element:ty) => {
            impl FromSql<$sql_type, Pg> for $element {
                fn from_sql(
                    bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
                ) -> deserialize::Result<Self> {
                    Ok(<$element>::new(bytes.as_bytes().to_vec()))
                }
            }

            impl ToSql<$sql_type, Pg> for $element {
                fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
                    IoWrite::write_all(out, self.as_bytes())?;
                    Ok(IsNull::No)
                }
            }
        };
    }

    impl_element_bytes_pg!(Geometry, WkbElement);
    impl_element_bytes_pg!(Raster, RasterElement);

    impl FromSql<Geography, Pg> for WkbElement {
        fn from_sql(
            bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
        ) -> deserialize::Result<Self> {
            let element = WkbElement::new(bytes.as_bytes().to_vec());
            ensure_geography_srid(&element)?;
            Ok(element)
        }
    }

    impl ToSql<Geography, Pg> for WkbElement {
        fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
            ensure_geography_srid(self)?;
            IoWrite::write_all(out, self.as_bytes())?;
            Ok(IsNull::No)
        }
    }

    impl FromSql<Geometry, Pg> for geo::Geometry<f64> {
        fn from_sql(
            bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
        ) -> deserialize::Result<Self> {
            super::geometry_from_blob(bytes.as_bytes())
        }
    }

    impl ToSql<Geometry, Pg> for geo::Geometry<f64> {
        fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
            let blob = geoquill_core::ewkb::write_ewkb(self, None)
                .map_err(|e| Box::new(e) as BoxedError)?;
            IoWrite::write_all(out, &blob)?;
            Ok(IsNull::No)
        }
    }

    impl FromSql<Geography, Pg> for geo::Geometry<f64> {
        fn from_sql(
            bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
        ) -> deserialize::Result<Self> {
            super::geography_from_blob(bytes.as_bytes())
        }
    }

    impl ToSql<Geography, Pg> for geo::Geometry<f64> {
        fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
            let blob = geoquill_core::ewkb::write_ewkb(self, Some(4326))
                .map_err(|e| Box::new(e) as BoxedError)?;
            IoWrite::write_all(out, &blob)?;
            Ok(IsNull::No)
        }
    }
}
