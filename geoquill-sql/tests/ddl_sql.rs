//! DDL rendering: typmod column specs and AddGeometryColumn management mode.

use geoquill_sql::ddl::{CreateTable, DropTable};
use geoquill_sql::prelude::*;

fn point_type() -> GeometryTypeName {
    "POINT".parse().unwrap()
}

#[test]
fn create_table_with_inline_typmod() {
    let mut table = Table::new("table");
    table.add_column("id", ColumnType::Integer);
    table.add_column(
        "geom",
        ColumnType::geometry(
            Geometry::builder()
                .geometry_type(Some(point_type()))
                .srid(4326)
                .build()
                .unwrap(),
        ),
    );
    assert_eq!(
        CreateTable::new(&table).to_statements(),
        [r#"CREATE TABLE "table" (id integer, geom geometry(POINT,4326))"#]
    );
}

#[test]
fn create_table_renders_srid_sentinel() {
    let mut table = Table::new("features");
    table.add_column(
        "geom",
        ColumnType::geometry(Geometry::builder().build().unwrap()),
    );
    assert_eq!(
        CreateTable::new(&table).to_statements(),
        ["CREATE TABLE features (geom geometry(GEOMETRY,-1))"]
    );
}

#[test]
fn create_table_with_managed_column() {
    let mut table = Table::new("table");
    table.add_column("id", ColumnType::Integer);
    table.add_column(
        "geom",
        ColumnType::geometry(
            Geometry::builder()
                .geometry_type(Some(point_type()))
                .srid(4326)
                .management(true)
                .build()
                .unwrap(),
        ),
    );
    assert_eq!(
        CreateTable::new(&table).to_statements(),
        [
            r#"CREATE TABLE "table" (id integer)"#,
            "SELECT AddGeometryColumn('table', 'geom', 4326, 'POINT', 2)",
        ]
    );
}

#[test]
fn managed_column_forwards_use_typmod() {
    let mut table = Table::new("table");
    table.add_column("id", ColumnType::Integer);
    table.add_column(
        "geom",
        ColumnType::geometry(
            Geometry::builder()
                .geometry_type(Some(point_type()))
                .srid(4326)
                .management(true)
                .use_typmod(false)
                .build()
                .unwrap(),
        ),
    );
    let statements = CreateTable::new(&table).to_statements();
    assert_eq!(
        statements[1],
        "SELECT AddGeometryColumn('table', 'geom', 4326, 'POINT', 2, false)"
    );
}

#[test]
fn drop_table_with_managed_column() {
    let mut table = Table::new("table");
    table.add_column(
        "geom",
        ColumnType::geometry(
            Geometry::builder()
                .geometry_type(Some(point_type()))
                .srid(4326)
                .management(true)
                .build()
                .unwrap(),
        ),
    );
    assert_eq!(
        DropTable::new(&table).to_statements(),
        [
            "SELECT DropGeometryColumn('table', 'geom')",
            r#"DROP TABLE "table""#,
        ]
    );
}

#[test]
fn drop_plain_table() {
    let mut table = Table::new("features");
    table.add_column("id", ColumnType::Integer);
    assert_eq!(
        DropTable::new(&table).to_statements(),
        ["DROP TABLE features"]
    );
}

#[test]
fn create_table_with_geography_and_raster() {
    let mut table = Table::new("coverage");
    table.add_column(
        "area",
        ColumnType::geography(Geography::builder().srid(4326).build().unwrap()),
    );
    table.add_column("rast", ColumnType::raster(Raster::new()));
    assert_eq!(
        CreateTable::new(&table).to_statements(),
        ["CREATE TABLE coverage (area geography(GEOMETRY,4326), rast raster)"]
    );
}
