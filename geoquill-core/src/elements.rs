//! Geometry value elements carried through bind parameters.
//!
//! An element is the value side of a spatial column: WKT text, EWKB bytes,
//! or opaque raster bytes. Elements know how to render themselves for the
//! from-text constructor the column's type wraps around them, and how to
//! convert to and from `geo::Geometry` values.

use std::fmt;

use geo::Geometry;
use geozero::ToGeo;

use crate::error::Result;
use crate::ewkb;

/// WKT value with an optional SRID.
///
/// Renders extended WKT (`SRID=n;WKT`) when an SRID is set, which is the
/// form `ST_GeomFromEWKT` expects.
///
/// # Example
///
/// ```
/// use geoquill_core::elements::WktElement;
///
/// let element = WktElement::with_srid("POINT(1 2)", 4326);
/// assert_eq!(element.as_ewkt(), "SRID=4326;POINT(1 2)");
/// assert_eq!(WktElement::new("POINT(1 2)").as_ewkt(), "POINT(1 2)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WktElement {
    data: String,
    srid: i32,
}

impl WktElement {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            srid: -1,
        }
    }

    pub fn with_srid(data: impl Into<String>, srid: i32) -> Self {
        Self {
            data: data.into(),
            srid,
        }
    }

    pub fn wkt(&self) -> &str {
        &self.data
    }

    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Extended WKT rendering; plain WKT when the SRID is the -1 sentinel.
    pub fn as_ewkt(&self) -> String {
        if self.srid == -1 {
            self.data.clone()
        } else {
            format!("SRID={};{}", self.srid, self.data)
        }
    }

    pub fn to_geometry(&self) -> Result<Geometry<f64>> {
        Ok(geozero::wkt::Wkt(self.data.as_bytes()).to_geo()?)
    }
}

impl fmt::Display for WktElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_ewkt())
    }
}

/// EWKB value, as stored in a geometry or geography column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WkbElement {
    data: Vec<u8>,
}

impl WkbElement {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Encode a geometry as EWKB, embedding `srid` when given.
    pub fn from_geometry(geom: &Geometry<f64>, srid: Option<i32>) -> Result<Self> {
        Ok(Self {
            data: ewkb::write_ewkb(geom, srid)?,
        })
    }

    /// SRID embedded in the EWKB header, if any.
    pub fn srid(&self) -> Option<i32> {
        ewkb::extract_srid(&self.data)
    }

    pub fn to_geometry(&self) -> Result<(Geometry<f64>, Option<i32>)> {
        ewkb::parse_ewkb(&self.data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Opaque raster bytes; never wrapped or reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterElement {
    data: Vec<u8>,
}

impl RasterElement {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    #[test]
    fn wkt_element_parses_to_geometry() {
        let element = WktElement::with_srid("POINT(1 2)", 4326);
        let geom = element.to_geometry().unwrap();
        assert_eq!(geom, Geometry::Point(Point::new(1.0, 2.0)));
    }

    #[test]
    fn wkb_element_round_trip() {
        let point = Geometry::Point(Point::new(3.0, 4.0));
        let element = WkbElement::from_geometry(&point, Some(900913)).unwrap();
        assert_eq!(element.srid(), Some(900913));

        let (decoded, srid) = element.to_geometry().unwrap();
        assert_eq!(decoded, point);
        assert_eq!(srid, Some(900913));
    }

    #[test]
    fn wkb_element_without_srid() {
        let point = Geometry::Point(Point::new(3.0, 4.0));
        let element = WkbElement::from_geometry(&point, None).unwrap();
        assert_eq!(element.srid(), None);
    }

    #[test]
    fn raster_element_is_opaque() {
        let element = RasterElement::new(vec![0x01, 0x02]);
        assert_eq!(element.as_bytes(), [0x01, 0x02]);
    }
}
