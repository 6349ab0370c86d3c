//! EWKB (Extended Well-Known Binary) header codec.
//!
//! Wire format:
//!   [0x01|0x00]   — byte order marker (little-endian or big-endian)
//!   [u32]         — geometry type with flags (in the declared byte order)
//!                   Bit 29 (0x20000000): SRID present
//!                   Bit 31 (0x80000000): Z dimension
//!                   Bit 30 (0x40000000): M dimension
//!                   Bits 0–28: geometry type (1=Point, 2=LineString, …)
//!   [i32]         — SRID (only when SRID flag set, in declared byte order)
//!   …             — ISO WKB geometry payload
//!
//! Only what the element layer needs: header inspection, SRID extraction,
//! and full geometry round-trips through geozero. This is not a geometry
//! engine.

use geo::Geometry;
use geozero::wkb::Ewkb;
use geozero::{CoordDimensions, ToGeo, ToWkb};

use crate::error::{GeoQuillError, Result};

pub const EWKB_SRID_FLAG: u32 = 0x2000_0000;
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
pub const EWKB_M_FLAG: u32 = 0x4000_0000;

/// Parsed EWKB header metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EwkbHeader {
    /// Base geometry type code (1=Point, 2=LineString, ..., 7=GeometryCollection).
    pub geom_type: u32,
    /// SRID embedded in the EWKB, if the SRID flag is set.
    pub srid: Option<i32>,
    pub has_z: bool,
    pub has_m: bool,
    /// Byte offset where the geometry payload starts.
    pub data_offset: usize,
    pub little_endian: bool,
}

/// Parse the EWKB header of `blob` without touching the payload.
pub fn parse_header(blob: &[u8]) -> Result<EwkbHeader> {
    if blob.len() < 5 {
        return Err(GeoQuillError::InvalidEwkb("truncated header"));
    }
    let little_endian = match blob[0] {
        0x01 => true,
        0x00 => false,
        _ => return Err(GeoQuillError::InvalidEwkb("bad byte order marker")),
    };

    let mut raw = [0u8; 4];
    raw.copy_from_slice(&blob[1..5]);
    let type_word = if little_endian {
        u32::from_le_bytes(raw)
    } else {
        u32::from_be_bytes(raw)
    };

    let has_srid = type_word & EWKB_SRID_FLAG != 0;
    let (srid, data_offset) = if has_srid {
        if blob.len() < 9 {
            return Err(GeoQuillError::InvalidEwkb("truncated SRID"));
        }
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&blob[5..9]);
        let srid = if little_endian {
            i32::from_le_bytes(raw)
        } else {
            i32::from_be_bytes(raw)
        };
        (Some(srid), 9)
    } else {
        (None, 5)
    };

    Ok(EwkbHeader {
        geom_type: type_word & 0x1FFF_FFFF,
        srid,
        has_z: type_word & EWKB_Z_FLAG != 0,
        has_m: type_word & EWKB_M_FLAG != 0,
        data_offset,
        little_endian,
    })
}

/// SRID embedded in an EWKB blob, if any (None for malformed blobs too).
pub fn extract_srid(blob: &[u8]) -> Option<i32> {
    parse_header(blob).ok().and_then(|header| header.srid)
}

/// Decode an EWKB blob into a geometry plus its embedded SRID.
pub fn parse_ewkb(blob: &[u8]) -> Result<(Geometry<f64>, Option<i32>)> {
    let header = parse_header(blob)?;
    let geom: Geometry<f64> = Ewkb(blob).to_geo()?;
    Ok((geom, header.srid))
}

/// Encode a geometry as EWKB, embedding `srid` when given.
pub fn write_ewkb(geom: &Geometry<f64>, srid: Option<i32>) -> Result<Vec<u8>> {
    Ok(geom.to_ewkb(CoordDimensions::xy(), srid)?)
}
