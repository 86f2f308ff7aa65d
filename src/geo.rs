use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::Error;

/// Nautical miles per degree of latitude.
pub const NM_PER_DEGREE: f64 = 60.0;

/// A WGS-84 position in signed decimal degrees, north and east positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLon(f64, f64);

impl LatLon {
    pub const fn new(lat: f64, lon: f64) -> Self {
        LatLon(lat, lon)
    }

    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }

    pub fn is_valid(self) -> bool {
        (-90.0..=90.0).contains(&self.0) && (-180.0..=180.0).contains(&self.1)
    }

    /// Axis-aligned box centred on this point.
    ///
    /// Both extents are half-widths in nautical miles. Longitude degrees are
    /// scaled by the cosine of this point's latitude.
    pub fn bbox(self, half_width_nm: f64, half_height_nm: f64) -> LatLonBox {
        let dlat = half_height_nm / NM_PER_DEGREE;
        let dlon = half_width_nm / (NM_PER_DEGREE * self.0.to_radians().cos());
        LatLonBox {
            sw: LatLon(self.0 - dlat, self.1 - dlon),
            ne: LatLon(self.0 + dlat, self.1 + dlon),
        }
    }

    //Ex: 31-53-00.510N. None when malformed or out of range.
    pub fn from_fix_txt(lat: &str, lon: &str) -> Option<Self> {
        lazy_static! {
            static ref LAT_LON_REGEX : Regex = Regex::new(r"^(\d+)-(\d+)-(\d+(?:\.\d+)?)([NSEW])$").unwrap();
        }

        let lat = LAT_LON_REGEX.captures(lat).and_then(|cap| dms_from_captures(&cap, Axis::Lat));
        let lon = LAT_LON_REGEX.captures(lon).and_then(|cap| dms_from_captures(&cap, Axis::Lon));

        match (lat, lon) {
            (Some(lat), Some(lon)) => Some(LatLon(lat, lon)).filter(|p| p.is_valid()),
            _ => None
        }
    }

    //Ex: 360405.90N / 1212152.79W, as printed on charts. None when malformed
    // or out of range.
    pub fn from_compact_dms(lat: &str, lon: &str) -> Option<Self> {
        lazy_static! {
            static ref COMPACT_REGEX : Regex = Regex::new(r"^(\d{2,3})(\d{2})(\d{2}(?:\.\d+)?)([NSEW])$").unwrap();
        }

        let lat = COMPACT_REGEX.captures(lat).and_then(|cap| dms_from_captures(&cap, Axis::Lat));
        let lon = COMPACT_REGEX.captures(lon).and_then(|cap| dms_from_captures(&cap, Axis::Lon));

        match (lat, lon) {
            (Some(lat), Some(lon)) => Some(LatLon(lat, lon)).filter(|p| p.is_valid()),
            _ => None
        }
    }

    pub fn to_vrc(self) -> String {
        // Rounded once to milliseconds of arc so seconds carry into minutes
        fn to_dms(dd: f64) -> (i64, i64, i64) {
            let ms = (dd.abs() * 3_600_000.0).round() as i64;
            (ms / 3_600_000, ms / 60_000 % 60, ms % 60_000)
        }

        let mut tmp = String::new();
        tmp += if self.0.is_sign_positive() { "N" } else { "S" };
        let (d, m, ms) = to_dms(self.0);
        tmp += &format!("{:03}.{:02}.{:02}.{:03}", d, m, ms / 1000, ms % 1000);

        tmp += " ";

        tmp += if self.1.is_sign_positive() { "E" } else { "W" };
        let (d, m, ms) = to_dms(self.1);
        tmp += &format!("{:03}.{:02}.{:02}.{:03}", d, m, ms / 1000, ms % 1000);
        tmp
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Axis {
    Lat,
    Lon,
}

fn dms_from_captures(cap: &Captures, axis: Axis) -> Option<f64> {
    fn to_dd(d: f64, m: f64, s: f64) -> f64 {
        d + m/60.0 + s/3600.0
    }

    let (d, m, s, dir) = (&cap[1], &cap[2], &cap[3], &cap[4]);
    let (d, m, s): (f64, f64, f64) = (d.parse().ok()?, m.parse().ok()?, s.parse().ok()?);
    if m >= 60.0 || s >= 60.0 {
        return None;
    }

    let negative = match (axis, dir) {
        (Axis::Lat, "N") | (Axis::Lon, "E") => false,
        (Axis::Lat, "S") | (Axis::Lon, "W") => true,
        _ => return None,
    };

    let dd = to_dd(d, m, s);
    Some(if negative { -dd } else { dd })
}

/// Parses a literal coordinate as it arrives in a request value.
///
/// Accepts `"37.61,-122.37"` decimal degrees, or a pair of DMS strings in
/// either FAA (`37-37-07.742N`) or chart (`373707.74N`) notation separated by
/// whitespace, a comma or a slash.
impl FromStr for LatLon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || Error::MalformedCoordinate { value: s.to_owned() };

        let (lat, lon) = s
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect_tuple::<(&str, &str)>()
            .ok_or_else(malformed)?;

        let latlon = match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => LatLon(lat, lon),
            _ => LatLon::from_fix_txt(lat, lon)
                .or_else(|| LatLon::from_compact_dms(lat, lon))
                .ok_or_else(malformed)?,
        };

        if latlon.is_valid() {
            Ok(latlon)
        } else {
            Err(malformed())
        }
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.0, self.1)
    }
}

/// A position together with the symbolic name it was resolved from.
///
/// `name` is empty when the position came from a literal coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedLatLon {
    pub name: String,
    pub latlon: LatLon,
}

impl NamedLatLon {
    pub fn new<S: Into<String>>(name: S, latlon: LatLon) -> Self {
        NamedLatLon { name: name.into(), latlon }
    }

    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}

impl fmt::Display for NamedLatLon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_named() {
            write!(f, "{} {}", self.name, self.latlon)
        } else {
            write!(f, "{}", self.latlon)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLonBox {
    pub sw: LatLon,
    pub ne: LatLon,
}

impl LatLonBox {
    pub fn center(&self) -> LatLon {
        LatLon((self.sw.0 + self.ne.0) / 2.0, (self.sw.1 + self.ne.1) / 2.0)
    }

    pub fn contains(&self, pos: LatLon) -> bool {
        (self.sw.0..=self.ne.0).contains(&pos.0) && (self.sw.1..=self.ne.1).contains(&pos.1)
    }
}

impl fmt::Display for LatLonBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} - {}]", self.sw, self.ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fix_txt_format() {
        let pos = LatLon::from_fix_txt("37-37-07.742N", "122-22-31.541W").unwrap();
        assert_abs_diff_eq!(pos.lat(), 37.6188172, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.lon(), -122.3754281, epsilon = 1e-6);
    }

    #[test]
    fn compact_dms_matches_chart_notes() {
        // SERFR as printed on the SERFR3 proposal
        let pos = LatLon::from_compact_dms("360405.90N", "1212152.79W").unwrap();
        assert_abs_diff_eq!(pos.lat(), 36.0683056, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.lon(), -121.3646639, epsilon = 1e-6);
    }

    #[test]
    fn dms_rejects_swapped_hemispheres() {
        assert!(LatLon::from_compact_dms("1212152.79W", "360405.90N").is_none());
        assert!(LatLon::from_fix_txt("37-37-61.0N", "122-22-31.541W").is_none());
    }

    #[test]
    fn literal_decimal_pair() {
        let pos: LatLon = "37.4636861,-122.1536583".parse().unwrap();
        assert_eq!(pos, LatLon::new(37.4636861, -122.1536583));

        let pos: LatLon = " 37.5 , -122.1 ".parse().unwrap();
        assert_eq!(pos, LatLon::new(37.5, -122.1));
    }

    #[test]
    fn literal_dms_pair() {
        let pos: LatLon = "371629.21N / 1220445.46W".parse().unwrap();
        assert_abs_diff_eq!(pos.lat(), 37.2747806, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.lon(), -122.0792944, epsilon = 1e-6);
    }

    #[test]
    fn literal_rejects_garbage() {
        for bad in &["", "ZZZZZ", "37.5", "37.5,-122.1,4", "95.0,10.0", "10.0,181.0", "abc,def"] {
            match bad.parse::<LatLon>() {
                Err(Error::MalformedCoordinate { .. }) => {}
                other => panic!("{:?} parsed as {:?}", bad, other),
            }
        }
    }

    #[test]
    fn vrc_format() {
        let pos = LatLon::new(37.6188172, -122.3754281);
        assert_eq!(pos.to_vrc(), "N037.37.07.742 W122.22.31.541");
    }

    #[test]
    fn vrc_seconds_carry_into_minutes_and_degrees() {
        let pos = LatLon::new(37.0 + 59.0 / 60.0 + 59.9999 / 3600.0, -122.5);
        assert_eq!(pos.to_vrc(), "N038.00.00.000 W122.30.00.000");

        let pos = LatLon::new(-(12.0 + 34.0 / 60.0 + 59.9996 / 3600.0), 0.25);
        assert_eq!(pos.to_vrc(), "S012.35.00.000 E000.15.00.000");
    }

    #[test]
    fn dms_parsers_reject_out_of_range() {
        assert!(LatLon::from_fix_txt("95-00-00N", "122-00-00W").is_none());
        assert!(LatLon::from_fix_txt("37-00-00N", "181-00-00W").is_none());
        assert!(LatLon::from_compact_dms("950000N", "1220000W").is_none());
        assert!(LatLon::from_compact_dms("370000N", "1810000E").is_none());
        assert!(LatLon::from_compact_dms("370000N", "1220000W").is_some());
    }

    #[test]
    fn bbox_extents() {
        let center = LatLon::new(37.6188172, -122.3754281);
        let b = center.bbox(12.0, 12.0);
        assert_abs_diff_eq!(b.ne.lat() - b.sw.lat(), 24.0 / 60.0, epsilon = 1e-9);
        // Longitude spread widens away from the equator
        assert!(b.ne.lon() - b.sw.lon() > 24.0 / 60.0);
        assert_abs_diff_eq!(b.center().lat(), center.lat(), epsilon = 1e-9);
        assert_abs_diff_eq!(b.center().lon(), center.lon(), epsilon = 1e-9);
        assert!(b.contains(center));
        assert!(!b.contains(LatLon::new(36.0, -122.3754281)));
    }
}
