//! Search and reporting regions.
//!
//! Half-extents are nautical miles; see [`LatLon::bbox`].

use lazy_static::lazy_static;

use crate::airports::KSFO;
use crate::geo::{LatLon, LatLonBox};

/// Centre of the default map viewport, just south of the SERFR/BRIXX split.
pub const MAP_VIEWPORT_CENTER: LatLon = LatLon::new(37.221516, -121.992987);

pub const PALO_ALTO: LatLon = LatLon::new(37.433536, -122.1310187);

lazy_static! {
    /// The box in which we look for new flights.
    pub static ref SNARFING_CATCHMENT: LatLonBox = KSFO.bbox(125.0, 125.0);

    pub static ref SFO_10K: LatLonBox = KSFO.bbox(12.0, 12.0);
    pub static ref PALO_ALTO_20K: LatLonBox = PALO_ALTO.bbox(6.0, 7.0);
}

/// Every named box, for listing.
pub fn named() -> Vec<(&'static str, LatLonBox)> {
    vec![
        ("SNARFING_CATCHMENT", *SNARFING_CATCHMENT),
        ("SFO_10K", *SFO_10K),
        ("PALO_ALTO_20K", *PALO_ALTO_20K),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn boxes_contain_their_centres() {
        assert!(SNARFING_CATCHMENT.contains(KSFO));
        assert!(SFO_10K.contains(KSFO));
        assert!(PALO_ALTO_20K.contains(PALO_ALTO));
    }

    #[test]
    fn catchment_covers_the_arrival_fixes() {
        // SERFR sits ~100NM south-east of SFO
        assert!(SNARFING_CATCHMENT.contains(LatLon::new(36.0683056, -121.3646639)));
        assert!(!SFO_10K.contains(LatLon::new(36.0683056, -121.3646639)));
    }

    #[test]
    fn palo_alto_extents() {
        let b = *PALO_ALTO_20K;
        assert_abs_diff_eq!(b.ne.lat() - b.sw.lat(), 14.0 / 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.center().lat(), PALO_ALTO.lat(), epsilon = 1e-9);
    }
}
