use crate::geo::LatLon;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AirspaceClass {
    ClassB,
    ClassC,
    ClassD,
    ClassE,
}

impl From<AirspaceClass> for &str {
    fn from(x: AirspaceClass) -> &'static str {
        match x {
            AirspaceClass::ClassB => "B",
            AirspaceClass::ClassC => "C",
            AirspaceClass::ClassD => "D",
            AirspaceClass::ClassE => "E",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Airport {
    pub icao: &'static str,
    pub latlon: LatLon,
    pub class: AirspaceClass,
}

pub static AIRPORTS: &[Airport] = &[
    Airport { icao: "KSFO", latlon: KSFO, class: AirspaceClass::ClassB },
    Airport { icao: "KSJC", latlon: KSJC, class: AirspaceClass::ClassC },
    Airport { icao: "KOAK", latlon: KOAK, class: AirspaceClass::ClassC },
];

pub const KSFO: LatLon = LatLon::new(37.6188172, -122.3754281);
pub const KSJC: LatLon = LatLon::new(37.3639472, -121.9289375);
pub const KOAK: LatLon = LatLon::new(37.7212597, -122.2211489);

// Older named points, kept so existing callers still build.

#[deprecated(note = "use airports::KSFO or Catalogue::airport(\"KSFO\")")]
pub const SFO: LatLon = KSFO;

#[deprecated(note = "use airports::KSJC or Catalogue::airport(\"KSJC\")")]
pub const SJC: LatLon = KSJC;

/// Centre of the default map viewport.
#[deprecated(note = "use boxes::MAP_VIEWPORT_CENTER")]
pub const SERFR1_VIEWPORT: LatLon = crate::boxes::MAP_VIEWPORT_CENTER;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(deprecated)]
    fn retired_points_match_replacements() {
        assert_eq!(SFO, KSFO);
        assert_eq!(SJC, KSJC);
        assert_eq!(SERFR1_VIEWPORT, LatLon::new(37.221516, -121.992987));
    }

    #[test]
    fn icao_codes() {
        for a in AIRPORTS {
            assert_eq!(a.icao.len(), 4);
            assert!(a.icao.starts_with('K'));
            assert!(a.latlon.is_valid());
        }
    }
}
