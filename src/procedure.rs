use crate::catalogue::Catalogue;
use crate::error::{Error, Result};
use crate::geo::{LatLon, NamedLatLon};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcedureKind {
    Arrival,
    Departure,
}

impl From<ProcedureKind> for &str {
    fn from(x: ProcedureKind) -> &'static str {
        match x {
            ProcedureKind::Arrival => "STAR",
            ProcedureKind::Departure => "SID",
        }
    }
}

/// One fix of a procedure with its crossing restrictions.
///
/// Altitudes are feet MSL and speed is knots; zero means unrestricted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub fix: &'static str,
    /// Overrides the fix table position when set.
    pub position: Option<LatLon>,
    pub min_altitude: u32,
    pub max_altitude: u32,
    pub speed: u32,
    /// Whether aircraft are held to the restriction when matching tracks.
    pub binding: bool,
}

impl Waypoint {
    const fn new(fix: &'static str, min_altitude: u32, max_altitude: u32, speed: u32, binding: bool) -> Self {
        Waypoint { fix, position: None, min_altitude, max_altitude, speed, binding }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Procedure {
    pub name: &'static str,
    pub kind: ProcedureKind,
    pub airport: &'static str,
    /// In flying order.
    pub waypoints: &'static [Waypoint],
}

impl Procedure {
    pub fn fix_names(&self) -> Vec<&'static str> {
        self.waypoints.iter().map(|w| w.fix).collect()
    }

    pub fn waypoint(&self, fix: &str) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.fix.eq_ignore_ascii_case(fix))
    }

    /// Positions of every waypoint, overrides first, then the catalogue.
    pub fn resolve_route(&self, catalogue: &Catalogue) -> Result<Vec<NamedLatLon>> {
        self.waypoints
            .iter()
            .map(|w| match w.position {
                Some(pos) => Ok(NamedLatLon::new(w.fix, pos)),
                None => catalogue
                    .lookup(w.fix)
                    .ok_or_else(|| Error::UnrecognizedIdentifier { value: w.fix.to_owned() }),
            })
            .collect()
    }

    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.waypoints.is_empty() {
            out.push(format!("{} has no waypoints", self.name));
        }
        for w in self.waypoints.iter().filter(|w| w.binding) {
            if w.min_altitude > w.max_altitude {
                out.push(format!(
                    "{} {}: min altitude {} above max {}",
                    self.name, w.fix, w.min_altitude, w.max_altitude
                ));
            }
        }
        out
    }
}

// http://flightaware.com/resources/airport/SFO/STAR/SERFR+TWO+(RNAV)/pdf
pub static SERFR2: Procedure = Procedure {
    name: "SERFR2",
    kind: ProcedureKind::Arrival,
    airport: "SFO",
    waypoints: &[
        Waypoint::new("SERFR", 0, 0, 0, false), // Many aircraft skip SERFR
        Waypoint::new("NRRLI", 20000, 20000, 280, true), // Listed as NNRLI in older copies of this data
        Waypoint::new("WWAVS", 15000, 19000, 280, true),
        Waypoint::new("EPICK", 10000, 15000, 280, true),
        Waypoint::new("EDDYY", 6000, 6000, 240, true), // Delay vectoring inside EPICK-EDDYY
        Waypoint::new("SWELS", 4700, 4700, 240, false),
        Waypoint::new("MENLO", 4000, 4000, 230, false),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serfr2_shape() {
        assert_eq!(SERFR2.kind, ProcedureKind::Arrival);
        assert_eq!(
            SERFR2.fix_names(),
            vec!["SERFR", "NRRLI", "WWAVS", "EPICK", "EDDYY", "SWELS", "MENLO"]
        );
        assert!(SERFR2.violations().is_empty());

        let epick = SERFR2.waypoint("epick").unwrap();
        assert_eq!((epick.min_altitude, epick.max_altitude, epick.speed), (10000, 15000, 280));
        assert!(epick.binding);
        assert!(!SERFR2.waypoint("SERFR").unwrap().binding);
    }

    #[test]
    fn inverted_window_is_reported_only_when_binding() {
        static WPTS: &[Waypoint] = &[
            Waypoint::new("AAAAA", 9000, 8000, 250, true),
            Waypoint::new("BBBBB", 9000, 8000, 250, false),
        ];
        let p = Procedure { name: "TEST1", kind: ProcedureKind::Departure, airport: "SFO", waypoints: WPTS };
        let v = p.violations();
        assert_eq!(v.len(), 1);
        assert!(v[0].contains("AAAAA"));
    }
}
