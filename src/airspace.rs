//! Class B airspace as concentric altitude bands.
//!
//! A map is split into sectors by bearing from its centre; each sector is a
//! stack of [`Cylinder`] steps ordered outwards. Radii are nautical miles and
//! floors/ceilings are hundreds of feet MSL, the way sectional charts print
//! them (`100/30`).

use itertools::Itertools;

use crate::airports::KSFO;
use crate::geo::LatLon;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    /// Outer edge of this step. The inner edge is the previous step's radius.
    pub radius_nm: f64,
    pub floor: u32,
    pub ceiling: u32,
}

impl Cylinder {
    pub const fn new(radius_nm: f64, floor: u32, ceiling: u32) -> Self {
        Cylinder { radius_nm, floor, ceiling }
    }

    pub fn floor_ft(&self) -> u32 {
        self.floor * 100
    }

    pub fn ceiling_ft(&self) -> u32 {
        self.ceiling * 100
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassBSector {
    /// True bearings from the map centre, degrees.
    pub start_bearing: f64,
    pub end_bearing: f64,
    pub steps: &'static [Cylinder],
}

impl ClassBSector {
    pub fn covers_bearing(&self, bearing: f64) -> bool {
        let b = bearing.rem_euclid(360.0);
        if self.end_bearing - self.start_bearing >= 360.0 {
            return true;
        }
        let (start, end) = (self.start_bearing.rem_euclid(360.0), self.end_bearing.rem_euclid(360.0));
        if start <= end {
            (start..end).contains(&b)
        } else {
            b >= start || b < end
        }
    }

    pub fn outer_radius_nm(&self) -> f64 {
        self.steps.last().map(|c| c.radius_nm).unwrap_or(0.0)
    }

    /// Describes each broken invariant. Empty when the sector is sound.
    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.steps.is_empty() {
            out.push("sector has no steps".to_owned());
        }
        for (a, b) in self.steps.iter().tuple_windows() {
            if b.radius_nm < a.radius_nm {
                out.push(format!("step radius {}NM follows {}NM", b.radius_nm, a.radius_nm));
            }
        }
        for c in self.steps {
            if c.floor > c.ceiling {
                out.push(format!("step at {}NM has floor {} above ceiling {}", c.radius_nm, c.floor, c.ceiling));
            }
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassBMap {
    pub name: &'static str,
    pub center: LatLon,
    /// Degrees east.
    pub magnetic_declination: f64,
    pub sectors: &'static [ClassBSector],
}

impl ClassBMap {
    pub fn outer_radius_nm(&self) -> f64 {
        self.sectors.iter().map(|s| s.outer_radius_nm()).fold(0.0, f64::max)
    }

    pub fn sector_for_bearing(&self, bearing: f64) -> Option<&ClassBSector> {
        self.sectors.iter().find(|s| s.covers_bearing(bearing))
    }

    pub fn violations(&self) -> Vec<String> {
        self.sectors
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                let name = self.name;
                s.violations().into_iter().map(move |v| format!("{} sector {}: {}", name, i, v))
            })
            .collect()
    }
}

pub static SFO_CLASS_B: ClassBMap = ClassBMap {
    name: "SFO",
    center: KSFO,
    magnetic_declination: 13.68,
    sectors: &[
        ClassBSector {
            start_bearing: 0.0,
            end_bearing: 360.0,
            steps: &[
                Cylinder::new(7.0, 0, 100),   // from origin to  7NM : 100/00 (no floor)
                Cylinder::new(10.0, 15, 100), // from   7NM  to 10NM : 100/15
                Cylinder::new(15.0, 30, 100), // from  10NM  to 15NM : 100/30
                Cylinder::new(20.0, 40, 100), // from  15NM  to 20NM : 100/40
                Cylinder::new(25.0, 60, 100), // from  20NM  to 25NM : 100/60
                Cylinder::new(30.0, 80, 100), // from  25NM  to 30NM : 100/80
            ],
        },
        // TODO: split the ring into the charted sectors (A-H) once the
        // published sector boundaries are transcribed.
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sfo_class_b_is_sound() {
        assert!(SFO_CLASS_B.violations().is_empty());
        let radii: Vec<_> = SFO_CLASS_B.sectors[0].steps.iter().map(|c| c.radius_nm).collect();
        assert_eq!(radii, vec![7.0, 10.0, 15.0, 20.0, 25.0, 30.0]);
        assert_eq!(SFO_CLASS_B.outer_radius_nm(), 30.0);
        assert_eq!(SFO_CLASS_B.sectors[0].steps[2].floor_ft(), 3000);
        assert_eq!(SFO_CLASS_B.sectors[0].steps[2].ceiling_ft(), 10000);
    }

    #[test]
    fn full_ring_covers_every_bearing() {
        for b in &[0.0, 90.0, 359.9, 360.0, -45.0, 720.5] {
            assert!(SFO_CLASS_B.sector_for_bearing(*b).is_some(), "bearing {}", b);
        }
    }

    #[test]
    fn wrapping_sector() {
        let s = ClassBSector { start_bearing: 300.0, end_bearing: 60.0, steps: &[] };
        assert!(s.covers_bearing(330.0));
        assert!(s.covers_bearing(10.0));
        assert!(!s.covers_bearing(180.0));
        assert_eq!(s.violations(), vec!["sector has no steps".to_owned()]);
    }

    #[test]
    fn bad_steps_are_reported() {
        static STEPS: &[Cylinder] = &[Cylinder::new(10.0, 20, 100), Cylinder::new(7.0, 120, 100)];
        let s = ClassBSector { start_bearing: 0.0, end_bearing: 360.0, steps: STEPS };
        assert_eq!(s.violations().len(), 2);
    }
}
