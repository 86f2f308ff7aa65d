//! Named fixes around the Bay Area.
//!
//! Positions come from the FAA fix listings for California
//! (http://www.myaviationinfo.com/FixState.php?FixState=CALIFORNIA), grouped
//! by the procedure family they were collected for.

use crate::geo::LatLon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixGroup {
    Serfr3Proposal,
    Serfr2,
    Brixx,
    BigSur,
    Bodega,
    SfoArrivals,
    SfoDepartures,
    Oceanic,
    SjcSilicon,
    Randoms,
    EastBay,
    FosterCity,
    DyamdYosem,
    SfoFinals,
    SjcArrivals,
    Personal,
}

impl From<FixGroup> for &str {
    fn from(x: FixGroup) -> &'static str {
        match x {
            FixGroup::Serfr3Proposal => "SERFR3 (proposed)",
            FixGroup::Serfr2 => "SERFR2 & WWAVS1",
            FixGroup::Brixx => "BRIXX",
            FixGroup::BigSur => "BIGSURTWO",
            FixGroup::Bodega => "BDEGA2",
            FixGroup::SfoArrivals => "SFO arrivals",
            FixGroup::SfoDepartures => "SFO departures",
            FixGroup::Oceanic => "Oceanic",
            FixGroup::SjcSilicon => "SJC/SILCN3",
            FixGroup::Randoms => "Randoms",
            FixGroup::EastBay => "East Bay",
            FixGroup::FosterCity => "Foster City",
            FixGroup::DyamdYosem => "DYAMD and YOSEM",
            FixGroup::SfoFinals => "SFO finals (28L, 28R)",
            FixGroup::SjcArrivals => "SJC arrivals",
            FixGroup::Personal => "Personal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixStatus {
    /// Published and in use.
    Current,
    /// Draft position from a procedure amendment, keyed with a suffix so it
    /// doesn't shadow the published fix.
    Proposed,
    /// User-defined reference point, `X_` prefixed.
    Personal,
    /// Known-wrong or replaced position. Never loaded into a catalogue.
    Superseded,
}

impl From<FixStatus> for &str {
    fn from(x: FixStatus) -> &'static str {
        match x {
            FixStatus::Current => "current",
            FixStatus::Proposed => "proposed",
            FixStatus::Personal => "personal",
            FixStatus::Superseded => "superseded",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fix {
    pub name: &'static str,
    pub latlon: LatLon,
    pub group: FixGroup,
    pub status: FixStatus,
}

impl Fix {
    pub const fn new(name: &'static str, lat: f64, lon: f64, group: FixGroup) -> Self {
        let status = match group {
            FixGroup::Serfr3Proposal => FixStatus::Proposed,
            FixGroup::Personal => FixStatus::Personal,
            _ => FixStatus::Current,
        };
        Fix { name, latlon: LatLon::new(lat, lon), group, status }
    }

    pub const fn superseded(self) -> Self {
        Fix { status: FixStatus::Superseded, ..self }
    }
}

use FixGroup::*;

pub static FIXES: &[Fix] = &[
    // SERFR3 draft. SERFR, NRRLI, WWAVS and EPICK are unchanged; NARWL is
    // new and EDDYY moves.
    //  NARWL 371629.21N / 1220445.46W
    //  EDDYY 372229.65N / 1220707.50W
    Fix::new("NARWL-SERFR3", 37.2747806, -122.0792944, Serfr3Proposal),
    Fix::new("EDDYY-SERFR3", 37.3749028, -122.1187500, Serfr3Proposal),

    Fix::new("SERFR", 36.0683056, -121.3646639, Serfr2),
    Fix::new("NRRLI", 36.4956000, -121.6994000, Serfr2),
    Fix::new("WWAVS", 36.7415306, -121.8942333, Serfr2),
    Fix::new("EPICK", 36.9508222, -121.9526722, Serfr2),
    Fix::new("EDDYY", 37.3264500, -122.0997083, Serfr2),
    Fix::new("SWELS", 37.3681556, -122.1160806, Serfr2),
    Fix::new("MENLO", 37.4636861, -122.1536583, Serfr2),
    Fix::new("WPOUT", 37.1194861, -122.2927417, Serfr2),
    Fix::new("THEEZ", 37.5034694, -122.4247528, Serfr2),
    Fix::new("WESLA", 37.6643722, -122.4802917, Serfr2),
    Fix::new("MVRKK", 37.7369722, -122.4544500, Serfr2),

    Fix::new("CORKK", 37.7335889, -122.4975500, Brixx),
    Fix::new("BRIXX", 37.6178444, -122.3745278, Brixx),
    Fix::new("LUYTA", 37.2948889, -122.2045528, Brixx),
    Fix::new("JILNA", 37.2488056, -122.1495000, Brixx),
    Fix::new("YADUT", 37.2039889, -122.0232778, Brixx),

    Fix::new("CARME", 36.4551833, -121.8797139, BigSur),
    Fix::new("ANJEE", 36.7462861, -121.9648917, BigSur),
    Fix::new("SKUNK", 37.0075944, -122.0332278, BigSur),
    Fix::new("BOLDR", 37.1708861, -122.0761667, BigSur),

    Fix::new("LOZIT", 37.899325, -122.673194, Bodega),
    Fix::new("BGGLO", 38.224589, -122.767506, Bodega),
    Fix::new("GEEHH", 38.453333, -122.428650, Bodega),
    Fix::new("MSCAT", 38.566697, -122.671667, Bodega),
    Fix::new("JONNE", 38.551042, -122.863275, Bodega),
    Fix::new("AMAKR", 39.000000, -123.750000, Bodega),
    Fix::new("DEEAN", 38.349164, -123.302289, Bodega),
    Fix::new("MRRLO", 38.897547, -122.578233, Bodega),
    Fix::new("MLBEC", 38.874772, -122.958989, Bodega),

    Fix::new("HEMAN", 37.5338500, -122.1733333, SfoArrivals),
    Fix::new("NEPIC", 37.5858944, -122.2968833, SfoArrivals),

    Fix::new("PORTE", 37.4897861, -122.4745778, SfoDepartures),
    Fix::new("SSTIK", 37.6783444, -122.3616583, SfoDepartures),

    Fix::new("PPEGS", 37.3920722, -122.2817222, Oceanic),
    Fix::new("ALLBE", 37.5063889, -127.0000000, Oceanic),
    Fix::new("ALCOA", 37.8332528, -125.8345250, Oceanic),
    Fix::new("CINNY", 36.1816667, -124.7600000, Oceanic),
    Fix::new("PAINT", 38.0000000, -125.5000000, Oceanic),
    Fix::new("OSI",   37.3925000, -122.2813000, Oceanic),
    Fix::new("PIRAT", 37.2576500, -122.8633528, Oceanic),
    Fix::new("PYE",   38.0797567, -122.8678275, Oceanic),
    Fix::new("STINS", 37.8236111, -122.7566667, Oceanic),
    Fix::new("HADLY", 37.4022222, -122.5755556, Oceanic),
    Fix::new("PONKE", 37.4588167, -121.9960528, Oceanic),
    Fix::new("WETOR", 37.4847194, -122.0571417, Oceanic),

    Fix::new("VLLEY", 36.5091667, -121.4402778, SjcSilicon),
    Fix::new("GUUYY", 36.7394444, -121.5411111, SjcSilicon),
    Fix::new("SSEBB", 36.9788889, -121.6425000, SjcSilicon),
    Fix::new("GSTEE", 37.0708333, -121.6716667, SjcSilicon),
    Fix::new("KLIDE", 37.1641667, -121.7130556, SjcSilicon),
    Fix::new("BAXBE", 36.7730556, -121.6263889, SjcSilicon),
    Fix::new("APLLE", 37.0338889, -121.8050000, SjcSilicon),

    Fix::new("PARIY", 37.3560056, -121.9231222, Randoms), // SJC ?
    Fix::new("ZORSA", 37.3627583, -122.0500306, Randoms),

    Fix::new("HOPTA", 37.78501944, -122.154, EastBay),
    Fix::new("BOYSS", 38.02001944, -122.3778639, EastBay),
    Fix::new("WNDSR", 38.681808, -122.478747, EastBay),
    Fix::new("WEBRR", 38.243881, -122.412142, EastBay),
    Fix::new("SPAMY", 39.200661, -122.591042, EastBay),
    Fix::new("HUBRT", 39.040228, -122.568314, EastBay),
    Fix::new("DRAXE", 38.759, -122.389047, EastBay),
    Fix::new("BMBOO", 38.892972, -122.233019, EastBay),
    Fix::new("RBUCL", 39.070053, -122.02615, EastBay),
    Fix::new("GRTFL", 38.35216944, -122.2314694, EastBay),
    Fix::new("TRUKN", 37.71755833, -122.2145889, EastBay),
    Fix::new("DEDHD", 38.33551666, -122.1128083, EastBay),
    Fix::new("HYPEE", 37.88024444, -122.0674833, EastBay),
    Fix::new("COSMC", 37.82606111, -122.0049, EastBay),
    Fix::new("TYDYE", 37.689319, -122.268944, EastBay),
    Fix::new("ORRCA", 38.610325, -121.551622, EastBay),
    Fix::new("MOGEE", 38.336111, -121.389722, EastBay),
    Fix::new("TIPRE", 38.205833, -121.035833, EastBay),
    Fix::new("SYRAH", 37.99105, -121.103089, EastBay),
    Fix::new("RAIDR", 38.0325, -122.5575, EastBay),
    Fix::new("CRESN", 37.697475, -122.012019, EastBay),
    Fix::new("AAAME", 37.770908, -122.082811, EastBay),
    Fix::new("ALLXX", 37.729606, -122.064283, EastBay),
    Fix::new("HIRMO", 37.92765, -122.14835, EastBay),
    Fix::new("CEXUR", 37.934161, -122.252928, EastBay),
    Fix::new("WOULD", 37.774508, -122.058064, EastBay),
    Fix::new("FINSH", 37.651203, -122.257161, EastBay),
    Fix::new("HUSHH", 37.7495, -122.338592, EastBay),
    Fix::new("AANET", 38.530769, -122.497194, EastBay),

    Fix::new("ROKME", 37.5177778, -122.1191667, FosterCity),
    Fix::new("DONGG", 37.5891667, -122.2525000, FosterCity),
    Fix::new("GUTTS", 37.5552778, -122.1597222, FosterCity),
    // Wrong; the final approach fix further down has the right position.
    Fix::new("GOBEC", 37.5869444, -122.2547222, FosterCity).superseded(),
    Fix::new("WASOP", 37.5391667, -122.1247222, FosterCity),
    Fix::new("DUYET", 37.5680556, -122.2547222, FosterCity),

    Fix::new("ARCHI", 37.490833, -121.875500, DyamdYosem),
    Fix::new("FRELY", 37.510667, -121.793167, DyamdYosem),
    Fix::new("CEDES", 37.550822, -121.624586, DyamdYosem),
    Fix::new("FLOWZ", 37.592500, -121.264833, DyamdYosem),
    Fix::new("ALWYS", 37.633500, -120.959333, DyamdYosem),
    Fix::new("LAANE", 37.659000, -120.747333, DyamdYosem),
    Fix::new("DYAMD", 37.699167, -120.404500, DyamdYosem),
    Fix::new("FAITH", 37.401217, -121.861900, DyamdYosem),
    Fix::new("SOOIE", 37.428500, -121.607667, DyamdYosem),
    Fix::new("FRIGG", 37.465500, -121.257333, DyamdYosem),
    Fix::new("ZOMER", 37.545333, -120.631500, DyamdYosem),
    Fix::new("SNORA", 37.645500, -119.806333, DyamdYosem),
    Fix::new("YOSEM", 37.762667, -118.766667, DyamdYosem),

    Fix::new("GOBEC", 37.578833, -122.252833, SfoFinals),
    Fix::new("JOSUF", 37.592167, -122.285500, SfoFinals),
    Fix::new("DARNE", 37.593333, -122.292333, SfoFinals),
    Fix::new("FABLA", 37.597500, -122.318833, SfoFinals),
    Fix::new("AXMUL", 37.571500, -122.257167, SfoFinals),
    Fix::new("WIBNI", 37.516667, -122.031333, SfoFinals),
    Fix::new("ANETE", 37.463667, -121.942667, SfoFinals),
    Fix::new("FATUS", 37.486000, -122.002333, SfoFinals),
    Fix::new("HEGOT", 37.508000, -122.061833, SfoFinals),
    Fix::new("MIUKE", 37.552333, -122.181167, SfoFinals),
    Fix::new("DIVEC", 37.432833, -121.935000, SfoFinals),
    Fix::new("CEPIN", 37.536000, -122.172833, SfoFinals),
    Fix::new("DUMBA", 37.503500, -122.096167, SfoFinals),
    Fix::new("GIRRR", 37.495852, -122.027167, SfoFinals),
    Fix::new("ZILED", 37.495667, -121.958167, SfoFinals),

    Fix::new("HITIR", 37.323567, -122.007392, SjcArrivals),
    Fix::new("JESEN", 37.294831, -121.975569, SjcArrivals),
    Fix::new("PUCKK", 37.363500, -122.009667, SjcArrivals),

    Fix::new("X_RSH", 36.868582, -121.691934, Personal),
    Fix::new("X_BLH", 37.2199471, -122.0425108, Personal),
    Fix::new("X_HBR", 37.309564, -122.112378, Personal),
    Fix::new("X_WSD", 37.420995, -122.268237, Personal), // Woodside
    Fix::new("X_PVY", 37.38087, -122.23319, Personal),   // Portola Valley
];

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn live() -> impl Iterator<Item = &'static Fix> {
        FIXES.iter().filter(|f| f.status != FixStatus::Superseded)
    }

    #[test]
    fn live_names_are_unique() {
        let dupes: Vec<_> = live().map(|f| f.name).duplicates().collect();
        assert!(dupes.is_empty(), "duplicate fixes: {:?}", dupes);
    }

    #[test]
    fn only_old_gobec_is_superseded() {
        let superseded: Vec<_> = FIXES.iter().filter(|f| f.status == FixStatus::Superseded).collect();
        assert_eq!(superseded.len(), 1);
        assert_eq!(superseded[0].name, "GOBEC");
        assert_eq!(superseded[0].group, FixGroup::FosterCity);

        let gobec = live().find(|f| f.name == "GOBEC").unwrap();
        assert_eq!(gobec.latlon, LatLon::new(37.578833, -122.252833));
    }

    #[test]
    fn status_follows_group() {
        for f in FIXES {
            match f.group {
                FixGroup::Personal => assert!(f.name.starts_with("X_") && f.status == FixStatus::Personal),
                FixGroup::Serfr3Proposal => assert!(f.name.ends_with("-SERFR3") && f.status == FixStatus::Proposed),
                _ => assert_ne!(f.status, FixStatus::Personal),
            }
        }
    }
}
