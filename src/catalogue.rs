//! The merged fix and airport lookup space.
//!
//! A [`Catalogue`] is built once and then only read. Most callers want
//! [`standard()`]; build your own from a [`CatalogueConfig`] when a different
//! collision policy or subset is needed, and pass it around explicitly.

use std::collections::{BTreeMap, HashMap};

use derive_builder::Builder;
use itertools::Itertools;
use lazy_static::lazy_static;
use tracing::{debug, warn};

use crate::airports::{Airport, AIRPORTS};
use crate::airspace::SFO_CLASS_B;
use crate::error::{Error, Result};
use crate::fixes::{Fix, FixStatus, FIXES};
use crate::form::FormValues;
use crate::geo::{LatLon, NamedLatLon};
use crate::procedure::SERFR2;

/// What to do when an identifier names both a fix and an airport.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MergePolicy {
    /// Airports are merged last and win. Historical behaviour.
    #[default]
    AirportsOverride,
    FixesOverride,
    RejectCollisions,
}

impl std::str::FromStr for MergePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "airports" => Ok(MergePolicy::AirportsOverride),
            "fixes" => Ok(MergePolicy::FixesOverride),
            "reject" => Ok(MergePolicy::RejectCollisions),
            _ => Err(format!("unknown merge policy '{}' (airports, fixes, reject)", s)),
        }
    }
}

#[derive(Clone, Debug, Builder, PartialEq)]
#[builder(default)]
pub struct CatalogueConfig {
    pub merge_policy: MergePolicy,
    /// Load the `X_` personal reference points.
    pub include_personal: bool,
    /// Load draft fixes from pending procedure amendments.
    pub include_proposed: bool,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        CatalogueConfig {
            merge_policy: MergePolicy::default(),
            include_personal: true,
            include_proposed: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Catalogue {
    config: CatalogueConfig,
    fix_table: &'static [Fix],
    fixes: BTreeMap<&'static str, &'static Fix>,
    airports: BTreeMap<&'static str, &'static Airport>,
    merged: HashMap<&'static str, LatLon>,
}

lazy_static! {
    static ref STANDARD: Catalogue = Catalogue::build(CatalogueConfig::default(), FIXES, AIRPORTS);
}

/// The process-wide catalogue with the default configuration.
pub fn standard() -> &'static Catalogue {
    &STANDARD
}

impl Catalogue {
    pub fn new(config: CatalogueConfig) -> Result<Catalogue> {
        Catalogue::with_tables(config, FIXES, AIRPORTS)
    }

    /// Builds from tables other than the built-in ones.
    ///
    /// The tables must be `'static`, i.e. compiled in alongside the standard
    /// ones. Nothing here loads data at runtime.
    pub fn with_tables(config: CatalogueConfig, fixes: &'static [Fix], airports: &'static [Airport]) -> Result<Catalogue> {
        let catalogue = Catalogue::build(config, fixes, airports);
        if catalogue.config.merge_policy == MergePolicy::RejectCollisions {
            let collisions = catalogue.collisions();
            if !collisions.is_empty() {
                return Err(Error::IdentifierCollision { ids: collisions.join(", ") });
            }
        }
        Ok(catalogue)
    }

    fn build(config: CatalogueConfig, fix_table: &'static [Fix], airport_table: &'static [Airport]) -> Catalogue {
        let fixes: BTreeMap<_, _> = fix_table
            .iter()
            .filter(|f| match f.status {
                FixStatus::Superseded => false,
                FixStatus::Personal => config.include_personal,
                FixStatus::Proposed => config.include_proposed,
                FixStatus::Current => true,
            })
            .map(|f| (f.name, f))
            .collect();

        let airports: BTreeMap<_, _> = airport_table.iter().map(|a| (a.icao, a)).collect();

        let mut merged: HashMap<_, _> = fixes.iter().map(|(&k, f)| (k, f.latlon)).collect();
        for (&icao, airport) in &airports {
            match config.merge_policy {
                MergePolicy::FixesOverride => {
                    if merged.contains_key(icao) {
                        warn!(icao, "fix shadows airport of the same name");
                    } else {
                        merged.insert(icao, airport.latlon);
                    }
                }
                _ => {
                    if merged.insert(icao, airport.latlon).is_some() {
                        warn!(icao, "airport overrides fix of the same name");
                    }
                }
            }
        }

        Catalogue { config, fix_table, fixes, airports, merged }
    }

    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    /// Every loaded fix identifier, sorted.
    pub fn list_fixes(&self) -> Vec<&'static str> {
        self.fixes.keys().copied().collect()
    }

    pub fn fixes(&self) -> impl Iterator<Item = &'static Fix> + '_ {
        self.fixes.values().copied()
    }

    pub fn airports(&self) -> impl Iterator<Item = &'static Airport> + '_ {
        self.airports.values().copied()
    }

    pub fn fix(&self, name: &str) -> Option<&'static Fix> {
        self.fixes.get(name.trim().to_ascii_uppercase().as_str()).copied()
    }

    pub fn airport(&self, icao: &str) -> Option<&'static Airport> {
        self.airports.get(icao.trim().to_ascii_uppercase().as_str()).copied()
    }

    /// Retired entries, never part of lookups.
    pub fn superseded(&self) -> impl Iterator<Item = &'static Fix> {
        self.fix_table.iter().filter(|f| f.status == FixStatus::Superseded)
    }

    /// Identifiers defined in both the fix and the airport table.
    pub fn collisions(&self) -> Vec<&'static str> {
        self.airports.keys().copied().filter(|k| self.fixes.contains_key(k)).collect()
    }

    /// Looks a name up in the merged fix and airport space.
    pub fn lookup(&self, name: &str) -> Option<NamedLatLon> {
        let name = name.trim().to_ascii_uppercase();
        self.merged
            .get_key_value(name.as_str())
            .map(|(&k, &latlon)| NamedLatLon::new(k, latlon))
    }

    /// Resolves the location a request names under `stem`.
    ///
    /// The value may be a fix or airport identifier, or a literal coordinate
    /// (see [`LatLon`]'s `FromStr`). With no `stem` value at all, the split
    /// `{stem}_lat` / `{stem}_long` decimal pair is read instead. Literal
    /// positions come back with an empty name.
    pub fn resolve<F: FormValues + ?Sized>(&self, source: &F, stem: &str) -> Result<NamedLatLon> {
        let value = source.form_value(stem).map(str::trim).filter(|v| !v.is_empty());

        if let Some(value) = value {
            if let Some(hit) = self.lookup(value) {
                debug!(stem, name = %hit.name, "resolved by name");
                return Ok(hit);
            }
            return value
                .parse::<LatLon>()
                .map(|latlon| {
                    debug!(stem, %latlon, "resolved literal coordinate");
                    NamedLatLon::new("", latlon)
                })
                .map_err(|_| Error::UnrecognizedIdentifier { value: value.to_owned() });
        }

        let lat = source.form_value(&format!("{}_lat", stem));
        let lon = source.form_value(&format!("{}_long", stem));
        match (lat, lon) {
            (Some(lat), Some(lon)) => {
                let malformed = || Error::MalformedCoordinate { value: format!("{},{}", lat, lon) };
                let latlon = match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
                    (Ok(lat), Ok(lon)) => LatLon::new(lat, lon),
                    _ => return Err(malformed()),
                };
                if !latlon.is_valid() {
                    return Err(malformed());
                }
                debug!(stem, %latlon, "resolved split coordinate");
                Ok(NamedLatLon::new("", latlon))
            }
            _ => Err(Error::MissingParameter { stem: stem.to_owned() }),
        }
    }

    /// Checks the loaded tables, the Class B map and the procedures.
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        violations.extend(
            self.fixes()
                .map(|f| (f.name, f.latlon))
                .chain(self.airports().map(|a| (a.icao, a.latlon)))
                .filter(|(_, latlon)| !latlon.is_valid())
                .map(|(name, latlon)| format!("{} is out of range at {}", name, latlon)),
        );
        violations.extend(SFO_CLASS_B.violations());
        violations.extend(SERFR2.violations());
        violations.extend(
            SERFR2
                .waypoints
                .iter()
                .filter(|w| w.position.is_none() && self.lookup(w.fix).is_none())
                .map(|w| format!("{} references unknown fix {}", SERFR2.name, w.fix)),
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::InvariantViolation { detail: violations.iter().join("; ") })
        }
    }
}
