//! Reference data for the SFO Bay Area airspace.
//!
//! Named fixes, airport reference points, search boxes, the SFO Class B
//! model and the SERFR TWO arrival. Everything is constant; the merged
//! fix/airport lookup lives in [`Catalogue`].
//!
//! Units: positions are decimal degrees (north/east positive), box extents
//! and airspace radii are nautical miles, airspace floors/ceilings are
//! hundreds of feet and procedure altitudes are feet.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod airports;
pub mod airspace;
pub mod boxes;
pub mod catalogue;
pub mod error;
pub mod fixes;
pub mod form;
pub mod geo;
pub mod procedure;
pub mod sct;

pub use catalogue::{standard, Catalogue, CatalogueConfig, CatalogueConfigBuilder, MergePolicy};
pub use error::{Error, Result};
pub use form::FormValues;
pub use geo::{LatLon, LatLonBox, NamedLatLon};
