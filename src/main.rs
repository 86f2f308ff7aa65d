#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::collections::HashMap;
use std::error::Error;
use std::io::prelude::*;
use std::path::PathBuf;

use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sfo_reference::airspace::SFO_CLASS_B;
use sfo_reference::procedure::SERFR2;
use sfo_reference::{boxes, sct, Catalogue, CatalogueConfigBuilder, MergePolicy};

#[derive(StructOpt)]
#[structopt(name = "sfo-ref", about = "Inspect the SFO airspace reference data")]
struct Args {
    /// Fix/airport collision policy: airports, fixes or reject
    #[structopt(long = "policy", default_value = "airports")]
    policy: MergePolicy,
    /// Leave out the X_ personal reference points
    #[structopt(long = "no-personal")]
    no_personal: bool,
    /// Leave out draft fixes from pending amendments
    #[structopt(long = "no-proposed")]
    no_proposed: bool,
    /// Log at debug level
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// List fix identifiers
    #[structopt(name = "fixes")]
    Fixes {
        /// Show group and status, and include superseded entries
        #[structopt(long = "all")]
        all: bool,
    },
    /// Resolve a location from form-style key=value pairs
    #[structopt(name = "resolve")]
    Resolve {
        stem: String,
        #[structopt(parse(try_from_str = parse_pair))]
        pairs: Vec<(String, String)>,
    },
    /// Print the SERFR2 arrival with resolved positions
    #[structopt(name = "procedure")]
    Procedure,
    /// Print the SFO Class B steps
    #[structopt(name = "airspace")]
    Airspace,
    /// Print the named search boxes
    #[structopt(name = "boxes")]
    Boxes,
    /// Render [AIRPORT] and [FIXES] sector-file sections
    #[structopt(name = "sct")]
    Sct {
        #[structopt(short = "o", long = "output", parse(from_os_str))]
        output: Option<PathBuf>,
    },
    /// Check the reference data invariants
    #[structopt(name = "validate")]
    Validate,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_owned(), v.to_owned())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::from_args();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = CatalogueConfigBuilder::default()
        .merge_policy(args.policy)
        .include_personal(!args.no_personal)
        .include_proposed(!args.no_proposed)
        .build()?;
    let catalogue = Catalogue::new(config)?;

    match args.cmd {
        Command::Fixes { all: false } => {
            for name in catalogue.list_fixes() {
                println!("{}", name);
            }
        }
        Command::Fixes { all: true } => {
            for f in catalogue.fixes().chain(catalogue.superseded()) {
                println!(
                    "{:12} {:24} {:10} {}",
                    f.name,
                    Into::<&str>::into(f.group),
                    Into::<&str>::into(f.status),
                    f.latlon
                );
            }
        }
        Command::Resolve { stem, pairs } => {
            let form: HashMap<String, String> = pairs.into_iter().collect();
            let hit = catalogue.resolve(&form, &stem)?;
            println!("{}", hit);
        }
        Command::Procedure => {
            println!("{} {} {}", SERFR2.name, Into::<&str>::into(SERFR2.kind), SERFR2.airport);
            let route = SERFR2.resolve_route(&catalogue)?;
            for (w, pos) in SERFR2.waypoints.iter().zip(route) {
                println!(
                    "  {:6} {:>6}-{:<6} {:>4}kt {} {}",
                    w.fix,
                    w.min_altitude,
                    w.max_altitude,
                    w.speed,
                    if w.binding { "*" } else { " " },
                    pos.latlon
                );
            }
        }
        Command::Airspace => {
            println!("{} Class B centred on {}, declination {}E", SFO_CLASS_B.name, SFO_CLASS_B.center, SFO_CLASS_B.magnetic_declination);
            for s in SFO_CLASS_B.sectors {
                println!("  sector {:03}-{:03}", s.start_bearing, s.end_bearing);
                for c in s.steps {
                    println!("    to {:>4}NM : {:03}/{:02}", c.radius_nm, c.ceiling, c.floor);
                }
            }
        }
        Command::Boxes => {
            for (name, b) in boxes::named() {
                println!("{:20} {}", name, b);
            }
        }
        Command::Sct { output } => {
            let sct = sct::render(&catalogue);
            match output {
                Some(path) => {
                    info!("Outputing sct2 data to {}...", path.display());
                    let mut output = std::fs::File::create(path)?;
                    output.write_all(sct.as_bytes())?;
                }
                None => print!("{}", sct),
            }
        }
        Command::Validate => {
            catalogue.validate()?;
            info!(
                fixes = catalogue.list_fixes().len(),
                airports = catalogue.airports().count(),
                "reference data is consistent"
            );
        }
    }
    Ok(())
}
