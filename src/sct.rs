//! Sector-file (`.sct2`) rendering for map tooling.

use crate::catalogue::Catalogue;

static VRC_SEPERATOR: &str =
    "\n\n;===============================================================================\n\n";

const DEFAULT_FREQUENCY: &str = "122.800";

/// `[AIRPORT]` section. Tower frequencies aren't tracked, so every airport
/// gets the unicom placeholder.
pub fn airport_section(catalogue: &Catalogue) -> String {
    let mut sct = String::new();
    sct += VRC_SEPERATOR;
    sct += "[AIRPORT]\n";

    for a in catalogue.airports() {
        sct += &format!(
            "{:4} {:7} {} {}\n",
            a.icao,
            DEFAULT_FREQUENCY,
            a.latlon.to_vrc(),
            Into::<&str>::into(a.class)
        );
    }
    sct
}

/// `[FIXES]` section, in identifier order.
pub fn fix_section(catalogue: &Catalogue) -> String {
    let mut sct = String::new();
    sct += VRC_SEPERATOR;
    sct += "[FIXES]\n";

    for f in catalogue.fixes() {
        sct += &format!("{} {}\n", f.name, f.latlon.to_vrc());
    }
    sct
}

pub fn render(catalogue: &Catalogue) -> String {
    airport_section(catalogue) + &fix_section(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::standard;

    #[test]
    fn airport_lines() {
        let sct = airport_section(standard());
        assert!(sct.contains("[AIRPORT]\n"));
        assert!(sct.contains("KSFO 122.800 N037.37.07.742 W122.22.31.541 B\n"));
        assert!(sct.contains("KOAK 122.800 N037.43.16.535 W122.13.16.136 C\n"));
        assert_eq!(sct.lines().filter(|l| l.starts_with('K')).count(), 3);
    }

    #[test]
    fn fix_lines_follow_listing_order() {
        let sct = fix_section(standard());
        let names: Vec<_> = sct
            .lines()
            .skip_while(|l| *l != "[FIXES]")
            .skip(1)
            .map(|l| l.split(' ').next().unwrap_or(""))
            .collect();
        assert_eq!(names, standard().list_fixes());
    }
}
