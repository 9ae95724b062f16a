//! Known search locations
//!
//! A fixed table of UK postcodes and the areas they cover. Searches are only
//! accepted for inputs that match one of the display strings exactly; the
//! substring suggestions below exist purely to help the user get there.

use serde::Serialize;
use std::sync::LazyLock;

/// A searchable postcode with its human-readable area
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub postcode: &'static str,
    pub area: &'static str,
}

impl Location {
    /// Display string offered to the user, formatted as `"<area> - <postcode>"`
    pub fn display(&self) -> String {
        format!("{} - {}", self.area, self.postcode)
    }
}

/// Every location the search input accepts
pub const LOCATIONS: [Location; 17] = [
    Location { postcode: "CT12EH", area: "Ramsgate" },
    Location { postcode: "BS14DJ", area: "Bristol" },
    Location { postcode: "L40TH", area: "Ormskirk" },
    Location { postcode: "NE97TY", area: "Gateshead" },
    Location { postcode: "SW1A1AA", area: "London (Westminster)" },
    Location { postcode: "CF118AZ", area: "Cardiff" },
    Location { postcode: "M160RA", area: "Manchester" },
    Location { postcode: "EH11RE", area: "Edinburgh" },
    Location { postcode: "BN11AE", area: "Worthing" },
    Location { postcode: "CB74DL", area: "Ely" },
    Location { postcode: "LS27HY", area: "Leeds" },
    Location { postcode: "G38AG", area: "Glasgow" },
    Location { postcode: "PL40DW", area: "Plymouth" },
    Location { postcode: "B263QJ", area: "Birmingham" },
    Location { postcode: "DH45QZ", area: "Houghton le Spring" },
    Location { postcode: "BT71NN", area: "Belfast" },
    Location { postcode: "EC4M7RF", area: "London (City of London)" },
];

static DISPLAY_STRINGS: LazyLock<Vec<String>> =
    LazyLock::new(|| LOCATIONS.iter().map(Location::display).collect());

/// Exact, case-sensitive lookup of a display string
pub fn find_by_display(input: &str) -> Option<&'static Location> {
    DISPLAY_STRINGS
        .iter()
        .position(|display| display == input)
        .map(|index| &LOCATIONS[index])
}

/// Display strings containing `query`, ignoring case
///
/// An empty query returns every location.
pub fn suggest(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    DISPLAY_STRINGS
        .iter()
        .filter(|display| display.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}
