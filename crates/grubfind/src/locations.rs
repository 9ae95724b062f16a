use crate::prelude::{eprintln, println, *};
use grubfind_core::locations::{self, Location};
use serde::Serialize;

#[derive(Debug, clap::Args, Clone)]
pub struct LocationsOptions {
    /// Only show locations whose "<area> - <postcode>" contains this text
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LocationEntry {
    postcode: &'static str,
    area: &'static str,
    display: String,
}

impl From<&Location> for LocationEntry {
    fn from(location: &Location) -> Self {
        Self {
            postcode: location.postcode,
            area: location.area,
            display: location.display(),
        }
    }
}

pub fn run(options: LocationsOptions, global: crate::Global) -> Result<()> {
    let entries = matching_locations(options.query.as_deref().unwrap_or(""));

    if global.verbose {
        eprintln!("{} of {} locations match", entries.len(), locations::LOCATIONS.len());
    }

    if options.json {
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No known location matches that text.");
        return Ok(());
    }

    let mut table = new_table();
    table.add_row(prettytable::row![b => "AREA", "POSTCODE", "SEARCH INPUT"]);
    for entry in &entries {
        table.add_row(prettytable::row![entry.area, entry.postcode, entry.display]);
    }
    table.printstd();

    Ok(())
}

fn matching_locations(query: &str) -> Vec<LocationEntry> {
    locations::suggest(query)
        .into_iter()
        .filter_map(locations::find_by_display)
        .map(LocationEntry::from)
        .collect()
}

/// Hint appended to an invalid-location error
pub fn location_hint(input: &str) -> String {
    let suggestions = locations::suggest(input);
    match suggestions.as_slice() {
        [] => "Run `grubfind locations` to see every known location.".to_string(),
        [only] => f!("Did you mean \"{only}\"?"),
        many => f!("Did you mean one of: {}?", many.join(", ")),
    }
}
