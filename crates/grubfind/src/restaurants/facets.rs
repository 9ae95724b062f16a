use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use grubfind_core::facets::filter_suggestions;
use grubfind_core::results::{build_facets_output, FacetsOutput};

use super::{load_pending, start_session, SourceOptions};

#[derive(Debug, clap::Args, Clone)]
pub struct FacetsOptions {
    /// Location as "<area> - <postcode>", e.g. "Ramsgate - CT12EH"
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Only show autocomplete suggestions containing this text
    #[arg(short, long, value_name = "TEXT")]
    pub suggest: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub source: SourceOptions,
}

pub async fn run(options: FacetsOptions, global: crate::Global) -> Result<()> {
    let output = facets_data(&options, &global).await?;

    if global.verbose {
        eprintln!(
            "{} cuisines, {} suggestions",
            output.cuisine_options.len(),
            output.autocomplete_suggestions.len()
        );
    }

    if options.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{}", json);
    } else {
        print_facets(&output);
    }

    Ok(())
}

/// Loads a location's restaurants and returns its facets, narrowed by `--suggest`
pub async fn facets_data(options: &FacetsOptions, global: &crate::Global) -> Result<FacetsOutput> {
    let mut session = start_session(&options.location)?;
    load_pending(&mut session, &options.source, global).await?;

    let results = session.results().ok_or_eyre("Search session has no results")?;

    let mut output = build_facets_output(results, session.selection());
    if let Some(text) = options.suggest.as_deref() {
        output.autocomplete_suggestions =
            filter_suggestions(&output.autocomplete_suggestions, text)
                .into_iter()
                .map(str::to_string)
                .collect();
    }

    Ok(output)
}

fn print_facets(output: &FacetsOutput) {
    println!(
        "\n{}",
        f!("CUISINES NEAR {} ({})", output.area.to_uppercase(), output.postcode)
            .bright_cyan()
            .bold()
    );

    if output.cuisine_options.is_empty() {
        println!("{}", "No cuisine metadata returned for this location.".yellow());
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row![b => "CUISINE", "FILTER VALUE"]);
        for option in &output.cuisine_options {
            table.add_row(prettytable::row![option.label, option.value]);
        }
        table.printstd();
    }

    println!("\n{}", "SUGGESTIONS".bright_cyan().bold());
    if output.autocomplete_suggestions.is_empty() {
        println!("{}", "No suggestions.".yellow());
    }
    for suggestion in &output.autocomplete_suggestions {
        println!("  {}", suggestion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn fixture_file() -> tempfile::NamedTempFile {
        let envelope = json!({
            "restaurants": [
                {
                    "id": 1, "name": "Pizza Palace",
                    "cuisines": [
                        {"uniqueName": "pizza", "name": "Pizza"},
                        {"uniqueName": "italian", "name": "Italian"}
                    ]
                },
                {
                    "id": 2, "name": "Pasta Place",
                    "cuisines": [{"uniqueName": "italian", "name": "Italian"}]
                }
            ],
            "metaData": {
                "cuisineDetails": [
                    {"uniqueName": "pizza", "name": "Pizza", "count": 1},
                    {"uniqueName": "italian", "name": "Italian", "count": 2}
                ]
            }
        });
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{envelope}").unwrap();
        file
    }

    fn options(file: &tempfile::NamedTempFile) -> FacetsOptions {
        FacetsOptions {
            location: "Ramsgate - CT12EH".to_string(),
            suggest: None,
            json: false,
            source: SourceOptions {
                file: Some(file.path().to_path_buf()),
                base_url: None,
            },
        }
    }

    #[tokio::test]
    async fn test_facets_data_lists_cuisines_and_suggestions() {
        let file = fixture_file();
        let output = facets_data(&options(&file), &crate::Global { verbose: false })
            .await
            .unwrap();

        let labels: Vec<&str> = output.cuisine_options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Pizza (1)", "Italian (2)"]);
        assert_eq!(
            output.autocomplete_suggestions,
            vec!["Pizza Palace", "Pasta Place", "Pizza", "Italian"]
        );
        assert_eq!(output.area, "Ramsgate");
    }

    #[tokio::test]
    async fn test_facets_data_narrows_suggestions() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.suggest = Some("PIZ".to_string());

        let output = facets_data(&opts, &crate::Global { verbose: false })
            .await
            .unwrap();
        assert_eq!(output.autocomplete_suggestions, vec!["Pizza Palace", "Pizza"]);
        assert_eq!(output.cuisine_options.len(), 2);
    }

    #[tokio::test]
    async fn test_facets_data_rejects_unknown_location() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.location = "Nowhere".to_string();

        let err = facets_data(&opts, &crate::Global { verbose: false })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown location: Nowhere"));
    }
}
