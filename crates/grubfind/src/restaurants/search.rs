use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use grubfind_core::card::{EMPTY_STATE_HINT, EMPTY_STATE_MESSAGE};
use grubfind_core::filters::{self, FilterToggles};
use grubfind_core::pagination::PAGE_SIZE;
use grubfind_core::results::{build_results_output, ResultsOutput};

use super::{load_pending, start_session, SourceOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOption {
    /// Keep the order the discovery API returned
    #[default]
    BestMatch,
    /// Cheapest delivery first
    DeliveryCost,
    /// Lowest minimum order first
    MinOrder,
    /// Nearest first
    Distance,
}

impl From<SortOption> for filters::SortOption {
    fn from(s: SortOption) -> Self {
        match s {
            SortOption::BestMatch => filters::SortOption::BestMatch,
            SortOption::DeliveryCost => filters::SortOption::DeliveryCost,
            SortOption::MinOrder => filters::SortOption::MinOrder,
            SortOption::Distance => filters::SortOption::Distance,
        }
    }
}

impl SortOption {
    fn flag_value(&self) -> &'static str {
        match self {
            SortOption::BestMatch => "best-match",
            SortOption::DeliveryCost => "delivery-cost",
            SortOption::MinOrder => "min-order",
            SortOption::Distance => "distance",
        }
    }
}

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Location as "<area> - <postcode>", e.g. "Ramsgate - CT12EH"
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Only restaurants whose name or cuisine contains this text
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only restaurants serving this cuisine (unique name, repeatable)
    #[arg(short, long = "cuisine", value_name = "UNIQUE_NAME")]
    pub cuisines: Vec<String>,

    /// Only restaurants open for delivery now
    #[arg(long)]
    pub open_now: bool,

    /// Only restaurants marked as new
    #[arg(long)]
    pub new: bool,

    /// Only restaurants with free delivery
    #[arg(long)]
    pub free_delivery: bool,

    /// Sort order
    #[arg(short, long, value_enum, default_value_t = SortOption::BestMatch)]
    pub sort: SortOption,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Show every cuisine instead of the first three
    #[arg(long)]
    pub all_cuisines: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub source: SourceOptions,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let output = search_data(&options, &global).await?;

    if global.verbose {
        eprintln!("{} restaurants after filtering", output.matching);
    }

    if options.json {
        output_json(&output)?;
    } else {
        output_formatted(&output, &options);
    }

    Ok(())
}

/// Runs a search and returns the requested page as a structured ResultsOutput
pub async fn search_data(options: &SearchOptions, global: &crate::Global) -> Result<ResultsOutput> {
    let mut session = start_session(&options.location)?;
    load_pending(&mut session, &options.source, global).await?;

    let results = session
        .results_mut()
        .ok_or_eyre("Search session has no results")?;
    results.set_search_value(options.query.clone().unwrap_or_default());
    results.set_selected_cuisines(options.cuisines.iter().cloned());
    results.set_filter_toggles(FilterToggles {
        open_now: options.open_now,
        new: options.new,
        free_delivery: options.free_delivery,
    });
    results.set_sort_option(options.sort.into());
    results.set_active_page(options.page);

    let results = session
        .results()
        .ok_or_eyre("Search session has no results")?;

    Ok(build_results_output(
        results,
        session.selection(),
        &search_command(options),
        options.all_cuisines,
    ))
}

/// Wrap `value` in double quotes, escaping what the shell expands inside them
fn shell_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Command that reproduces this search, without the page flag
fn search_command(options: &SearchOptions) -> String {
    let mut command = f!("grubfind search {}", shell_quote(&options.location));

    if let Some(query) = options.query.as_deref().filter(|q| !q.is_empty()) {
        command.push_str(&f!(" --query {}", shell_quote(query)));
    }
    for cuisine in &options.cuisines {
        command.push_str(&f!(" --cuisine {}", shell_quote(cuisine)));
    }
    if options.open_now {
        command.push_str(" --open-now");
    }
    if options.new {
        command.push_str(" --new");
    }
    if options.free_delivery {
        command.push_str(" --free-delivery");
    }
    if options.sort != SortOption::BestMatch {
        command.push_str(&f!(" --sort {}", options.sort.flag_value()));
    }
    if let Some(file) = &options.source.file {
        command.push_str(&f!(" --file {}", shell_quote(&file.display().to_string())));
    }

    command
}

/// Convert results output to JSON string
fn format_results_json(output: &ResultsOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert results output to formatted text with colors
fn format_results_text(output: &ResultsOutput, options: &SearchOptions) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;

    // Header
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&f!(
        "{}\n",
        f!(
            "RESTAURANTS NEAR {} (Page {} of {})",
            output.heading.to_uppercase(),
            pagination.current_page,
            pagination.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&f!("{}\n", output.summary.bright_black()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        if output.matching == 0 {
            result.push_str(&f!("\n{}\n", EMPTY_STATE_MESSAGE.yellow()));
            result.push_str(&f!("{}\n", EMPTY_STATE_HINT.bright_black()));
        } else {
            result.push_str(&f!("\n{}\n", "No restaurants on this page.".yellow()));
        }
    }

    for (idx, card) in output.items.iter().enumerate() {
        let number = (pagination.current_page - 1) * PAGE_SIZE + idx + 1;
        result.push_str(&f!(
            "\n{} {}\n",
            f!("[{number}]").yellow().bold(),
            card.name.white().bold()
        ));

        if let Some(rating) = &card.rating {
            result.push_str(&f!("    {}: {}\n", "Rating".green(), rating.bright_yellow()));
        }
        result.push_str(&f!("    {}: {}\n", "Address".green(), card.address.bright_white()));

        if !card.cuisines.is_empty() {
            let mut cuisines = card.cuisines.join(", ");
            if let Some(more) = &card.more_cuisines {
                cuisines.push_str(&f!(" {more}"));
            }
            result.push_str(&f!("    {}: {}\n", "Cuisines".green(), cuisines.bright_magenta()));
        }

        if let (Some(eta), Some(cost)) = (&card.delivery_eta, &card.delivery_cost) {
            result.push_str(&f!(
                "    {}: {} | {}: {}\n",
                "ETA".green(),
                eta.bright_white(),
                "Delivery".green(),
                cost.bright_cyan()
            ));
        }
    }

    // Navigation section
    result.push_str(&f!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&f!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&f!("{}\n", "=".repeat(80).bright_yellow()));

    if pagination.next_page_command.is_some() || pagination.prev_page_command.is_some() {
        result.push_str(&f!("\n{}:\n", "To navigate".bright_white().bold()));
        if let Some(next) = &pagination.next_page_command {
            result.push_str(&f!("  {}: {}\n", "Next page".green(), next.cyan()));
        }
        if let Some(prev) = &pagination.prev_page_command {
            result.push_str(&f!("  {}: {}\n", "Previous page".green(), prev.cyan()));
        }
    }

    result.push_str(&f!("\n{}:\n", "To refine results".bright_white().bold()));
    result.push_str(&f!(
        "  {}\n",
        "--query <text>  --cuisine <unique-name>  --open-now  --new  --free-delivery".cyan()
    ));
    result.push_str(&f!(
        "  {}\n",
        "--sort best-match|delivery-cost|min-order|distance".cyan()
    ));

    result.push_str(&f!("\n{}:\n", "To list cuisines".bright_white().bold()));
    result.push_str(&f!(
        "  {}\n",
        f!("grubfind facets {}", shell_quote(&options.location)).cyan()
    ));

    result.push_str(&f!("\n{}:\n", "To get JSON output".bright_white().bold()));
    result.push_str(&f!("  {}\n", f!("{} --json", search_command(options)).cyan()));

    result.push('\n');
    result
}

fn output_json(output: &ResultsOutput) -> Result<()> {
    let json = format_results_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ResultsOutput, options: &SearchOptions) {
    println!("{}", format_results_text(output, options).trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn fixture_file() -> tempfile::NamedTempFile {
        let restaurants = json!([
            {
                "id": "1", "name": "Pizza Palace",
                "cuisines": [{"uniqueName": "pizza", "name": "Pizza"}],
                "isOpenNowForDelivery": true, "isNew": false,
                "deliveryCost": 2.5, "driveDistanceMeters": 1500,
                "deliveryEtaMinutes": {"rangeLower": 20, "rangeUpper": 35}
            },
            {
                "id": "2", "name": "Sushi Station",
                "cuisines": [{"uniqueName": "sushi", "name": "Sushi"}],
                "isOpenNowForDelivery": false, "isNew": true,
                "deliveryCost": 0, "driveDistanceMeters": 3000
            },
            {
                "id": "3", "name": "Burger Barn",
                "cuisines": [{"uniqueName": "burgers", "name": "Burgers"}],
                "isOpenNowForDelivery": true, "isNew": true,
                "deliveryCost": 5, "driveDistanceMeters": 500
            }
        ]);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{restaurants}").unwrap();
        file
    }

    fn options(file: &tempfile::NamedTempFile) -> SearchOptions {
        SearchOptions {
            location: "Ramsgate - CT12EH".to_string(),
            query: None,
            cuisines: Vec::new(),
            open_now: false,
            new: false,
            free_delivery: false,
            sort: SortOption::BestMatch,
            page: 1,
            all_cuisines: false,
            json: false,
            source: SourceOptions {
                file: Some(file.path().to_path_buf()),
                base_url: None,
            },
        }
    }

    fn global() -> crate::Global {
        crate::Global { verbose: false }
    }

    fn item_names(output: &ResultsOutput) -> Vec<&str> {
        output.items.iter().map(|c| c.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_new_sorted_by_distance() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.new = true;
        opts.sort = SortOption::Distance;

        let output = search_data(&opts, &global()).await.unwrap();
        assert_eq!(item_names(&output), vec!["Burger Barn", "Sushi Station"]);
        assert_eq!(output.summary, "Showing 2 of 3 results");
    }

    #[tokio::test]
    async fn test_query_pizza() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.query = Some("pizza".to_string());

        let output = search_data(&opts, &global()).await.unwrap();
        assert_eq!(item_names(&output), vec!["Pizza Palace"]);
        assert_eq!(output.area, "Ramsgate");
        assert_eq!(output.postcode, "CT12EH");
    }

    #[tokio::test]
    async fn test_cuisine_and_free_delivery() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.cuisines = vec!["sushi".to_string(), "pizza".to_string()];
        opts.free_delivery = true;

        let output = search_data(&opts, &global()).await.unwrap();
        assert_eq!(item_names(&output), vec!["Sushi Station"]);
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.page = 4;

        let output = search_data(&opts, &global()).await.unwrap();
        assert!(output.items.is_empty());
        assert_eq!(output.matching, 3);

        let text = format_results_text(&output, &opts);
        assert!(text.contains("No restaurants on this page."));
    }

    #[tokio::test]
    async fn test_unknown_location_fails() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.location = "ramsgate".to_string();

        let err = search_data(&opts, &global()).await.unwrap_err();
        assert!(err.to_string().contains("Did you mean \"Ramsgate - CT12EH\"?"));
    }

    #[test]
    fn test_search_command_includes_active_filters() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.query = Some("pizza".to_string());
        opts.cuisines = vec!["italian".to_string()];
        opts.open_now = true;
        opts.sort = SortOption::MinOrder;
        opts.source.file = None;

        assert_eq!(
            search_command(&opts),
            "grubfind search \"Ramsgate - CT12EH\" --query \"pizza\" --cuisine \"italian\" --open-now --sort min-order"
        );
    }

    #[test]
    fn test_search_command_escapes_quotes_in_query() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.query = Some(r#"say "hi" $HOME"#.to_string());
        opts.source.file = None;

        assert_eq!(
            search_command(&opts),
            r#"grubfind search "Ramsgate - CT12EH" --query "say \"hi\" \$HOME""#
        );
    }

    #[test]
    fn test_search_command_defaults() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.source.file = None;

        assert_eq!(search_command(&opts), "grubfind search \"Ramsgate - CT12EH\"");
    }

    #[tokio::test]
    async fn test_format_results_text_lists_cards() {
        let file = fixture_file();
        let opts = options(&file);
        let output = search_data(&opts, &global()).await.unwrap();

        let text = format_results_text(&output, &opts);
        assert!(text.contains("RESTAURANTS NEAR RAMSGATE"));
        assert!(text.contains("Pizza Palace"));
        assert!(text.contains("20-35 min"));
        assert!(text.contains("£2.50"));
        assert!(text.contains("Showing 3 of 3 results"));
    }

    #[tokio::test]
    async fn test_format_results_text_empty_state() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.query = Some("noodles".to_string());
        let output = search_data(&opts, &global()).await.unwrap();

        let text = format_results_text(&output, &opts);
        assert!(text.contains(EMPTY_STATE_MESSAGE));
        assert!(text.contains(EMPTY_STATE_HINT));
    }

    #[tokio::test]
    async fn test_format_results_json() {
        let file = fixture_file();
        let mut opts = options(&file);
        opts.sort = SortOption::DeliveryCost;
        let output = search_data(&opts, &global()).await.unwrap();

        let json = format_results_json(&output).unwrap();
        assert!(json.contains("\"pagination\""));
        assert!(json.contains("\"sortOption\": \"deliveryCost\""));
        assert_eq!(output.items[0].name, "Sushi Station");
    }

    #[test]
    fn test_sort_option_maps_to_core() {
        assert_eq!(
            filters::SortOption::from(SortOption::MinOrder),
            filters::SortOption::MinOrder
        );
        assert_eq!(
            filters::SortOption::from(SortOption::default()),
            filters::SortOption::BestMatch
        );
    }
}
