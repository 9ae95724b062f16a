use crate::prelude::*;
use clap::Parser;

mod error;
mod locations;
mod prelude;
mod restaurants;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Find restaurants delivering near a UK postcode, then filter, sort and page through them"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "GRUBFIND_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List or look up the known search locations
    Locations(crate::locations::LocationsOptions),

    /// Search restaurants near a location, with filters, sorting and paging
    Search(crate::restaurants::search::SearchOptions),

    /// Show cuisine options and autocomplete suggestions for a location
    Facets(crate::restaurants::facets::FacetsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Locations(options) => crate::locations::run(options, app.global),
        SubCommands::Search(options) => crate::restaurants::search::run(options, app.global).await,
        SubCommands::Facets(options) => crate::restaurants::facets::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
