mod card;
mod country;
mod show;

use clap::{Parser, Subcommand};
use debit_card_client::Result;

pub use card::CardCommand;
pub use country::CountryCommand;
pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "debit-card-client")]
#[command(about = "Manage debit cards through the debit card API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Card { command } => command.execute().await,
            Commands::Country { command } => command.execute().await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Card lookups and management
    Card {
        #[command(subcommand)]
        command: CardCommand,
    },
    /// Country lookups
    Country {
        #[command(subcommand)]
        command: CountryCommand,
    },
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}

/// Build a client from the loaded config file and environment.
pub(crate) fn client() -> Result<debit_card_client::DebitCardClient> {
    let config = debit_card_client::Config::load()?;
    debit_card_client::DebitCardClient::from_config(&config.api)
}
