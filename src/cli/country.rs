use super::client;
use clap::Subcommand;
use debit_card_client::Result;

#[derive(Subcommand, Debug)]
pub enum CountryCommand {
    /// List available countries
    List,
    /// Show a single country
    Show { id: u64 },
}

impl CountryCommand {
    pub async fn execute(&self) -> Result<()> {
        let client = client()?;

        let body = match self {
            CountryCommand::List => client.get_countries().await?,
            CountryCommand::Show { id } => client.get_country(*id).await?,
        };

        println!("{}", body);
        Ok(())
    }
}
