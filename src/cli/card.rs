use super::client;
use chrono::NaiveDate;
use clap::Subcommand;
use debit_card_client::{CardDto, Result};

#[derive(Subcommand, Debug)]
pub enum CardCommand {
    /// Show card details
    Show { id: u64 },
    /// Show card balance
    Balance { id: u64 },
    /// Show card pin
    Pin { id: u64 },
    /// Show transaction history, optionally within a date range
    History {
        id: u64,
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Create a new card
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        currency: String,
        #[arg(long)]
        pin: String,
    },
    /// Activate a card
    Activate { id: u64 },
    /// Deactivate a card
    Deactivate { id: u64 },
    /// Set a new pin
    UpdatePin { id: u64, pin: String },
    /// Load an amount onto the card
    LoadBalance { id: u64, amount: String },
}

impl CardCommand {
    pub async fn execute(&self) -> Result<()> {
        let client = client()?;

        let body = match self {
            CardCommand::Show { id } => client.get_card_by_id(*id).await?,
            CardCommand::Balance { id } => client.get_card_balance(*id).await?,
            CardCommand::Pin { id } => client.get_card_pin(*id).await?,
            CardCommand::History { id, from, to } => {
                client.get_card_history(*id, *from, *to).await?
            }
            CardCommand::Create {
                first_name,
                last_name,
                currency,
                pin,
            } => {
                let card = CardDto::new(first_name, last_name, currency, pin);
                client.create_card(&card).await?
            }
            CardCommand::Activate { id } => client.activate_card(*id).await?,
            CardCommand::Deactivate { id } => client.deactivate_card(*id).await?,
            CardCommand::UpdatePin { id, pin } => client.update_card_pin(*id, pin).await?,
            CardCommand::LoadBalance { id, amount } => {
                client.load_card_balance(*id, amount).await?
            }
        };

        println!("{}", body);
        Ok(())
    }
}
