//! Client for the debit card management API.
//!
//! [`DebitCardClient`] exposes one method per endpoint. Each method resolves
//! the endpoint's URI template, attaches an optional body, sends a single
//! request with the static `AUTH-KEY` header and returns the raw response
//! body. Any failure along the way surfaces as [`AppError::Request`].
//!
//! ```no_run
//! use debit_card_client::{CardDto, DebitCardClient};
//!
//! # async fn run() -> debit_card_client::Result<()> {
//! let client = DebitCardClient::new("0b6b3b0f7b2a3cdd2a0a0bf5e2ebd6b1")?;
//! println!("{}", client.get_card_balance(1).await?);
//!
//! let card = CardDto::new("Vadim", "Shevchenko", "EUR", "1234");
//! client.create_card(&card).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod models;

pub use client::DebitCardClient;
pub use config::{ApiConfig, Config};
pub use endpoint::Endpoint;
pub use error::{AppError, Result};
pub use http::{ApiRequest, HttpMethod, ReqwestTransport, Transport};
pub use models::{CardDto, CountryDto};
