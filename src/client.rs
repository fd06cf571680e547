use chrono::NaiveDate;
use tracing::{instrument, warn};

use crate::config::ApiConfig;
use crate::endpoint::Endpoint;
use crate::error::{AppError, Result};
use crate::http::{ApiRequest, ReqwestTransport, Transport};
use crate::models::CardDto;

const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Client for the debit card API.
///
/// Every operation issues a single request and returns the raw response body.
/// Responses are never parsed; interpreting them is up to the caller.
pub struct DebitCardClient<T = ReqwestTransport> {
    transport: T,
    balance_endpoint: Endpoint,
}

impl DebitCardClient<ReqwestTransport> {
    /// Create a client for the default API base URL.
    ///
    /// `auth_key` is sent as-is in the `AUTH-KEY` header of every request.
    pub fn new(auth_key: &str) -> Result<Self> {
        Self::from_config(&ApiConfig::new(auth_key))
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.base_url, &config.auth_key)?;
        Ok(Self::with_transport(transport).balance_via_update(config.balance_via_update))
    }
}

impl<T> DebitCardClient<T>
where
    T: Transport + Sync,
{
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            balance_endpoint: Endpoint::CardsLoad,
        }
    }

    /// Route balance loads through `cards/{id}/update`, for APIs that
    /// multiplex pin updates and balance loads on one path.
    pub fn balance_via_update(mut self, enabled: bool) -> Self {
        self.balance_endpoint = match enabled {
            true => Endpoint::CardsUpdate,
            false => Endpoint::CardsLoad,
        };
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn request(endpoint: Endpoint, params: &[u64]) -> Result<ApiRequest> {
        Ok(ApiRequest::new(endpoint.method(), endpoint.make_uri(params)?))
    }

    pub fn build_get_card_by_id(&self, id: u64) -> Result<ApiRequest> {
        Self::request(Endpoint::CardsById, &[id])
    }

    pub fn build_get_card_balance(&self, id: u64) -> Result<ApiRequest> {
        Self::request(Endpoint::CardsBalance, &[id])
    }

    pub fn build_get_card_pin(&self, id: u64) -> Result<ApiRequest> {
        Self::request(Endpoint::CardsPin, &[id])
    }

    /// Each bound that is present becomes a `from` / `to` query parameter.
    pub fn build_get_card_history(
        &self,
        id: u64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<ApiRequest> {
        let mut request = Self::request(Endpoint::CardsHistory, &[id])?;
        if let Some(from) = from {
            request = request.with_query("from", from.format(HISTORY_DATE_FORMAT).to_string());
        }
        if let Some(to) = to {
            request = request.with_query("to", to.format(HISTORY_DATE_FORMAT).to_string());
        }
        Ok(request)
    }

    pub fn build_create_card(&self, card: &CardDto) -> Result<ApiRequest> {
        let body = serde_json::to_string(card).map_err(AppError::request)?;
        Ok(Self::request(Endpoint::CardsCreate, &[])?.with_body(body))
    }

    pub fn build_activate_card(&self, id: u64) -> Result<ApiRequest> {
        Self::request(Endpoint::CardsActivate, &[id])
    }

    pub fn build_deactivate_card(&self, id: u64) -> Result<ApiRequest> {
        Self::request(Endpoint::CardsDeactivate, &[id])
    }

    pub fn build_update_card_pin(&self, id: u64, pin: &str) -> Result<ApiRequest> {
        Ok(Self::request(Endpoint::CardsUpdate, &[id])?.with_body(pin.to_string()))
    }

    pub fn build_load_card_balance(&self, id: u64, balance: &str) -> Result<ApiRequest> {
        Ok(Self::request(self.balance_endpoint, &[id])?.with_body(balance.to_string()))
    }

    pub fn build_get_countries(&self) -> Result<ApiRequest> {
        Self::request(Endpoint::CountriesList, &[])
    }

    pub fn build_get_country(&self, id: u64) -> Result<ApiRequest> {
        Self::request(Endpoint::CountriesById, &[id])
    }

    #[instrument(name = "Fetching card", skip_all, fields(card_id = id))]
    pub async fn get_card_by_id(&self, id: u64) -> Result<String> {
        let request = self.build_get_card_by_id(id)?;
        self.call(request).await
    }

    #[instrument(name = "Fetching card balance", skip_all, fields(card_id = id))]
    pub async fn get_card_balance(&self, id: u64) -> Result<String> {
        let request = self.build_get_card_balance(id)?;
        self.call(request).await
    }

    #[instrument(name = "Fetching card pin", skip_all, fields(card_id = id))]
    pub async fn get_card_pin(&self, id: u64) -> Result<String> {
        let request = self.build_get_card_pin(id)?;
        self.call(request).await
    }

    #[instrument(name = "Fetching card history", skip_all, fields(card_id = id))]
    pub async fn get_card_history(
        &self,
        id: u64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<String> {
        let request = self.build_get_card_history(id, from, to)?;
        self.call(request).await
    }

    #[instrument(name = "Creating card", skip_all, fields(currency = card.currency()))]
    pub async fn create_card(&self, card: &CardDto) -> Result<String> {
        let request = self.build_create_card(card)?;
        self.call(request).await
    }

    #[instrument(name = "Activating card", skip_all, fields(card_id = id))]
    pub async fn activate_card(&self, id: u64) -> Result<String> {
        let request = self.build_activate_card(id)?;
        self.call(request).await
    }

    #[instrument(name = "Deactivating card", skip_all, fields(card_id = id))]
    pub async fn deactivate_card(&self, id: u64) -> Result<String> {
        let request = self.build_deactivate_card(id)?;
        self.call(request).await
    }

    #[instrument(name = "Updating card pin", skip_all, fields(card_id = id))]
    pub async fn update_card_pin(&self, id: u64, pin: &str) -> Result<String> {
        let request = self.build_update_card_pin(id, pin)?;
        self.call(request).await
    }

    #[instrument(name = "Loading card balance", skip_all, fields(card_id = id))]
    pub async fn load_card_balance(&self, id: u64, balance: &str) -> Result<String> {
        let request = self.build_load_card_balance(id, balance)?;
        self.call(request).await
    }

    #[instrument(name = "Fetching countries", skip_all)]
    pub async fn get_countries(&self) -> Result<String> {
        let request = self.build_get_countries()?;
        self.call(request).await
    }

    #[instrument(name = "Fetching country", skip_all, fields(country_id = id))]
    pub async fn get_country(&self, id: u64) -> Result<String> {
        let request = self.build_get_country(id)?;
        self.call(request).await
    }

    async fn call(&self, request: ApiRequest) -> Result<String> {
        self.transport.execute(&request).await.map_err(|e| {
            warn!(method = %request.method, path = %request.path, error = %e, "Request failed");
            AppError::request(e)
        })
    }
}
