use crate::error::{AppError, Result};
use crate::http::HttpMethod;

const PLACEHOLDER: &str = "%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CardsById,
    CardsBalance,
    CardsPin,
    CardsHistory,
    CardsCreate,
    CardsDeactivate,
    CardsActivate,
    CardsUpdate,
    CardsLoad,
    CountriesList,
    CountriesById,
}

impl Endpoint {
    pub fn template(&self) -> &'static str {
        match self {
            Endpoint::CardsById => "cards/%d",
            Endpoint::CardsBalance => "cards/%d/balance",
            Endpoint::CardsPin => "cards/%d/pin",
            Endpoint::CardsHistory => "cards/%d/history",
            Endpoint::CardsCreate => "cards/create",
            Endpoint::CardsDeactivate => "cards/%d/deactivate",
            Endpoint::CardsActivate => "cards/%d/activate",
            Endpoint::CardsUpdate => "cards/%d/update",
            Endpoint::CardsLoad => "cards/%d/load",
            Endpoint::CountriesList => "countries",
            Endpoint::CountriesById => "countries/%d",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::CardsById
            | Endpoint::CardsBalance
            | Endpoint::CardsPin
            | Endpoint::CardsHistory
            | Endpoint::CountriesList
            | Endpoint::CountriesById => HttpMethod::Get,
            Endpoint::CardsCreate
            | Endpoint::CardsDeactivate
            | Endpoint::CardsActivate
            | Endpoint::CardsUpdate
            | Endpoint::CardsLoad => HttpMethod::Post,
        }
    }

    /// Substitute `params` into this endpoint's template, in order.
    pub fn make_uri(&self, params: &[u64]) -> Result<String> {
        format_template(self.template(), params)
    }
}

/// Replace each `%d` in `template` with the next parameter.
///
/// The parameter count must match the placeholder count exactly.
pub fn format_template(template: &str, params: &[u64]) -> Result<String> {
    let expected = template.matches(PLACEHOLDER).count();
    if expected != params.len() {
        return Err(AppError::UriFormat(format!(
            "template {:?} expects {} parameter(s), got {}",
            template,
            expected,
            params.len()
        )));
    }

    let mut uri = String::with_capacity(template.len() + params.len() * 8);
    let mut rest = template;
    for param in params {
        // Count checked above, so every parameter has a placeholder.
        if let Some(pos) = rest.find(PLACEHOLDER) {
            uri.push_str(&rest[..pos]);
            uri.push_str(&param.to_string());
            rest = &rest[pos + PLACEHOLDER.len()..];
        }
    }
    uri.push_str(rest);

    Ok(uri)
}
