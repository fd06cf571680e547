pub mod card;
pub mod country;

pub use card::CardDto;
pub use country::CountryDto;
