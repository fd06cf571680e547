use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CountryDto {
    id: Option<u64>,
    code: Option<String>,
    name: Option<String>,
}

impl CountryDto {
    pub fn new(id: Option<u64>, code: Option<String>, name: Option<String>) -> Self {
        Self { id, code, name }
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
