use serde::{Deserialize, Serialize};

// Query string for customer search.
#[derive(Debug, Deserialize)]
pub struct SearchCustomersQuery {
    #[serde(rename = "nameFilter", default)]
    pub name_filter: String,
}

// Error envelope returned for every mapped failure kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}
