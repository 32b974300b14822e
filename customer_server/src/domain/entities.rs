use serde::{Deserialize, Serialize};

// Customer record served by the customer API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<Telephone>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Telephone {
    pub country_code: String,
    pub telephone_number: String,
}

impl Customer {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            telephone: None,
        }
    }

    pub fn with_telephone(
        mut self,
        country_code: impl Into<String>,
        telephone_number: impl Into<String>,
    ) -> Self {
        self.telephone = Some(Telephone {
            country_code: country_code.into(),
            telephone_number: telephone_number.into(),
        });
        self
    }
}
