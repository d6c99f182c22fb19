use serde::{Deserialize, Serialize};

use super::record::ListRecord;

/// Cliente del supermercado. Campos del backend: `nombre`, `email`, `telefono`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
}

impl ListRecord for Client {
    const RESOURCE: &'static str = "cliente";
    const LABEL: &'static str = "Cliente";
    const LABEL_PLURAL: &'static str = "clientes";
    const LABEL_WITH_ARTICLE: &'static str = "al cliente";
    const DELETED_WORD: &'static str = "eliminado";

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self
                .email
                .as_ref()
                .is_some_and(|e| e.to_lowercase().contains(query))
            || self
                .phone
                .as_ref()
                .is_some_and(|t| t.to_lowercase().contains(query))
    }
}
