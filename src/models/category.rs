use serde::{Deserialize, Serialize};

use super::record::ListRecord;

/// Categoría de productos. El backend expone el campo como `nombre`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Payload de creación/actualización (sin `id`).
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPayload {
    #[serde(rename = "nombre")]
    pub name: String,
}

impl ListRecord for Category {
    const RESOURCE: &'static str = "categoria";
    const LABEL: &'static str = "Categoría";
    const LABEL_PLURAL: &'static str = "categorías";
    const LABEL_WITH_ARTICLE: &'static str = "la categoría";
    const DELETED_WORD: &'static str = "eliminada";

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
    }
}
