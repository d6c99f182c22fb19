use serde::{Deserialize, Serialize};

use super::record::ListRecord;

/// Proveedor. Campos del backend: `nombre`, `contacto`, `direccion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "contacto")]
    pub contact: String,
    #[serde(rename = "direccion")]
    pub address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "contacto")]
    pub contact: String,
    #[serde(rename = "direccion")]
    pub address: String,
}

impl ListRecord for Supplier {
    const RESOURCE: &'static str = "proveedor";
    const LABEL: &'static str = "Proveedor";
    const LABEL_PLURAL: &'static str = "proveedores";
    const LABEL_WITH_ARTICLE: &'static str = "al proveedor";
    const DELETED_WORD: &'static str = "eliminado";

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.contact.to_lowercase().contains(query)
            || self.address.to_lowercase().contains(query)
    }
}
