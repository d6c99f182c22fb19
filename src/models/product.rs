use serde::{Deserialize, Serialize};

use super::record::ListRecord;

/// Producto del inventario.
///
/// El backend expone etiquetas en español (`nombre`, `descripcion`, `precio`,
/// `categoria_id`); la adaptación se hace una sola vez aquí, en la frontera
/// serde. Los campos de texto pueden venir nulos en registros antiguos, de ahí
/// los defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    #[serde(rename = "nombre", default = "default_name")]
    pub name: String,
    #[serde(rename = "descripcion", default = "default_description")]
    pub description: String,
    #[serde(rename = "precio", default)]
    pub price: f64,
    #[serde(default)]
    pub stock: i32,
    #[serde(rename = "categoria_id")]
    pub category_id: i32,
}

fn default_name() -> String {
    "Sin nombre".to_string()
}

fn default_description() -> String {
    "Sin descripción".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i32,
    #[serde(rename = "categoria_id")]
    pub category_id: i32,
}

impl ListRecord for Product {
    const RESOURCE: &'static str = "producto";
    const LABEL: &'static str = "Producto";
    const LABEL_PLURAL: &'static str = "productos";
    const LABEL_WITH_ARTICLE: &'static str = "el producto";
    const DELETED_WORD: &'static str = "eliminado";

    fn id(&self) -> i32 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(query)
            || self.description.to_lowercase().contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializa_etiquetas_del_backend() {
        let json = r#"{"id":7,"nombre":"Leche entera","descripcion":"1L","precio":1.5,"stock":24,"categoria_id":1}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Leche entera");
        assert_eq!(p.category_id, 1);
        assert_eq!(p.stock, 24);
    }

    #[test]
    fn campos_nulos_usan_defaults() {
        let json = r#"{"id":7,"categoria_id":1}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Sin nombre");
        assert_eq!(p.description, "Sin descripción");
        assert_eq!(p.price, 0.0);
        assert_eq!(p.stock, 0);
    }
}
