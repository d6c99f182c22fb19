// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Sin lógica de negocio: requests JSON contra el backend REST del supermercado
// (categoria, cliente, proveedor, producto, venta, detalleventa).
// ============================================================================

use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::models::ListRecord;
use crate::utils::constants::API_URL;

/// Error de una operación HTTP, clasificado por origen.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// El request nunca llegó o no hubo respuesta.
    Network(String),
    /// 404 en un fetch puntual; la vista lo trata distinto de un error genérico.
    NotFound,
    /// Respuesta de error del backend, con el detalle ya extraído del cuerpo.
    Http { status: u16, detail: String },
    /// El cuerpo no pudo deserializarse.
    Parse(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "{}", msg),
            ApiError::NotFound => write!(f, "Recurso no encontrado."),
            ApiError::Http { detail, .. } => write!(f, "{}", detail),
            ApiError::Parse(msg) => write!(f, "{}", msg),
        }
    }
}

/// Extraer un detalle legible de un cuerpo de error heterogéneo del backend.
///
/// Orden de búsqueda: cuerpo string plano → campo `message` → campo `detail`
/// (string, o lista de sub-errores con `msg` unidos por ", ") → mapa genérico
/// campo→lista-de-mensajes (primer mensaje del primer campo) → el cuerpo
/// serializado tal cual.
pub fn extract_error_detail(raw_body: &str) -> String {
    let trimmed = raw_body.trim();
    if trimmed.is_empty() {
        return "Error desconocido.".to_string();
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => detail_from_value(&value),
        Err(_) => trimmed.to_string(),
    }
}

fn detail_from_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(Value::String(msg)) = map.get("message") {
                return msg.clone();
            }
            if let Some(detail) = map.get("detail") {
                match detail {
                    Value::String(s) => return s.clone(),
                    Value::Array(items) => {
                        let messages: Vec<&str> = items
                            .iter()
                            .filter_map(|item| item.get("msg").and_then(Value::as_str))
                            .collect();
                        if !messages.is_empty() {
                            return messages.join(", ");
                        }
                    }
                    _ => {}
                }
            }
            // Mapa genérico campo -> lista de mensajes (errores de validación)
            for item in map.values() {
                if let Value::Array(messages) = item {
                    if let Some(first) = messages.first().and_then(Value::as_str) {
                        return first.to_string();
                    }
                }
            }
            value.to_string()
        }
        _ => value.to_string(),
    }
}

/// Cliente API del backend del supermercado.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_URL.to_string(),
        }
    }

    async fn error_from_response(response: gloo_net::http::Response) -> ApiError {
        let status = response.status();
        if status == 404 {
            return ApiError::NotFound;
        }
        let body = response.text().await.unwrap_or_default();
        ApiError::Http {
            status,
            detail: extract_error_detail(&body),
        }
    }

    /// Listar todos los registros de un recurso. El backend puede devolver
    /// `null` en lugar de lista vacía.
    pub async fn fetch_all<T: ListRecord>(&self) -> Result<Vec<T>, ApiError> {
        let url = format!("{}/{}", self.base_url, T::RESOURCE);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from_response(response).await);
        }

        let records = response
            .json::<Option<Vec<T>>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .unwrap_or_default();

        log::info!("📋 {} {} obtenidos", records.len(), T::LABEL_PLURAL);
        Ok(records)
    }

    /// Obtener un registro puntual. 404 se reporta como `NotFound`.
    pub async fn fetch_one<T: ListRecord>(&self, id: i32) -> Result<T, ApiError> {
        let url = format!("{}/{}/{}", self.base_url, T::RESOURCE, id);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn create<P: Serialize>(&self, resource: &str, payload: &P) -> Result<(), ApiError> {
        let url = format!("{}/{}/", self.base_url, resource);
        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    /// POST cuyo cuerpo de respuesta interesa (p. ej. el id de la venta creada).
    pub async fn create_returning<P: Serialize, R: DeserializeOwned>(
        &self,
        resource: &str,
        payload: &P,
    ) -> Result<R, ApiError> {
        let url = format!("{}/{}", self.base_url, resource);
        let response = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<R>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    pub async fn update<P: Serialize>(
        &self,
        resource: &str,
        id: i32,
        payload: &P,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}/{}", self.base_url, resource, id);
        let response = Request::put(&url)
            .json(payload)
            .map_err(|e| ApiError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    pub async fn delete(&self, resource: &str, id: i32) -> Result<(), ApiError> {
        let url = format!("{}/{}/{}", self.base_url, resource, id);
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuerpo_string_plano() {
        assert_eq!(extract_error_detail("\"nombre duplicado\""), "nombre duplicado");
        // Texto que ni siquiera es JSON
        assert_eq!(extract_error_detail("boom"), "boom");
    }

    #[test]
    fn campo_message() {
        let body = r#"{"message":"categoria en uso"}"#;
        assert_eq!(extract_error_detail(body), "categoria en uso");
    }

    #[test]
    fn detalle_como_lista_de_suberrores() {
        let body = r#"{"detail":[{"msg":"nombre requerido"}]}"#;
        assert_eq!(extract_error_detail(body), "nombre requerido");

        let body = r#"{"detail":[{"msg":"nombre requerido"},{"msg":"precio inválido"}]}"#;
        assert_eq!(
            extract_error_detail(body),
            "nombre requerido, precio inválido"
        );
    }

    #[test]
    fn detalle_como_string() {
        let body = r#"{"detail":"stock insuficiente"}"#;
        assert_eq!(extract_error_detail(body), "stock insuficiente");
    }

    #[test]
    fn mapa_generico_campo_a_mensajes() {
        let body = r#"{"nombre":["Este campo es obligatorio."]}"#;
        assert_eq!(extract_error_detail(body), "Este campo es obligatorio.");
    }

    #[test]
    fn fallback_serializa_el_cuerpo() {
        let body = r#"{"code":42}"#;
        assert_eq!(extract_error_detail(body), r#"{"code":42}"#);
    }

    #[test]
    fn cuerpo_vacio() {
        assert_eq!(extract_error_detail("  "), "Error desconocido.");
    }
}
