use crate::models::{CreateSalePayload, CreateSaleResponse, SaleCart};

use super::api_client::{ApiClient, ApiError};

/// Registrar una venta: primero la cabecera en `venta`, después cada línea en
/// `detalleventa`, una a una y en el orden del carrito. Si cualquier línea
/// falla, la operación completa se reporta como fallida; no se intenta
/// rollback de la cabecera ni de las líneas ya creadas.
pub async fn register_sale(
    api: &ApiClient,
    client_id: i32,
    cart: &SaleCart,
) -> Result<CreateSaleResponse, ApiError> {
    let payload = CreateSalePayload {
        client_id,
        total: cart.total(),
    };

    log::info!("🧾 Registrando venta para cliente {} (total {:.2})", client_id, payload.total);

    let sale: CreateSaleResponse = api.create_returning("venta", &payload).await?;

    let details = cart.detail_payloads(sale.id);
    for detail in &details {
        api.create_returning::<_, serde_json::Value>("detalleventa", detail)
            .await?;
    }

    log::info!("✅ Venta #{} registrada con {} líneas", sale.id, details.len());
    Ok(sale)
}
