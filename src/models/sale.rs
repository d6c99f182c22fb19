use serde::{Deserialize, Serialize};

use super::product::Product;

/// Línea del carrito de una venta en curso.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleCartItem {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
    pub available_stock: i32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSalePayload {
    #[serde(rename = "cliente_id")]
    pub client_id: i32,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSaleDetailPayload {
    #[serde(rename = "venta_id")]
    pub sale_id: i32,
    #[serde(rename = "producto_id")]
    pub product_id: i32,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    pub subtotal: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSaleResponse {
    pub id: i32,
    #[serde(default)]
    pub total: f64,
}

/// Carrito de venta: lógica pura, sin señales ni red.
///
/// Invariantes: una línea por producto, cantidad siempre en `1..=stock`
/// disponible, subtotal siempre `cantidad * precio_unitario`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleCart {
    items: Vec<SaleCartItem>,
}

impl SaleCart {
    pub fn items(&self) -> &[SaleCartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.subtotal).sum()
    }

    /// Agregar un producto. Sin stock no se agrega; si ya está en el carrito
    /// se incrementa la cantidad sin superar el stock disponible.
    pub fn add_product(&mut self, product: &Product) -> Result<(), String> {
        if product.stock <= 0 {
            return Err(format!("Producto \"{}\" sin stock.", product.name));
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            if item.quantity < product.stock {
                item.quantity += 1;
                item.subtotal = f64::from(item.quantity) * item.unit_price;
            }
        } else {
            self.items.push(SaleCartItem {
                product_id: product.id,
                product_name: product.name.clone(),
                quantity: 1,
                unit_price: product.price,
                subtotal: product.price,
                available_stock: product.stock,
            });
        }
        Ok(())
    }

    /// Fijar la cantidad de una línea, acotada a `1..=stock`.
    pub fn set_quantity(&mut self, product_id: i32, quantity: i32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            let clamped = quantity.clamp(1, item.available_stock);
            item.quantity = clamped;
            item.subtotal = f64::from(clamped) * item.unit_price;
        }
    }

    pub fn remove(&mut self, product_id: i32) {
        self.items.retain(|item| item.product_id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Detalles a enviar al backend, en el orden del carrito.
    pub fn detail_payloads(&self, sale_id: i32) -> Vec<CreateSaleDetailPayload> {
        self.items
            .iter()
            .map(|item| CreateSaleDetailPayload {
                sale_id,
                product_id: item.product_id,
                quantity: item.quantity,
                subtotal: item.subtotal,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn producto(id: i32, name: &str, price: f64, stock: i32) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            price,
            stock,
            category_id: 1,
        }
    }

    #[test]
    fn agregar_sin_stock_falla() {
        let mut cart = SaleCart::default();
        let err = cart.add_product(&producto(1, "Pan", 0.8, 0)).unwrap_err();
        assert!(err.contains("sin stock"));
        assert!(cart.is_empty());
    }

    #[test]
    fn agregar_dos_veces_incrementa_una_linea() {
        let mut cart = SaleCart::default();
        let pan = producto(1, "Pan", 0.8, 5);
        cart.add_product(&pan).unwrap();
        cart.add_product(&pan).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].subtotal, 1.6);
    }

    #[test]
    fn cantidad_acotada_al_stock() {
        let mut cart = SaleCart::default();
        cart.add_product(&producto(1, "Pan", 0.8, 3)).unwrap();
        cart.set_quantity(1, 99);
        assert_eq!(cart.items()[0].quantity, 3);
        cart.set_quantity(1, 0);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn total_es_suma_de_subtotales() {
        let mut cart = SaleCart::default();
        cart.add_product(&producto(1, "Pan", 0.8, 5)).unwrap();
        cart.add_product(&producto(2, "Leche", 1.5, 5)).unwrap();
        cart.set_quantity(1, 3);
        assert!((cart.total() - (3.0 * 0.8 + 1.5)).abs() < 1e-9);
    }

    #[test]
    fn detalles_conservan_el_orden_del_carrito() {
        let mut cart = SaleCart::default();
        cart.add_product(&producto(2, "Leche", 1.5, 5)).unwrap();
        cart.add_product(&producto(1, "Pan", 0.8, 5)).unwrap();
        let details = cart.detail_payloads(42);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].product_id, 2);
        assert_eq!(details[1].product_id, 1);
        assert!(details.iter().all(|d| d.sale_id == 42));
    }
}
