// ============================================================================
// USE SALE - Registro de venta (cliente + carrito + envío secuencial)
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Client, Product, SaleCart};
use crate::services::{register_sale, ApiClient};

use super::use_debounced_input::{use_debounced_input, UseDebouncedInputHandle};

pub struct UseSaleHandle {
    pub client_search: UseDebouncedInputHandle,
    pub searched_clients: Rc<Vec<Client>>,
    pub selected_client: UseStateHandle<Option<Client>>,
    pub clients_error: UseStateHandle<Option<String>>,

    pub product_search: UseDebouncedInputHandle,
    pub searched_products: Rc<Vec<Product>>,
    pub products_error: UseStateHandle<Option<String>>,

    pub cart: UseStateHandle<SaleCart>,
    pub is_registering: UseStateHandle<bool>,
    pub sale_error: UseStateHandle<Option<String>>,
    pub sale_success: UseStateHandle<Option<String>>,

    pub select_client: Callback<Client>,
    pub clear_client: Callback<()>,
    pub add_to_cart: Callback<Product>,
    pub set_quantity: Callback<(i32, i32)>,
    pub remove_item: Callback<i32>,
    pub register: Callback<()>,
    pub clear_sale: Callback<()>,
}

#[hook]
pub fn use_sale() -> UseSaleHandle {
    let api = use_memo((), |_| ApiClient::new());

    let all_clients = use_state(Vec::<Client>::new);
    let all_products = use_state(Vec::<Product>::new);
    let client_search = use_debounced_input();
    let product_search = use_debounced_input();
    let selected_client = use_state(|| None::<Client>);
    let clients_error = use_state(|| None::<String>);
    let products_error = use_state(|| None::<String>);

    let cart = use_state(SaleCart::default);
    let is_registering = use_state(|| false);
    let sale_error = use_state(|| None::<String>);
    let sale_success = use_state(|| None::<String>);

    // Ambas colecciones se bajan una única vez; la búsqueda filtra en memoria
    {
        let all_clients = all_clients.clone();
        let all_products = all_products.clone();
        let clients_error = clients_error.clone();
        let products_error = products_error.clone();
        let api = api.clone();

        use_effect_with((), move |_| {
            {
                let all_clients = all_clients.clone();
                let clients_error = clients_error.clone();
                let api = api.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match api.fetch_all::<Client>().await {
                        Ok(clients) => {
                            if clients.is_empty() {
                                clients_error.set(Some("No hay clientes registrados.".to_string()));
                            }
                            all_clients.set(clients);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando clientes: {}", e);
                            clients_error
                                .set(Some("Error al cargar la lista de clientes.".to_string()));
                            all_clients.set(Vec::new());
                        }
                    }
                });
            }
            {
                let all_products = all_products.clone();
                let products_error = products_error.clone();
                let api = api.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match api.fetch_all::<Product>().await {
                        Ok(products) => {
                            if products.is_empty() {
                                products_error.set(Some(
                                    "No hay productos registrados en el sistema.".to_string(),
                                ));
                            }
                            all_products.set(products);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando productos: {}", e);
                            products_error
                                .set(Some("Error al cargar la lista de productos.".to_string()));
                            all_products.set(Vec::new());
                        }
                    }
                });
            }
            || ()
        });
    }

    let searched_clients = use_memo(
        ((*all_clients).clone(), (*client_search.debounced).clone()),
        |(clients, query)| {
            let query = query.trim().to_lowercase();
            if query.is_empty() {
                return clients.clone();
            }
            clients
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&query)
                        || c.email.as_ref().is_some_and(|e| e.to_lowercase().contains(&query))
                        || c.phone.as_ref().is_some_and(|t| t.contains(&query))
                })
                .cloned()
                .collect()
        },
    );

    // La búsqueda de productos del carrito coincide solo por nombre
    let searched_products = use_memo(
        ((*all_products).clone(), (*product_search.debounced).clone()),
        |(products, query)| {
            let query = query.trim().to_lowercase();
            if query.is_empty() {
                return products.clone();
            }
            products
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&query))
                .cloned()
                .collect()
        },
    );

    let select_client = {
        let selected_client = selected_client.clone();
        let client_search = client_search.clone();
        let clients_error = clients_error.clone();
        Callback::from(move |client: Client| {
            client_search.set.emit(client.name.clone());
            selected_client.set(Some(client));
            clients_error.set(None);
        })
    };

    let clear_client = {
        let selected_client = selected_client.clone();
        let client_search = client_search.clone();
        let clients_error = clients_error.clone();
        Callback::from(move |_| {
            selected_client.set(None);
            client_search.set.emit(String::new());
            clients_error.set(None);
        })
    };

    let add_to_cart = {
        let cart = cart.clone();
        let products_error = products_error.clone();
        let product_search = product_search.clone();
        Callback::from(move |product: Product| {
            let mut next = (*cart).clone();
            match next.add_product(&product) {
                Ok(()) => {
                    cart.set(next);
                    product_search.set.emit(String::new());
                    products_error.set(None);
                }
                Err(msg) => {
                    products_error.set(Some(msg));
                    product_search.set.emit(String::new());
                }
            }
        })
    };

    let set_quantity = {
        let cart = cart.clone();
        Callback::from(move |(product_id, quantity): (i32, i32)| {
            let mut next = (*cart).clone();
            next.set_quantity(product_id, quantity);
            cart.set(next);
        })
    };

    let remove_item = {
        let cart = cart.clone();
        Callback::from(move |product_id: i32| {
            let mut next = (*cart).clone();
            next.remove(product_id);
            cart.set(next);
        })
    };

    let clear_sale = {
        let cart = cart.clone();
        let selected_client = selected_client.clone();
        let client_search = client_search.clone();
        let product_search = product_search.clone();
        let sale_error = sale_error.clone();
        let sale_success = sale_success.clone();
        let clients_error = clients_error.clone();
        let products_error = products_error.clone();
        Callback::from(move |_| {
            cart.set(SaleCart::default());
            selected_client.set(None);
            client_search.set.emit(String::new());
            product_search.set.emit(String::new());
            sale_error.set(None);
            sale_success.set(None);
            clients_error.set(None);
            products_error.set(None);
        })
    };

    let register = {
        let cart = cart.clone();
        let selected_client = selected_client.clone();
        let is_registering = is_registering.clone();
        let sale_error = sale_error.clone();
        let sale_success = sale_success.clone();
        let clear_sale = clear_sale.clone();
        let api = api.clone();

        Callback::from(move |_| {
            // Validación local antes de tocar la red
            let Some(client) = (*selected_client).clone() else {
                sale_error.set(Some("Por favor, selecciona un cliente.".to_string()));
                return;
            };
            if cart.is_empty() {
                sale_error.set(Some("Por favor, añade productos al carrito.".to_string()));
                return;
            }

            is_registering.set(true);
            sale_error.set(None);
            sale_success.set(None);

            let cart_snapshot = (*cart).clone();
            let is_registering = is_registering.clone();
            let sale_error = sale_error.clone();
            let sale_success = sale_success.clone();
            let clear_sale = clear_sale.clone();
            let api = api.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match register_sale(&api, client.id, &cart_snapshot).await {
                    Ok(sale) => {
                        // Limpiar primero: clear_sale también borra mensajes
                        clear_sale.emit(());
                        sale_success.set(Some(format!(
                            "Venta #{} registrada. Total: {:.2}",
                            sale.id, sale.total
                        )));
                    }
                    Err(e) => {
                        sale_error.set(Some(format!("Error al registrar la venta: {}", e)));
                    }
                }
                is_registering.set(false);
            });
        })
    };

    UseSaleHandle {
        client_search,
        searched_clients,
        selected_client,
        clients_error,
        product_search,
        searched_products,
        products_error,
        cart,
        is_registering,
        sale_error,
        sale_success,
        select_client,
        clear_client,
        add_to_cart,
        set_quantity,
        remove_item,
        register,
        clear_sale,
    }
}
