use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::app::Route;
use crate::components::{input_value, BackLink};
use crate::models::product::ProductPayload;
use crate::models::{Category, Product};
use crate::services::{ApiClient, ApiError};

#[derive(Properties, PartialEq)]
pub struct ProductFormProps {
    pub id: Option<i32>,
    pub on_navigate: Callback<Route>,
}

#[function_component(ProductForm)]
pub fn product_form(props: &ProductFormProps) -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);
    let price = use_state(String::new);
    let stock = use_state(String::new);
    let category_id = use_state(|| None::<i32>);

    let categories = use_state(Vec::<Category>::new);
    let categories_error = use_state(|| None::<String>);

    let is_loading = use_state(|| false);
    let is_fetching = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let not_found = use_state(|| false);

    // Categorías para el desplegable; un fallo degrada a lista vacía con aviso
    {
        let categories = categories.clone();
        let categories_error = categories_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().fetch_all::<Category>().await {
                    Ok(fetched) => {
                        if fetched.is_empty() {
                            categories_error.set(Some(
                                "No hay categorías disponibles. Por favor, crea una categoría primero."
                                    .to_string(),
                            ));
                        }
                        categories.set(fetched);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando categorías: {}", e);
                        categories_error.set(Some(
                            "Fallo al cargar las categorías. Inténtalo de nuevo.".to_string(),
                        ));
                        categories.set(Vec::new());
                    }
                }
            });
            || ()
        });
    }

    {
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let stock = stock.clone();
        let category_id = category_id.clone();
        let is_fetching = is_fetching.clone();
        let error_message = error_message.clone();
        let not_found = not_found.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                is_fetching.set(true);
                not_found.set(false);
                error_message.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().fetch_one::<Product>(id).await {
                        Ok(product) => {
                            name.set(product.name);
                            description.set(product.description);
                            price.set(format!("{}", product.price));
                            stock.set(product.stock.to_string());
                            category_id.set(Some(product.category_id));
                        }
                        Err(ApiError::NotFound) => {
                            error_message
                                .set(Some(format!("Producto con ID {} no encontrado.", id)));
                            not_found.set(true);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando producto {}: {}", id, e);
                            error_message.set(Some(
                                "Fallo al cargar los detalles del producto.".to_string(),
                            ));
                        }
                    }
                    is_fetching.set(false);
                });
            }
            || ()
        });
    }

    let onsubmit = {
        let name = name.clone();
        let description = description.clone();
        let price = price.clone();
        let stock = stock.clone();
        let category_id = category_id.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let id = props.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current_name = name.trim().to_string();
            let parsed_price = price.trim().parse::<f64>();
            let parsed_stock = stock.trim().parse::<i32>();

            if current_name.is_empty() || parsed_price.is_err() || parsed_stock.is_err() {
                error_message.set(Some(
                    "Por favor, completa todos los campos requeridos correctamente.".to_string(),
                ));
                return;
            }
            let Some(selected_category) = *category_id else {
                error_message.set(Some(
                    "Por favor, selecciona una categoría para el producto.".to_string(),
                ));
                return;
            };

            is_loading.set(true);
            error_message.set(None);
            success_message.set(None);

            let payload = ProductPayload {
                name: current_name,
                description: description.trim().to_string(),
                price: parsed_price.unwrap_or_default(),
                stock: parsed_stock.unwrap_or_default(),
                category_id: selected_category,
            };

            let name = name.clone();
            let description = description.clone();
            let price = price.clone();
            let stock = stock.clone();
            let category_id = category_id.clone();
            let is_loading = is_loading.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = match id {
                    None => api.create("producto", &payload).await,
                    Some(id) => api.update("producto", id, &payload).await,
                };

                match (result, id) {
                    (Ok(()), None) => {
                        success_message.set(Some(format!(
                            "Producto \"{}\" creado con éxito.",
                            payload.name
                        )));
                        name.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
                        stock.set(String::new());
                        category_id.set(None);
                    }
                    (Ok(()), Some(id)) => {
                        success_message.set(Some(format!(
                            "Producto \"{}\" (ID: {}) actualizado con éxito.",
                            payload.name, id
                        )));
                    }
                    (Err(e), None) => {
                        error_message
                            .set(Some(format!("Fallo al crear el producto. Detalle: {}", e)));
                    }
                    (Err(e), Some(_)) => {
                        error_message.set(Some(format!(
                            "Fallo al actualizar el producto. Detalle: {}",
                            e
                        )));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| state.set(input_value(&e)))
    };

    let onchange_category = {
        let category_id = category_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value().parse::<i32>().ok());
        })
    };

    let title = if props.id.is_some() { "Editar Producto" } else { "Crear Producto" };

    html! {
        <section class="form-screen">
            <BackLink on_navigate={props.on_navigate.clone()} route={Route::Inventory} label="Volver al inventario" />
            <h1>{ title }</h1>

            if let Some(error) = (*error_message).clone() {
                <p class="message error">{ error }</p>
            }
            if let Some(success) = (*success_message).clone() {
                <p class="message success">{ success }</p>
            }
            if let Some(error) = (*categories_error).clone() {
                <p class="message warning">{ error }</p>
            }

            if *is_fetching {
                <p class="loading">{ "Cargando..." }</p>
            } else if !*not_found {
                <form {onsubmit}>
                    <label for="product-name">{ "Nombre" }</label>
                    <input id="product-name" type="text" value={(*name).clone()} oninput={bind(&name)} />

                    <label for="product-description">{ "Descripción" }</label>
                    <input id="product-description" type="text" value={(*description).clone()} oninput={bind(&description)} />

                    <label for="product-price">{ "Precio" }</label>
                    <input id="product-price" type="number" step="0.01" min="0" value={(*price).clone()} oninput={bind(&price)} />

                    <label for="product-stock">{ "Stock" }</label>
                    <input id="product-stock" type="number" min="0" value={(*stock).clone()} oninput={bind(&stock)} />

                    <label for="product-category">{ "Categoría" }</label>
                    <select id="product-category" onchange={onchange_category}>
                        <option value="" selected={category_id.is_none()}>{ "-- Selecciona una categoría --" }</option>
                        {
                            categories.iter().map(|c| html! {
                                <option
                                    value={c.id.to_string()}
                                    selected={*category_id == Some(c.id)}
                                >
                                    { c.name.clone() }
                                </option>
                            }).collect::<Html>()
                        }
                    </select>

                    <button type="submit" disabled={*is_loading}>
                        { if *is_loading { "Guardando..." } else { "Guardar" } }
                    </button>
                </form>
            }
        </section>
    }
}
