use yew::prelude::*;

use crate::components::app::Route;
use crate::components::{input_value, BackLink};
use crate::models::supplier::SupplierPayload;
use crate::models::Supplier;
use crate::services::{ApiClient, ApiError};

#[derive(Properties, PartialEq)]
pub struct SupplierFormProps {
    pub id: Option<i32>,
    pub on_navigate: Callback<Route>,
}

#[function_component(SupplierForm)]
pub fn supplier_form(props: &SupplierFormProps) -> Html {
    let name = use_state(String::new);
    let contact = use_state(String::new);
    let address = use_state(String::new);
    let is_loading = use_state(|| false);
    let is_fetching = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let not_found = use_state(|| false);

    {
        let name = name.clone();
        let contact = contact.clone();
        let address = address.clone();
        let is_fetching = is_fetching.clone();
        let error_message = error_message.clone();
        let not_found = not_found.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                is_fetching.set(true);
                not_found.set(false);
                error_message.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().fetch_one::<Supplier>(id).await {
                        Ok(supplier) => {
                            name.set(supplier.name);
                            contact.set(supplier.contact);
                            address.set(supplier.address);
                        }
                        Err(ApiError::NotFound) => {
                            error_message
                                .set(Some(format!("Proveedor con ID {} no encontrado.", id)));
                            not_found.set(true);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando proveedor {}: {}", id, e);
                            error_message.set(Some(
                                "Fallo al cargar los detalles del proveedor.".to_string(),
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
        let contact = contact.clone();
        let address = address.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let id = props.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let payload = SupplierPayload {
                name: name.trim().to_string(),
                contact: contact.trim().to_string(),
                address: address.trim().to_string(),
            };
            if payload.name.is_empty() || payload.contact.is_empty() || payload.address.is_empty() {
                error_message.set(Some(
                    "Por favor, completa todos los campos requeridos correctamente.".to_string(),
                ));
                return;
            }

            is_loading.set(true);
            error_message.set(None);
            success_message.set(None);

            let name = name.clone();
            let contact = contact.clone();
            let address = address.clone();
            let is_loading = is_loading.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = match id {
                    None => api.create("proveedor", &payload).await,
                    Some(id) => api.update("proveedor", id, &payload).await,
                };

                match (result, id) {
                    (Ok(()), None) => {
                        success_message.set(Some(format!(
                            "Proveedor \"{}\" creado con éxito.",
                            payload.name
                        )));
                        name.set(String::new());
                        contact.set(String::new());
                        address.set(String::new());
                    }
                    (Ok(()), Some(id)) => {
                        success_message.set(Some(format!(
                            "Proveedor \"{}\" (ID: {}) actualizado con éxito.",
                            payload.name, id
                        )));
                    }
                    (Err(e), None) => {
                        error_message
                            .set(Some(format!("Fallo al crear el proveedor. Detalle: {}", e)));
                    }
                    (Err(e), Some(_)) => {
                        error_message.set(Some(format!(
                            "Fallo al actualizar el proveedor. Detalle: {}",
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

    let title = if props.id.is_some() { "Editar Proveedor" } else { "Crear Proveedor" };

    html! {
        <section class="form-screen">
            <BackLink on_navigate={props.on_navigate.clone()} route={Route::Suppliers} label="Volver a proveedores" />
            <h1>{ title }</h1>

            if let Some(error) = (*error_message).clone() {
                <p class="message error">{ error }</p>
            }
            if let Some(success) = (*success_message).clone() {
                <p class="message success">{ success }</p>
            }

            if *is_fetching {
                <p class="loading">{ "Cargando..." }</p>
            } else if !*not_found {
                <form {onsubmit}>
                    <label for="supplier-name">{ "Nombre" }</label>
                    <input id="supplier-name" type="text" value={(*name).clone()} oninput={bind(&name)} />
                    <label for="supplier-contact">{ "Contacto" }</label>
                    <input id="supplier-contact" type="text" value={(*contact).clone()} oninput={bind(&contact)} />
                    <label for="supplier-address">{ "Dirección" }</label>
                    <input id="supplier-address" type="text" value={(*address).clone()} oninput={bind(&address)} />
                    <button type="submit" disabled={*is_loading}>
                        { if *is_loading { "Guardando..." } else { "Guardar" } }
                    </button>
                </form>
            }
        </section>
    }
}
