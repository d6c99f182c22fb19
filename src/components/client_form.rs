use yew::prelude::*;

use crate::components::app::Route;
use crate::components::{input_value, BackLink};
use crate::models::client::ClientPayload;
use crate::models::Client;
use crate::services::{ApiClient, ApiError};

#[derive(Properties, PartialEq)]
pub struct ClientFormProps {
    pub id: Option<i32>,
    pub on_navigate: Callback<Route>,
}

#[function_component(ClientForm)]
pub fn client_form(props: &ClientFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let is_loading = use_state(|| false);
    let is_fetching = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let not_found = use_state(|| false);

    {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let is_fetching = is_fetching.clone();
        let error_message = error_message.clone();
        let not_found = not_found.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                is_fetching.set(true);
                not_found.set(false);
                error_message.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().fetch_one::<Client>(id).await {
                        Ok(client) => {
                            name.set(client.name);
                            email.set(client.email.unwrap_or_default());
                            phone.set(client.phone.unwrap_or_default());
                        }
                        Err(ApiError::NotFound) => {
                            error_message.set(Some(format!("Cliente con ID {} no encontrado.", id)));
                            not_found.set(true);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando cliente {}: {}", id, e);
                            error_message
                                .set(Some("Fallo al cargar los detalles del cliente.".to_string()));
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
        let email = email.clone();
        let phone = phone.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let id = props.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current_name = name.trim().to_string();
            if current_name.is_empty() {
                error_message.set(Some("El nombre del cliente no puede estar vacío.".to_string()));
                return;
            }

            is_loading.set(true);
            error_message.set(None);
            success_message.set(None);

            let non_empty = |value: &str| {
                let value = value.trim();
                (!value.is_empty()).then(|| value.to_string())
            };
            let payload = ClientPayload {
                name: current_name,
                email: non_empty(&email),
                phone: non_empty(&phone),
            };

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let is_loading = is_loading.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = match id {
                    None => api.create("cliente", &payload).await,
                    Some(id) => api.update("cliente", id, &payload).await,
                };

                match (result, id) {
                    (Ok(()), None) => {
                        success_message
                            .set(Some(format!("Cliente \"{}\" creado con éxito.", payload.name)));
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                    }
                    (Ok(()), Some(id)) => {
                        success_message.set(Some(format!(
                            "Cliente \"{}\" (ID: {}) actualizado con éxito.",
                            payload.name, id
                        )));
                    }
                    (Err(e), None) => {
                        error_message.set(Some(format!("Fallo al crear el cliente. Detalle: {}", e)));
                    }
                    (Err(e), Some(_)) => {
                        error_message
                            .set(Some(format!("Fallo al actualizar el cliente. Detalle: {}", e)));
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

    let title = if props.id.is_some() { "Editar Cliente" } else { "Crear Cliente" };

    html! {
        <section class="form-screen">
            <BackLink on_navigate={props.on_navigate.clone()} route={Route::Clients} label="Volver a clientes" />
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
                    <label for="client-name">{ "Nombre" }</label>
                    <input id="client-name" type="text" value={(*name).clone()} oninput={bind(&name)} />
                    <label for="client-email">{ "Email" }</label>
                    <input id="client-email" type="email" value={(*email).clone()} oninput={bind(&email)} />
                    <label for="client-phone">{ "Teléfono" }</label>
                    <input id="client-phone" type="tel" value={(*phone).clone()} oninput={bind(&phone)} />
                    <button type="submit" disabled={*is_loading}>
                        { if *is_loading { "Guardando..." } else { "Guardar" } }
                    </button>
                </form>
            }
        </section>
    }
}
