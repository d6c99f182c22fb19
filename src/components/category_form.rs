use yew::prelude::*;

use crate::components::app::Route;
use crate::components::{input_value, BackLink};
use crate::models::category::CategoryPayload;
use crate::models::Category;
use crate::services::{ApiClient, ApiError};

#[derive(Properties, PartialEq)]
pub struct CategoryFormProps {
    /// `None` crea, `Some(id)` edita.
    pub id: Option<i32>,
    pub on_navigate: Callback<Route>,
}

#[function_component(CategoryForm)]
pub fn category_form(props: &CategoryFormProps) -> Html {
    let name = use_state(String::new);
    let is_loading = use_state(|| false);
    let is_fetching = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);
    let not_found = use_state(|| false);

    // En modo edición, bajar los datos actuales. 404 se señala aparte para
    // que la vista muestre "no encontrada" en lugar del formulario.
    {
        let name = name.clone();
        let is_fetching = is_fetching.clone();
        let error_message = error_message.clone();
        let not_found = not_found.clone();
        use_effect_with(props.id, move |id| {
            if let Some(id) = *id {
                is_fetching.set(true);
                not_found.set(false);
                error_message.set(None);
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().fetch_one::<Category>(id).await {
                        Ok(category) => name.set(category.name),
                        Err(ApiError::NotFound) => {
                            error_message
                                .set(Some(format!("Categoría con ID {} no encontrada.", id)));
                            not_found.set(true);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando categoría {}: {}", id, e);
                            error_message.set(Some(
                                "Fallo al cargar los detalles de la categoría.".to_string(),
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
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let id = props.id;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Validación local antes de cualquier request
            let current_name = name.trim().to_string();
            if current_name.is_empty() {
                error_message.set(Some(
                    "El nombre de la categoría no puede estar vacío.".to_string(),
                ));
                return;
            }

            is_loading.set(true);
            error_message.set(None);
            success_message.set(None);

            let payload = CategoryPayload { name: current_name };
            let name = name.clone();
            let is_loading = is_loading.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = match id {
                    None => api.create("categoria", &payload).await,
                    Some(id) => api.update("categoria", id, &payload).await,
                };

                match (result, id) {
                    (Ok(()), None) => {
                        success_message.set(Some(format!(
                            "Categoría \"{}\" creada con éxito.",
                            payload.name
                        )));
                        name.set(String::new());
                    }
                    (Ok(()), Some(id)) => {
                        success_message.set(Some(format!(
                            "Categoría \"{}\" (ID: {}) actualizada con éxito.",
                            payload.name, id
                        )));
                    }
                    (Err(e), None) => {
                        error_message
                            .set(Some(format!("Fallo al crear la categoría. Detalle: {}", e)));
                    }
                    (Err(e), Some(_)) => {
                        error_message.set(Some(format!(
                            "Fallo al actualizar la categoría. Detalle: {}",
                            e
                        )));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let oninput = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(input_value(&e)))
    };

    let title = if props.id.is_some() { "Editar Categoría" } else { "Crear Categoría" };

    html! {
        <section class="form-screen">
            <BackLink on_navigate={props.on_navigate.clone()} route={Route::Categories} label="Volver a categorías" />
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
                    <label for="category-name">{ "Nombre" }</label>
                    <input
                        id="category-name"
                        type="text"
                        placeholder="Nombre de la categoría"
                        value={(*name).clone()}
                        {oninput}
                    />
                    <button type="submit" disabled={*is_loading}>
                        { if *is_loading { "Guardando..." } else { "Guardar" } }
                    </button>
                </form>
            }
        </section>
    }
}
