// ============================================================================
// ENTITY LIST SCREEN - Pantalla de lista con búsqueda, refresh y eliminación
// ============================================================================
// Una sola implementación para las cuatro entidades; cada una aporta sus
// columnas via `ListRow`.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::app::Route;
use crate::components::confirmation_dialog::{ConfirmationDialog, ConfirmationResult};
use crate::hooks::use_entity_list;
use crate::models::{Category, Client, ListRecord, Product, Supplier};

/// Columnas de la tabla de cada entidad.
pub trait ListRow: ListRecord {
    fn table_head() -> Html;
    fn table_cells(&self) -> Html;
}

impl ListRow for Category {
    fn table_head() -> Html {
        html! { <tr><th>{"ID"}</th><th>{"Nombre"}</th><th>{"Acciones"}</th></tr> }
    }

    fn table_cells(&self) -> Html {
        html! { <><td>{ self.id }</td><td>{ self.name.clone() }</td></> }
    }
}

impl ListRow for Client {
    fn table_head() -> Html {
        html! {
            <tr>
                <th>{"ID"}</th><th>{"Nombre"}</th><th>{"Email"}</th>
                <th>{"Teléfono"}</th><th>{"Acciones"}</th>
            </tr>
        }
    }

    fn table_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.id }</td>
                <td>{ self.name.clone() }</td>
                <td>{ self.email.clone().unwrap_or_default() }</td>
                <td>{ self.phone.clone().unwrap_or_default() }</td>
            </>
        }
    }
}

impl ListRow for Supplier {
    fn table_head() -> Html {
        html! {
            <tr>
                <th>{"ID"}</th><th>{"Nombre"}</th><th>{"Contacto"}</th>
                <th>{"Dirección"}</th><th>{"Acciones"}</th>
            </tr>
        }
    }

    fn table_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.id }</td>
                <td>{ self.name.clone() }</td>
                <td>{ self.contact.clone() }</td>
                <td>{ self.address.clone() }</td>
            </>
        }
    }
}

impl ListRow for Product {
    fn table_head() -> Html {
        html! {
            <tr>
                <th>{"ID"}</th><th>{"Nombre"}</th><th>{"Descripción"}</th>
                <th>{"Precio"}</th><th>{"Stock"}</th><th>{"Acciones"}</th>
            </tr>
        }
    }

    fn table_cells(&self) -> Html {
        html! {
            <>
                <td>{ self.id }</td>
                <td>{ self.name.clone() }</td>
                <td>{ self.description.clone() }</td>
                <td>{ format!("{:.2}", self.price) }</td>
                <td>{ self.stock }</td>
            </>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct EntityListScreenProps {
    pub on_navigate: Callback<Route>,
    pub create_route: Route,
    /// Ruta de edición para un id concreto.
    pub edit_route: Callback<i32, Route>,
}

#[function_component(EntityListScreen)]
pub fn entity_list_screen<T: ListRow>(props: &EntityListScreenProps) -> Html {
    let list = use_entity_list::<T>();
    // Entidad seleccionada para eliminar: (id, nombre). La selección explícita
    // sobre la colección renderizada precede siempre al diálogo.
    let pending_delete = use_state(|| None::<(i32, String)>);

    let oninput = {
        let oninput = list.search.oninput.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            oninput.emit(input.value());
        })
    };

    let open_delete = {
        let pending_delete = pending_delete.clone();
        let reset_messages = list.reset_messages.clone();
        Callback::from(move |target: (i32, String)| {
            reset_messages.emit(());
            pending_delete.set(Some(target));
        })
    };

    let on_dialog_result = {
        let pending_delete = pending_delete.clone();
        let confirm_delete = list.confirm_delete.clone();
        Callback::from(move |result: ConfirmationResult<i32>| {
            pending_delete.set(None);
            if let (true, Some(id)) = (result.confirmed, result.data) {
                confirm_delete.emit(id);
            }
        })
    };

    let on_create = {
        let on_navigate = props.on_navigate.clone();
        let create_route = props.create_route.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(create_route.clone()))
    };

    let dialog_message = pending_delete
        .as_ref()
        .map(|(id, name)| {
            format!(
                "¿Estás seguro de que deseas eliminar {} \"{}\" (ID: {})?",
                T::LABEL_WITH_ARTICLE,
                name,
                id
            )
        })
        .unwrap_or_default();

    let rows = list
        .filtered
        .iter()
        .map(|record| {
            let id = record.id();
            let name = record.display_name().to_string();
            let on_edit = {
                let on_navigate = props.on_navigate.clone();
                let edit_route = props.edit_route.clone();
                Callback::from(move |_: MouseEvent| on_navigate.emit(edit_route.emit(id)))
            };
            let on_delete = {
                let open_delete = open_delete.clone();
                let name = name.clone();
                Callback::from(move |_: MouseEvent| open_delete.emit((id, name.clone())))
            };
            html! {
                <tr key={id}>
                    { record.table_cells() }
                    <td class="actions">
                        <button class="btn-edit" onclick={on_edit}>{ "Editar" }</button>
                        <button
                            class="btn-delete"
                            disabled={*list.is_deleting}
                            onclick={on_delete}
                        >
                            { "Eliminar" }
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Html>();

    html! {
        <section class="list-screen">
            <div class="list-toolbar">
                <h1>{ T::LABEL_PLURAL }</h1>
                <input
                    type="search"
                    placeholder={format!("Buscar {}...", T::LABEL_PLURAL)}
                    value={(*list.search.value).clone()}
                    {oninput}
                />
                <button class="btn-create" onclick={on_create}>
                    { format!("Crear {}", T::LABEL) }
                </button>
            </div>

            if let Some(error) = (*list.error_message).clone() {
                <p class="message error">{ error }</p>
            }
            if let Some(success) = (*list.success_message).clone() {
                <p class="message success">{ success }</p>
            }

            if *list.is_loading {
                <p class="loading">{ "Cargando..." }</p>
            } else if list.filtered.is_empty() {
                <p class="empty">{ format!("No hay {} para mostrar.", T::LABEL_PLURAL) }</p>
            } else {
                <table class="entity-table">
                    <thead>{ T::table_head() }</thead>
                    <tbody>{ rows }</tbody>
                </table>
            }

            <ConfirmationDialog<i32>
                pending={pending_delete.as_ref().map(|(id, _)| *id)}
                title={format!("Confirmar eliminación de {}", T::LABEL.to_lowercase())}
                message={dialog_message}
                confirm_text="Sí, Eliminar"
                on_result={on_dialog_result}
            />
        </section>
    }
}
