// ============================================================================
// USE ENTITY LIST - Pipeline buscar/filtrar/refrescar de una lista remota
// ============================================================================
// Una instancia por pantalla de entidad (categorías, clientes, proveedores,
// productos). Combina el texto de búsqueda con debounce y la colección
// remota re-fetcheada tras cada mutación, con switch-to-latest para fetches
// y a lo sumo un delete en vuelo por instancia.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::models::ListRecord;
use crate::services::{ApiClient, ApiError};
use crate::utils::constants::SUCCESS_MESSAGE_MS;

use super::use_debounced_input::{use_debounced_input, UseDebouncedInputHandle};

/// Filtrado por subcadena, insensible a mayúsculas, sobre los campos de texto
/// designados de la entidad. Query vacío devuelve la colección completa.
pub fn filter_records<T: ListRecord>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches(&query))
        .cloned()
        .collect()
}

/// Cambios de estado que produce un delete ya resuelto.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DeleteCompletion {
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    /// Un delete con éxito dispara exactamente un refetch; uno fallido, ninguno.
    pub triggers_refresh: bool,
}

pub(crate) fn complete_delete<T: ListRecord>(
    id: i32,
    result: Result<(), ApiError>,
) -> DeleteCompletion {
    match result {
        Ok(()) => DeleteCompletion {
            success_message: Some(format!(
                "{} ID {} {} con éxito.",
                T::LABEL,
                id,
                T::DELETED_WORD
            )),
            error_message: None,
            triggers_refresh: true,
        },
        Err(e) => DeleteCompletion {
            success_message: None,
            error_message: Some(format!(
                "Fallo al eliminar {} ID {}. Detalle: {}",
                T::LABEL_WITH_ARTICLE,
                id,
                e
            )),
            triggers_refresh: false,
        },
    }
}

pub struct UseEntityListHandle<T: ListRecord> {
    /// Colección derivada que la vista renderiza.
    pub filtered: Rc<Vec<T>>,
    pub search: UseDebouncedInputHandle,
    pub is_loading: UseStateHandle<bool>,
    pub is_deleting: UseStateHandle<bool>,
    pub error_message: UseStateHandle<Option<String>>,
    pub success_message: UseStateHandle<Option<String>>,
    /// Re-fetch completo de la colección (reemplazo, nunca merge).
    pub refresh: Callback<()>,
    /// Delete ya confirmado por el diálogo; el id viene de la colección
    /// renderizada.
    pub confirm_delete: Callback<i32>,
    /// Limpiar mensajes al abrir el diálogo de confirmación.
    pub reset_messages: Callback<()>,
}

impl<T: ListRecord> Clone for UseEntityListHandle<T> {
    fn clone(&self) -> Self {
        Self {
            filtered: self.filtered.clone(),
            search: self.search.clone(),
            is_loading: self.is_loading.clone(),
            is_deleting: self.is_deleting.clone(),
            error_message: self.error_message.clone(),
            success_message: self.success_message.clone(),
            refresh: self.refresh.clone(),
            confirm_delete: self.confirm_delete.clone(),
            reset_messages: self.reset_messages.clone(),
        }
    }
}

#[hook]
pub fn use_entity_list<T: ListRecord>() -> UseEntityListHandle<T> {
    let items = use_state(Vec::<T>::new);
    let search = use_debounced_input();
    let is_loading = use_state(|| false);
    let is_deleting = use_state(|| false);
    let error_message = use_state(|| None::<String>);
    let success_message = use_state(|| None::<String>);

    // Generaciones: un fetch/delete superado por otro más nuevo se descarta
    // al completar (switch-to-latest, sin comparar timestamps)
    let fetch_generation: Rc<RefCell<u64>> = use_mut_ref(|| 0);
    let delete_generation: Rc<RefCell<u64>> = use_mut_ref(|| 0);
    let success_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let refresh = {
        let items = items.clone();
        let is_loading = is_loading.clone();
        let error_message = error_message.clone();
        let fetch_generation = fetch_generation.clone();

        Callback::from(move |_| {
            let generation = {
                let mut counter = fetch_generation.borrow_mut();
                *counter += 1;
                *counter
            };

            is_loading.set(true);
            // Solo se descarta el error anterior. El mensaje de éxito de una
            // eliminación sobrevive al refetch que ella misma dispara; lo
            // borra su timer de 3 segundos, no el refresh
            error_message.set(None);

            let items = items.clone();
            let is_loading = is_loading.clone();
            let error_message = error_message.clone();
            let fetch_generation = fetch_generation.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().fetch_all::<T>().await;

                // Un refresh más nuevo ya tomó el control de la colección
                if *fetch_generation.borrow() != generation {
                    log::info!("🔄 Fetch de {} superado, descartado", T::LABEL_PLURAL);
                    return;
                }

                match result {
                    Ok(records) => {
                        items.set(records);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando {}: {}", T::LABEL_PLURAL, e);
                        items.set(Vec::new());
                        error_message.set(Some(format!(
                            "Fallo al cargar la lista de {}. Por favor, inténtelo de nuevo.",
                            T::LABEL_PLURAL
                        )));
                    }
                }
                is_loading.set(false);
            });
        })
    };

    // Primer fetch al montar la pantalla
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let confirm_delete = {
        let is_deleting = is_deleting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        let delete_generation = delete_generation.clone();
        let success_timer = success_timer.clone();
        let refresh = refresh.clone();

        Callback::from(move |id: i32| {
            // Supersede cualquier delete anterior todavía en vuelo
            let generation = {
                let mut counter = delete_generation.borrow_mut();
                *counter += 1;
                *counter
            };

            is_deleting.set(true);
            error_message.set(None);
            success_message.set(None);

            let is_deleting = is_deleting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let delete_generation = delete_generation.clone();
            let success_timer = success_timer.clone();
            let refresh = refresh.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let result = ApiClient::new().delete(T::RESOURCE, id).await;

                if *delete_generation.borrow() != generation {
                    return;
                }

                match &result {
                    Ok(()) => log::info!("🗑️ {} {} eliminado", T::RESOURCE, id),
                    Err(e) => log::error!("❌ Error eliminando {} {}: {}", T::RESOURCE, id, e),
                }

                let completion = complete_delete::<T>(id, result);

                // El refetch va primero: su arranque no toca success_message
                if completion.triggers_refresh {
                    refresh.emit(());
                }
                if let Some(error) = completion.error_message {
                    error_message.set(Some(error));
                }
                if let Some(message) = completion.success_message {
                    success_message.set(Some(message));

                    // El mensaje de éxito se limpia solo a los 3 segundos
                    let success_message = success_message.clone();
                    *success_timer.borrow_mut() = Some(Timeout::new(SUCCESS_MESSAGE_MS, move || {
                        success_message.set(None);
                    }));
                }
                is_deleting.set(false);
            });
        })
    };

    let reset_messages = {
        let error_message = error_message.clone();
        let success_message = success_message.clone();
        Callback::from(move |_| {
            error_message.set(None);
            success_message.set(None);
        })
    };

    // Al desmontar: soltar el timer del mensaje; las generaciones vuelven
    // no-op a cualquier callback todavía en vuelo
    {
        let success_timer = success_timer.clone();
        let fetch_generation = fetch_generation.clone();
        let delete_generation = delete_generation.clone();
        use_effect_with((), move |_| {
            move || {
                success_timer.borrow_mut().take();
                *fetch_generation.borrow_mut() = u64::MAX;
                *delete_generation.borrow_mut() = u64::MAX;
            }
        });
    }

    // Recomputar la vista filtrada cuando cambian la colección o el query
    let filtered = use_memo(
        ((*items).clone(), (*search.debounced).clone()),
        |(items, query)| filter_records(items, query),
    );

    UseEntityListHandle {
        filtered,
        search,
        is_loading,
        is_deleting,
        error_message,
        success_message,
        refresh,
        confirm_delete,
        reset_messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn categorias() -> Vec<Category> {
        vec![
            Category { id: 1, name: "Lacteos".to_string() },
            Category { id: 2, name: "Bebidas".to_string() },
            Category { id: 3, name: "Limpieza".to_string() },
        ]
    }

    #[test]
    fn query_vacio_devuelve_la_coleccion_exacta() {
        let items = categorias();
        assert_eq!(filter_records(&items, ""), items);
    }

    #[test]
    fn subcadena_insensible_a_mayusculas() {
        let filtered = filter_records(&categorias(), "teo");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[0].name, "Lacteos");

        let upper = filter_records(&categorias(), "TEO");
        assert_eq!(upper, filtered);
    }

    #[test]
    fn filtrar_es_idempotente() {
        let once = filter_records(&categorias(), "i");
        let twice = filter_records(&once, "i");
        assert_eq!(once, twice);
    }

    #[test]
    fn sin_coincidencias_devuelve_vacio() {
        assert!(filter_records(&categorias(), "zzz").is_empty());
    }

    #[test]
    fn eliminar_con_exito_dispara_exactamente_un_refetch() {
        let completion = complete_delete::<Category>(2, Ok(()));
        assert!(completion.triggers_refresh);
        assert_eq!(completion.error_message, None);
        assert_eq!(
            completion.success_message.as_deref(),
            Some("Categoría ID 2 eliminada con éxito.")
        );
    }

    #[test]
    fn eliminar_fallido_no_refresca() {
        let result = Err(ApiError::Http {
            status: 409,
            detail: "categoria en uso".to_string(),
        });
        let completion = complete_delete::<Category>(2, result);
        assert!(!completion.triggers_refresh);
        assert_eq!(completion.success_message, None);
        let error = completion.error_message.unwrap();
        assert!(error.contains("la categoría ID 2"));
        assert!(error.contains("categoria en uso"));
    }

    #[test]
    fn el_exito_de_eliminar_sobrevive_al_refetch_que_dispara() {
        // Secuencia tras confirmar: delete resuelto, refetch disparado, y los
        // dos slots de mensaje tal como los deja el arranque del refetch
        let completion = complete_delete::<Category>(2, Ok(()));
        assert!(completion.triggers_refresh);

        // El arranque del refetch descarta solo el error; el mensaje de éxito
        // queda visible hasta que su timer de 3 segundos lo borre
        let error_message: Option<String> = None;
        let success_message = completion.success_message;

        assert_eq!(error_message, None);
        assert_eq!(
            success_message.as_deref(),
            Some("Categoría ID 2 eliminada con éxito.")
        );
    }
}
