use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::constants::SEARCH_DEBOUNCE_MS;

/// Dedupe temprano: un texto igual al último emitido no programa timer.
pub(crate) fn schedules_timer(text: &str, debounced: &str) -> bool {
    text != debounced
}

/// Dedupe en la emisión: al disparar el timer, el texto solo se emite si
/// sigue siendo distinto del último valor emitido (pudo volver al anterior
/// mientras el timer corría).
pub(crate) fn debounce_emission(text: String, debounced: &str) -> Option<String> {
    (text != debounced).then_some(text)
}

/// Máquina de debounce explícita para un campo de búsqueda.
///
/// `value` sigue cada tecla (para el binding del input); `debounced` solo se
/// actualiza tras 300 ms sin teclear y nunca emite el mismo valor dos veces
/// seguidas. Arranca con el valor inicial ya emitido, así el primer render
/// nunca queda en blanco.
pub struct UseDebouncedInputHandle {
    pub value: UseStateHandle<String>,
    pub debounced: UseStateHandle<String>,
    pub oninput: Callback<String>,
    /// Fijar ambos valores de inmediato, cancelando cualquier timer pendiente
    /// (p. ej. al seleccionar una sugerencia).
    pub set: Callback<String>,
}

impl Clone for UseDebouncedInputHandle {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            debounced: self.debounced.clone(),
            oninput: self.oninput.clone(),
            set: self.set.clone(),
        }
    }
}

#[hook]
pub fn use_debounced_input() -> UseDebouncedInputHandle {
    let value = use_state(String::new);
    let debounced = use_state(String::new);
    let pending: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let oninput = {
        let value = value.clone();
        let debounced = debounced.clone();
        let pending = pending.clone();

        Callback::from(move |text: String| {
            value.set(text.clone());

            // Reprogramar: el timer anterior se cancela al soltarlo
            pending.borrow_mut().take();

            if !schedules_timer(&text, &debounced) {
                return;
            }

            let debounced = debounced.clone();
            let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                if let Some(next) = debounce_emission(text, &debounced) {
                    debounced.set(next);
                }
            });
            *pending.borrow_mut() = Some(timer);
        })
    };

    let set = {
        let value = value.clone();
        let debounced = debounced.clone();
        let pending = pending.clone();

        Callback::from(move |text: String| {
            pending.borrow_mut().take();
            value.set(text.clone());
            if text != *debounced {
                debounced.set(text);
            }
        })
    };

    // Al desmontar, cancelar el timer pendiente
    {
        let pending = pending.clone();
        use_effect_with((), move |_| {
            move || {
                pending.borrow_mut().take();
            }
        });
    }

    UseDebouncedInputHandle {
        value,
        debounced,
        oninput,
        set,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teclear_rapido_emite_una_sola_vez() {
        // Tres teclas dentro de la ventana de 300 ms: cada una cancela el
        // timer anterior y solo el último llega a disparar
        let debounced = String::new();
        let mut pending: Option<String> = None;

        for text in ["c", "ca", "cat"] {
            pending.take();
            if schedules_timer(text, &debounced) {
                pending = Some(text.to_string());
            }
        }

        let fired = pending
            .take()
            .and_then(|text| debounce_emission(text, &debounced));
        assert_eq!(fired.as_deref(), Some("cat"));
        assert!(pending.is_none());
    }

    #[test]
    fn igual_al_ultimo_emitido_no_programa_timer() {
        assert!(!schedules_timer("a", "a"));
        assert!(schedules_timer("ab", "a"));
        assert!(schedules_timer("", "a"));
    }

    #[test]
    fn volver_al_valor_emitido_no_reemite() {
        // "a" ya emitido; el usuario teclea "ab" y vuelve a "a" antes de que
        // el timer dispare
        let debounced = "a".to_string();
        assert!(schedules_timer("ab", &debounced));
        assert!(!schedules_timer("a", &debounced));
        // Incluso si un timer viejo llegara a disparar con "a", la emisión
        // se dedupe
        assert_eq!(debounce_emission("a".to_string(), &debounced), None);
    }
}
