// ============================================================================
// CONFIRMATION DIALOG - Diálogo modal genérico de confirmación
// ============================================================================
// Contrato estrecho abrir/resultado, independiente de la entidad: el dato en
// juego viaja por el parámetro de tipo y vuelve intacto en el resultado.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlDialogElement;
use yew::prelude::*;

/// Decisión del usuario junto con el dato que el llamador puso en juego.
/// Cerrar con Escape o clic fuera equivale a `confirmed: false`, conservando
/// el dato original.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationResult<T> {
    pub confirmed: bool,
    pub data: Option<T>,
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationDialogProps<T: Clone + PartialEq + 'static> {
    /// `Some(dato)` abre el modal; `None` lo cierra.
    pub pending: Option<T>,
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Sí, Confirmar"))]
    pub confirm_text: AttrValue,
    #[prop_or(AttrValue::Static("Cancelar"))]
    pub cancel_text: AttrValue,
    pub on_result: Callback<ConfirmationResult<T>>,
}

#[function_component(ConfirmationDialog)]
pub fn confirmation_dialog<T: Clone + PartialEq + 'static>(
    props: &ConfirmationDialogProps<T>,
) -> Html {
    let dialog_ref = use_node_ref();
    // true mientras un botón ya resolvió el diálogo; evita que el evento
    // `close` posterior emita un segundo resultado
    let resolved: Rc<RefCell<bool>> = use_mut_ref(|| false);

    {
        let dialog_ref = dialog_ref.clone();
        let resolved = resolved.clone();
        use_effect_with(props.pending.clone(), move |pending| {
            if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                if pending.is_some() {
                    *resolved.borrow_mut() = false;
                    if dialog.show_modal().is_err() {
                        log::error!("❌ No se pudo abrir el diálogo de confirmación");
                    }
                } else if dialog.open() {
                    dialog.close();
                }
            }
            || ()
        });
    }

    let on_confirm = {
        let on_result = props.on_result.clone();
        let pending = props.pending.clone();
        let resolved = resolved.clone();
        let dialog_ref = dialog_ref.clone();
        Callback::from(move |_: MouseEvent| {
            *resolved.borrow_mut() = true;
            if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                dialog.close();
            }
            on_result.emit(ConfirmationResult {
                confirmed: true,
                data: pending.clone(),
            });
        })
    };

    let on_cancel = {
        let on_result = props.on_result.clone();
        let pending = props.pending.clone();
        let resolved = resolved.clone();
        let dialog_ref = dialog_ref.clone();
        Callback::from(move |_: MouseEvent| {
            *resolved.borrow_mut() = true;
            if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
                dialog.close();
            }
            on_result.emit(ConfirmationResult {
                confirmed: false,
                data: pending.clone(),
            });
        })
    };

    // Escape o backdrop: el navegador cierra el <dialog> sin pasar por los
    // botones; cuenta como cancelación con el dato original
    let on_close = {
        let on_result = props.on_result.clone();
        let pending = props.pending.clone();
        let resolved = resolved.clone();
        Callback::from(move |_: Event| {
            if *resolved.borrow() {
                return;
            }
            if pending.is_some() {
                log::info!("💬 Diálogo cerrado via ESC o backdrop");
                on_result.emit(ConfirmationResult {
                    confirmed: false,
                    data: pending.clone(),
                });
            }
        })
    };

    html! {
        <dialog class="confirmation-dialog" ref={dialog_ref} onclose={on_close}>
            <h2>{ props.title.clone() }</h2>
            <p>{ props.message.clone() }</p>
            <div class="dialog-actions">
                <button class="btn-cancel" onclick={on_cancel}>{ props.cancel_text.clone() }</button>
                <button class="btn-confirm" onclick={on_confirm}>{ props.confirm_text.clone() }</button>
            </div>
        </dialog>
    }
}
