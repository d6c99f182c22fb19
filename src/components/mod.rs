pub mod app;
pub mod category_form;
pub mod client_form;
pub mod confirmation_dialog;
pub mod entity_list;
pub mod header;
pub mod login_screen;
pub mod product_form;
pub mod sell_screen;
pub mod supplier_form;

pub use app::App;
pub use confirmation_dialog::{ConfirmationDialog, ConfirmationResult};

use web_sys::HtmlInputElement;
use yew::prelude::*;

use app::Route;

/// Valor actual del input que disparó el evento.
pub(crate) fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[derive(Properties, PartialEq)]
pub struct BackLinkProps {
    pub on_navigate: Callback<Route>,
    pub route: Route,
    pub label: AttrValue,
}

/// Enlace de regreso a la pantalla de lista.
#[function_component(BackLink)]
pub fn back_link(props: &BackLinkProps) -> Html {
    let on_navigate = props.on_navigate.clone();
    let route = props.route.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(route.clone()));
    html! {
        <button class="back-link" {onclick}>{ format!("← {}", props.label) }</button>
    }
}
