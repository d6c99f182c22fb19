use yew::prelude::*;

use crate::components::app::Route;
use crate::hooks::UseAuthHandle;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub auth: UseAuthHandle,
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

/// Barra superior: navegación + perfil. Los claims solo se muestran con
/// sesión autenticada; nunca se renderiza el placeholder.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = (*props.auth.session).clone();

    let nav_link = |route: Route, label: &str| -> Html {
        let on_navigate = props.on_navigate.clone();
        let target = route.clone();
        let class = if props.route == route { "nav-link active" } else { "nav-link" };
        let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(target.clone()));
        html! { <button {class} {onclick}>{ label }</button> }
    };

    let on_logout = {
        let logout = props.auth.logout.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            on_navigate.emit(Route::Home);
        })
    };

    let on_login = {
        let login = props.auth.login.clone();
        Callback::from(move |_: MouseEvent| login.emit(()))
    };

    html! {
        <header class="app-header">
            <div class="brand">{ "🛒 Supermercado Admin" }</div>
            <nav>
                { nav_link(Route::Categories, "Categorías") }
                { nav_link(Route::Clients, "Clientes") }
                { nav_link(Route::Suppliers, "Proveedores") }
                { nav_link(Route::Inventory, "Inventario") }
                { nav_link(Route::Sell, "Vender") }
            </nav>
            <div class="profile">
                if session.is_authenticated {
                    <span class="profile-name">
                        { format!("{} {}", session.profile.given_name, session.profile.family_name) }
                    </span>
                    <span class="profile-email">{ session.profile.email.clone() }</span>
                    <button class="btn-logout" onclick={on_logout}>{ "Cerrar sesión" }</button>
                } else {
                    <button class="btn-login" onclick={on_login}>{ "Iniciar sesión" }</button>
                }
            </div>
        </header>
    }
}
