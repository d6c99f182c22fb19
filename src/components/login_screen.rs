use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<()>,
}

/// Pantalla de acceso. El login real vive en el proveedor de identidad:
/// este botón solo dispara el redirect de autorización.
#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let onclick = props.on_login.reform(|_: MouseEvent| ());

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-logo">{ "🛒" }</div>
                <h1>{ "Supermercado Admin" }</h1>
                <p>{ "Gestión de inventario, clientes y ventas" }</p>
                <button class="btn-login" {onclick}>
                    { "Iniciar sesión" }
                </button>
            </div>
        </div>
    }
}
