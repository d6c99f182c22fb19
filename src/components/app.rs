// ============================================================================
// APP - Shell de la aplicación: rutas, guard de sesión y composición
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_auth;
use crate::models::{Category, Client, Product, Supplier};

use super::category_form::CategoryForm;
use super::client_form::ClientForm;
use super::entity_list::EntityListScreen;
use super::header::Header;
use super::login_screen::LoginScreen;
use super::product_form::ProductForm;
use super::sell_screen::SellScreen;
use super::supplier_form::SupplierForm;

/// Pantallas de la aplicación. Todas menos `Home` exigen sesión.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Categories,
    CategoryForm(Option<i32>),
    Clients,
    ClientForm(Option<i32>),
    Suppliers,
    SupplierForm(Option<i32>),
    Inventory,
    ProductForm(Option<i32>),
    Sell,
}

impl Route {
    fn requires_auth(&self) -> bool {
        !matches!(self, Route::Home)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();
    let route = use_state(|| Route::Home);

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            route.set(next);
        })
    };

    // Guard de ruta: lee el estado de sesión de forma síncrona en cada
    // navegación; sin sesión, la pantalla protegida se sustituye por login
    let content = if route.requires_auth() && !auth.session.is_authenticated {
        html! { <LoginScreen on_login={auth.login.clone()} /> }
    } else {
        match (*route).clone() {
            Route::Home => html! {
                <div class="home-screen">
                    <h1>{ "Bienvenido a Supermercado Admin" }</h1>
                    <p>{ "Selecciona una sección en la barra superior para comenzar." }</p>
                </div>
            },
            Route::Categories => html! {
                <EntityListScreen<Category>
                    on_navigate={on_navigate.clone()}
                    create_route={Route::CategoryForm(None)}
                    edit_route={Callback::from(|id| Route::CategoryForm(Some(id)))}
                />
            },
            Route::CategoryForm(id) => html! {
                <CategoryForm {id} on_navigate={on_navigate.clone()} />
            },
            Route::Clients => html! {
                <EntityListScreen<Client>
                    on_navigate={on_navigate.clone()}
                    create_route={Route::ClientForm(None)}
                    edit_route={Callback::from(|id| Route::ClientForm(Some(id)))}
                />
            },
            Route::ClientForm(id) => html! {
                <ClientForm {id} on_navigate={on_navigate.clone()} />
            },
            Route::Suppliers => html! {
                <EntityListScreen<Supplier>
                    on_navigate={on_navigate.clone()}
                    create_route={Route::SupplierForm(None)}
                    edit_route={Callback::from(|id| Route::SupplierForm(Some(id)))}
                />
            },
            Route::SupplierForm(id) => html! {
                <SupplierForm {id} on_navigate={on_navigate.clone()} />
            },
            Route::Inventory => html! {
                <EntityListScreen<Product>
                    on_navigate={on_navigate.clone()}
                    create_route={Route::ProductForm(None)}
                    edit_route={Callback::from(|id| Route::ProductForm(Some(id)))}
                />
            },
            Route::ProductForm(id) => html! {
                <ProductForm {id} on_navigate={on_navigate.clone()} />
            },
            Route::Sell => html! { <SellScreen /> },
        }
    };

    html! {
        <div class="app">
            <Header auth={auth.clone()} route={(*route).clone()} on_navigate={on_navigate} />
            <main>{ content }</main>
        </div>
    }
}
