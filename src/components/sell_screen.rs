use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::input_value;
use crate::hooks::use_sale;

/// Pantalla de registro de venta: selección de cliente, carrito de productos
/// y envío. La cabecera y las líneas se envían en secuencia; ver
/// `services::sale_service`.
#[function_component(SellScreen)]
pub fn sell_screen() -> Html {
    let sale = use_sale();

    let on_client_input = {
        let oninput = sale.client_search.oninput.clone();
        Callback::from(move |e: InputEvent| oninput.emit(input_value(&e)))
    };
    let on_product_input = {
        let oninput = sale.product_search.oninput.clone();
        Callback::from(move |e: InputEvent| oninput.emit(input_value(&e)))
    };

    let client_suggestions = if sale.selected_client.is_none() {
        html! {
            <ul class="suggestions">
                {
                    sale.searched_clients.iter().map(|client| {
                        let select_client = sale.select_client.clone();
                        let client_clone = client.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            select_client.emit(client_clone.clone());
                        });
                        html! {
                            <li key={client.id} {onclick}>
                                { client.name.clone() }
                                if let Some(email) = client.email.clone() {
                                    <span class="hint">{ email }</span>
                                }
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        }
    } else {
        Html::default()
    };

    let product_suggestions = html! {
        <ul class="suggestions">
            {
                sale.searched_products.iter().map(|product| {
                    let add_to_cart = sale.add_to_cart.clone();
                    let product_clone = product.clone();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        add_to_cart.emit(product_clone.clone());
                    });
                    html! {
                        <li key={product.id} {onclick}>
                            { format!("{} - {:.2} (stock: {})", product.name, product.price, product.stock) }
                        </li>
                    }
                }).collect::<Html>()
            }
        </ul>
    };

    let cart_rows = sale
        .cart
        .items()
        .iter()
        .map(|item| {
            let product_id = item.product_id;
            let set_quantity = sale.set_quantity.clone();
            let onchange = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let quantity = input.value().parse::<i32>().unwrap_or(1);
                set_quantity.emit((product_id, quantity));
            });
            let remove_item = sale.remove_item.clone();
            let on_remove = Callback::from(move |_: MouseEvent| remove_item.emit(product_id));
            html! {
                <tr key={item.product_id}>
                    <td>{ item.product_name.clone() }</td>
                    <td>
                        <input
                            type="number"
                            min="1"
                            max={item.available_stock.to_string()}
                            value={item.quantity.to_string()}
                            {onchange}
                        />
                    </td>
                    <td>{ format!("{:.2}", item.unit_price) }</td>
                    <td>{ format!("{:.2}", item.subtotal) }</td>
                    <td><button class="btn-delete" onclick={on_remove}>{ "Quitar" }</button></td>
                </tr>
            }
        })
        .collect::<Html>();

    let on_register = sale.register.reform(|_: MouseEvent| ());
    let on_clear = sale.clear_sale.reform(|_: MouseEvent| ());
    let on_clear_client = sale.clear_client.reform(|_: MouseEvent| ());

    html! {
        <section class="sell-screen">
            <h1>{ "Registrar Venta" }</h1>

            if let Some(success) = (*sale.sale_success).clone() {
                <p class="message success">{ success }</p>
            }
            if let Some(error) = (*sale.sale_error).clone() {
                <p class="message error">{ error }</p>
            }

            <div class="sell-client">
                <label for="client-search">{ "Cliente" }</label>
                if let Some(client) = (*sale.selected_client).clone() {
                    <div class="selected-client">
                        <span>{ format!("{} (ID: {})", client.name, client.id) }</span>
                        <button onclick={on_clear_client}>{ "Cambiar" }</button>
                    </div>
                } else {
                    <input
                        id="client-search"
                        type="search"
                        placeholder="Buscar cliente por nombre, email o teléfono..."
                        value={(*sale.client_search.value).clone()}
                        oninput={on_client_input}
                    />
                    { client_suggestions }
                }
                if let Some(error) = (*sale.clients_error).clone() {
                    <p class="message error">{ error }</p>
                }
            </div>

            <div class="sell-products">
                <label for="product-search">{ "Productos" }</label>
                <input
                    id="product-search"
                    type="search"
                    placeholder="Buscar producto por nombre..."
                    value={(*sale.product_search.value).clone()}
                    oninput={on_product_input}
                />
                { product_suggestions }
                if let Some(error) = (*sale.products_error).clone() {
                    <p class="message error">{ error }</p>
                }
            </div>

            <div class="sell-cart">
                <h2>{ "Carrito" }</h2>
                if sale.cart.is_empty() {
                    <p class="empty">{ "El carrito está vacío." }</p>
                } else {
                    <table class="entity-table">
                        <thead>
                            <tr>
                                <th>{"Producto"}</th><th>{"Cantidad"}</th>
                                <th>{"Precio"}</th><th>{"Subtotal"}</th><th></th>
                            </tr>
                        </thead>
                        <tbody>{ cart_rows }</tbody>
                    </table>
                    <p class="total">{ format!("Total: {:.2}", sale.cart.total()) }</p>
                }
            </div>

            <div class="sell-actions">
                <button class="btn-cancel" onclick={on_clear}>{ "Limpiar" }</button>
                <button
                    class="btn-confirm"
                    disabled={*sale.is_registering}
                    onclick={on_register}
                >
                    { if *sale.is_registering { "Registrando..." } else { "Registrar Venta" } }
                </button>
            </div>
        </section>
    }
}
