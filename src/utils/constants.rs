/// URL base del backend REST del supermercado.
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Producción: via API_URL en .env
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Authority del proveedor de identidad (OIDC).
pub const AUTH_AUTHORITY: &str = match option_env!("AUTH_AUTHORITY") {
    Some(url) => url,
    None => "http://localhost:8080/realms/supermercado",
};

/// Client ID registrado ante el proveedor de identidad.
pub const AUTH_CLIENT_ID: &str = match option_env!("AUTH_CLIENT_ID") {
    Some(id) => id,
    None => "supermercado-admin",
};

/// Milisegundos de inactividad antes de aplicar el texto de búsqueda.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Milisegundos que permanece visible un mensaje de éxito.
pub const SUCCESS_MESSAGE_MS: u32 = 3_000;

/// Clave de localStorage donde el cliente de identidad persiste sus credenciales.
pub const STORAGE_KEY_AUTH_TOKEN: &str = "supermercadoAdmin_authToken";
