// ============================================================================
// AUTH SERVICE - Cliente del proveedor de identidad (OIDC)
// ============================================================================
// Todo el detalle de protocolo vive aquí: redirect de autorización, retorno
// del token por fragmento, persistencia en localStorage y validación contra
// el endpoint userinfo. Ninguna otra capa inspecciona tokens.
// ============================================================================

use chrono::{DateTime, Duration, Utc};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use web_sys::window;

use crate::models::UserProfile;
use crate::utils::constants::{AUTH_AUTHORITY, AUTH_CLIENT_ID, STORAGE_KEY_AUTH_TOKEN};
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Resultado del chequeo de autenticación, tal como lo consume la sesión.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthCheckResult {
    pub is_authenticated: bool,
    pub user_data: Option<UserProfile>,
}

impl AuthCheckResult {
    fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            user_data: None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
struct StoredCredentials {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Chequeo de autenticación, una sola vez por arranque.
///
/// Primero captura un token recién llegado en el fragmento de la URL (retorno
/// del authorize), después valida el token persistido contra userinfo. Sin
/// reintentos: cualquier fallo se reporta como no autenticado.
pub async fn check_auth() -> AuthCheckResult {
    if let Some(credentials) = capture_token_from_fragment() {
        let _ = save_to_storage(STORAGE_KEY_AUTH_TOKEN, &credentials);
    }

    let Some(credentials) = load_from_storage::<StoredCredentials>(STORAGE_KEY_AUTH_TOKEN) else {
        log::info!("🔐 Sin credenciales almacenadas");
        return AuthCheckResult::unauthenticated();
    };

    if Utc::now() >= credentials.expires_at {
        log::info!("🔐 Token expirado, limpiando credenciales");
        let _ = remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
        return AuthCheckResult::unauthenticated();
    }

    // Claims siempre frescos desde userinfo, nunca decodificados del token
    let url = format!("{}/protocol/openid-connect/userinfo", AUTH_AUTHORITY);
    let response = match Request::get(&url)
        .header("Authorization", &format!("Bearer {}", credentials.access_token))
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            log::error!("❌ Error consultando userinfo: {}", e);
            return AuthCheckResult::unauthenticated();
        }
    };

    if !response.ok() {
        log::warn!("⚠️ userinfo respondió HTTP {}, sesión inválida", response.status());
        let _ = remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
        return AuthCheckResult::unauthenticated();
    }

    match response.json::<UserProfile>().await {
        Ok(profile) => {
            log::info!("✅ Sesión válida para {}", profile.email);
            AuthCheckResult {
                is_authenticated: true,
                user_data: Some(profile),
            }
        }
        Err(e) => {
            log::error!("❌ Error parseando claims: {}", e);
            AuthCheckResult::unauthenticated()
        }
    }
}

/// Iniciar el flujo de autorización. Navega fuera de la app; no devuelve nada.
pub fn authorize() {
    let Some(win) = window() else {
        return;
    };
    let origin = win.location().origin().unwrap_or_default();
    let url = format!(
        "{}/protocol/openid-connect/auth?client_id={}&redirect_uri={}&response_type=token&scope=openid%20profile%20email",
        AUTH_AUTHORITY, AUTH_CLIENT_ID, origin
    );
    log::info!("🔐 Redirigiendo al proveedor de identidad");
    let _ = win.location().set_href(&url);
}

/// Cerrar sesión ante el proveedor. Las credenciales locales se eliminan
/// siempre; el resultado del intercambio de red se devuelve al llamador.
pub async fn logoff() -> Result<(), String> {
    let _ = remove_from_storage(STORAGE_KEY_AUTH_TOKEN);

    let url = format!("{}/protocol/openid-connect/logout", AUTH_AUTHORITY);
    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(format!("client_id={}", AUTH_CLIENT_ID))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        Ok(())
    } else {
        Err(format!("HTTP {}: {}", response.status(), response.status_text()))
    }
}

/// Leer `#access_token=...&expires_in=...` del retorno del authorize y limpiar
/// el fragmento de la URL.
fn capture_token_from_fragment() -> Option<StoredCredentials> {
    let win = window()?;
    let hash = win.location().hash().ok()?;
    let fragment = hash.strip_prefix('#')?;

    let mut access_token = None;
    let mut expires_in: i64 = 3600;
    for pair in fragment.split('&') {
        match pair.split_once('=') {
            Some(("access_token", value)) => access_token = Some(value.to_string()),
            Some(("expires_in", value)) => {
                if let Ok(seconds) = value.parse() {
                    expires_in = seconds;
                }
            }
            _ => {}
        }
    }

    let access_token = access_token?;
    log::info!("🔐 Token recibido del proveedor de identidad");
    let _ = win.location().set_hash("");

    Some(StoredCredentials {
        access_token,
        expires_at: Utc::now() + Duration::seconds(expires_in),
    })
}
