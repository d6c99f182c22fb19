// ============================================================================
// USE AUTH - Sesión de la aplicación (fuente única de verdad)
// ============================================================================

use yew::prelude::*;

use crate::models::UserProfile;
use crate::services::{auth_service, AuthCheckResult};

/// Estado de sesión compartido por toda la app. Escritor único: este hook.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub is_authenticated: bool,
    pub profile: UserProfile,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            profile: UserProfile::placeholder(),
        }
    }
}

/// Aplicar el resultado del chequeo de autenticación.
///
/// El perfil se reemplaza completo y solo con un chequeo positivo; un chequeo
/// negativo deja el placeholder intacto (la vista no lo muestra porque
/// `is_authenticated` lo bloquea).
pub fn apply_check_result(current: &AuthSession, result: &AuthCheckResult) -> AuthSession {
    if !result.is_authenticated {
        return AuthSession {
            is_authenticated: false,
            profile: current.profile.clone(),
        };
    }
    AuthSession {
        is_authenticated: true,
        profile: result
            .user_data
            .clone()
            .unwrap_or_else(|| current.profile.clone()),
    }
}

pub struct UseAuthHandle {
    pub session: UseStateHandle<AuthSession>,
    pub login: Callback<()>,
    pub logout: Callback<()>,
}

impl Clone for UseAuthHandle {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            login: self.login.clone(),
            logout: self.logout.clone(),
        }
    }
}

impl PartialEq for UseAuthHandle {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let session = use_state(AuthSession::default);

    // initialize(): un único chequeo asíncrono al montar, sin reintentos.
    // Un fallo se observa como is_authenticated = false.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = auth_service::check_auth().await;
                log::info!("🔐 Chequeo de autenticación: {}", result.is_authenticated);
                session.set(apply_check_result(&session, &result));
            });
            || ()
        });
    }

    let login = Callback::from(move |_| {
        auth_service::authorize();
    });

    let logout = {
        let session = session.clone();
        Callback::from(move |_| {
            // El estado local se limpia de forma síncrona, sin depender de
            // una recarga de página posterior
            session.set(AuthSession::default());

            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::logoff().await {
                    Ok(()) => log::info!("👋 Sesión cerrada ante el proveedor"),
                    Err(e) => log::error!("❌ Error cerrando sesión: {}", e),
                }
            });
        })
    };

    UseAuthHandle {
        session,
        login,
        logout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chequeo_negativo_conserva_el_placeholder() {
        let session = AuthSession::default();
        let result = AuthCheckResult {
            is_authenticated: false,
            user_data: None,
        };
        let next = apply_check_result(&session, &result);
        assert!(!next.is_authenticated);
        assert_eq!(next.profile, UserProfile::placeholder());
    }

    #[test]
    fn chequeo_positivo_reemplaza_el_perfil_completo() {
        let session = AuthSession::default();
        let profile = UserProfile {
            name: "Ana Pérez".to_string(),
            email: "ana@super.com".to_string(),
            given_name: "Ana".to_string(),
            family_name: "Pérez".to_string(),
        };
        let result = AuthCheckResult {
            is_authenticated: true,
            user_data: Some(profile.clone()),
        };
        let next = apply_check_result(&session, &result);
        assert!(next.is_authenticated);
        assert_eq!(next.profile, profile);
    }

    #[test]
    fn chequeo_positivo_sin_claims_no_inventa_perfil() {
        let session = AuthSession::default();
        let result = AuthCheckResult {
            is_authenticated: true,
            user_data: None,
        };
        let next = apply_check_result(&session, &result);
        assert!(next.is_authenticated);
        assert_eq!(next.profile, UserProfile::placeholder());
    }
}
