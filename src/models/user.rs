use serde::{Deserialize, Serialize};

/// Claims de perfil entregados por el proveedor de identidad.
///
/// Arranca con valores placeholder; solo se reemplaza completo (nunca campo a
/// campo) cuando el chequeo de autenticación devuelve claims reales. La vista
/// no debe mostrarlo mientras `is_authenticated` sea falso.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub given_name: String,
    pub family_name: String,
}

impl UserProfile {
    pub fn placeholder() -> Self {
        Self {
            name: "Cargando...".to_string(),
            email: "Cargando...".to_string(),
            given_name: "Cargando...".to_string(),
            family_name: "Cargando...".to_string(),
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::placeholder()
    }
}
