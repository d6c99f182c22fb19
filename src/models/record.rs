use serde::de::DeserializeOwned;

/// Contrato de una entidad listable en una pantalla de administración.
///
/// Cada entidad declara su recurso REST, las etiquetas (en español, con el
/// género correcto para los mensajes) y el predicado de búsqueda sobre sus
/// campos de texto designados.
pub trait ListRecord: Clone + PartialEq + DeserializeOwned + 'static {
    /// Recurso REST del backend: `categoria`, `cliente`, `proveedor`, `producto`.
    const RESOURCE: &'static str;
    /// Etiqueta singular capitalizada: "Categoría".
    const LABEL: &'static str;
    /// Etiqueta plural en minúsculas: "categorías".
    const LABEL_PLURAL: &'static str;
    /// Etiqueta con artículo para mensajes de eliminación: "la categoría".
    const LABEL_WITH_ARTICLE: &'static str;
    /// Participio con género: "eliminada" / "eliminado".
    const DELETED_WORD: &'static str;

    fn id(&self) -> i32;

    /// Nombre a mostrar en el diálogo de confirmación.
    fn display_name(&self) -> &str;

    /// Coincidencia de subcadena sobre los campos de texto designados.
    /// `query` llega ya en minúsculas y no vacío.
    fn matches(&self, query: &str) -> bool;
}
