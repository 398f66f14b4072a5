use serde::{Deserialize, Serialize};

/// Registro de clima normalizado.
///
/// Es el body de la respuesta HTTP y también el valor que se serializa
/// hacia el cache. Inmutable una vez construido: se crea fresco en cada
/// fetch al proveedor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    /// Temperatura en grados Celsius (el fetch siempre pide unidades métricas)
    pub temperature: f64,
    pub description: String,
    /// Código de icono del proveedor (ej: "01d")
    pub icon: String,
}
