// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::StatusResponse;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    fn scan_url(&self, codigo: &str) -> String {
        format!("{}/api/escanear/{}", self.base_url, codigo)
    }

    /// Disparar un escaneo: POST sin body, el código va en la ruta.
    /// La respuesta se espera solo para saber si completó; el contenido
    /// no se inspecciona.
    pub async fn submit_scan(&self, codigo: &str) -> Result<(), String> {
        let url = self.scan_url(codigo);

        log::info!("🔫 Enviando disparo: {}", codigo);

        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        Ok(())
    }

    /// Estado del servidor: cuántos browsers del POS están conectados
    /// para recibir los códigos
    pub async fn status(&self) -> Result<StatusResponse, String> {
        let url = format!("{}/api/status", self.base_url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response.json::<StatusResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn el_codigo_va_en_la_ruta() {
        let client = ApiClient::with_base_url("");
        assert_eq!(client.scan_url("ABC123"), "/api/escanear/ABC123");

        let client = ApiClient::with_base_url("http://localhost:8000");
        assert_eq!(
            client.scan_url("ABC123"),
            "http://localhost:8000/api/escanear/ABC123"
        );
    }
}
