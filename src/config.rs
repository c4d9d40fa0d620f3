use serde::{Deserialize, Serialize};

use crate::state::SubmitFailurePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub scanner_config: ScannerConfig,
    pub feedback_config: FeedbackConfig,
    pub ack_display_ms: u32,
    pub status_poll_seconds: u32,
    pub submit_failure_policy: String,
}

/// Parámetros que se pasan a la librería de decodificación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub facing_mode: String,
    pub fps: u32,
    pub qrbox_width: u32,
    pub qrbox_height: u32,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            facing_mode: "environment".to_string(),
            fps: 10,
            qrbox_width: 280,
            qrbox_height: 120,
        }
    }
}

/// Mecanismo de feedback del disparo: vibración o tono sintetizado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    pub mode: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            mode: "vibrate".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: String::new(),
            backend_url_production: String::new(),
            environment: "development".to_string(),
            scanner_config: ScannerConfig::default(),
            feedback_config: FeedbackConfig::default(),
            ack_display_ms: 2000,
            status_poll_seconds: 30,
            submit_failure_policy: "silent".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .unwrap_or("").to_string(),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .unwrap_or("").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            scanner_config: ScannerConfig {
                facing_mode: option_env!("FACING_MODE")
                    .unwrap_or("environment").to_string(),
                fps: option_env!("SCANNER_FPS")
                    .unwrap_or("10").parse().unwrap_or(10),
                qrbox_width: option_env!("QRBOX_WIDTH")
                    .unwrap_or("280").parse().unwrap_or(280),
                qrbox_height: option_env!("QRBOX_HEIGHT")
                    .unwrap_or("120").parse().unwrap_or(120),
            },
            feedback_config: FeedbackConfig {
                mode: option_env!("FEEDBACK_MODE")
                    .unwrap_or("vibrate").to_string(),
            },
            ack_display_ms: option_env!("ACK_DISPLAY_MS")
                .unwrap_or("2000").parse().unwrap_or(2000),
            status_poll_seconds: option_env!("STATUS_POLL_SECONDS")
                .unwrap_or("30").parse().unwrap_or(30),
            submit_failure_policy: option_env!("SUBMIT_FAILURE_POLICY")
                .unwrap_or("silent").to_string(),
        }
    }

    /// Obtiene la URL del backend según el entorno actual.
    /// Vacía por defecto: el frontend se sirve desde el propio backend
    /// y usa rutas relativas (/api/...), igual que en producción.
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }

    pub fn submit_failure_policy(&self) -> SubmitFailurePolicy {
        SubmitFailurePolicy::from_str(&self.submit_failure_policy)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
