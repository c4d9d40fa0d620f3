use serde::Deserialize;
use uuid::Uuid;

/// Estado de la sesión de cámara (una por componente montado)
#[derive(Debug, Clone, PartialEq)]
pub enum CameraStatus {
    Initializing,
    Active,
    Failed(String),
}

impl CameraStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, CameraStatus::Active)
    }

    /// Mensaje de error de adquisición, si lo hay
    pub fn error_message(&self) -> Option<&str> {
        match self {
            CameraStatus::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Registro del último escaneo enviado al backend.
/// Existe solo para el banner transitorio de confirmación; el `id` permite
/// descartar timers de expiración obsoletos cuando un envío nuevo lo reemplaza.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub codigo: String,
    pub hora: String,
    pub id: Uuid,
}

/// Tipo de pulso de feedback (vibración o tono según configuración)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Código confirmado y enviado
    Success,
    /// Disparo sin código detectado
    Empty,
    /// Fallo de envío (solo con SUBMIT_FAILURE_POLICY=surface)
    Error,
}

/// Respuesta de GET /api/status
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub connected_browsers: u32,
}
