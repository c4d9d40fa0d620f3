// ============================================================================
// SCAN FLOW - Máquina de estados del disparo
// ============================================================================
// Estado puro, sin web-sys: cada handler es una transición que devuelve los
// efectos a ejecutar (pulso, envío HTTP, timer). Los hooks ejecutan los
// efectos; aquí no hay I/O, así que los tests corren en nativo.
// ============================================================================

use uuid::Uuid;

use crate::models::{CameraStatus, FeedbackKind, SubmissionRecord};

/// Política ante un envío fallido (ver .env.example)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFailurePolicy {
    /// El fallo se trata igual que el éxito (solo se loguea) y el flujo
    /// pasa a Acknowledged de todas formas.
    Silent,
    /// El fallo emite pulso de error, conserva el código detectado
    /// y vuelve a Idle para que el operario pueda re-disparar.
    Surface,
}

impl SubmitFailurePolicy {
    pub fn from_str(s: &str) -> Self {
        match s {
            "surface" => SubmitFailurePolicy::Surface,
            _ => SubmitFailurePolicy::Silent,
        }
    }
}

/// Fase del controlador de confirmación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Acknowledged,
}

/// Eventos que alimentan la máquina (cámara, decodificador, usuario, timers)
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    CameraReady,
    CameraFailed(String),
    /// Un frame decodificó un código (hasta `fps` veces por segundo,
    /// con valores repetidos o cambiantes)
    CodeDetected(String),
    /// El operario tocó el botón de disparo
    ShutterPressed,
    /// El POST terminó; `delivered` distingue éxito de fallo de red/HTTP
    SubmissionSettled {
        codigo: String,
        hora: String,
        delivered: bool,
    },
    /// Venció la ventana de 2s del banner con id `id`
    AckExpired { id: Uuid },
}

/// Efectos que el hook debe ejecutar tras una transición, en orden
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEffect {
    /// Pulso de feedback; debe dispararse síncrono con la transición,
    /// antes de emitir el envío asíncrono
    Pulse(FeedbackKind),
    /// Emitir POST /api/escanear/{codigo}
    Submit(String),
    /// Programar la limpieza del banner para el registro `id`
    ScheduleAckClear(Uuid),
}

/// Estado completo del escáner: slot de detección (único, siempre el último
/// código decodificado), fase de confirmación y registro del último envío.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanFlow {
    pub camera: CameraStatus,
    pub slot: Option<String>,
    pub phase: Phase,
    pub last_submission: Option<SubmissionRecord>,
    pub submit_error: Option<String>,
    policy: SubmitFailurePolicy,
}

impl ScanFlow {
    pub fn new(policy: SubmitFailurePolicy) -> Self {
        Self {
            camera: CameraStatus::Initializing,
            slot: None,
            phase: Phase::Idle,
            last_submission: None,
            submit_error: None,
            policy,
        }
    }

    /// Aplica un evento y devuelve los efectos a ejecutar
    pub fn apply(&mut self, event: ScanEvent) -> Vec<ScanEffect> {
        match event {
            ScanEvent::CameraReady => {
                if self.camera == CameraStatus::Initializing {
                    log::info!("📷 Cámara activa");
                    self.camera = CameraStatus::Active;
                }
                vec![]
            }

            ScanEvent::CameraFailed(msg) => {
                log::error!("❌ Error cámara: {}", msg);
                self.camera = CameraStatus::Failed(msg);
                vec![]
            }

            // El slot es de un solo valor: cada decode sobreescribe, sin cola
            ScanEvent::CodeDetected(texto) => {
                self.slot = Some(texto);
                vec![]
            }

            ScanEvent::ShutterPressed => self.on_shutter(),

            ScanEvent::SubmissionSettled {
                codigo,
                hora,
                delivered,
            } => self.on_settled(codigo, hora, delivered),

            ScanEvent::AckExpired { id } => {
                // Un timer obsoleto (el registro ya fue reemplazado) no limpia nada
                if self.phase == Phase::Acknowledged
                    && self.last_submission.as_ref().map(|r| r.id) == Some(id)
                {
                    self.last_submission = None;
                    self.phase = Phase::Idle;
                }
                vec![]
            }
        }
    }

    fn on_shutter(&mut self) -> Vec<ScanEffect> {
        // Superficie de disparo deshabilitada mientras la cámara no esté lista
        if !self.camera.is_active() {
            return vec![];
        }

        // Guard de re-entrada: un envío en vuelo ignora disparos nuevos
        if self.phase == Phase::Submitting {
            log::info!("⏳ Envío en progreso, disparo ignorado");
            return vec![];
        }

        match self.slot.clone() {
            None => {
                log::info!("📭 Disparo sin código detectado");
                vec![ScanEffect::Pulse(FeedbackKind::Empty)]
            }
            Some(codigo) => {
                log::info!("🔫 Disparo: {}", codigo);
                self.phase = Phase::Submitting;
                self.submit_error = None;
                // El pulso va primero: debe sonar/vibrar antes del POST
                vec![
                    ScanEffect::Pulse(FeedbackKind::Success),
                    ScanEffect::Submit(codigo),
                ]
            }
        }
    }

    fn on_settled(&mut self, codigo: String, hora: String, delivered: bool) -> Vec<ScanEffect> {
        // Un settle fuera de Submitting es un resto de un envío descartado
        if self.phase != Phase::Submitting {
            return vec![];
        }

        if !delivered && self.policy == SubmitFailurePolicy::Surface {
            log::warn!("⚠️ Envío fallido de {}, el código se conserva", codigo);
            self.phase = Phase::Idle;
            self.submit_error = Some(format!("No se pudo enviar {}", codigo));
            return vec![ScanEffect::Pulse(FeedbackKind::Error)];
        }

        if !delivered {
            // Política silent: fallo y éxito son indistinguibles para la UI
            log::error!("❌ Error enviando {} (ignorado)", codigo);
        }

        let record = SubmissionRecord {
            codigo,
            hora,
            id: Uuid::new_v4(),
        };
        let id = record.id;
        self.last_submission = Some(record);
        // Limpiar el slot evita re-enviar un código viejo
        self.slot = None;
        self.submit_error = None;
        self.phase = Phase::Acknowledged;
        vec![ScanEffect::ScheduleAckClear(id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flujo_activo(policy: SubmitFailurePolicy) -> ScanFlow {
        let mut flow = ScanFlow::new(policy);
        flow.apply(ScanEvent::CameraReady);
        flow
    }

    fn settle_ok(codigo: &str) -> ScanEvent {
        ScanEvent::SubmissionSettled {
            codigo: codigo.to_string(),
            hora: "10:30:00".to_string(),
            delivered: true,
        }
    }

    #[test]
    fn el_slot_guarda_siempre_el_ultimo_decode() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        for codigo in ["AAA", "BBB", "AAA", "CCC"] {
            flow.apply(ScanEvent::CodeDetected(codigo.to_string()));
        }
        assert_eq!(flow.slot.as_deref(), Some("CCC"));
    }

    #[test]
    fn decode_repetido_es_idempotente() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("X1".to_string()));
        let antes = flow.clone();
        flow.apply(ScanEvent::CodeDetected("X1".to_string()));
        assert_eq!(flow, antes);
    }

    #[test]
    fn disparo_con_slot_vacio_solo_pulsa() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        let efectos = flow.apply(ScanEvent::ShutterPressed);
        assert_eq!(efectos, vec![ScanEffect::Pulse(FeedbackKind::Empty)]);
        assert_eq!(flow.phase, Phase::Idle);
        assert!(flow.last_submission.is_none());
    }

    #[test]
    fn disparo_con_codigo_pulsa_y_envia_una_vez() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("ABC123".to_string()));

        let efectos = flow.apply(ScanEvent::ShutterPressed);
        assert_eq!(
            efectos,
            vec![
                ScanEffect::Pulse(FeedbackKind::Success),
                ScanEffect::Submit("ABC123".to_string()),
            ]
        );
        assert_eq!(flow.phase, Phase::Submitting);
    }

    #[test]
    fn el_settle_crea_registro_y_limpia_el_slot() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("ABC123".to_string()));
        flow.apply(ScanEvent::ShutterPressed);

        let efectos = flow.apply(settle_ok("ABC123"));
        let record = flow.last_submission.clone().expect("debe haber registro");
        assert_eq!(record.codigo, "ABC123");
        assert_eq!(efectos, vec![ScanEffect::ScheduleAckClear(record.id)]);
        assert_eq!(flow.slot, None);
        assert_eq!(flow.phase, Phase::Acknowledged);
    }

    #[test]
    fn la_expiracion_destruye_el_registro_y_vuelve_a_idle() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("ABC123".to_string()));
        flow.apply(ScanEvent::ShutterPressed);
        flow.apply(settle_ok("ABC123"));

        let id = flow.last_submission.as_ref().unwrap().id;
        flow.apply(ScanEvent::AckExpired { id });
        assert!(flow.last_submission.is_none());
        assert_eq!(flow.phase, Phase::Idle);
    }

    #[test]
    fn un_timer_obsoleto_no_limpia_el_registro_nuevo() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);

        // Primer envío
        flow.apply(ScanEvent::CodeDetected("UNO".to_string()));
        flow.apply(ScanEvent::ShutterPressed);
        flow.apply(settle_ok("UNO"));
        let id_viejo = flow.last_submission.as_ref().unwrap().id;

        // Segundo envío antes de que venza el banner del primero
        flow.apply(ScanEvent::CodeDetected("DOS".to_string()));
        flow.apply(ScanEvent::ShutterPressed);
        flow.apply(settle_ok("DOS"));

        flow.apply(ScanEvent::AckExpired { id: id_viejo });
        assert_eq!(
            flow.last_submission.as_ref().map(|r| r.codigo.as_str()),
            Some("DOS")
        );
        assert_eq!(flow.phase, Phase::Acknowledged);
    }

    #[test]
    fn disparo_sin_camara_activa_no_tiene_efectos() {
        // Todavía Initializing
        let mut flow = ScanFlow::new(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("ABC".to_string()));
        let antes = flow.clone();
        assert!(flow.apply(ScanEvent::ShutterPressed).is_empty());
        assert_eq!(flow, antes);

        // Cámara fallida
        let mut flow = ScanFlow::new(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CameraFailed("permiso denegado".to_string()));
        flow.apply(ScanEvent::CodeDetected("ABC".to_string()));
        let antes = flow.clone();
        assert!(flow.apply(ScanEvent::ShutterPressed).is_empty());
        assert_eq!(flow, antes);
    }

    #[test]
    fn fallo_de_arranque_guarda_el_mensaje() {
        let mut flow = ScanFlow::new(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CameraFailed(
            "No se pudo acceder a la cámara".to_string(),
        ));
        assert!(!flow.camera.is_active());
        assert_eq!(
            flow.camera.error_message(),
            Some("No se pudo acceder a la cámara")
        );
    }

    #[test]
    fn disparo_durante_envio_en_vuelo_se_ignora() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("ABC".to_string()));
        flow.apply(ScanEvent::ShutterPressed);

        // Sigue llegando un decode nuevo mientras el POST está en vuelo
        flow.apply(ScanEvent::CodeDetected("XYZ".to_string()));
        assert!(flow.apply(ScanEvent::ShutterPressed).is_empty());
        assert_eq!(flow.phase, Phase::Submitting);
    }

    #[test]
    fn disparo_durante_el_banner_permite_escaneos_consecutivos() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("UNO".to_string()));
        flow.apply(ScanEvent::ShutterPressed);
        flow.apply(settle_ok("UNO"));
        assert_eq!(flow.phase, Phase::Acknowledged);

        flow.apply(ScanEvent::CodeDetected("DOS".to_string()));
        let efectos = flow.apply(ScanEvent::ShutterPressed);
        assert_eq!(
            efectos,
            vec![
                ScanEffect::Pulse(FeedbackKind::Success),
                ScanEffect::Submit("DOS".to_string()),
            ]
        );
    }

    #[test]
    fn politica_silent_trata_el_fallo_como_exito() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);
        flow.apply(ScanEvent::CodeDetected("ABC".to_string()));
        flow.apply(ScanEvent::ShutterPressed);

        flow.apply(ScanEvent::SubmissionSettled {
            codigo: "ABC".to_string(),
            hora: "10:30:00".to_string(),
            delivered: false,
        });
        assert_eq!(flow.phase, Phase::Acknowledged);
        assert!(flow.last_submission.is_some());
        assert_eq!(flow.slot, None);
        assert!(flow.submit_error.is_none());
    }

    #[test]
    fn politica_surface_conserva_el_codigo_y_pulsa_error() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Surface);
        flow.apply(ScanEvent::CodeDetected("ABC".to_string()));
        flow.apply(ScanEvent::ShutterPressed);

        let efectos = flow.apply(ScanEvent::SubmissionSettled {
            codigo: "ABC".to_string(),
            hora: "10:30:00".to_string(),
            delivered: false,
        });
        assert_eq!(efectos, vec![ScanEffect::Pulse(FeedbackKind::Error)]);
        assert_eq!(flow.phase, Phase::Idle);
        assert!(flow.last_submission.is_none());
        // El slot queda para poder re-disparar (ojo: un decode posterior
        // puede haberlo sobreescrito, eso es lo esperado)
        assert_eq!(flow.slot.as_deref(), Some("ABC"));
        assert!(flow.submit_error.is_some());
    }

    #[test]
    fn escenario_completo_abc123() {
        let mut flow = flujo_activo(SubmitFailurePolicy::Silent);

        flow.apply(ScanEvent::CodeDetected("ABC123".to_string()));
        let efectos = flow.apply(ScanEvent::ShutterPressed);
        assert!(efectos.contains(&ScanEffect::Submit("ABC123".to_string())));

        flow.apply(settle_ok("ABC123"));
        let record = flow.last_submission.clone().unwrap();
        assert_eq!(record.codigo, "ABC123");
        assert_eq!(flow.slot, None);

        flow.apply(ScanEvent::AckExpired { id: record.id });
        assert!(flow.last_submission.is_none());
        assert_eq!(flow.phase, Phase::Idle);
    }
}
