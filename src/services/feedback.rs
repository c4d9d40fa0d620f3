// ============================================================================
// FEEDBACK - Pulsos de vibración o tono según configuración
// ============================================================================
// Fire-and-forget hacia la plataforma: navigator.vibrate o WebAudio.
// El dispositivo del almacén no siempre vibra (tablets), de ahí el modo beep.
// ============================================================================

use wasm_bindgen::{JsCast, JsValue};

use crate::models::FeedbackKind;

/// Mecanismo de feedback elegido por FEEDBACK_MODE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMode {
    Vibrate,
    Beep,
}

impl FeedbackMode {
    pub fn from_str(s: &str) -> Self {
        match s {
            "beep" => FeedbackMode::Beep,
            _ => FeedbackMode::Vibrate,
        }
    }
}

/// Patrón de vibración en milisegundos (on/off alternados)
pub fn vibration_pattern(kind: FeedbackKind) -> &'static [u32] {
    match kind {
        FeedbackKind::Success => &[100, 50, 100],
        FeedbackKind::Empty => &[50, 50, 50],
        FeedbackKind::Error => &[300],
    }
}

/// Parámetros del tono sintetizado: (frecuencia Hz, duración ms)
pub fn tone_params(kind: FeedbackKind) -> (f32, f64) {
    match kind {
        FeedbackKind::Success => (880.0, 150.0),
        FeedbackKind::Empty => (330.0, 120.0),
        FeedbackKind::Error => (150.0, 300.0),
    }
}

/// Emite el pulso de feedback. Sin valor de retorno: si la plataforma no
/// soporta el mecanismo, el pulso simplemente no ocurre.
pub fn pulse(mode: FeedbackMode, kind: FeedbackKind) {
    match mode {
        FeedbackMode::Vibrate => vibrate(vibration_pattern(kind)),
        FeedbackMode::Beep => {
            let (freq, dur) = tone_params(kind);
            if let Err(e) = beep(freq, dur) {
                log::warn!("⚠️ No se pudo emitir el tono: {:?}", e);
            }
        }
    }
}

/// navigator.vibrate con detección de soporte: en desktop la API no existe
fn vibrate(pattern: &[u32]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();

    let vibrate_fn = match js_sys::Reflect::get(navigator.as_ref(), &JsValue::from_str("vibrate"))
    {
        Ok(v) => v,
        Err(_) => return,
    };
    let Some(vibrate_fn) = vibrate_fn.dyn_ref::<js_sys::Function>() else {
        // Navegador sin API de vibración (desktop)
        return;
    };

    let arr = js_sys::Array::new();
    for ms in pattern {
        arr.push(&JsValue::from_f64(f64::from(*ms)));
    }
    if vibrate_fn.call1(navigator.as_ref(), &arr).is_err() {
        log::warn!("⚠️ navigator.vibrate falló");
    }
}

/// Onda cuadrada con caída exponencial de amplitud, sintetizada con WebAudio
fn beep(frequency: f32, duration_ms: f64) -> Result<(), JsValue> {
    let ctx = web_sys::AudioContext::new()?;
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;

    oscillator.set_type(web_sys::OscillatorType::Square);
    oscillator.frequency().set_value(frequency);

    let now = ctx.current_time();
    let end = now + duration_ms / 1000.0;
    gain.gain().set_value(0.4);
    // La rampa exponencial no admite 0.0 exacto
    gain.gain().exponential_ramp_to_value_at_time(0.0001, end)?;

    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    oscillator.start()?;
    oscillator.stop_with_when(end)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cada_pulso_tiene_patron_distinto() {
        assert_ne!(
            vibration_pattern(FeedbackKind::Success),
            vibration_pattern(FeedbackKind::Empty)
        );
        assert_ne!(
            tone_params(FeedbackKind::Success),
            tone_params(FeedbackKind::Empty)
        );
    }

    #[test]
    fn los_patrones_de_vibracion_de_la_pistola() {
        assert_eq!(vibration_pattern(FeedbackKind::Success), &[100, 50, 100]);
        assert_eq!(vibration_pattern(FeedbackKind::Empty), &[50, 50, 50]);
    }

    #[test]
    fn modo_desde_configuracion() {
        assert_eq!(FeedbackMode::from_str("beep"), FeedbackMode::Beep);
        assert_eq!(FeedbackMode::from_str("vibrate"), FeedbackMode::Vibrate);
        // Valor desconocido cae en vibración
        assert_eq!(FeedbackMode::from_str("???"), FeedbackMode::Vibrate);
    }
}
