// ============================================================================
// USE SCANNER - Ciclo de vida de la sesión de cámara
// ============================================================================
// Una sesión por componente montado: arranca automáticamente al montar (un
// solo intento, sin retry) y libera la cámara incondicionalmente al
// desmontar. El decode continuo llega como eventos CodeDetected.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::state::ScanEvent;
use crate::utils::scanner_ffi::{init_qr_scanner, is_qr_scanner_running, stop_qr_scanner};

/// Id del contenedor donde html5-qrcode monta el <video>
pub const READER_CONTAINER_ID: &str = "reader";

#[hook]
pub fn use_scanner(dispatch: Callback<ScanEvent>) {
    use_effect_with((), move |_| {
        log::info!("📷 Inicializando scanner...");

        let on_decoded = {
            let dispatch = dispatch.clone();
            Closure::wrap(Box::new(move |texto: String| {
                dispatch.emit(ScanEvent::CodeDetected(texto));
            }) as Box<dyn FnMut(String)>)
        };

        let on_ready = {
            let dispatch = dispatch.clone();
            Closure::wrap(Box::new(move || {
                dispatch.emit(ScanEvent::CameraReady);
            }) as Box<dyn FnMut()>)
        };

        let on_error = {
            let dispatch = dispatch.clone();
            Closure::wrap(Box::new(move |err: String| {
                log::error!("❌ Error cámara: {}", err);
                dispatch.emit(ScanEvent::CameraFailed(
                    "No se pudo acceder a la cámara".to_string(),
                ));
            }) as Box<dyn FnMut(String)>)
        };

        let scanner = &CONFIG.scanner_config;
        init_qr_scanner(
            READER_CONTAINER_ID,
            &scanner.facing_mode,
            scanner.fps,
            scanner.qrbox_width,
            scanner.qrbox_height,
            on_decoded.as_ref().unchecked_ref(),
            on_ready.as_ref().unchecked_ref(),
            on_error.as_ref().unchecked_ref(),
        );

        // forget(): los callbacks tienen que seguir vivos mientras la
        // librería decodifica; el componente se monta una sola vez
        on_decoded.forget();
        on_ready.forget();
        on_error.forget();

        // La cámara se libera en todos los caminos de salida; los errores
        // del stop no se propagan (los traga el glue JS)
        move || {
            if is_qr_scanner_running() {
                log::info!("📷 Liberando cámara");
                stop_qr_scanner();
            }
        }
    });
}
