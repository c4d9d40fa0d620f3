// ============================================================================
// QR SCANNER FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers para las funciones JS que envuelven html5-qrcode - Sin estado,
// sin lógica (ver assets/scanner.js)
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Crea la sesión de cámara sobre el contenedor y arranca el decode
    /// continuo. `on_decoded` se invoca por cada frame decodificado (hasta
    /// `fps` veces por segundo); `on_ready` una vez cuando la cámara queda
    /// activa; `on_error` una vez si el arranque falla (permiso denegado,
    /// sin cámara).
    #[wasm_bindgen(js_name = initQrScanner)]
    pub fn init_qr_scanner(
        container_id: &str,
        facing_mode: &str,
        fps: u32,
        qrbox_width: u32,
        qrbox_height: u32,
        on_decoded: &js_sys::Function,
        on_ready: &js_sys::Function,
        on_error: &js_sys::Function,
    );

    /// Libera la cámara. Seguro de llamar aunque no haya sesión activa.
    #[wasm_bindgen(js_name = stopQrScanner)]
    pub fn stop_qr_scanner();

    #[wasm_bindgen(js_name = isQrScannerRunning)]
    pub fn is_qr_scanner_running() -> bool;
}
