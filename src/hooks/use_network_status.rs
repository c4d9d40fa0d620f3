// ============================================================================
// USE NETWORK STATUS - Conectividad del dispositivo (online/offline)
// ============================================================================
// Listeners con ámbito acotado: se registran al montar y se quitan al
// desmontar, para no acumular registros duplicados.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Event;
use yew::prelude::*;

#[hook]
pub fn use_network_status() -> UseStateHandle<bool> {
    let is_online = use_state(estado_inicial);

    {
        let is_online = is_online.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();

            let on_online = {
                let is_online = is_online.clone();
                Closure::wrap(Box::new(move |_: Event| {
                    log::info!("📶 Conexión recuperada");
                    is_online.set(true);
                }) as Box<dyn FnMut(Event)>)
            };
            let on_offline = {
                let is_online = is_online.clone();
                Closure::wrap(Box::new(move |_: Event| {
                    log::warn!("⚠️ Sin conexión");
                    is_online.set(false);
                }) as Box<dyn FnMut(Event)>)
            };

            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback(
                    "online",
                    on_online.as_ref().unchecked_ref(),
                );
                let _ = win.add_event_listener_with_callback(
                    "offline",
                    on_offline.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback(
                        "online",
                        on_online.as_ref().unchecked_ref(),
                    );
                    let _ = win.remove_event_listener_with_callback(
                        "offline",
                        on_offline.as_ref().unchecked_ref(),
                    );
                }
                drop(on_online);
                drop(on_offline);
            }
        });
    }

    is_online
}

/// navigator.onLine leído vía Reflect (no todos los contextos lo exponen)
fn estado_inicial() -> bool {
    web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("navigator")).ok())
        .and_then(|nav| js_sys::Reflect::get(&nav, &JsValue::from_str("onLine")).ok())
        .and_then(|v| v.as_bool())
        .unwrap_or(true)
}
