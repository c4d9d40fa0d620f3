use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::StatusResponse;
use crate::services::ApiClient;

pub struct UseBackendStatusHandle {
    /// None hasta la primera respuesta (o si el servidor no contesta)
    pub status: UseStateHandle<Option<StatusResponse>>,
}

/// Consulta GET /api/status al montar y luego cada STATUS_POLL_SECONDS,
/// para mostrar cuántos browsers del POS recibirán los disparos.
/// Un fallo solo se loguea: el escáner funciona igual sin este dato.
#[hook]
pub fn use_backend_status() -> UseBackendStatusHandle {
    let status = use_state(|| None::<StatusResponse>);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let status = status.clone();
        let interval_handle = interval_handle.clone();

        use_effect_with((), move |_| {
            let poll = {
                let status = status.clone();
                move || {
                    let status = status.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match ApiClient::new().status().await {
                            Ok(respuesta) => {
                                log::info!(
                                    "📡 Servidor {}, {} browser(s) conectados",
                                    respuesta.status,
                                    respuesta.connected_browsers
                                );
                                status.set(Some(respuesta));
                            }
                            Err(e) => {
                                log::warn!("⚠️ No se pudo consultar /api/status: {}", e);
                                status.set(None);
                            }
                        }
                    });
                }
            };

            poll();

            let interval_ms = CONFIG.status_poll_seconds * 1000;
            *interval_handle.borrow_mut() = Some(Interval::new(interval_ms, poll));

            move || {
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    UseBackendStatusHandle { status }
}
