// ============================================================================
// APP - Página única del escáner
// ============================================================================

use web_sys::MouseEvent;
use yew::prelude::*;

use super::{ScannerArea, Shutter};
use crate::hooks::{use_backend_status, use_network_status, use_scan_flow, use_scanner};
use crate::models::CameraStatus;
use crate::state::ScanEvent;

#[function_component(App)]
pub fn app() -> Html {
    let scan = use_scan_flow();
    use_scanner(scan.dispatch.clone());
    let backend = use_backend_status();
    let is_online = use_network_status();

    let on_fire = {
        let dispatch = scan.dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.emit(ScanEvent::ShutterPressed);
        })
    };

    let flow = (*scan.flow).clone();
    let camera_active = flow.camera.is_active();

    let estado_texto = match &flow.camera {
        CameraStatus::Initializing => "Iniciando...",
        CameraStatus::Active => "Listo",
        CameraStatus::Failed(_) => "Sin cámara",
    };

    html! {
        <div class="scanner-container">
            // Header
            <header class="scanner-header">
                <div class="header-logo"></div>
                <h1>{"Scanner Pipos"}</h1>
                <div class="status-indicator">
                    <span class={classes!("status-dot", camera_active.then_some("active"))}></span>
                    {estado_texto}
                    {
                        if let Some(status) = &*backend.status {
                            html! {
                                <span class="pos-count">
                                    {format!("· POS: {}", status.connected_browsers)}
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </header>

            {
                if !*is_online {
                    html! { <div class="offline-banner">{"Sin conexión"}</div> }
                } else {
                    html! {}
                }
            }

            <ScannerArea
                detectado={flow.slot.clone()}
                ultimo_escaneo={flow.last_submission.clone()}
                error_camara={flow.camera.error_message().map(str::to_string)}
                error_envio={flow.submit_error.clone()}
            />

            <Shutter
                enabled={camera_active}
                ready={flow.slot.is_some()}
                on_fire={on_fire}
            />
        </div>
    }
}
