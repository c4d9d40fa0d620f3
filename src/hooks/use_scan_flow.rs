// ============================================================================
// USE SCAN FLOW - Hook que conecta la máquina de estados con el navegador
// ============================================================================
// El estado autoritativo vive en un Rc<RefCell<ScanFlow>> (siempre al día,
// aunque lleguen varios eventos entre renders); el use_state es solo el
// snapshot que dispara el re-render. Los efectos devueltos por cada
// transición se ejecutan aquí: pulso, POST y timer del banner.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::services::{feedback, ApiClient};
use crate::state::{ScanEffect, ScanEvent, ScanFlow};

pub struct UseScanFlowHandle {
    /// Snapshot del estado para renderizar
    pub flow: UseStateHandle<ScanFlow>,
    /// Punto de entrada único de eventos (decode, disparo, cámara, timers)
    pub dispatch: Callback<ScanEvent>,
}

#[hook]
pub fn use_scan_flow() -> UseScanFlowHandle {
    let flow_ref = use_mut_ref(|| ScanFlow::new(CONFIG.submit_failure_policy()));
    let snapshot = use_state(|| flow_ref.borrow().clone());

    let dispatch = {
        let flow_ref = flow_ref.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |event: ScanEvent| {
            dispatch_event(&flow_ref, &snapshot, event);
        })
    };

    UseScanFlowHandle {
        flow: snapshot,
        dispatch,
    }
}

fn dispatch_event(
    flow_ref: &Rc<RefCell<ScanFlow>>,
    snapshot: &UseStateHandle<ScanFlow>,
    event: ScanEvent,
) {
    // El borrow se suelta antes de ejecutar efectos: los efectos pueden
    // despachar eventos nuevos (asíncronos) sobre el mismo RefCell
    let effects = {
        let mut flow = flow_ref.borrow_mut();
        let effects = flow.apply(event);
        snapshot.set(flow.clone());
        effects
    };

    for effect in effects {
        run_effect(flow_ref, snapshot, effect);
    }
}

fn run_effect(
    flow_ref: &Rc<RefCell<ScanFlow>>,
    snapshot: &UseStateHandle<ScanFlow>,
    effect: ScanEffect,
) {
    match effect {
        // Síncrono: el operario siente el pulso antes de que salga el POST
        ScanEffect::Pulse(kind) => {
            let mode = feedback::FeedbackMode::from_str(&CONFIG.feedback_config.mode);
            feedback::pulse(mode, kind);
        }

        ScanEffect::Submit(codigo) => {
            let flow_ref = flow_ref.clone();
            let snapshot = snapshot.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let delivered = match ApiClient::new().submit_scan(&codigo).await {
                    Ok(()) => true,
                    Err(e) => {
                        log::error!("❌ Error disparando {}: {}", codigo, e);
                        false
                    }
                };
                dispatch_event(
                    &flow_ref,
                    &snapshot,
                    ScanEvent::SubmissionSettled {
                        codigo,
                        hora: hora_actual(),
                        delivered,
                    },
                );
            });
        }

        ScanEffect::ScheduleAckClear(id) => {
            let flow_ref = flow_ref.clone();
            let snapshot = snapshot.clone();
            // forget(): si un envío nuevo reemplaza el registro, el timer
            // viejo dispara con id obsoleto y la máquina lo descarta
            Timeout::new(CONFIG.ack_display_ms, move || {
                dispatch_event(&flow_ref, &snapshot, ScanEvent::AckExpired { id });
            })
            .forget();
        }
    }
}

/// Hora local formateada para el banner, como en el POS
fn hora_actual() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("es-ES")
        .into()
}
