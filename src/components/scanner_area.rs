use yew::prelude::*;

use crate::hooks::use_scanner::READER_CONTAINER_ID;
use crate::models::SubmissionRecord;

#[derive(Properties, PartialEq)]
pub struct ScannerAreaProps {
    /// Código detectado en tiempo real (slot de detección)
    pub detectado: Option<String>,
    /// Último escaneo confirmado, visible durante la ventana del banner
    pub ultimo_escaneo: Option<SubmissionRecord>,
    pub error_camara: Option<String>,
    pub error_envio: Option<String>,
}

/// Área del escáner: el viewport de la cámara con la guía, el código
/// detectado en vivo y el feedback del último envío
#[function_component(ScannerArea)]
pub fn scanner_area(props: &ScannerAreaProps) -> Html {
    html! {
        <div class="scanner-area">
            // html5-qrcode monta el <video> aquí
            <div id={READER_CONTAINER_ID}></div>

            {
                if let Some(codigo) = &props.detectado {
                    html! {
                        <div class="detected-code">
                            <span class="detected-label">{"Código detectado:"}</span>
                            <span class="detected-value">{codigo}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(escaneo) = &props.ultimo_escaneo {
                    html! {
                        <div class="scan-feedback">
                            <span class="check-icon">{"✓"}</span>
                            <span class="scan-code">{&escaneo.codigo}</span>
                            <span class="scan-time">{&escaneo.hora}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(error) = &props.error_camara {
                    html! { <div class="error-message">{error}</div> }
                } else {
                    html! {}
                }
            }

            {
                if let Some(error) = &props.error_envio {
                    html! { <div class="error-message submit-error">{error}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
