use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ShutterProps {
    /// false mientras la cámara no está activa: el botón queda deshabilitado
    pub enabled: bool,
    /// true cuando hay un código en el slot (cambia el estilo del botón)
    pub ready: bool,
    pub on_fire: Callback<MouseEvent>,
}

/// Botón de disparo tipo cámara
#[function_component(Shutter)]
pub fn shutter(props: &ShutterProps) -> Html {
    html! {
        <div class="shutter-container">
            <button
                class={classes!("shutter-button", props.ready.then_some("ready"))}
                onclick={props.on_fire.clone()}
                disabled={!props.enabled}
            >
                <span class="shutter-inner"></span>
            </button>
            <p class="shutter-hint">
                {
                    if props.ready {
                        "¡Toca para enviar!"
                    } else {
                        "Apunta a un código"
                    }
                }
            </p>
        </div>
    }
}
