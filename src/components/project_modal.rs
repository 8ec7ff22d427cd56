use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use crate::interop::{self, Chart};
use crate::model::Project;
use crate::state::ModalSession;

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectModalProps {
    /// The project being showcased; `None` renders the dialog hidden.
    pub project: Option<Project>,
    pub on_close: Callback<()>,
}

fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.style().set_property("overflow", value);
    }
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(ModalSession::<Chart>::new);

    // Open/close transitions. The session destroys any previous chart before
    // storing the next one, and page scroll stays locked while open.
    {
        let session = session.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.project.clone(), move |project| {
            match project {
                Some(p) => {
                    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                        session.borrow_mut().open_with(interop::project_chart(&canvas, p));
                    }
                    set_body_overflow("hidden");
                }
                None => {
                    session.borrow_mut().close();
                    set_body_overflow("");
                }
            }
            || ()
        });
    }
    // Release the chart if the dialog unmounts while open.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            move || {
                session.borrow_mut().close();
                set_body_overflow("");
            }
        });
    }

    let open = props.project.is_some();
    let project = props.project.clone().unwrap_or_default();

    let backdrop_cb = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // only a click on the backdrop itself closes, never a descendant
            let on_backdrop = match (e.target(), e.current_target()) {
                (Some(t), Some(c)) => JsValue::from(t) == JsValue::from(c),
                _ => false,
            };
            if on_backdrop {
                on_close.emit(());
            }
        })
    };
    let close_cb = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let backdrop_style = if open {
        "display:flex; position:fixed; inset:0; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:50;"
    } else {
        "display:none;"
    };

    html! {
        <div
            id="projectModal"
            class="modal"
            aria-hidden={if open { "false" } else { "true" }}
            onclick={backdrop_cb}
            style={backdrop_style}
        >
            <div class="modal-content" style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 24px; max-width:560px; width:92%;">
                <button class="modal-close" onclick={close_cb} style="float:right;">{"×"}</button>
                <h3 id="modalTitle" style="margin:0 0 8px 0;">{project.display_title().to_string()}</h3>
                <p id="modalDesc" style="margin:0 0 14px 0; opacity:0.85;">{project.desc.clone()}</p>
                <canvas id="modalChart" ref={canvas_ref} width="480" height="260"></canvas>
                <div style="display:flex; gap:12px; margin-top:14px;">
                    <a id="modalDemo" href={project.demo_href().to_string()} target="_blank" rel="noreferrer">{"Ver demo"}</a>
                    <a id="modalRepo" href={project.repo_href().to_string()} target="_blank" rel="noreferrer">{"Repositório"}</a>
                </div>
            </div>
        </div>
    }
}
