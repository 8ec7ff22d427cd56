use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::interop::{self, Chart};
use crate::state::Typewriter;
use crate::state::anim::TYPING_DELAY_MS;

const HEADLINE: &str = "Especialista em BI, Visualização de Dados e Estratégia Analítica";

#[function_component(Hero)]
pub fn hero() -> Html {
    let typing_ref = use_node_ref();
    let chart_canvas_ref = use_node_ref();
    let hero_chart = use_mut_ref(|| None::<Chart>);

    // Typing effect: a chained timeout appends one character per step and
    // stops scheduling once the headline is exhausted.
    {
        let typing_ref = typing_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let timeout_id = Rc::new(RefCell::new(None::<i32>));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            if let Some(el) = typing_ref.cast::<HtmlElement>() {
                let writer = Rc::new(RefCell::new(Typewriter::new(HEADLINE)));
                let closure_cell_clone = closure_cell.clone();
                let timeout_id_step = timeout_id.clone();
                let window_step = window.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    let mut writer = writer.borrow_mut();
                    if let Some(ch) = writer.step() {
                        let mut text = el.text_content().unwrap_or_default();
                        text.push(ch);
                        el.set_text_content(Some(&text));
                    }
                    if !writer.is_done() {
                        if let Ok(id) = window_step
                            .set_timeout_with_callback_and_timeout_and_arguments_0(
                                closure_cell_clone
                                    .borrow()
                                    .as_ref()
                                    .unwrap()
                                    .as_ref()
                                    .unchecked_ref(),
                                TYPING_DELAY_MS,
                            )
                        {
                            *timeout_id_step.borrow_mut() = Some(id);
                        }
                    }
                }) as Box<dyn FnMut()>));
                if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    closure_cell.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    TYPING_DELAY_MS,
                ) {
                    *timeout_id.borrow_mut() = Some(id);
                }
            }
            move || {
                if let Some(id) = timeout_id.borrow_mut().take() {
                    window.clear_timeout_with_handle(id);
                }
                drop(closure_cell);
            }
        });
    }

    // Decorative revenue preview, released if the hero ever unmounts.
    {
        let chart_canvas_ref = chart_canvas_ref.clone();
        let hero_chart = hero_chart.clone();
        use_effect_with((), move |_| {
            if let Some(canvas) = chart_canvas_ref.cast::<HtmlCanvasElement>() {
                *hero_chart.borrow_mut() = Some(interop::hero_chart(&canvas));
            }
            move || {
                if let Some(chart) = hero_chart.borrow_mut().take() {
                    chart.destroy();
                }
            }
        });
    }

    html! {
        <section id="hero" style="padding:96px 24px 48px 24px; display:flex; gap:48px; flex-wrap:wrap; align-items:center;">
            <div style="flex:1; min-width:280px;">
                <h1 style="margin:0 0 8px 0;">{"Olá, eu sou analista de dados"}</h1>
                <p class="typing" ref={typing_ref} style="min-height:1.4em; color:#00d7ff;"></p>
                <div class="metrics" style="display:flex; gap:24px; margin-top:24px;">
                    <div class="metric">
                        <span class="num" data-target="96" style="font-size:24px; font-weight:700;">{"0"}</span>
                        <small style="display:block;">{"% de satisfação"}</small>
                    </div>
                    <div class="metric">
                        <span class="num" data-target="40" style="font-size:24px; font-weight:700;">{"0"}</span>
                        <small style="display:block;">{"clientes atendidos"}</small>
                    </div>
                </div>
            </div>
            <div style="flex:1; min-width:280px;">
                <canvas id="heroChart" ref={chart_canvas_ref} width="420" height="220"></canvas>
            </div>
        </section>
    }
}
