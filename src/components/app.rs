use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Window};
use yew::prelude::*;

use super::contact::Contact;
use super::hero::Hero;
use super::project_modal::ProjectModal;
use super::projects::Projects;
use super::skills::SkillCards;
use crate::interop;
use crate::model::{self, Project};
use crate::state::anim::{self, Counter, Scheduler};
use crate::util::query_all;

/// One reveal pass: every `.reveal` element whose top edge entered the
/// viewport band becomes active. Already-active elements keep the class, so
/// the transition is one-way.
fn reveal_pass(window: &Window, document: &Document) {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    for el in query_all(document, ".reveal") {
        let rect = el.get_bounding_client_rect();
        if anim::reveal_due(rect.top(), viewport_height) {
            let _ = el.class_list().add_1("active");
        }
    }
}

/// Collect every counter element with a positive `data-target` into one
/// scheduler bank and drive it with a single requestAnimationFrame loop. The
/// loop stops rescheduling once the bank drains.
fn start_counters(window: &Window, document: &Document) {
    let elements = query_all(document, ".counter, .metric .num");
    let mut bank: Scheduler<usize> = Scheduler::new();
    for (i, el) in elements.iter().enumerate() {
        let target = el
            .get_attribute("data-target")
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(0);
        let current = el
            .text_content()
            .and_then(|t| t.trim().parse::<u64>().ok())
            .unwrap_or(0);
        if let Some(counter) = Counter::new(current, target) {
            bank.start(i, counter);
        }
    }
    if bank.is_empty() {
        return;
    }
    let bank = Rc::new(RefCell::new(bank));
    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let bank = bank.clone();
        let closure_cell_clone = closure_cell.clone();
        let window_loop = window.clone();
        *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            bank.borrow_mut().tick(|i, value| {
                if let Some(el) = elements.get(*i) {
                    el.set_text_content(Some(&value.to_string()));
                }
            });
            if !bank.borrow().is_empty() {
                let _ = window_loop.request_animation_frame(
                    closure_cell_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }) as Box<dyn FnMut()>));
    }
    let _ = window.request_animation_frame(
        closure_cell.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
    );
}

#[function_component(App)]
pub fn app() -> Html {
    let expanded_skill = use_state(|| None::<usize>);
    let filter = use_state(|| model::FILTER_ALL.to_string());
    let active_project = use_state(|| None::<Project>);

    // Particle background; the host page has finished loading by the time
    // the module runs, and absence of the library is a silent skip.
    use_effect_with((), |_| {
        interop::init_particles();
        || ()
    });

    // Initial reveal/counter pass plus the continuous scroll-driven reveal.
    use_effect_with((), move |_| {
        let window = web_sys::window().expect("no global `window` exists");
        let document = window.document().expect("should have a document on window");
        reveal_pass(&window, &document);
        start_counters(&window, &document);
        let scroll_cb = {
            let window = window.clone();
            let document = document.clone();
            Closure::wrap(Box::new(move || {
                reveal_pass(&window, &document);
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref())
            .unwrap();
        move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", scroll_cb.as_ref().unchecked_ref());
            drop(scroll_cb);
        }
    });

    let on_toggle_skill = {
        let expanded_skill = expanded_skill.clone();
        Callback::from(move |index: usize| {
            expanded_skill.set(model::toggle_expanded(*expanded_skill, index));
        })
    };
    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |value: String| filter.set(value))
    };
    let on_open = {
        let active_project = active_project.clone();
        Callback::from(move |project: Project| active_project.set(Some(project)))
    };
    let on_close = {
        let active_project = active_project.clone();
        Callback::from(move |_| active_project.set(None))
    };

    html! {
        <div id="root">
            <div id="bg-particles" style="position:fixed; inset:0; z-index:-1;"></div>
            <Hero />
            <section id="impacto" class="reveal" style="padding:48px 24px;">
                <h2>{"Resultados"}</h2>
                <div style="display:flex; gap:32px; flex-wrap:wrap;">
                    <div>
                        <span class="counter" data-target="48" style="font-size:32px; font-weight:700;">{"0"}</span>
                        <p>{"Dashboards entregues"}</p>
                    </div>
                    <div>
                        <span class="counter" data-target="120" style="font-size:32px; font-weight:700;">{"0"}</span>
                        <p>{"Relatórios automatizados"}</p>
                    </div>
                    <div>
                        <span class="counter" data-target="8" style="font-size:32px; font-weight:700;">{"0"}</span>
                        <p>{"Anos de experiência"}</p>
                    </div>
                </div>
            </section>
            <SkillCards expanded={*expanded_skill} on_toggle={on_toggle_skill} />
            <Projects filter={(*filter).clone()} on_filter={on_filter} on_open={on_open} />
            <Contact />
            <ProjectModal project={(*active_project).clone()} on_close={on_close} />
        </div>
    }
}
