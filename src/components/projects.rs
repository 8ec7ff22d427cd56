use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::model::{self, FILTERS, Project};

#[derive(Properties, PartialEq, Clone)]
pub struct ProjectsProps {
    /// Active filter value; exactly one button renders as active.
    pub filter: String,
    pub on_filter: Callback<String>,
    pub on_open: Callback<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let open_cb = {
        let on_open = props.on_open.clone();
        Callback::from(move |e: MouseEvent| {
            // The record is re-read from the card's data attribute on every
            // open; a bad attribute degrades to an empty record.
            let card = e
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".project-card").ok().flatten());
            let Some(card) = card else { return };
            let raw = card.get_attribute("data-project").unwrap_or_default();
            on_open.emit(model::parse_project(&raw));
        })
    };

    html! {
        <section id="projetos" class="reveal" style="padding:48px 24px;">
            <h2>{"Projetos"}</h2>
            <div class="filters" style="display:flex; gap:8px; margin-bottom:16px;">
            { for FILTERS.iter().map(|(value, label)| {
                let active = props.filter == *value;
                let cb = {
                    let on_filter = props.on_filter.clone();
                    let value = value.to_string();
                    Callback::from(move |_| on_filter.emit(value.clone()))
                };
                html! {
                    <button
                        class={classes!("filter", active.then_some("active"))}
                        data-filter={*value}
                        onclick={cb}
                    >
                        {*label}
                    </button>
                }
            }) }
            </div>
            <div id="projectsGrid" style="display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:16px;">
            { for model::portfolio_projects().into_iter().map(|project| {
                let visible = model::card_visible(&props.filter, &project.category);
                let raw = serde_json::to_string(&project).unwrap_or_default();
                let display = if visible { "" } else { " display:none;" };
                html! {
                    <article
                        class="project-card reveal"
                        key={project.title.clone()}
                        data-category={project.category.clone()}
                        data-project={raw}
                        style={format!("background:#161b22; border:1px solid #30363d; border-radius:10px; padding:16px;{display}")}
                    >
                        <h3 style="margin:0 0 6px 0;">{project.title.clone()}</h3>
                        <p style="margin:0 0 12px 0; opacity:0.8;">{project.desc.clone()}</p>
                        <button data-open="modal" onclick={open_cb.clone()}>{"Detalhes"}</button>
                    </article>
                }
            }) }
            </div>
        </section>
    }
}
