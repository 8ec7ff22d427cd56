use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::model::SKILLS;

#[derive(Properties, PartialEq, Clone)]
pub struct SkillCardsProps {
    /// Index of the expanded card, if any. At most one card is expanded;
    /// the transition lives in [`crate::model::toggle_expanded`].
    pub expanded: Option<usize>,
    pub on_toggle: Callback<usize>,
}

#[function_component(SkillCards)]
pub fn skill_cards(props: &SkillCardsProps) -> Html {
    html! {
        <section id="skills" class="reveal" style="padding:48px 24px;">
            <h2>{"Competências"}</h2>
            <div style="display:flex; gap:16px; flex-wrap:wrap;">
            { for SKILLS.iter().enumerate().map(|(i, skill)| {
                let active = props.expanded == Some(i);
                let click_cb = {
                    let cb = props.on_toggle.clone();
                    Callback::from(move |_| cb.emit(i))
                };
                let key_cb = {
                    let cb = props.on_toggle.clone();
                    Callback::from(move |e: KeyboardEvent| {
                        if e.key() == "Enter" || e.key() == " " {
                            cb.emit(i);
                        }
                    })
                };
                html! {
                    <div
                        class={classes!("skill-card", active.then_some("active"))}
                        role="button"
                        tabindex="0"
                        aria-expanded={if active { "true" } else { "false" }}
                        onclick={click_cb}
                        onkeypress={key_cb}
                        style="background:#161b22; border:1px solid #30363d; border-radius:10px; padding:16px; min-width:220px; flex:1; cursor:pointer;"
                    >
                        <h3 style="margin:0 0 6px 0;">{skill.name}</h3>
                        <p style="margin:0; opacity:0.8;">{skill.summary}</p>
                        <div
                            class="skill-details"
                            aria-hidden={if active { "false" } else { "true" }}
                            style={if active { "display:block; margin-top:10px;" } else { "display:none;" }}
                        >
                            <ul style="margin:0; padding-left:18px;">
                                { for skill.details.iter().map(|d| html! { <li>{*d}</li> }) }
                            </ul>
                        </div>
                    </div>
                }
            }) }
            </div>
        </section>
    }
}
