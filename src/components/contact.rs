use wasm_bindgen::JsValue;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::model::{CONTACT_EMAIL, ContactMessage};

#[function_component(Contact)]
pub fn contact() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    // Submission composes a mailto URI and hands the message to the user's
    // mail client; nothing is transmitted from here.
    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .unwrap_or_default();
            let msg = ContactMessage::new(&name, &email, &message);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&msg.mailto_uri(CONTACT_EMAIL));
            }
        })
    };

    let copy_mail = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let navigator = window.navigator();
            // fire-and-forget; clipboard failure is not surfaced
            if js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("clipboard"))
                .unwrap_or(false)
            {
                let _ = navigator.clipboard().write_text(CONTACT_EMAIL);
            }
            let _ = window.alert_with_message("Email copiado para a área de transferência.");
        }
    });

    html! {
        <section id="contato" class="reveal" style="padding:48px 24px;">
            <h2>{"Contato"}</h2>
            <form id="contactForm" {onsubmit} style="display:flex; flex-direction:column; gap:10px; max-width:420px;">
                <input id="cfName" ref={name_ref} type="text" placeholder="Seu nome" />
                <input id="cfEmail" ref={email_ref} type="email" placeholder="Seu email" />
                <textarea id="cfMessage" ref={message_ref} rows="5" placeholder="Sua mensagem"></textarea>
                <button type="submit">{"Enviar"}</button>
            </form>
            <div style="display:flex; gap:12px; margin-top:16px; align-items:center;">
                <button id="btnCopyMail" onclick={copy_mail}>{"Copiar email"}</button>
                // the quick button keeps the anchor's default mailto navigation
                <a id="contactMailBtn" href={format!("mailto:{CONTACT_EMAIL}")}>{"Abrir no email"}</a>
            </div>
        </section>
    }
}
