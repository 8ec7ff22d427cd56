use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// All elements matching a selector, as `HtmlElement`s. Missing targets are
/// simply absent from the result; nothing here can fail loudly.
pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn query_all_collects_matching_html_elements() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        for class in ["reveal", "reveal", "filters"] {
            let el = document.create_element("div").unwrap();
            el.set_class_name(class);
            body.append_child(&el).unwrap();
        }
        assert_eq!(query_all(&document, ".reveal").len(), 2);
        assert_eq!(query_all(&document, ".filters").len(), 1);
        assert!(query_all(&document, ".skill-card").is_empty());
    }

    #[wasm_bindgen_test]
    fn has_global_reflects_host_page_capabilities() {
        assert!(crate::interop::has_global("document"));
        // the bare test page ships neither embed library
        assert!(!crate::interop::has_global("tsParticles"));
        assert!(!crate::interop::has_global("Chart"));
    }
}
