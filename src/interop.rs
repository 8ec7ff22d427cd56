//! Bindings to the JS libraries the host page ships (Chart.js and
//! tsParticles). Config objects are assembled as `serde_json` values and
//! crossed into JS through `JSON.parse`, so the shapes stay testable on the
//! native side.

use serde_json::{Value, json};
use wasm_bindgen::prelude::*;

use crate::model::Project;
use crate::state::ChartResource;
use crate::util::clog;

#[wasm_bindgen]
extern "C" {
    /// Chart.js instance. Must be destroyed before the reference is dropped,
    /// see [`ModalSession`](crate::state::ModalSession).
    pub type Chart;

    #[wasm_bindgen(constructor)]
    pub fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Chart;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);

    #[wasm_bindgen(js_namespace = tsParticles, js_name = load, catch)]
    fn ts_particles_load(id: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

impl ChartResource for Chart {
    fn destroy(&self) {
        Chart::destroy(self);
    }
}

/// Does the host page expose a global of this name?
pub fn has_global(name: &str) -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(w.as_ref(), &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

fn to_js(value: &Value) -> JsValue {
    js_sys::JSON::parse(&value.to_string()).unwrap_or(JsValue::UNDEFINED)
}

/// Start the particle background in `#bg-particles`. Fire-and-forget, and a
/// silent skip when the library is not on the page.
pub fn init_particles() {
    if !has_global("tsParticles") {
        clog("tsParticles not present; skipping background");
        return;
    }
    let _ = ts_particles_load("bg-particles", &to_js(&particles_options()));
}

pub fn particles_options() -> Value {
    json!({
        "fpsLimit": 60,
        "particles": {
            "number": { "value": 40, "density": { "enable": true, "area": 800 } },
            "color": { "value": ["#00d7ff", "#66f0ff"] },
            "shape": { "type": "circle" },
            "opacity": { "value": 0.08 },
            "size": { "value": { "min": 1, "max": 3 } },
            "links": {
                "enable": true,
                "distance": 120,
                "color": "#00d7ff",
                "opacity": 0.06,
                "width": 1
            },
            "move": { "enable": true, "speed": 0.8, "outModes": "bounce" }
        },
        "interactivity": {
            "events": {
                "onHover": { "enable": true, "mode": "repulse" },
                "onClick": { "enable": false }
            },
            "modes": { "repulse": { "distance": 100 } }
        },
        "detectRetina": true
    })
}

/// Decorative revenue preview in the hero section.
pub fn hero_chart(canvas: &web_sys::HtmlCanvasElement) -> Chart {
    Chart::new(canvas, &to_js(&hero_chart_config()))
}

pub fn hero_chart_config() -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun"],
            "datasets": [{
                "label": "Receita",
                "data": [65, 59, 80, 81, 56, 75],
                "borderColor": "#00d7ff",
                "backgroundColor": "rgba(0,215,255,0.08)",
                "tension": 0.35,
                "pointRadius": 3,
                "fill": true
            }]
        },
        "options": {
            "responsive": true,
            "plugins": { "legend": { "display": false } },
            "scales": {
                "x": { "grid": { "display": false } },
                "y": { "grid": { "color": "rgba(255,255,255,0.03)" } }
            }
        }
    })
}

/// Bar chart of a project's metric series for the showcase modal. An absent
/// series renders as an empty chart.
pub fn project_chart(canvas: &web_sys::HtmlCanvasElement, project: &Project) -> Chart {
    Chart::new(canvas, &to_js(&project_chart_config(project)))
}

pub fn project_chart_config(project: &Project) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": &project.labels,
            "datasets": [{
                "label": project.metric_label(),
                "data": &project.data,
                "backgroundColor": "rgba(0,215,255,0.12)",
                "borderColor": "#00d7ff"
            }]
        },
        "options": {
            "responsive": true,
            "plugins": { "legend": { "display": false } }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_options_match_embed_contract() {
        let opts = particles_options();
        assert_eq!(opts["particles"]["number"]["value"], 40);
        assert_eq!(opts["particles"]["move"]["outModes"], "bounce");
        assert_eq!(opts["interactivity"]["events"]["onHover"]["mode"], "repulse");
        assert_eq!(opts["interactivity"]["events"]["onClick"]["enable"], false);
        assert_eq!(opts["detectRetina"], true);
    }

    #[test]
    fn hero_chart_is_a_line_with_hidden_legend() {
        let cfg = hero_chart_config();
        assert_eq!(cfg["type"], "line");
        assert_eq!(cfg["data"]["labels"].as_array().unwrap().len(), 6);
        assert_eq!(cfg["options"]["plugins"]["legend"]["display"], false);
    }

    #[test]
    fn project_chart_uses_record_series() {
        let project = Project {
            title: "Painel".to_string(),
            labels: vec!["a".to_string(), "b".to_string()],
            data: vec![1.0, 2.0],
            ..Default::default()
        };
        let cfg = project_chart_config(&project);
        assert_eq!(cfg["type"], "bar");
        assert_eq!(cfg["data"]["labels"], serde_json::json!(["a", "b"]));
        assert_eq!(cfg["data"]["datasets"][0]["data"], serde_json::json!([1.0, 2.0]));
        assert_eq!(cfg["data"]["datasets"][0]["label"], "Painel");
    }

    #[test]
    fn empty_record_renders_an_empty_series() {
        let cfg = project_chart_config(&Project::default());
        assert_eq!(cfg["data"]["labels"], serde_json::json!([]));
        assert_eq!(cfg["data"]["datasets"][0]["data"], serde_json::json!([]));
        // the dataset label fallback is distinct from the modal title's
        assert_eq!(cfg["data"]["datasets"][0]["label"], "Métrica");
    }
}
