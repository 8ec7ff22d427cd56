//! Data model for the portfolio page: the project record embedded in each
//! card, the static site content, and the pure state transitions the
//! components render from.

use serde::{Deserialize, Serialize};

/// Address the contact form hands off to and the copy button copies.
pub const CONTACT_EMAIL: &str = "seuemail@email.com";

/// Sentinel value of the filter button that shows every project card.
pub const FILTER_ALL: &str = "all";

/// One project, serialized into the card's `data-project` attribute and
/// parsed back out of the DOM when the modal opens. Field names match the
/// embedded JSON keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub desc: String,
    pub demo: String,
    pub repo: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub category: String,
}

impl Project {
    /// Modal heading; placeholder when the record carried no title.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { "Projeto" } else { &self.title }
    }

    /// Dataset label for the modal chart; an untitled record is labelled as
    /// a generic metric, not as a project.
    pub fn metric_label(&self) -> &str {
        if self.title.is_empty() { "Métrica" } else { &self.title }
    }

    /// Outbound link targets degrade to a no-op anchor.
    pub fn demo_href(&self) -> &str {
        if self.demo.is_empty() { "#" } else { &self.demo }
    }

    pub fn repo_href(&self) -> &str {
        if self.repo.is_empty() { "#" } else { &self.repo }
    }
}

/// Parse a card's embedded record. Malformed or absent data falls back to an
/// empty record; the modal never surfaces a parse error.
pub fn parse_project(raw: &str) -> Project {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Accordion transition for the skill cards: activating a card collapses all
/// others, activating the expanded card collapses it.
pub fn toggle_expanded(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) { None } else { Some(clicked) }
}

/// Filter predicate: a card is visible when the "all" sentinel is selected or
/// its category matches the active filter.
pub fn card_visible(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || category == filter
}

/// Trimmed contact form fields, ready for mail handoff.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Compose the `mailto:` URI the browser is redirected to. Transport is
    /// entirely the mail client's concern.
    pub fn mailto_uri(&self, to: &str) -> String {
        let subject = encode_uri_component(&format!("Contato do site: {}", self.name));
        let body = encode_uri_component(&format!(
            "Nome: {}\nEmail: {}\n\nMensagem:\n{}",
            self.name, self.email, self.message
        ));
        format!("mailto:{to}?subject={subject}&body={body}")
    }
}

/// Percent-encoding with the same unreserved set as JS `encodeURIComponent`
/// (RFC 2396 mark characters stay literal); everything else is escaped
/// byte-wise over the UTF-8 form.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'!' | b'~'
            | b'*' | b'\'' | b'(' | b')' => out.push(*b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// One expandable skill card.
pub struct Skill {
    pub name: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Power BI & DAX",
        summary: "Dashboards executivos e modelos tabulares",
        details: &[
            "Medidas DAX para análise temporal e cohort",
            "Row-level security e publicação em workspaces",
            "Dataflows e gateways de atualização",
        ],
    },
    Skill {
        name: "SQL & Modelagem",
        summary: "Consultas analíticas e modelagem dimensional",
        details: &[
            "Star schema e slowly changing dimensions",
            "Window functions e CTEs para KPIs",
            "Tuning de consultas em bases colunares",
        ],
    },
    Skill {
        name: "Python para Dados",
        summary: "Automação de pipelines e análise exploratória",
        details: &[
            "pandas e notebooks para EDA",
            "Rotinas de ETL agendadas",
            "Integração com APIs de fontes externas",
        ],
    },
    Skill {
        name: "Data Storytelling",
        summary: "Comunicação de insights para decisão",
        details: &[
            "Narrativa orientada a métricas de negócio",
            "Hierarquia visual e escolha de gráficos",
            "Apresentações para stakeholders executivos",
        ],
    },
];

/// Filter buttons rendered above the project grid: (value, label).
pub const FILTERS: &[(&str, &str)] = &[
    (FILTER_ALL, "Todos"),
    ("dashboard", "Dashboards"),
    ("analise", "Análises"),
    ("automacao", "Automação"),
];

/// The showcased projects. Each is serialized into its card at render time
/// and parsed back from the DOM when its modal opens.
pub fn portfolio_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Painel Comercial".to_string(),
            desc: "Dashboard de vendas com metas, funil e análise regional, \
                   atualizado diariamente a partir do ERP."
                .to_string(),
            demo: "https://example.com/painel-comercial".to_string(),
            repo: "https://github.com/example/painel-comercial".to_string(),
            labels: ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data: vec![42.0, 55.0, 61.0, 58.0, 70.0, 76.0],
            category: "dashboard".to_string(),
        },
        Project {
            title: "Análise de Churn".to_string(),
            desc: "Estudo de retenção de clientes com segmentação por coorte \
                   e score de propensão ao cancelamento."
                .to_string(),
            demo: "https://example.com/churn".to_string(),
            repo: "https://github.com/example/churn-analysis".to_string(),
            labels: ["Q1", "Q2", "Q3", "Q4"].iter().map(|s| s.to_string()).collect(),
            data: vec![12.0, 9.5, 8.2, 6.8],
            category: "analise".to_string(),
        },
        Project {
            title: "ETL de Indicadores".to_string(),
            desc: "Pipeline automatizado que consolida planilhas e APIs em um \
                   data mart único para os dashboards."
                .to_string(),
            demo: "https://example.com/etl".to_string(),
            repo: "https://github.com/example/etl-indicadores".to_string(),
            labels: ["Seg", "Ter", "Qua", "Qui", "Sex"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data: vec![130.0, 110.0, 142.0, 128.0, 150.0],
            category: "automacao".to_string(),
        },
        Project {
            title: "Painel Financeiro".to_string(),
            desc: "Visão de fluxo de caixa, DRE gerencial e projeções com \
                   cenários otimista e conservador."
                .to_string(),
            demo: "https://example.com/financeiro".to_string(),
            repo: "https://github.com/example/painel-financeiro".to_string(),
            labels: ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            data: vec![88.0, 92.0, 85.0, 97.0, 104.0, 101.0],
            category: "dashboard".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_project_reads_full_record() {
        let raw = r#"{"title":"X","desc":"d","demo":"https://a","repo":"https://b","labels":["a","b"],"data":[1.0,2.0],"category":"dashboard"}"#;
        let p = parse_project(raw);
        assert_eq!(p.title, "X");
        assert_eq!(p.labels, vec!["a", "b"]);
        assert_eq!(p.data, vec![1.0, 2.0]);
        assert_eq!(p.category, "dashboard");
    }

    #[test]
    fn parse_project_falls_back_on_malformed_data() {
        for raw in ["", "not json", "{\"title\":", "[]"] {
            let p = parse_project(raw);
            assert_eq!(p, Project::default(), "input {:?}", raw);
        }
    }

    #[test]
    fn parse_project_defaults_missing_fields() {
        let p = parse_project(r#"{"title":"Só título"}"#);
        assert_eq!(p.title, "Só título");
        assert!(p.labels.is_empty());
        assert!(p.data.is_empty());
        assert_eq!(p.demo_href(), "#");
        assert_eq!(p.repo_href(), "#");
    }

    #[test]
    fn display_title_placeholder_when_empty() {
        assert_eq!(Project::default().display_title(), "Projeto");
    }

    #[test]
    fn metric_label_falls_back_separately_from_title() {
        let untitled = Project::default();
        assert_eq!(untitled.metric_label(), "Métrica");
        let titled = Project { title: "Painel".to_string(), ..Default::default() };
        assert_eq!(titled.metric_label(), "Painel");
    }

    #[test]
    fn accordion_collapses_reactivated_card() {
        let mut state = None;
        for clicked in [0usize, 2, 2, 1, 0, 0] {
            state = toggle_expanded(state, clicked);
        }
        assert_eq!(state, None);
    }

    #[test]
    fn accordion_switches_between_cards() {
        assert_eq!(toggle_expanded(None, 1), Some(1));
        assert_eq!(toggle_expanded(Some(1), 3), Some(3));
        assert_eq!(toggle_expanded(Some(3), 3), None);
    }

    #[test]
    fn filter_truth_table() {
        assert!(card_visible("all", "dashboard"));
        assert!(card_visible("all", "analise"));
        assert!(card_visible("dashboard", "dashboard"));
        assert!(!card_visible("dashboard", "analise"));
        assert!(!card_visible("automacao", "dashboard"));
    }

    #[test]
    fn encode_matches_encode_uri_component_semantics() {
        assert_eq!(encode_uri_component("abc-_.!~*'()"), "abc-_.!~*'()");
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("Olá"), "Ol%C3%A1");
        assert_eq!(encode_uri_component("a\nb"), "a%0Ab");
        assert_eq!(encode_uri_component("x=y&z"), "x%3Dy%26z");
    }

    #[test]
    fn mailto_uri_composes_subject_and_body() {
        let msg = ContactMessage::new("Ana", "ana@x.com", "Olá");
        let uri = msg.mailto_uri(CONTACT_EMAIL);
        assert_eq!(
            uri,
            "mailto:seuemail@email.com?subject=Contato%20do%20site%3A%20Ana\
             &body=Nome%3A%20Ana%0AEmail%3A%20ana%40x.com%0A%0AMensagem%3A%0AOl%C3%A1"
        );
    }

    #[test]
    fn contact_message_trims_fields() {
        let msg = ContactMessage::new("  Ana ", " ana@x.com\n", "  Olá  ");
        assert_eq!(msg.name, "Ana");
        assert_eq!(msg.email, "ana@x.com");
        assert_eq!(msg.message, "Olá");
    }

    #[test]
    fn projects_have_complete_records() {
        for p in portfolio_projects() {
            assert!(!p.title.is_empty());
            assert!(!p.category.is_empty());
            assert_eq!(p.labels.len(), p.data.len(), "series lengths for {}", p.title);
            assert!(FILTERS.iter().any(|(v, _)| *v == p.category));
            // every card round-trips through its data attribute
            let raw = serde_json::to_string(&p).unwrap();
            assert_eq!(parse_project(&raw), p);
        }
    }
}
