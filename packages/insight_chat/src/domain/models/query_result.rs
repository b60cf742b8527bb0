use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

use super::row::Row;

/// The presentation the backend intends for a result. On the wire this is
/// an open string; anything this client does not recognize maps to
/// `Unknown`, which the selector renders as a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualizationHint {
    BarChart,
    LineChart,
    #[default]
    Table,
    Kpi,
    PieChart,
    Error,
    Unknown,
}

impl VisualizationHint {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "BAR_CHART" => VisualizationHint::BarChart,
            "LINE_CHART" => VisualizationHint::LineChart,
            "TABLE" => VisualizationHint::Table,
            "KPI" => VisualizationHint::Kpi,
            "PIE_CHART" => VisualizationHint::PieChart,
            "ERROR" => VisualizationHint::Error,
            _ => VisualizationHint::Unknown,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            VisualizationHint::BarChart => "BAR_CHART",
            VisualizationHint::LineChart => "LINE_CHART",
            VisualizationHint::Table => "TABLE",
            VisualizationHint::Kpi => "KPI",
            VisualizationHint::PieChart => "PIE_CHART",
            VisualizationHint::Error => "ERROR",
            VisualizationHint::Unknown => "UNKNOWN",
        }
    }
}

impl Serialize for VisualizationHint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for VisualizationHint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(VisualizationHint::from_tag(&tag))
    }
}

/// One complete answer from the analytics backend: the echoed question, the
/// generated SQL, the computed rows and the intended presentation. Built
/// exactly once per request (success or failure) and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub query: String,
    #[serde(rename = "sql", default)]
    pub generated_query: String,
    #[serde(rename = "data", default)]
    pub rows: Vec<Row>,
    #[serde(rename = "visualizationHint", default)]
    pub visualization_hint: VisualizationHint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl QueryResult {
    /// A result for a non-success backend response, carrying the message the
    /// backend reported (or one synthesized from the HTTP status).
    pub fn backend_error(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            generated_query: "Error generating SQL.".to_string(),
            rows: Vec::new(),
            visualization_hint: VisualizationHint::Error,
            error: Some(message.into()),
            title: Some("Erro".to_string()),
            description: None,
        }
    }

    /// A result for a transport-level failure: backend unreachable or the
    /// response body unparseable.
    pub fn connection_error(query: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            generated_query: "Error connecting to backend.".to_string(),
            rows: Vec::new(),
            visualization_hint: VisualizationHint::Error,
            error: Some(format!("Detalhes: {}", detail.into())),
            title: Some("Erro de Conexão".to_string()),
            description: Some(
                "Não foi possível conectar ao serviço de análise. \
                 Verifique se o backend está rodando."
                    .to_string(),
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.visualization_hint, VisualizationHint::Error)
    }
}
