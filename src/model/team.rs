use serde::{Deserialize, Serialize};

/// One team record as published in a per-team file (`teams/<id>.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTeam {
    pub id: String,
    pub attributes: TeamAttributes,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_name: Option<String>,
}

impl RawTeam {
    /// The raw team name, if the record carries a non-empty one.
    pub fn raw_name(&self) -> Option<&str> {
        self.attributes
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
    }
}
