use serde::{Deserialize, Serialize};
use std::fmt;

/// Response of `/competitions/{comp_id}/events`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CompetitionEvents {
    #[serde(rename = "Sports", default)]
    pub sports: Vec<SportEvents>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SportEvents {
    #[serde(rename = "DisciplineList", default)]
    pub discipline_list: Vec<DisciplineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplineEntry {
    #[serde(rename = "DisciplineName")]
    pub discipline_name: String,
    #[serde(rename = "Id")]
    pub id: ApiId,
}

/// Identifier that the API serves either as a string or as a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ApiId {
    Text(String),
    Number(i64),
}

impl fmt::Display for ApiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiId::Text(s) => f.write_str(s),
            ApiId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A discipline held at a competition, e.g. "Women 50m Freestyle".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discipline {
    pub name: String,
    pub id: String,
}

impl From<DisciplineEntry> for Discipline {
    fn from(entry: DisciplineEntry) -> Self {
        Self {
            name: entry.discipline_name,
            id: entry.id.to_string(),
        }
    }
}

/// Returns the id of the discipline called `name`.
/// When a name occurs more than once the last occurrence wins.
pub fn discipline_id_by_name<'a>(disciplines: &'a [Discipline], name: &str) -> Option<&'a str> {
    disciplines
        .iter()
        .rev()
        .find(|d| d.name == name)
        .map(|d| d.id.as_str())
}
