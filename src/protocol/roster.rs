//! Roster input as delivered by the roster source.
//!
//! Only `id` and `weight_kg` matter to the engines; the rest is carried for
//! display. Weights arrive in whatever shape the source stored them: numbers,
//! numeric strings, `null`, or missing. Anything that is not a usable number
//! becomes 0.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::boat::athlete::{Athlete, AthleteId, Roster};

/// Errors raised while reading a roster document.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("malformed roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("roster entry {0} has an empty id")]
    EmptyId(usize),
}

/// One roster row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: AthleteId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, deserialize_with = "lenient_weight")]
    pub weight_kg: f64,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub preferred_side: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Surrounding whitespace is stripped from the id.
impl From<RosterEntry> for Athlete {
    fn from(entry: RosterEntry) -> Self {
        Athlete {
            id: AthleteId::from(entry.id.as_str().trim()),
            name: entry.full_name,
            weight_kg: entry.weight_kg,
            active: entry.is_active.unwrap_or(true),
        }
    }
}

fn lenient_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WeightInput {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let weight = match Option::<WeightInput>::deserialize(deserializer)? {
        Some(WeightInput::Number(w)) => w,
        Some(WeightInput::Text(raw)) => raw.trim().parse::<f64>().unwrap_or(0.0),
        Some(WeightInput::Other(_)) | None => 0.0,
    };
    Ok(if weight.is_finite() { weight } else { 0.0 })
}

/// Parses a JSON array of roster entries into a [`Roster`].
pub fn parse_roster(json: &str) -> Result<Roster, RosterError> {
    let entries: Vec<RosterEntry> = serde_json::from_str(json)?;
    if let Some(i) = entries.iter().position(|e| e.id.as_str().trim().is_empty()) {
        return Err(RosterError::EmptyId(i));
    }
    Ok(Roster::new(entries.into_iter().map(Athlete::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_entry() {
        let roster = parse_roster(
            r#"[{"id":"a1","full_name":"Ana","weight_kg":61.5,"gender":"F","preferred_side":"left","is_active":true}]"#,
        )
        .unwrap();
        let a = roster.get("a1").unwrap();
        assert_eq!(a.name, "Ana");
        assert_eq!(a.weight_kg, 61.5);
        assert!(a.active);
    }

    #[test]
    fn weight_coercion() {
        let roster = parse_roster(
            r#"[
                {"id":"num","weight_kg":70},
                {"id":"str","weight_kg":" 82.5 "},
                {"id":"bad","weight_kg":"heavy"},
                {"id":"nul","weight_kg":null},
                {"id":"obj","weight_kg":{"kg":80}},
                {"id":"missing"}
            ]"#,
        )
        .unwrap();
        let w = |id: &str| roster.get(id).unwrap().weight_kg;
        assert_eq!(w("num"), 70.0);
        assert_eq!(w("str"), 82.5);
        assert_eq!(w("bad"), 0.0);
        assert_eq!(w("nul"), 0.0);
        assert_eq!(w("obj"), 0.0);
        assert_eq!(w("missing"), 0.0);
    }

    #[test]
    fn inactive_flag() {
        let roster = parse_roster(r#"[{"id":"a","is_active":false},{"id":"b","is_active":null}]"#)
            .unwrap();
        assert!(!roster.get("a").unwrap().active);
        assert!(roster.get("b").unwrap().active);
    }

    #[test]
    fn ids_are_trimmed() {
        let roster = parse_roster(r#"[{"id":" a","weight_kg":70},{"id":"b\t"}]"#).unwrap();
        assert_eq!(roster.get("a").map(|a| a.weight_kg), Some(70.0));
        assert!(roster.contains("b"));
        assert!(!roster.contains(" a"));
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(parse_roster("{}"), Err(RosterError::Json(_))));
        assert!(matches!(parse_roster(r#"[{"full_name":"x"}]"#), Err(RosterError::Json(_))));
        assert!(matches!(
            parse_roster(r#"[{"id":"a"},{"id":" "}]"#),
            Err(RosterError::EmptyId(1))
        ));
    }
}
