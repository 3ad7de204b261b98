//! The `Player` record and the drafts used to create or replace one.
//!
//! Drafts arrive as loose JSON. They are coerced the way a document store casts
//! its inputs (`"20"` becomes `20`, numbers become text for string fields) and
//! then checked for the five required fields.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;
use utoipa::ToSchema;

pub const DEFAULT_GOALS: i64 = 0;
pub const DEFAULT_ASSISTS: i64 = 0;

/// A stored player record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Store-assigned, immutable identifier.
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub age: i64,
    pub goals: i64,
    pub assists: i64,
    pub nationality: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A validated payload for creating or replacing a player.
///
/// `goals` and `assists` stay `None` when the payload omitted them: creation
/// falls back to the defaults, replacement keeps the stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PlayerDraft {
    pub name: String,
    pub position: String,
    pub team: String,
    pub age: i64,
    pub nationality: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assists: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("draft must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

impl PlayerDraft {
    /// Coerces and validates a raw JSON payload. Unknown keys are ignored.
    pub fn from_json(payload: &JsonValue) -> Result<Self, ValidationError> {
        let obj = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        Ok(Self {
            name: required("name", text_field(obj, "name")?)?,
            position: required("position", text_field(obj, "position")?)?,
            team: required("team", text_field(obj, "team")?)?,
            age: required("age", int_field(obj, "age")?)?,
            nationality: required("nationality", text_field(obj, "nationality")?)?,
            goals: int_field(obj, "goals")?,
            assists: int_field(obj, "assists")?,
        })
    }

    pub fn goals_or_default(&self) -> i64 {
        self.goals.unwrap_or(DEFAULT_GOALS)
    }

    pub fn assists_or_default(&self) -> i64 {
        self.assists.unwrap_or(DEFAULT_ASSISTS)
    }
}

impl TryFrom<&JsonValue> for PlayerDraft {
    type Error = ValidationError;

    fn try_from(payload: &JsonValue) -> Result<Self, Self::Error> {
        Self::from_json(payload)
    }
}

impl Player {
    /// Builds a fresh record from a draft, applying the defaults.
    pub fn create(id: String, draft: PlayerDraft, now: DateTime<Utc>) -> Self {
        let goals = draft.goals_or_default();
        let assists = draft.assists_or_default();
        Self {
            id,
            name: draft.name,
            position: draft.position,
            team: draft.team,
            age: draft.age,
            goals,
            assists,
            nationality: draft.nationality,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites every required field. `goals`/`assists` only change when the
    /// draft carries them. `updated_at` always moves forward.
    pub fn apply(&mut self, draft: PlayerDraft) {
        self.name = draft.name;
        self.position = draft.position;
        self.team = draft.team;
        self.age = draft.age;
        self.nationality = draft.nationality;
        if let Some(goals) = draft.goals {
            self.goals = goals;
        }
        if let Some(assists) = draft.assists {
            self.assists = assists;
        }
        self.updated_at = next_write_time(self.updated_at);
    }
}

/// Current time at microsecond precision (what Postgres `TIMESTAMPTZ` keeps).
pub fn write_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A write timestamp strictly after `previous`.
pub fn next_write_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = write_timestamp();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField(field))
}

/// Reads a string field. Blank strings and `null` count as absent.
fn text_field(
    obj: &Map<String, JsonValue>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    let text = match obj.get(field) {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::String(s)) => s.trim().to_string(),
        // numbers and bools stringify for text fields
        Some(v @ (JsonValue::Number(_) | JsonValue::Bool(_))) => v.to_string(),
        Some(_) => {
            return Err(ValidationError::InvalidField {
                field,
                expected: "a string",
            })
        }
    };
    Ok((!text.is_empty()).then_some(text))
}

/// Reads an integer field, accepting numeric strings.
fn int_field(
    obj: &Map<String, JsonValue>,
    field: &'static str,
) -> Result<Option<i64>, ValidationError> {
    let invalid = ValidationError::InvalidField {
        field,
        expected: "an integer",
    };
    match obj.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return Ok(Some(i));
            }
            // i64::MAX as f64 rounds up to 2^63, which is out of range
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(Some(f as i64))
                }
                _ => Err(invalid),
            }
        }
        Some(JsonValue::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<i64>().map(Some).map_err(|_| invalid)
        }
        Some(_) => Err(invalid),
    }
}
