//! The create/edit form.

use crate::domain::{Player, PlayerDraft, ValidationError};
use serde_json::{Map, Value as JsonValue};

/// Form-bound field values, held as text the way an input widget holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerForm {
    pub name: String,
    pub position: String,
    pub team: String,
    pub age: String,
    pub nationality: String,
    pub goals: String,
    pub assists: String,
    editing_id: Option<String>,
}

impl Default for PlayerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: String::new(),
            team: String::new(),
            age: String::new(),
            nationality: String::new(),
            goals: "0".to_string(),
            assists: "0".to_string(),
            editing_id: None,
        }
    }
}

impl PlayerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of the player being edited, `None` in create mode.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Loads `player` into the form and switches to edit mode.
    pub fn edit(&mut self, player: &Player) {
        *self = Self {
            name: player.name.clone(),
            position: player.position.clone(),
            team: player.team.clone(),
            age: player.age.to_string(),
            nationality: player.nationality.clone(),
            goals: player.goals.to_string(),
            assists: player.assists.to_string(),
            editing_id: Some(player.id.clone()),
        };
    }

    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Label of the submit action.
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Player"
        } else {
            "Add Player"
        }
    }

    /// The JSON payload as the form would post it.
    pub fn to_json(&self) -> JsonValue {
        let mut obj = Map::new();
        for (key, value) in [
            ("name", &self.name),
            ("position", &self.position),
            ("team", &self.team),
            ("age", &self.age),
            ("nationality", &self.nationality),
            ("goals", &self.goals),
            ("assists", &self.assists),
        ] {
            obj.insert(key.to_string(), JsonValue::String(value.clone()));
        }
        JsonValue::Object(obj)
    }

    /// Checks required fields before anything is sent, with the same rules
    /// the server applies.
    pub fn to_draft(&self) -> Result<PlayerDraft, ValidationError> {
        PlayerDraft::from_json(&self.to_json())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::write_timestamp;

    fn filled() -> PlayerForm {
        PlayerForm {
            name: "Cristiano Ronaldo".into(),
            position: "Forward".into(),
            team: "Al Nassr".into(),
            age: "39".into(),
            nationality: "Portuguese".into(),
            ..PlayerForm::default()
        }
    }

    #[test]
    fn fresh_form_defaults_counters_to_zero() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.age, 39);
        assert_eq!(draft.goals, Some(0));
        assert_eq!(draft.assists, Some(0));
    }

    #[test]
    fn empty_required_field_is_rejected_locally() {
        let mut form = filled();
        form.age.clear();
        assert_eq!(form.to_draft(), Err(ValidationError::MissingField("age")));

        let form = PlayerForm::new();
        assert!(form.to_draft().is_err());
    }

    #[test]
    fn non_numeric_age_is_rejected() {
        let mut form = filled();
        form.age = "old".into();
        assert!(matches!(
            form.to_draft(),
            Err(ValidationError::InvalidField { field: "age", .. })
        ));
    }

    #[test]
    fn edit_then_cancel_round_trips_to_create_mode() {
        let now = write_timestamp();
        let player = Player {
            id: "abc".into(),
            name: "N".into(),
            position: "P".into(),
            team: "T".into(),
            age: 22,
            goals: 4,
            assists: 6,
            nationality: "X".into(),
            created_at: now,
            updated_at: now,
        };

        let mut form = PlayerForm::new();
        form.edit(&player);
        assert_eq!(form.editing_id(), Some("abc"));
        assert_eq!(form.goals, "4");
        assert_eq!(form.submit_label(), "Update Player");
        assert_eq!(form.to_draft().unwrap().assists, Some(6));

        form.cancel_edit();
        assert_eq!(form, PlayerForm::new());
        assert_eq!(form.submit_label(), "Add Player");
    }
}
