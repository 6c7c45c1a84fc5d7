use serde::Serialize;

use crate::submission::error::ValidationError;
use crate::themes::ThemeId;
use crate::ui::form::{RsvpChoice, RsvpForm};

/// JSON body posted to the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpPayload {
    pub name: String,
    pub guests: u32,
    pub status: RsvpChoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeId>,
}

impl RsvpPayload {
    /// Validate the form and snapshot it. The name is checked before the
    /// status, and only the first failure is reported.
    pub fn snapshot(form: &RsvpForm, theme: Option<ThemeId>) -> Result<Self, ValidationError> {
        if !form.has_name() {
            return Err(ValidationError::EmptyName);
        }
        let status = form.status.choice().ok_or(ValidationError::NoStatusChosen)?;
        Ok(Self {
            name: form.name.clone(),
            guests: form.guests,
            status,
            theme,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::form::RsvpStatus;
    use serde_json::json;

    #[test]
    fn whitespace_name_is_empty() {
        let form = RsvpForm {
            name: " \t ".to_string(),
            guests: 1,
            status: RsvpStatus::Unset,
        };
        assert_eq!(
            RsvpPayload::snapshot(&form, None),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn serializes_without_theme() {
        let form = RsvpForm {
            name: "Chandler".to_string(),
            guests: 2,
            status: RsvpStatus::Yes,
        };
        let payload = RsvpPayload::snapshot(&form, None).unwrap();
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": "Chandler", "guests": 2, "status": "Yes"})
        );
    }

    #[test]
    fn serializes_theme_id() {
        let form = RsvpForm {
            name: "Monica".to_string(),
            guests: 1,
            status: RsvpStatus::Maybe,
        };
        let payload = RsvpPayload::snapshot(&form, Some(ThemeId::Garden)).unwrap();
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["theme"], "garden");
        assert_eq!(value["status"], "Maybe");
    }
}
