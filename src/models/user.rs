use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Name shown in the navbar: the profile name, then the email's local part, then the id.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        if let Some(local) = self.email.as_deref().and_then(|e| e.split('@').next()).filter(|l| !l.is_empty()) {
            return local.to_string();
        }
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_email_then_id() {
        let mut user = User { id: "u-1".into(), name: Some("  Ada ".into()), email: Some("ada@example.com".into()) };
        assert_eq!(user.display_name(), "Ada");

        user.name = None;
        assert_eq!(user.display_name(), "ada");

        user.email = None;
        assert_eq!(user.display_name(), "u-1");
    }

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let user: User = serde_json::from_str(r#"{"id":"abc"}"#).unwrap();
        assert_eq!(user, User { id: "abc".into(), name: None, email: None });
    }
}
