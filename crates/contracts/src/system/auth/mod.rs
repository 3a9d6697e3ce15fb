use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `data` payload of a successful `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub token: Option<String>,
}

/// Nested `{ "name": ... }` reference used for role and branch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// `role`/`branch` as either a bare string or a `{ "name": ... }` object
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameField {
    Plain(String),
    Named(NamedRef),
}

impl NameField {
    pub fn name(&self) -> Option<&str> {
        match self {
            NameField::Plain(name) => Some(name),
            NameField::Named(named) => named.name.as_deref(),
        }
    }
}

/// Profile exactly as `GET /auth/me` returns it.
///
/// The backend is inconsistent about nesting: role and branch arrive either as
/// objects (`role.name`), bare strings, or flat (`role_name`), so every field
/// is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<NameField>,
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub branch: Option<NameField>,
    #[serde(default)]
    pub branch_name: Option<String>,
}

/// Normalized profile kept in the session and persisted under the `user` key.
///
/// `role` is always lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<String>,
    pub username: String,
    pub display_name: String,
    pub role: String,
    #[serde(default)]
    pub branch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_object_or_string() {
        let nested: RawProfile = serde_json::from_str(r#"{"role":{"name":"Admin"}}"#).unwrap();
        assert_eq!(nested.role.unwrap().name(), Some("Admin"));

        let plain: RawProfile =
            serde_json::from_str(r#"{"role":"admin","branch":"Cabang Bogor"}"#).unwrap();
        assert_eq!(plain.role.unwrap().name(), Some("admin"));
        assert_eq!(plain.branch.unwrap().name(), Some("Cabang Bogor"));
    }

    #[test]
    fn test_empty_role_object_and_null() {
        let raw: RawProfile = serde_json::from_str(r#"{"role":{},"branch":null}"#).unwrap();
        assert_eq!(raw.role.unwrap().name(), None);
        assert!(raw.branch.is_none());
    }
}
