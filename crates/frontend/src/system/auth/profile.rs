use contracts::system::auth::{RawProfile, UserProfile};

use super::roles::{normalize_role, ROLE_USER};

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Turn a `/auth/me` payload into the session profile.
///
/// Nested `role.name`/`branch.name` win over the flat `*_name` fields; a
/// missing role becomes `"user"` and a missing username becomes the one the
/// user typed in.
pub fn normalize_profile(raw: RawProfile, login_username: &str) -> UserProfile {
    let role = non_empty(raw.role.as_ref().and_then(|r| r.name()))
        .or_else(|| non_empty(raw.role_name.as_deref()))
        .map(|r| normalize_role(&r))
        .unwrap_or_else(|| ROLE_USER.to_string());

    let branch = non_empty(raw.branch.as_ref().and_then(|b| b.name()))
        .or_else(|| non_empty(raw.branch_name.as_deref()));

    let username =
        non_empty(raw.username.as_deref()).unwrap_or_else(|| login_username.to_string());
    let display_name = non_empty(raw.name.as_deref()).unwrap_or_else(|| username.clone());

    let id = match raw.id {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };

    UserProfile {
        id,
        username,
        display_name,
        role,
        branch,
    }
}

/// Profile used when credentials were accepted but `/auth/me` failed
pub fn minimal_profile(login_username: &str) -> UserProfile {
    UserProfile {
        id: None,
        username: login_username.to_string(),
        display_name: login_username.to_string(),
        role: ROLE_USER.to_string(),
        branch: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawProfile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_nested_fields() {
        let p = normalize_profile(
            raw(r#"{"id":12,"username":"sari","name":"Sari","role":{"name":"Admin"},"branch":{"name":"Cabang Bekasi"}}"#),
            "typed",
        );
        assert_eq!(p.id.as_deref(), Some("12"));
        assert_eq!(p.username, "sari");
        assert_eq!(p.display_name, "Sari");
        assert_eq!(p.role, "admin");
        assert_eq!(p.branch.as_deref(), Some("Cabang Bekasi"));
    }

    #[test]
    fn test_flat_fields() {
        let p = normalize_profile(
            raw(r#"{"id":"u-1","username":"andi","role_name":"MANAGER","branch_name":"Depok"}"#),
            "typed",
        );
        assert_eq!(p.id.as_deref(), Some("u-1"));
        assert_eq!(p.role, "manager");
        assert_eq!(p.branch.as_deref(), Some("Depok"));
        assert_eq!(p.display_name, "andi");
    }

    #[test]
    fn test_nested_role_wins_over_flat() {
        let p = normalize_profile(
            raw(r#"{"role":{"name":"owner"},"role_name":"admin"}"#),
            "typed",
        );
        assert_eq!(p.role, "owner");
    }

    #[test]
    fn test_plain_string_role_and_branch() {
        let p = normalize_profile(
            raw(r#"{"username":"tono","role":"Super_Admin","branch":"Bogor"}"#),
            "typed",
        );
        assert_eq!(p.role, "super_admin");
        assert_eq!(p.branch.as_deref(), Some("Bogor"));
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let p = normalize_profile(raw(r#"{"role":{}}"#), "typed");
        assert_eq!(p.role, "user");
        assert_eq!(p.username, "typed");
        assert_eq!(p.display_name, "typed");
        assert!(p.branch.is_none());
        assert!(p.id.is_none());
    }

    #[test]
    fn test_minimal_profile() {
        let p = minimal_profile("rina");
        assert_eq!(p.username, "rina");
        assert_eq!(p.role, "user");
        assert!(p.branch.is_none());
    }
}
