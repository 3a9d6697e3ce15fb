//! Role names and the owner/admin partition
//!
//! Both the role guard fallback and the root redirector go through
//! [`landing_for`], so they cannot disagree about where a role belongs.

use crate::routes::table::{ADMIN_LANDING, OWNER_LANDING};

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_USER: &str = "user";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// Canonical form used for every comparison
pub fn normalize_role(role: &str) -> String {
    role.trim().to_lowercase()
}

/// Roles allowed into an area of the console. Members are lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSet(&'static [&'static str]);

pub const OWNER_AREA: RoleSet = RoleSet(&[ROLE_OWNER, ROLE_USER, ROLE_MANAGER]);
pub const ADMIN_AREA: RoleSet = RoleSet(&[ROLE_ADMIN, ROLE_SUPER_ADMIN]);

impl RoleSet {
    pub fn contains(&self, role: &str) -> bool {
        let role = normalize_role(role);
        self.0.iter().any(|r| *r == role)
    }
}

pub fn is_admin_role(role: &str) -> bool {
    ADMIN_AREA.contains(role)
}

/// Default route for a role
pub fn landing_for(role: &str) -> &'static str {
    if is_admin_role(role) {
        ADMIN_LANDING
    } else {
        OWNER_LANDING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_case_insensitive() {
        assert!(ADMIN_AREA.contains("ADMIN"));
        assert!(ADMIN_AREA.contains(" Super_Admin "));
        assert!(OWNER_AREA.contains("Manager"));
        assert!(!ADMIN_AREA.contains("owner"));
        assert!(!OWNER_AREA.contains("admin"));
    }

    #[test]
    fn test_landing_partition() {
        assert_eq!(landing_for("admin"), ADMIN_LANDING);
        assert_eq!(landing_for("SUPER_ADMIN"), ADMIN_LANDING);
        assert_eq!(landing_for("owner"), OWNER_LANDING);
        assert_eq!(landing_for("kasir"), OWNER_LANDING);
        assert_eq!(landing_for(""), OWNER_LANDING);
    }
}
