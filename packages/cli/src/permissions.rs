// ABOUTME: Allow-list permission checker backed by server configuration
// ABOUTME: Grants the edit permission to configured actor ids only

use contactus_settings::{PermissionChecker, EDIT_PERMISSION};

/// Permission checker over the configured editor allow-list.
///
/// Checked server-side on every submission; the renderer's disabled
/// attributes are advisory only.
pub struct EnvPermissions {
    editors: Vec<String>,
}

impl EnvPermissions {
    pub fn new(editors: Vec<String>) -> Self {
        Self { editors }
    }
}

impl PermissionChecker for EnvPermissions {
    fn can(&self, actor_id: &str, permission: &str) -> bool {
        if permission != EDIT_PERMISSION {
            return false;
        }
        self.editors
            .iter()
            .any(|editor| editor == "*" || editor == actor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listed_actor_can_edit() {
        let permissions = EnvPermissions::new(vec!["alice".to_string()]);
        assert!(permissions.can("alice", EDIT_PERMISSION));
        assert!(!permissions.can("bob", EDIT_PERMISSION));
    }

    #[test]
    fn test_wildcard_grants_everyone() {
        let permissions = EnvPermissions::new(vec!["*".to_string()]);
        assert!(permissions.can("anyone", EDIT_PERMISSION));
    }

    #[test]
    fn test_empty_list_denies_everyone() {
        let permissions = EnvPermissions::new(vec![]);
        assert!(!permissions.can("alice", EDIT_PERMISSION));
    }

    #[test]
    fn test_unknown_permission_is_denied() {
        let permissions = EnvPermissions::new(vec!["*".to_string()]);
        assert!(!permissions.can("alice", "some_other_permission"));
    }
}
