//! Ownership checks for board content.

use super::Identity;

/// Check whether `actor` may modify or delete content written by `author`.
///
/// The author may act on their own content; administrators may act on
/// anyone's.
///
/// # Examples
///
/// ```
/// use atom::auth::{can_modify, Identity};
///
/// assert!(can_modify(&Identity::user("alice"), "alice"));
/// assert!(!can_modify(&Identity::user("bob"), "alice"));
/// assert!(can_modify(&Identity::admin("root"), "alice"));
/// ```
pub fn can_modify(actor: &Identity, author: &str) -> bool {
    actor.username == author || actor.is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;

    #[test]
    fn test_author_can_modify() {
        assert!(can_modify(&Identity::user("alice"), "alice"));
    }

    #[test]
    fn test_other_user_cannot_modify() {
        assert!(!can_modify(&Identity::user("bob"), "alice"));
    }

    #[test]
    fn test_admin_can_modify() {
        assert!(can_modify(&Identity::new("root", [Role::Admin]), "alice"));
    }

    #[test]
    fn test_username_match_is_exact() {
        assert!(!can_modify(&Identity::user("Alice"), "alice"));
    }

    #[test]
    fn test_identity_without_roles() {
        let anonymous = Identity::new("alice", Vec::<Role>::new());
        assert!(can_modify(&anonymous, "alice"));
        assert!(!can_modify(&anonymous, "bob"));
    }
}
