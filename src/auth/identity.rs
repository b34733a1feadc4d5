//! Caller identity and roles.

use std::fmt;
use std::str::FromStr;

/// Role granted to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Regular board user.
    User,
    /// Administrator; may modify or delete any message.
    Admin,
}

impl Role {
    /// Canonical string form, as carried in token claims.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// The authenticated caller of a service operation.
///
/// Service methods take the identity as an argument; nothing reads it from
/// shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Login name; stamped as the author of created content.
    pub username: String,
    /// Granted roles.
    pub roles: Vec<Role>,
}

impl Identity {
    /// Create an identity with the given roles.
    pub fn new(username: impl Into<String>, roles: impl IntoIterator<Item = Role>) -> Self {
        let mut collected: Vec<Role> = Vec::new();
        for role in roles {
            if !collected.contains(&role) {
                collected.push(role);
            }
        }
        Self {
            username: username.into(),
            roles: collected,
        }
    }

    /// Identity holding only the `User` role.
    pub fn user(username: impl Into<String>) -> Self {
        Self::new(username, [Role::User])
    }

    /// Identity holding the `Admin` role.
    pub fn admin(username: impl Into<String>) -> Self {
        Self::new(username, [Role::User, Role::Admin])
    }

    /// Build an identity from raw role names. Unknown names are ignored.
    pub fn from_role_names<S: AsRef<str>>(username: impl Into<String>, names: &[S]) -> Self {
        Self::new(
            username,
            names.iter().filter_map(|n| n.as_ref().parse::<Role>().ok()),
        )
    }

    /// Check whether the identity holds a role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Check whether the identity is an administrator.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    /// Role names, for token claims.
    pub fn role_names(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.as_str().to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_str() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" user ".parse::<Role>(), Ok(Role::User));
        assert!("root".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Admin.to_string(), "ADMIN");
        assert_eq!(Role::User.to_string(), "USER");
    }

    #[test]
    fn test_identity_user() {
        let id = Identity::user("alice");
        assert_eq!(id.username, "alice");
        assert!(id.has_role(Role::User));
        assert!(!id.is_admin());
    }

    #[test]
    fn test_identity_admin() {
        let id = Identity::admin("root");
        assert!(id.is_admin());
        assert!(id.has_role(Role::User));
    }

    #[test]
    fn test_identity_dedups_roles() {
        let id = Identity::new("bob", [Role::User, Role::User]);
        assert_eq!(id.roles, vec![Role::User]);
    }

    #[test]
    fn test_from_role_names_ignores_unknown() {
        let id = Identity::from_role_names("carol", &["ADMIN", "superuser"]);
        assert_eq!(id.roles, vec![Role::Admin]);
        assert_eq!(id.role_names(), vec!["ADMIN".to_string()]);
    }
}
