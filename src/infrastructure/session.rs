// Static session provider configured at startup
use crate::application::session::{SessionProvider, User};
use crate::infrastructure::config::SessionSettings;

/// Stands in for the external identity provider: whoever the config
/// names is signed in for the whole process lifetime.
#[derive(Debug, Clone)]
pub struct StaticSessionProvider {
    user: Option<User>,
}

impl StaticSessionProvider {
    pub fn from_settings(settings: Option<SessionSettings>) -> Self {
        Self {
            user: settings.map(|s| User {
                id: s.user_id,
                name: s.name,
                role: s.role,
            }),
        }
    }
}

impl SessionProvider for StaticSessionProvider {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::Role;

    #[test]
    fn test_anonymous_without_settings() {
        let provider = StaticSessionProvider::from_settings(None);
        assert!(provider.current_user().is_none());
    }

    #[test]
    fn test_configured_user_is_signed_in() {
        let provider = StaticSessionProvider::from_settings(Some(SessionSettings {
            user_id: "owner-1".to_string(),
            name: "Mei Ling".to_string(),
            role: Role::Owner,
        }));
        let user = provider.current_user().unwrap();
        assert_eq!(user.role, Role::Owner);
    }
}
