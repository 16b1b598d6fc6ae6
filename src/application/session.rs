// Identity capability - owned by an external provider, injected into
// the presentation layer only. Price and analytics logic never reads it.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Consumer,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;
}
