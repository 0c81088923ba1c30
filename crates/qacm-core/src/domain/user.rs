use serde::{Deserialize, Serialize};

use super::entity::{Identified, Resource};

/// User account, owned by the identity provider. Read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            login: Some(login.into()),
        }
    }
}

impl Identified for User {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for User {
    const NAME: &'static str = "user";
    const PATH: &'static str = "users";
}
