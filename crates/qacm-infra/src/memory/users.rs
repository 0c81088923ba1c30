use async_trait::async_trait;

use qacm_core::ClientError;
use qacm_core::domain::User;
use qacm_core::ports::QueryService;
use qacm_shared::{Page, QueryCriteria};

/// Fixed user directory standing in for the identity provider.
pub struct InMemoryUserService {
    users: Vec<User>,
}

impl InMemoryUserService {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

impl Default for InMemoryUserService {
    fn default() -> Self {
        Self::new(vec![
            User::new("user-1", "system"),
            User::new("user-2", "admin"),
            User::new("user-3", "user"),
        ])
    }
}

#[async_trait]
impl QueryService<User> for InMemoryUserService {
    async fn query(&self, criteria: &QueryCriteria) -> Result<Page<User>, ClientError> {
        let total = self.users.len() as u64;
        let items = match criteria.size {
            Some(size) => self
                .users
                .iter()
                .skip(criteria.page.unwrap_or(0) as usize * size as usize)
                .take(size as usize)
                .cloned()
                .collect(),
            None => self.users.clone(),
        };
        Ok(Page::new(items, Some(total)))
    }
}
