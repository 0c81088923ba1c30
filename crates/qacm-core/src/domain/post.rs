use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Identified, Resource};
use super::user::User;

/// Post entity - a blog post written by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free text. Despite the name nothing enforces it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "qacm_shared::date::optional"
    )]
    pub creation_date: Option<NaiveDate>,
    /// Mandatory on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
}

impl Post {
    /// A bare reference to an existing post, as sent inside a comment.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl Identified for Post {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Post {
    const NAME: &'static str = "post";
    const PATH: &'static str = "posts";
}

impl Entity for Post {
    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    // The creator relation is not patchable.
    fn merge_patch(&mut self, patch: Self) {
        if patch.title.is_some() {
            self.title = patch.title;
        }
        if patch.required.is_some() {
            self.required = patch.required;
        }
        if patch.creation_date.is_some() {
            self.creation_date = patch.creation_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let post = Post {
            id: Some("AAAAAAA".to_string()),
            title: Some("Hello".to_string()),
            required: None,
            creation_date: NaiveDate::from_ymd_opt(2021, 10, 5),
            creator: Some(User::new("user-1", "admin")),
        };

        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "AAAAAAA",
                "title": "Hello",
                "creationDate": "2021-10-05",
                "creator": {"id": "user-1", "login": "admin"}
            })
        );
        assert_eq!(serde_json::from_value::<Post>(json).unwrap(), post);
    }

    #[test]
    fn test_merge_patch_keeps_absent_fields() {
        let mut post = Post {
            id: Some("p1".to_string()),
            title: Some("Old".to_string()),
            required: Some("keep".to_string()),
            creation_date: None,
            creator: Some(User::new("u1", "admin")),
        };

        post.merge_patch(Post {
            id: Some("p1".to_string()),
            title: Some("New".to_string()),
            creator: Some(User::new("u2", "other")),
            ..Post::default()
        });

        assert_eq!(post.title.as_deref(), Some("New"));
        assert_eq!(post.required.as_deref(), Some("keep"));
        assert_eq!(post.creator.unwrap().id.as_deref(), Some("u1"));
    }
}
