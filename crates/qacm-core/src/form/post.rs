use chrono::NaiveDate;

use super::EntityForm;
use crate::domain::{Post, User};
use crate::error::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub id: Option<String>,
    pub title: Option<String>,
    pub required: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub creator: Option<User>,
}

impl EntityForm for PostForm {
    type Entity = Post;
    type Related = User;

    fn from_entity(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            required: post.required.clone(),
            creation_date: post.creation_date,
            creator: post.creator.clone(),
        }
    }

    fn relation(&self) -> Option<&User> {
        self.creator.as_ref()
    }

    fn set_relation(&mut self, creator: Option<User>) {
        self.creator = creator;
    }

    fn validate(&self) -> Result<Post, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("creator", self.creator.as_ref());

        errors.into_result(Post {
            id: self.id.clone(),
            title: self.title.clone(),
            required: self.required.clone(),
            creation_date: self.creation_date,
            creator: self.creator.clone(),
        })
    }
}
