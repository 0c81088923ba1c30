use chrono::NaiveDate;

use super::EntityForm;
use crate::domain::{Comment, Post};
use crate::error::ValidationErrors;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    pub id: Option<String>,
    pub text: Option<String>,
    pub creation_date: Option<NaiveDate>,
    pub post: Option<Post>,
}

impl EntityForm for CommentForm {
    type Entity = Comment;
    type Related = Post;

    fn from_entity(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            text: comment.text.clone(),
            creation_date: comment.creation_date,
            post: comment.post.clone(),
        }
    }

    fn relation(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    fn set_relation(&mut self, post: Option<Post>) {
        self.post = post;
    }

    fn validate(&self) -> Result<Comment, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("creationDate", self.creation_date.as_ref());
        errors.require("post", self.post.as_ref());

        errors.into_result(Comment {
            id: self.id.clone(),
            text: self.text.clone(),
            creation_date: self.creation_date,
            post: self.post.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_every_missing_field() {
        let errors = CommentForm::default().validate().unwrap_err();

        assert!(errors.has_error("creationDate"));
        assert!(errors.has_error("post"));
        assert_eq!(errors.errors().len(), 2);
    }

    #[test]
    fn test_text_is_optional() {
        let form = CommentForm {
            creation_date: NaiveDate::from_ymd_opt(2000, 12, 31),
            post: Some(Post::with_id("p1")),
            ..CommentForm::default()
        };

        let comment = form.validate().unwrap();

        assert_eq!(comment.text, None);
        assert_eq!(comment.id, None);
    }
}
