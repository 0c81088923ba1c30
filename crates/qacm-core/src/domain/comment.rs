use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Identified, Resource};
use super::post::Post;

/// Comment entity - attached to exactly one post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Mandatory on save. The backend spells the field `creaionDate`.
    #[serde(
        rename = "creaionDate",
        default,
        skip_serializing_if = "Option::is_none",
        with = "qacm_shared::date::optional"
    )]
    pub creation_date: Option<NaiveDate>,
    /// Mandatory on save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
}

impl Identified for Comment {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Resource for Comment {
    const NAME: &'static str = "comment";
    const PATH: &'static str = "comments";
}

impl Entity for Comment {
    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn merge_patch(&mut self, patch: Self) {
        if patch.text.is_some() {
            self.text = patch.text;
        }
        if patch.creation_date.is_some() {
            self.creation_date = patch.creation_date;
        }
    }
}
