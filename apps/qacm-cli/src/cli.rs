//! Command-line surface.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use qacm_shared::{QueryCriteria, SortDirection};

#[derive(Debug, Parser)]
#[command(name = "qacm", version, about = "Manage blog posts and comments")]
pub struct Cli {
    /// Backend origin, overrides QACM_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Rows per page, overrides QACM_PAGE_SIZE.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Posts(PostCommand),
    #[command(subcommand)]
    Comments(CommentCommand),
    /// List users that can author a post.
    Users(ListArgs),
}

#[derive(Debug, Subcommand)]
pub enum PostCommand {
    List(ListArgs),
    Show {
        id: String,
    },
    Create(PostFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: PostFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    List(ListArgs),
    Show {
        id: String,
    },
    Create(CommentFields),
    Update {
        id: String,
        #[command(flatten)]
        fields: CommentFields,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    #[arg(long, default_value = "id")]
    pub sort: String,
    #[arg(long)]
    pub desc: bool,
}

impl ListArgs {
    pub fn criteria(&self, page_size: u32) -> QueryCriteria {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        QueryCriteria::new()
            .page(self.page)
            .size(page_size)
            .sort(self.sort.as_str(), direction)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct PostFields {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub required: Option<String>,
    /// Creation date, YYYY-MM-DD.
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,
    /// Id of the authoring user.
    #[arg(long)]
    pub creator: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct CommentFields {
    #[arg(long)]
    pub text: Option<String>,
    /// Creation date, YYYY-MM-DD.
    #[arg(long, value_parser = parse_date_arg)]
    pub date: Option<NaiveDate>,
    /// Id of the post commented on.
    #[arg(long)]
    pub post: Option<String>,
}

fn parse_date_arg(raw: &str) -> Result<NaiveDate, String> {
    qacm_shared::date::parse_date(raw).map_err(|e| e.to_string())
}
