//! Application state - the services every command runs against.

use std::sync::Arc;

use chrono::NaiveDate;
use qacm_core::ClientError;
use qacm_core::domain::{Comment, Entity, Post, User};
use qacm_core::ports::{CommentService, EntityService, PostService, QueryService, UserService};
use qacm_infra::{
    HistoryNavigator, InMemoryEntityService, InMemoryUserService, RestClient, RestCommentService,
    RestConfig, RestPostService, RestUserService,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    /// Same backend as `posts`, seen as relation options for comments.
    pub post_options: Arc<dyn QueryService<Post>>,
    pub comments: Arc<CommentService>,
    pub users: Arc<UserService>,
    pub navigator: Arc<HistoryNavigator>,
}

fn shared<E, S>(service: S) -> (Arc<dyn EntityService<E>>, Arc<dyn QueryService<E>>)
where
    E: Entity,
    S: EntityService<E> + 'static,
{
    let service = Arc::new(service);
    let entities: Arc<dyn EntityService<E>> = service.clone();
    let options: Arc<dyn QueryService<E>> = service;
    (entities, options)
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        let navigator = Arc::new(HistoryNavigator::new("/"));

        let Some(api_url) = &config.api_url else {
            tracing::warn!("QACM_API_URL not set. Running without backend (in-memory mode).");
            return Ok(Self::in_memory(navigator));
        };

        let mut rest = RestConfig::new(api_url.as_str()).with_timeout(config.http_timeout);
        if let Some(token) = &config.auth_token {
            rest = rest.with_auth_token(token.as_str());
        }
        let client = RestClient::new(&rest)?;

        let (posts, post_options) = shared(RestPostService::new(client.clone()));
        tracing::info!(api_url = %api_url, "Using REST backend");

        Ok(Self {
            posts,
            post_options,
            comments: Arc::new(RestCommentService::new(client.clone())),
            users: Arc::new(RestUserService::new(client)),
            navigator,
        })
    }

    /// Demo data: the default users, one post and one comment on it.
    fn in_memory(navigator: Arc<HistoryNavigator>) -> Self {
        let welcome = Post {
            id: Some("post-1".to_string()),
            title: Some("Welcome".to_string()),
            required: None,
            creation_date: NaiveDate::from_ymd_opt(2021, 10, 5),
            creator: Some(User::new("user-2", "admin")),
        };
        let comment = Comment {
            id: Some("comment-1".to_string()),
            text: Some("First!".to_string()),
            creation_date: NaiveDate::from_ymd_opt(2021, 10, 6),
            post: Some(welcome.clone()),
        };

        let (posts, post_options) = shared(InMemoryEntityService::with_entities([welcome]));

        Self {
            posts,
            post_options,
            comments: Arc::new(InMemoryEntityService::with_entities([comment])),
            users: Arc::new(InMemoryUserService::default()),
            navigator,
        }
    }
}
