//! Command dispatch. Each command drives one controller and prints JSON.

use std::sync::Arc;

use anyhow::bail;
use qacm_core::controllers::{
    CommentUpdateController, DetailController, ListController, PostUpdateController,
    UpdateController, resolve,
};
use qacm_core::domain::{Entity, Resource};
use qacm_core::form::EntityForm;
use qacm_core::ports::EntityService;
use qacm_infra::HistoryNavigator;
use qacm_shared::QueryCriteria;
use serde::Serialize;

use crate::cli::{Command, CommentCommand, CommentFields, PostCommand, PostFields};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Listing<'a, T> {
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_count: Option<u64>,
    items: &'a [T],
}

pub async fn run(command: Command, state: &AppState, page_size: u32) -> anyhow::Result<()> {
    match command {
        Command::Posts(command) => posts(command, state, page_size).await,
        Command::Comments(command) => comments(command, state, page_size).await,
        Command::Users(args) => {
            let criteria = args.criteria(page_size);
            let page = state.users.query(&criteria).await?;
            print_json(&Listing {
                page: criteria.page,
                total_count: page.total_count,
                items: &page.items,
            })
        }
    }
}

async fn posts(command: PostCommand, state: &AppState, page_size: u32) -> anyhow::Result<()> {
    match command {
        PostCommand::List(args) => list(state.posts.clone(), args.criteria(page_size)).await,
        PostCommand::Show { id } => show(state.posts.as_ref(), &id, &state.navigator).await,
        PostCommand::Create(fields) => edit_post(state, None, fields).await,
        PostCommand::Update { id, fields } => edit_post(state, Some(&id), fields).await,
        PostCommand::Delete { id } => {
            let criteria = QueryCriteria::new().page(0).size(page_size);
            delete(state.posts.clone(), &id, criteria).await
        }
    }
}

async fn comments(
    command: CommentCommand,
    state: &AppState,
    page_size: u32,
) -> anyhow::Result<()> {
    match command {
        CommentCommand::List(args) => list(state.comments.clone(), args.criteria(page_size)).await,
        CommentCommand::Show { id } => show(state.comments.as_ref(), &id, &state.navigator).await,
        CommentCommand::Create(fields) => edit_comment(state, None, fields).await,
        CommentCommand::Update { id, fields } => edit_comment(state, Some(&id), fields).await,
        CommentCommand::Delete { id } => {
            let criteria = QueryCriteria::new().page(0).size(page_size);
            delete(state.comments.clone(), &id, criteria).await
        }
    }
}

async fn list<E: Entity>(
    service: Arc<dyn EntityService<E>>,
    criteria: QueryCriteria,
) -> anyhow::Result<()> {
    let mut controller = ListController::new(service, criteria);
    controller.load().await?;
    print_listing(&controller)
}

async fn delete<E: Entity>(
    service: Arc<dyn EntityService<E>>,
    id: &str,
    criteria: QueryCriteria,
) -> anyhow::Result<()> {
    let mut controller = ListController::new(service, criteria);
    controller.delete(id).await?;
    print_listing(&controller)
}

fn print_listing<E: Entity>(controller: &ListController<E>) -> anyhow::Result<()> {
    print_json(&Listing {
        page: controller.criteria().page,
        total_count: controller.total_count(),
        items: controller.entities(),
    })
}

async fn show<E: Entity>(
    service: &dyn EntityService<E>,
    id: &str,
    navigator: &Arc<HistoryNavigator>,
) -> anyhow::Result<()> {
    navigator.navigate(format!("/{}/{}/view", E::NAME, id));
    let detail = DetailController::load(service, id, navigator.clone()).await?;
    print_json(detail.entity())?;
    detail.previous_state();
    Ok(())
}

async fn edit_post(state: &AppState, id: Option<&str>, fields: PostFields) -> anyhow::Result<()> {
    let post = open_editor(state.posts.as_ref(), id, &state.navigator).await?;
    let controller = PostUpdateController::new(
        state.posts.clone(),
        state.users.clone(),
        state.navigator.clone(),
    );

    let PostFields {
        title,
        required,
        date,
        creator,
    } = fields;
    let saved = edit(controller, post, creator.as_deref(), |form| {
        if title.is_some() {
            form.title = title;
        }
        if required.is_some() {
            form.required = required;
        }
        if date.is_some() {
            form.creation_date = date;
        }
    })
    .await?;

    tracing::debug!(route = %state.navigator.current(), "Back after save");
    print_json(&saved)
}

async fn edit_comment(
    state: &AppState,
    id: Option<&str>,
    fields: CommentFields,
) -> anyhow::Result<()> {
    let comment = open_editor(state.comments.as_ref(), id, &state.navigator).await?;
    let controller = CommentUpdateController::new(
        state.comments.clone(),
        state.post_options.clone(),
        state.navigator.clone(),
    );

    let CommentFields { text, date, post } = fields;
    let saved = edit(controller, comment, post.as_deref(), |form| {
        if text.is_some() {
            form.text = text;
        }
        if date.is_some() {
            form.creation_date = date;
        }
    })
    .await?;

    tracing::debug!(route = %state.navigator.current(), "Back after save");
    print_json(&saved)
}

/// Push the list and edit routes, then resolve the routed entity.
async fn open_editor<E: Entity>(
    service: &dyn EntityService<E>,
    id: Option<&str>,
    navigator: &HistoryNavigator,
) -> anyhow::Result<E> {
    navigator.navigate(format!("/{}", E::NAME));
    match id {
        Some(id) => navigator.navigate(format!("/{}/{}/edit", E::NAME, id)),
        None => navigator.navigate(format!("/{}/new", E::NAME)),
    }
    Ok(resolve(service, id).await?)
}

async fn edit<F: EntityForm>(
    mut controller: UpdateController<F>,
    entity: F::Entity,
    relation: Option<&str>,
    apply: impl FnOnce(&mut F),
) -> anyhow::Result<F::Entity> {
    controller.init(&entity).await?;
    apply(controller.form_mut());

    if let Some(id) = relation {
        if !controller.select_related(id) {
            bail!("No {} with id {id}", <F::Related as Resource>::NAME);
        }
    }

    Ok(controller.save().await?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use qacm_core::SaveError;
    use qacm_core::domain::{Comment, Identified};

    use super::*;
    use crate::cli::ListArgs;
    use crate::config::AppConfig;

    fn in_memory() -> AppState {
        AppState::new(&AppConfig {
            api_url: None,
            auth_token: None,
            http_timeout: Duration::from_secs(1),
            page_size: 20,
        })
        .unwrap()
    }

    async fn all_comments(state: &AppState) -> Vec<Comment> {
        state
            .comments
            .query(&QueryCriteria::new())
            .await
            .unwrap()
            .into_items()
    }

    #[tokio::test]
    async fn test_create_comment_on_existing_post() {
        let state = in_memory();
        let fields = CommentFields {
            text: Some("hello".to_string()),
            date: NaiveDate::from_ymd_opt(2021, 10, 7),
            post: Some("post-1".to_string()),
        };

        run(Command::Comments(CommentCommand::Create(fields)), &state, 20)
            .await
            .unwrap();

        let comments = all_comments(&state).await;
        assert_eq!(comments.len(), 2);
        let created = &comments[1];
        assert!(created.is_persisted());
        assert_eq!(created.text.as_deref(), Some("hello"));
        assert_eq!(created.post.as_ref().and_then(|p| p.id()), Some("post-1"));
        assert_eq!(state.navigator.current(), "/comment");
    }

    #[tokio::test]
    async fn test_create_without_post_fails_validation() {
        let state = in_memory();
        let fields = CommentFields {
            date: NaiveDate::from_ymd_opt(2021, 10, 7),
            ..CommentFields::default()
        };

        let err = run(Command::Comments(CommentCommand::Create(fields)), &state, 20)
            .await
            .unwrap_err();

        match err.downcast_ref::<SaveError>() {
            Some(SaveError::Validation(errors)) => assert!(errors.has_error("post")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(all_comments(&state).await.len(), 1);
        assert_eq!(state.navigator.current(), "/comment/new");
    }

    #[tokio::test]
    async fn test_update_keeps_untouched_fields() {
        let state = in_memory();
        let fields = CommentFields {
            text: Some("edited".to_string()),
            ..CommentFields::default()
        };

        run(
            Command::Comments(CommentCommand::Update {
                id: "comment-1".to_string(),
                fields,
            }),
            &state,
            20,
        )
        .await
        .unwrap();

        let comment = state.comments.find("comment-1").await.unwrap();
        assert_eq!(comment.text.as_deref(), Some("edited"));
        assert_eq!(comment.creation_date, NaiveDate::from_ymd_opt(2021, 10, 6));
        assert_eq!(comment.post.as_ref().and_then(|p| p.id()), Some("post-1"));
    }

    #[tokio::test]
    async fn test_unknown_relation_is_rejected() {
        let state = in_memory();
        let fields = PostFields {
            title: Some("Second".to_string()),
            creator: Some("user-99".to_string()),
            ..PostFields::default()
        };

        let err = run(Command::Posts(PostCommand::Create(fields)), &state, 20)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "No user with id user-99");
    }

    #[tokio::test]
    async fn test_create_post_with_creator() {
        let state = in_memory();
        let fields = PostFields {
            title: Some("Second".to_string()),
            creator: Some("user-3".to_string()),
            ..PostFields::default()
        };

        run(Command::Posts(PostCommand::Create(fields)), &state, 20)
            .await
            .unwrap();

        let posts = state.posts.query(&QueryCriteria::new()).await.unwrap();
        assert_eq!(posts.items.len(), 2);
        assert_eq!(
            posts.items[1].creator.as_ref().and_then(|u| u.login.as_deref()),
            Some("user")
        );
    }

    #[tokio::test]
    async fn test_show_returns_to_previous_route() {
        let state = in_memory();

        run(
            Command::Posts(PostCommand::Show {
                id: "post-1".to_string(),
            }),
            &state,
            20,
        )
        .await
        .unwrap();

        assert_eq!(state.navigator.current(), "/");
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let state = in_memory();

        run(
            Command::Comments(CommentCommand::Delete {
                id: "comment-1".to_string(),
            }),
            &state,
            20,
        )
        .await
        .unwrap();
        assert!(all_comments(&state).await.is_empty());

        let args = ListArgs {
            page: 0,
            sort: "id".to_string(),
            desc: false,
        };
        run(Command::Posts(PostCommand::List(args)), &state, 20)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_missing_entity_is_reported() {
        let state = in_memory();

        let err = run(
            Command::Posts(PostCommand::Show {
                id: "nope".to_string(),
            }),
            &state,
            20,
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Entity not found: post with id nope");
    }
}
