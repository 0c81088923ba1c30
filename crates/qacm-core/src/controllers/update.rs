//! Create/edit controller.
//!
//! `idle -> saving -> idle`. A successful save navigates back once; a failed
//! one leaves the controller where it was and hands the error to the caller.

use std::borrow::Cow;
use std::sync::Arc;

use qacm_shared::QueryCriteria;
use tokio::sync::watch;

use crate::collection::{add_to_collection_if_missing, same_identity};
use crate::domain::{Identified, Resource};
use crate::error::{ClientError, SaveError};
use crate::form::{CommentForm, EntityForm, PostForm};
use crate::ports::{EntityService, Navigator, QueryService};

pub type PostUpdateController = UpdateController<PostForm>;
pub type CommentUpdateController = UpdateController<CommentForm>;

pub struct UpdateController<F: EntityForm> {
    service: Arc<dyn EntityService<F::Entity>>,
    related_service: Arc<dyn QueryService<F::Related>>,
    navigator: Arc<dyn Navigator>,
    form: F,
    /// Options for the relation selector.
    related: Vec<F::Related>,
    saving: watch::Sender<bool>,
}

/// Holds the saving flag up until dropped, whichever way the save ends.
struct SavingGuard<'a> {
    flag: &'a watch::Sender<bool>,
}

impl<'a> SavingGuard<'a> {
    fn engage(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self { flag }
    }
}

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.flag.send_replace(false);
    }
}

fn entity_name<F: EntityForm>() -> &'static str {
    <F::Entity as Resource>::NAME
}

fn related_name<F: EntityForm>() -> &'static str {
    <F::Related as Resource>::NAME
}

impl<F: EntityForm> UpdateController<F> {
    pub fn new(
        service: Arc<dyn EntityService<F::Entity>>,
        related_service: Arc<dyn QueryService<F::Related>>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let (saving, _) = watch::channel(false);
        Self {
            service,
            related_service,
            navigator,
            form: F::default(),
            related: Vec::new(),
            saving,
        }
    }

    /// Load the routed entity into the form and fetch the relation options.
    ///
    /// The form is populated even if the options query fails; the error is
    /// still returned so the caller can report it.
    pub async fn init(&mut self, entity: &F::Entity) -> Result<(), ClientError> {
        self.update_form(entity);
        self.load_relationships_options().await
    }

    fn update_form(&mut self, entity: &F::Entity) {
        self.form = F::from_entity(entity);

        let seeded = match add_to_collection_if_missing(&self.related, [self.form.relation()]) {
            Cow::Owned(merged) => Some(merged),
            Cow::Borrowed(_) => None,
        };
        if let Some(merged) = seeded {
            self.related = merged;
        }
    }

    async fn load_relationships_options(&mut self) -> Result<(), ClientError> {
        let options = match self.related_service.query(&QueryCriteria::default()).await {
            Ok(page) => page.into_items(),
            Err(e) => {
                tracing::warn!(
                    related = related_name::<F>(),
                    error = %e,
                    "Failed to load relation options"
                );
                return Err(e);
            }
        };

        // Merge whatever relation the form holds now, not at init time.
        let merged = match add_to_collection_if_missing(&options, [self.form.relation()]) {
            Cow::Owned(merged) => Some(merged),
            Cow::Borrowed(_) => None,
        };
        self.related = merged.unwrap_or(options);

        tracing::debug!(
            related = related_name::<F>(),
            options = self.related.len(),
            "Relation options loaded"
        );
        Ok(())
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn related(&self) -> &[F::Related] {
        &self.related
    }

    /// Pick a relation from the loaded options by identifier.
    pub fn select_related(&mut self, id: &str) -> bool {
        match self.related.iter().find(|r| r.id() == Some(id)) {
            Some(found) => {
                let found = found.clone();
                self.form.set_relation(Some(found));
                true
            }
            None => false,
        }
    }

    /// Whether `option` is the relation currently held by the form.
    pub fn is_related_selected(&self, option: &F::Related) -> bool {
        same_identity(Some(option), self.form.relation())
    }

    pub fn is_saving(&self) -> bool {
        *self.saving.borrow()
    }

    /// Watch the saving flag, e.g. to disable a save button.
    pub fn saving_state(&self) -> watch::Receiver<bool> {
        self.saving.subscribe()
    }

    pub fn previous_state(&self) {
        self.navigator.previous_state();
    }

    /// Validate and persist the form: `update` when it has an id, `create`
    /// otherwise.
    pub async fn save(&mut self) -> Result<F::Entity, SaveError> {
        let entity = self.form.validate()?;
        let persisted = entity.is_persisted();

        let result = {
            let _saving = SavingGuard::engage(&self.saving);
            if persisted {
                self.service.update(entity).await
            } else {
                self.service.create(entity).await
            }
        };

        match result {
            Ok(saved) => {
                tracing::info!(
                    entity = entity_name::<F>(),
                    id = saved.id().unwrap_or_default(),
                    "Saved"
                );
                self.navigator.previous_state();
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(
                    entity = entity_name::<F>(),
                    error = %e,
                    "Save failed"
                );
                Err(e.into())
            }
        }
    }
}
