use std::marker::PhantomData;

use async_trait::async_trait;
use qacm_core::ClientError;
use qacm_core::domain::{Entity, Resource};
use qacm_core::ports::{EntityService, QueryService};
use qacm_shared::dto::{TOTAL_COUNT_HEADER, parse_total_count};
use qacm_shared::{Page, QueryCriteria};
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

use super::client::RestClient;

const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Generic REST service for one resource under `/api/{E::PATH}`.
///
/// Date fields are converted by the entity's serde representation, so every
/// body that leaves or enters here is in wire format.
pub struct RestResource<E> {
    client: RestClient,
    url: String,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Resource> RestResource<E> {
    pub fn new(client: RestClient) -> Self {
        let url = client.resource_url(E::PATH);
        Self {
            client,
            url,
            _entity: PhantomData,
        }
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.url, id)
    }

    fn encode(entity: &E) -> Result<Vec<u8>, ClientError> {
        serde_json::to_vec(entity).map_err(|e| ClientError::Encode {
            entity: E::NAME,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl<E: Resource> QueryService<E> for RestResource<E> {
    async fn query(&self, criteria: &QueryCriteria) -> Result<Page<E>, ClientError> {
        tracing::debug!(url = %self.url, ?criteria, "GET collection");

        let request = self
            .client
            .request(Method::GET, &self.url)
            .query(&criteria.to_query_pairs());
        let response = self.client.send(request, &self.url).await?;

        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_total_count);
        let items: Vec<E> = RestClient::decode(E::NAME, response).await?;

        Ok(Page::new(items, total_count))
    }
}

#[async_trait]
impl<E: Entity> EntityService<E> for RestResource<E> {
    async fn find(&self, id: &str) -> Result<E, ClientError> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "GET");

        let response = self
            .client
            .send(self.client.request(Method::GET, &url), &url)
            .await?;
        RestClient::decode(E::NAME, response).await
    }

    async fn create(&self, entity: E) -> Result<E, ClientError> {
        if entity.is_persisted() {
            return Err(ClientError::IdExists { entity: E::NAME });
        }
        tracing::debug!(url = %self.url, "POST");

        let request = self
            .client
            .request(Method::POST, &self.url)
            .json(&entity);
        let response = self.client.send(request, &self.url).await?;
        RestClient::decode(E::NAME, response).await
    }

    async fn update(&self, entity: E) -> Result<E, ClientError> {
        let Some(id) = entity.id() else {
            return Err(ClientError::IdMissing { entity: E::NAME });
        };
        let url = self.item_url(id);
        tracing::debug!(url = %url, "PUT");

        let request = self.client.request(Method::PUT, &url).json(&entity);
        let response = self.client.send(request, &url).await?;
        RestClient::decode(E::NAME, response).await
    }

    async fn partial_update(&self, entity: E) -> Result<E, ClientError> {
        let Some(id) = entity.id() else {
            return Err(ClientError::IdMissing { entity: E::NAME });
        };
        let url = self.item_url(id);
        tracing::debug!(url = %url, "PATCH");

        let request = self
            .client
            .request(Method::PATCH, &url)
            .header(CONTENT_TYPE, MERGE_PATCH_JSON)
            .body(Self::encode(&entity)?);
        let response = self.client.send(request, &url).await?;
        RestClient::decode(E::NAME, response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let url = self.item_url(id);
        tracing::debug!(url = %url, "DELETE");

        self.client
            .send(self.client.request(Method::DELETE, &url), &url)
            .await?;
        Ok(())
    }
}
