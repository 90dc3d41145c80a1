use serde::Serialize;

use crate::{
    ApiClient,
    errors::Error,
    request::{ApiRequest, segment},
    types::{Entity, Listing},
};

pub struct Entities<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Entities<'_> {
    fn path(action: &str, project: &str, document_id: u64) -> String {
        format!("/entities/{}/{}/{}/", action, segment(project), document_id)
    }

    fn entity_path(action: &str, project: &str, document_id: u64, entity_id: u64) -> String {
        format!(
            "/entities/{}/{}/{}/{}/",
            action,
            segment(project),
            document_id,
            entity_id
        )
    }

    pub async fn list(
        &self,
        project: &str,
        document_id: u64,
        query: &[(&str, &str)],
    ) -> Result<Listing<Entity>, Error> {
        let request = ApiRequest::get(Self::path("list", project, document_id)).query(query.iter().copied());
        self.client.send_json(request).await
    }

    pub async fn create<B: Serialize + ?Sized>(
        &self,
        project: &str,
        document_id: u64,
        entity: &B,
    ) -> Result<Entity, Error> {
        let request = ApiRequest::post(Self::path("create", project, document_id)).json(entity)?;
        self.client.send_json(request).await
    }

    pub async fn get(&self, project: &str, document_id: u64, entity_id: u64) -> Result<Entity, Error> {
        let request = ApiRequest::get(Self::entity_path("detail", project, document_id, entity_id));
        self.client.send_json(request).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        project: &str,
        document_id: u64,
        entity_id: u64,
        changes: &B,
    ) -> Result<Entity, Error> {
        let request =
            ApiRequest::put(Self::entity_path("update", project, document_id, entity_id)).json(changes)?;
        self.client.send_json(request).await
    }

    pub async fn delete(&self, project: &str, document_id: u64, entity_id: u64) -> Result<(), Error> {
        let request = ApiRequest::delete(Self::entity_path("delete", project, document_id, entity_id));
        self.client.send_empty(request).await
    }

    pub async fn verify(
        &self,
        project: &str,
        document_id: u64,
        entity_id: u64,
        verified: bool,
    ) -> Result<serde_json::Value, Error> {
        let request = ApiRequest::post(Self::entity_path("verify", project, document_id, entity_id))
            .json(&serde_json::json!({ "verified": verified }))?;
        self.client.send_json(request).await
    }

    pub async fn bulk_update(
        &self,
        project: &str,
        document_id: u64,
        updates: &[serde_json::Value],
    ) -> Result<serde_json::Value, Error> {
        let request = ApiRequest::post(Self::path("bulk-update", project, document_id))
            .json(&serde_json::json!({ "updates": updates }))?;
        self.client.send_json(request).await
    }

    pub async fn bulk_verify(
        &self,
        project: &str,
        document_id: u64,
        entity_ids: &[u64],
        verified: bool,
    ) -> Result<serde_json::Value, Error> {
        let request = ApiRequest::post(Self::path("bulk-verify", project, document_id))
            .json(&serde_json::json!({ "entity_ids": entity_ids, "verified": verified }))?;
        self.client.send_json(request).await
    }

    pub async fn stats(&self, project: &str, document_id: u64) -> Result<serde_json::Value, Error> {
        let request = ApiRequest::get(Self::path("stats", project, document_id));
        self.client.send_json(request).await
    }
}
