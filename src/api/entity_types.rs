use serde::Serialize;

use crate::{
    ApiClient,
    errors::Error,
    request::ApiRequest,
    types::{EntityType, Listing},
};

/// Catalogue of entity labels (person, place, date, ...).
pub struct EntityTypes<'a> {
    pub(crate) client: &'a ApiClient,
}

impl EntityTypes<'_> {
    pub async fn list(&self) -> Result<Listing<EntityType>, Error> {
        self.client
            .send_json(ApiRequest::get("/core/entity-types/"))
            .await
    }

    pub async fn create<B: Serialize + ?Sized>(&self, entity_type: &B) -> Result<EntityType, Error> {
        self.client
            .send_json(ApiRequest::post("/core/entity-types/").json(entity_type)?)
            .await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, id: u64, changes: &B) -> Result<EntityType, Error> {
        let path = format!("/core/entity-types/{}/", id);
        self.client.send_json(ApiRequest::put(path).json(changes)?).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), Error> {
        let path = format!("/core/entity-types/{}/", id);
        self.client.send_empty(ApiRequest::delete(path)).await
    }
}
