use serde::Serialize;
use serde_json::Value;

use crate::{ApiClient, errors::Error, request::ApiRequest};

/// Model and prompt configuration used by the extraction backend.
pub struct Llm<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Llm<'_> {
    pub async fn models(&self) -> Result<Value, Error> {
        self.client.send_json(ApiRequest::get("/llm/models/")).await
    }

    pub async fn create_model<B: Serialize + ?Sized>(&self, model: &B) -> Result<Value, Error> {
        self.client
            .send_json(ApiRequest::post("/llm/models/").json(model)?)
            .await
    }

    pub async fn model(&self, model_id: u64) -> Result<Value, Error> {
        let path = format!("/llm/models/{}/", model_id);
        self.client.send_json(ApiRequest::get(path)).await
    }

    pub async fn update_model<B: Serialize + ?Sized>(&self, model_id: u64, changes: &B) -> Result<Value, Error> {
        let path = format!("/llm/models/{}/", model_id);
        self.client.send_json(ApiRequest::put(path).json(changes)?).await
    }

    pub async fn delete_model(&self, model_id: u64) -> Result<(), Error> {
        let path = format!("/llm/models/{}/", model_id);
        self.client.send_empty(ApiRequest::delete(path)).await
    }

    pub async fn test_connection(&self, model_id: u64) -> Result<Value, Error> {
        let path = format!("/llm/models/{}/test/", model_id);
        self.client.send_json(ApiRequest::post(path)).await
    }

    pub async fn prompts(&self) -> Result<Value, Error> {
        self.client.send_json(ApiRequest::get("/llm/prompts/")).await
    }

    pub async fn create_prompt<B: Serialize + ?Sized>(&self, prompt: &B) -> Result<Value, Error> {
        self.client
            .send_json(ApiRequest::post("/llm/prompts/").json(prompt)?)
            .await
    }
}
