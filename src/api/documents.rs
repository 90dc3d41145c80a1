use serde::Serialize;
use tracing::info;

use crate::{
    ApiClient,
    errors::Error,
    request::{ApiRequest, MultipartForm, UploadFile, segment},
    types::{Document, Listing, NewDocument},
};

pub struct Documents<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Documents<'_> {
    pub async fn list(&self, project: &str, query: &[(&str, &str)]) -> Result<Listing<Document>, Error> {
        let path = format!("/documents/list/{}/", segment(project));
        self.client
            .send_json(ApiRequest::get(path).query(query.iter().copied()))
            .await
    }

    /// Creates a document from a JSON body tagged with the project slug.
    pub async fn create(&self, project: &str, document: &NewDocument) -> Result<Document, Error> {
        let mut body = serde_json::to_value(document)?;
        if let Some(fields) = body.as_object_mut() {
            fields.insert("project".into(), project.into());
        }
        self.client
            .send_json(ApiRequest::post("/documents/create/").json(&body)?)
            .await
    }

    /// Creates a document from a multipart form, adding the project part if missing.
    pub async fn create_multipart(&self, project: &str, form: MultipartForm) -> Result<Document, Error> {
        let form = if form.has("project") {
            form
        } else {
            form.text("project", project)
        };
        self.client
            .send_json(ApiRequest::post("/documents/create/").multipart(form))
            .await
    }

    /// Uploads a file with extra metadata fields.
    pub async fn upload<'m, I>(&self, project: &str, file: UploadFile, metadata: I) -> Result<Document, Error>
    where
        I: IntoIterator<Item = (&'m str, String)>,
    {
        let file_name = file.file_name.clone();
        let size = file.bytes.len();
        let mut form = MultipartForm::new()
            .file("file", file)
            .text("project", project);
        for (key, value) in metadata {
            form = form.text(key, value);
        }
        let document = self
            .client
            .send_json(ApiRequest::post("/documents/upload/").multipart(form))
            .await?;
        info!("document uploaded: project='{}' file='{}' bytes={}", project, file_name, size);
        Ok(document)
    }

    pub async fn get(&self, project: &str, document_id: u64) -> Result<Document, Error> {
        let path = format!("/documents/detail/{}/{}/", segment(project), document_id);
        self.client.send_json(ApiRequest::get(path)).await
    }

    pub async fn update<B: Serialize + ?Sized>(
        &self,
        project: &str,
        document_id: u64,
        changes: &B,
    ) -> Result<Document, Error> {
        let path = format!("/documents/update/{}/{}/", segment(project), document_id);
        self.client.send_json(ApiRequest::put(path).json(changes)?).await
    }

    pub async fn delete(&self, project: &str, document_id: u64) -> Result<(), Error> {
        let path = format!("/documents/delete/{}/{}/", segment(project), document_id);
        self.client.send_empty(ApiRequest::delete(path)).await
    }

    /// Asks the backend to run extraction on a document.
    pub async fn process<B: Serialize + ?Sized>(
        &self,
        project: &str,
        document_id: u64,
        options: &B,
    ) -> Result<serde_json::Value, Error> {
        let path = format!("/documents/process/{}/{}/", segment(project), document_id);
        self.client.send_json(ApiRequest::post(path).json(options)?).await
    }

    pub async fn stats(&self, project: &str, document_id: u64) -> Result<serde_json::Value, Error> {
        let path = format!("/documents/stats/{}/{}/", segment(project), document_id);
        self.client.send_json(ApiRequest::get(path)).await
    }

    pub async fn search(&self, project: &str, term: &str) -> Result<Listing<Document>, Error> {
        let path = format!("/documents/search/{}/", segment(project));
        self.client
            .send_json(ApiRequest::get(path).query([("search", term)]))
            .await
    }
}
