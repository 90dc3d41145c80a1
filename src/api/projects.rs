use serde::Serialize;

use crate::{
    ApiClient,
    errors::Error,
    request::{ApiRequest, segment},
    types::{Listing, NewProject, Project},
};

pub struct Projects<'a> {
    pub(crate) client: &'a ApiClient,
}

impl Projects<'_> {
    pub async fn list(&self, query: &[(&str, &str)]) -> Result<Listing<Project>, Error> {
        self.client
            .send_json(ApiRequest::get("/projects/").query(query.iter().copied()))
            .await
    }

    pub async fn create(&self, project: &NewProject) -> Result<Project, Error> {
        self.client
            .send_json(ApiRequest::post("/projects/create/").json(project)?)
            .await
    }

    pub async fn get(&self, slug: &str) -> Result<Project, Error> {
        let path = format!("/projects/detail/{}/", segment(slug));
        self.client.send_json(ApiRequest::get(path)).await
    }

    pub async fn update<B: Serialize + ?Sized>(&self, slug: &str, changes: &B) -> Result<Project, Error> {
        let path = format!("/projects/update/{}/", segment(slug));
        self.client.send_json(ApiRequest::put(path).json(changes)?).await
    }

    pub async fn delete(&self, slug: &str) -> Result<(), Error> {
        let path = format!("/projects/delete/{}/", segment(slug));
        self.client.send_empty(ApiRequest::delete(path)).await
    }

    pub async fn stats(&self, slug: &str) -> Result<serde_json::Value, Error> {
        let path = format!("/projects/stats/{}/", segment(slug));
        self.client.send_json(ApiRequest::get(path)).await
    }

    /// Projects the current user owns or is a member of.
    pub async fn user_projects(&self) -> Result<Listing<Project>, Error> {
        self.client
            .send_json(ApiRequest::get("/projects/user-projects/"))
            .await
    }

    pub async fn add_member(&self, slug: &str, user_id: u64) -> Result<serde_json::Value, Error> {
        let path = format!("/projects/{}/members/create/", segment(slug));
        self.client
            .send_json(ApiRequest::post(path).json(&serde_json::json!({ "user": user_id }))?)
            .await
    }

    pub async fn remove_member(&self, slug: &str, user_id: u64) -> Result<(), Error> {
        let path = format!("/projects/{}/members/{}/delete/", segment(slug), user_id);
        self.client.send_empty(ApiRequest::delete(path)).await
    }
}
