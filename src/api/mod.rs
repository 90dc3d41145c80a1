//! Endpoint groups of the annotation backend, one facade per resource.

mod auth;
mod documents;
mod entity_types;
mod entities;
mod llm;
mod processing;
mod projects;

pub use auth::Auth;
pub use documents::Documents;
pub use entities::Entities;
pub use entity_types::EntityTypes;
pub use llm::Llm;
pub use processing::Processing;
pub use projects::Projects;

use crate::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects { client: self }
    }

    pub fn documents(&self) -> Documents<'_> {
        Documents { client: self }
    }

    pub fn entities(&self) -> Entities<'_> {
        Entities { client: self }
    }

    pub fn processing(&self) -> Processing<'_> {
        Processing { client: self }
    }

    pub fn llm(&self) -> Llm<'_> {
        Llm { client: self }
    }

    pub fn entity_types(&self) -> EntityTypes<'_> {
        EntityTypes { client: self }
    }
}
