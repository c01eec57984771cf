//! Savings target API

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::domain::result::Result;
use crate::domain::{NewTarget, Target, TargetPatch};

/// Target operations. Holds no state; every call is a fresh round trip.
#[derive(Clone)]
pub struct TargetApi {
    client: Arc<ApiClient>,
}

impl TargetApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List all targets
    pub async fn list(&self) -> Result<Vec<Target>> {
        self.client.get("/targets").await
    }

    /// Create a target; the backend assigns the id
    pub async fn create(&self, target: &NewTarget) -> Result<Target> {
        self.client.post("/targets", target).await
    }

    /// Update fields of an existing target
    pub async fn update(&self, id: &str, patch: &TargetPatch) -> Result<Target> {
        self.client.put(&format!("/targets/{id}"), patch).await
    }

    /// Delete a target
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/targets/{id}")).await
    }
}
