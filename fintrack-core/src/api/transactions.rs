//! Transaction API

use std::sync::Arc;

use crate::api::client::{ApiClient, RequestFlags};
use crate::domain::result::Result;
use crate::domain::{NewTransaction, Transaction, TransactionPatch};

/// Transaction operations. Holds no state; every call is a fresh round trip.
#[derive(Clone)]
pub struct TransactionApi {
    client: Arc<ApiClient>,
}

impl TransactionApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List transactions, optionally filtered to a month (1-12) and/or year
    pub async fn list(&self, month: Option<u32>, year: Option<i32>) -> Result<Vec<Transaction>> {
        self.client
            .get_with("/transactions", &list_query(month, year), RequestFlags::default())
            .await
    }

    /// Create a transaction; the backend assigns the id
    pub async fn create(&self, transaction: &NewTransaction) -> Result<Transaction> {
        self.client.post("/transactions", transaction).await
    }

    /// Update fields of an existing transaction.
    ///
    /// The backend takes transaction updates as POST on the resource path,
    /// not PUT.
    pub async fn update(&self, id: &str, patch: &TransactionPatch) -> Result<Transaction> {
        self.client.post(&format!("/transactions/{id}"), patch).await
    }

    /// Delete a transaction
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("/transactions/{id}")).await
    }
}

/// Query parameters for the list endpoint; absent filters are omitted
fn list_query(month: Option<u32>, year: Option<i32>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(month) = month {
        query.push(("month", month.to_string()));
    }
    if let Some(year) = year {
        query.push(("year", year.to_string()));
    }
    query
}
