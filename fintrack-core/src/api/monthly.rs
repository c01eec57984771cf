//! Monthly aggregate API

use std::sync::Arc;

use crate::api::client::{ApiClient, RequestFlags};
use crate::domain::result::Result;
use crate::domain::{AvailableMonth, MonthlySummary};

/// Read-only queries over backend-computed monthly aggregates
#[derive(Clone)]
pub struct MonthlyDataApi {
    client: Arc<ApiClient>,
}

impl MonthlyDataApi {
    pub(crate) fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Summary for one month.
    ///
    /// `month` is zero-based (January = 0), matching the dashboard picker
    /// convention; the backend counts months from 1, so the value is
    /// shifted before transmission.
    pub async fn summary(&self, month: u32, year: i32) -> Result<MonthlySummary> {
        self.client
            .get_with(
                "/monthly-data/summary",
                &summary_query(month, year),
                RequestFlags::default(),
            )
            .await
    }

    /// Months for which the backend holds data
    pub async fn available_months(&self) -> Result<Vec<AvailableMonth>> {
        self.client.get("/monthly-data/available").await
    }
}

/// Query parameters for the summary endpoint; shifts the zero-based month
fn summary_query(month: u32, year: i32) -> [(&'static str, String); 2] {
    [("year", year.to_string()), ("month", (month + 1).to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;
    use crate::config::Config;
    use reqwest::Method;

    #[test]
    fn test_summary_query_shifts_zero_based_month() {
        let query = summary_query(0, 2025);
        assert_eq!(query, [("year", "2025".to_string()), ("month", "1".to_string())]);

        let december = summary_query(11, 2024);
        assert_eq!(december[1], ("month", "12".to_string()));
    }

    #[test]
    fn test_summary_request_transmits_one_based_month() {
        let client = ApiClient::new(
            &Config::with_base_url("http://localhost:5000/api"),
            Arc::new(MemoryStore::new()),
        )
        .unwrap();

        let request = client
            .prepare(Method::GET, "/monthly-data/summary", RequestFlags::default())
            .query(&summary_query(0, 2025))
            .build()
            .unwrap();

        assert_eq!(request.url().query(), Some("year=2025&month=1"));
    }
}
