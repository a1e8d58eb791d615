//! Reports service.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use reqwest::Method;

use crate::api::{self, ApiClient};

use super::{
    errors::ReportsServiceError,
    models::{DailySales, DashboardStats, TopProduct},
};

/// HTTP implementation of [`ReportsService`].
#[derive(Debug, Clone)]
pub struct HttpReportsService {
    api: ApiClient,
}

impl HttpReportsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReportsService for HttpReportsService {
    #[tracing::instrument(name = "reports.service.dashboard_stats", skip(self), err)]
    async fn dashboard_stats(&self) -> Result<DashboardStats, ReportsServiceError> {
        let response = self
            .api
            .request(Method::GET, "/api/dashboard/stats")
            .send()
            .await
            .map_err(api::ApiError::from)?;

        Ok(api::expect_json(response).await?)
    }

    #[tracing::instrument(name = "reports.service.top_selling_products", skip(self), err)]
    async fn top_selling_products(&self, limit: u32) -> Result<Vec<TopProduct>, ReportsServiceError> {
        let path = format!("/api/reports/top-selling-products?limit={limit}");

        let response = self
            .api
            .request(Method::GET, &path)
            .send()
            .await
            .map_err(api::ApiError::from)?;

        Ok(api::expect_json(response).await?)
    }

    #[tracing::instrument(
        name = "reports.service.sales_summary",
        skip(self),
        fields(start = %start, end = %end),
        err
    )]
    async fn sales_summary(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<DailySales>, ReportsServiceError> {
        if start > end {
            return Err(ReportsServiceError::InvalidDateRange);
        }

        let path = format!("/api/reports/sales-summary?startDate={start}&endDate={end}");

        let response = self
            .api
            .request(Method::GET, &path)
            .send()
            .await
            .map_err(api::ApiError::from)?;

        Ok(api::expect_json(response).await?)
    }
}

#[automock]
#[async_trait]
pub trait ReportsService: Send + Sync {
    /// Fetch aggregate dashboard statistics.
    async fn dashboard_stats(&self) -> Result<DashboardStats, ReportsServiceError>;

    /// Fetch the `limit` best-selling products.
    async fn top_selling_products(&self, limit: u32)
    -> Result<Vec<TopProduct>, ReportsServiceError>;

    /// Fetch per-day sales totals for the inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns [`ReportsServiceError::InvalidDateRange`] when `start` is
    /// after `end`; no request is made in that case.
    async fn sales_summary(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<DailySales>, ReportsServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::config::ApiConfig;

    use super::*;

    #[tokio::test]
    async fn inverted_date_range_is_rejected_before_any_request() {
        let service = HttpReportsService::new(ApiClient::new(&ApiConfig::new(
            "http://localhost:5000",
        )));

        let result = service
            .sales_summary(date(2025, 7, 10), date(2025, 7, 1))
            .await;

        assert!(
            matches!(result, Err(ReportsServiceError::InvalidDateRange)),
            "expected InvalidDateRange, got {result:?}"
        );
    }
}
