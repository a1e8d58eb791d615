//! Sales service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use tracing::info;

use crate::api::{self, ApiClient, ApiError};

use super::{models::Sale, payload::SalePayload};

/// HTTP implementation of [`SalesService`].
#[derive(Debug, Clone)]
pub struct HttpSalesService {
    api: ApiClient,
}

impl HttpSalesService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl SalesService for HttpSalesService {
    #[tracing::instrument(
        name = "sales.service.submit_sale",
        skip(self, payload),
        fields(lines = payload.cart.len(), total = %payload.total),
        err
    )]
    async fn submit_sale(&self, payload: &SalePayload) -> Result<(), ApiError> {
        let response = self
            .api
            .request(Method::POST, "/api/sales")
            .json(payload)
            .send()
            .await?;

        api::expect_success(response).await?;

        info!("sale recorded");

        Ok(())
    }

    #[tracing::instrument(name = "sales.service.list_sales", skip(self), err)]
    async fn list_sales(&self) -> Result<Vec<Sale>, ApiError> {
        let response = self.api.request(Method::GET, "/api/sales").send().await?;

        api::expect_json(response).await
    }
}

#[automock]
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Submit a finalized sale. The backend decrements stock for
    /// catalog-backed lines; this client never does.
    async fn submit_sale(&self, payload: &SalePayload) -> Result<(), ApiError>;

    /// Fetch the recorded sales history.
    async fn list_sales(&self) -> Result<Vec<Sale>, ApiError>;
}
