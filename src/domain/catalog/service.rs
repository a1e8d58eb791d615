//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Method;
use tracing::info;

use crate::api::{self, ApiClient, ApiError};

use super::models::{Category, CategoryId, NewCategory, NewProduct, Product, ProductId, ProductUpdate};

/// HTTP implementation of [`CatalogService`].
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    api: ApiClient,
}

impl HttpCatalogService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    #[tracing::instrument(name = "catalog.service.list_products", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.api.request(Method::GET, "/api/products").send().await?;

        api::expect_json(response).await
    }

    #[tracing::instrument(name = "catalog.service.list_categories", skip(self), err)]
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .api
            .request(Method::GET, "/api/categories")
            .send()
            .await?;

        api::expect_json(response).await
    }

    #[tracing::instrument(
        name = "catalog.service.create_product",
        skip(self, product),
        fields(name = %product.name),
        err
    )]
    async fn create_product(&self, product: NewProduct) -> Result<(), ApiError> {
        let response = self
            .api
            .request(Method::POST, "/api/products")
            .json(&product)
            .send()
            .await?;

        api::expect_success(response).await?;

        info!("created product");

        Ok(())
    }

    #[tracing::instrument(
        name = "catalog.service.update_product",
        skip(self, update),
        fields(product_id = %id),
        err
    )]
    async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<(), ApiError> {
        let response = self
            .api
            .request(Method::PUT, &format!("/api/products/{id}"))
            .json(&update)
            .send()
            .await?;

        api::expect_success(response).await
    }

    #[tracing::instrument(
        name = "catalog.service.delete_product",
        skip(self),
        fields(product_id = %id),
        err
    )]
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let response = self
            .api
            .request(Method::DELETE, &format!("/api/products/{id}"))
            .send()
            .await?;

        api::expect_success(response).await
    }

    #[tracing::instrument(
        name = "catalog.service.create_category",
        skip(self, category),
        fields(name = %category.name),
        err
    )]
    async fn create_category(&self, category: NewCategory) -> Result<(), ApiError> {
        let response = self
            .api
            .request(Method::POST, "/api/categories")
            .json(&category)
            .send()
            .await?;

        api::expect_success(response).await
    }

    #[tracing::instrument(
        name = "catalog.service.update_category",
        skip(self, category),
        fields(category_id = %id),
        err
    )]
    async fn update_category(&self, id: CategoryId, category: NewCategory) -> Result<(), ApiError> {
        let response = self
            .api
            .request(Method::PUT, &format!("/api/categories/{id}"))
            .json(&category)
            .send()
            .await?;

        api::expect_success(response).await
    }

    #[tracing::instrument(
        name = "catalog.service.delete_category",
        skip(self),
        fields(category_id = %id),
        err
    )]
    async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        let response = self
            .api
            .request(Method::DELETE, &format!("/api/categories/{id}"))
            .send()
            .await?;

        api::expect_success(response).await
    }
}

#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch the full product list.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Fetch all categories.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Create a product.
    async fn create_product(&self, product: NewProduct) -> Result<(), ApiError>;

    /// Update an existing product.
    async fn update_product(&self, id: ProductId, update: ProductUpdate) -> Result<(), ApiError>;

    /// Delete a product.
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;

    /// Create a category.
    async fn create_category(&self, category: NewCategory) -> Result<(), ApiError>;

    /// Rename an existing category.
    async fn update_category(&self, id: CategoryId, category: NewCategory) -> Result<(), ApiError>;

    /// Delete a category.
    async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError>;
}
