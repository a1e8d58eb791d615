//! End-to-end checkout flows through the register, with mocked services.

use std::sync::Arc;

use mockall::predicate::always;
use rust_decimal::Decimal;
use testresult::TestResult;

use till::{
    domain::{
        cart::{CartError, LineKey},
        catalog::{MockCatalogService, Product, ProductId},
        sales::{MockSalesService, SalePayload},
    },
    register::{CheckoutError, Register},
};

fn product(id: i64, name: &str, price: Decimal, stock: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price,
        stock,
        barcode: None,
        category_id: None,
    }
}

fn catalog_returning(batches: Vec<Vec<Product>>) -> MockCatalogService {
    let mut catalog = MockCatalogService::new();
    let mut batches = batches.into_iter();

    catalog.expect_list_products().returning(move || {
        Ok(batches
            .next()
            .expect("list_products called more times than batches provided"))
    });

    catalog
}

#[tokio::test]
async fn stock_ceiling_holds_across_repeated_adds() -> TestResult {
    let stocked = product(1, "Fernet 750ml", Decimal::from(10), 3);

    let mut register = Register::new(
        Arc::new(catalog_returning(vec![vec![stocked]])),
        Arc::new(MockSalesService::new()),
    );
    register.refresh_catalog().await?;

    for _ in 0..3 {
        register.add_product(ProductId::new(1))?;
    }

    let result = register.add_product(ProductId::new(1));

    assert!(
        matches!(result, Err(CartError::StockExceeded { .. })),
        "expected StockExceeded, got {result:?}"
    );
    assert_eq!(
        register.cart().quantity_of(LineKey::Product(ProductId::new(1))),
        3
    );
    assert_eq!(register.total(), Decimal::from(30));

    Ok(())
}

#[tokio::test]
async fn duplicate_manual_items_yield_separate_lines() -> TestResult {
    let mut register = Register::new(
        Arc::new(catalog_returning(vec![vec![]])),
        Arc::new(MockSalesService::new()),
    );
    register.refresh_catalog().await?;

    register.add_manual("Bolsa", Decimal::from(50), 2)?;
    register.add_manual("Bolsa", Decimal::from(50), 2)?;

    assert_eq!(register.cart().len(), 2);
    assert_eq!(register.total(), Decimal::from(200));

    Ok(())
}

#[tokio::test]
async fn mixed_cart_payload_carries_ids_names_and_total() -> TestResult {
    let stocked = product(1, "Fernet 750ml", Decimal::from(10), 5);

    let mut sales = MockSalesService::new();
    sales
        .expect_submit_sale()
        .withf(|payload: &SalePayload| {
            payload.total == Decimal::from(25)
                && payload.cart.len() == 2
                && payload.cart[0].id == Some(ProductId::new(1))
                && payload.cart[1].id.is_none()
                && payload.cart[1].is_manual
        })
        .times(1)
        .returning(|_| Ok(()));

    let mut register = Register::new(
        Arc::new(catalog_returning(vec![
            vec![stocked.clone()],
            vec![stocked.clone()],
        ])),
        Arc::new(sales),
    );
    register.refresh_catalog().await?;

    register.add_product(ProductId::new(1))?;
    register.add_product(ProductId::new(1))?;
    register.add_manual("Bolsa", Decimal::from(5), 1)?;

    let receipt = register.finalize().await?;

    assert_eq!(receipt.total, Decimal::from(25));
    assert!(register.cart().is_empty());

    Ok(())
}

#[tokio::test]
async fn post_sale_refresh_picks_up_decremented_stock() -> TestResult {
    // The backend owns stock; after a sale of 2 units it reports stock 1.
    let before = product(1, "Fernet 750ml", Decimal::from(10), 3);
    let after = product(1, "Fernet 750ml", Decimal::from(10), 1);

    let mut sales = MockSalesService::new();
    sales
        .expect_submit_sale()
        .with(always())
        .returning(|_| Ok(()));

    let mut register = Register::new(
        Arc::new(catalog_returning(vec![vec![before], vec![after]])),
        Arc::new(sales),
    );
    register.refresh_catalog().await?;

    register.add_product(ProductId::new(1))?;
    register.add_product(ProductId::new(1))?;
    register.finalize().await?;

    let key = register.add_product(ProductId::new(1))?;

    let result = register.change_quantity(key, 1);

    assert!(
        matches!(result, Err(CartError::StockExceeded { stock: 1, .. })),
        "expected StockExceeded against refreshed stock, got {result:?}"
    );

    Ok(())
}

#[tokio::test]
async fn failed_submission_keeps_the_cart_for_retry() -> TestResult {
    let stocked = product(1, "Fernet 750ml", Decimal::from(10), 3);

    let mut sales = MockSalesService::new();
    let mut attempts = 0_u32;
    sales.expect_submit_sale().returning(move |_| {
        attempts += 1;

        if attempts == 1 {
            Err(till::api::ApiError::UnexpectedResponse(
                "request failed with status 502: bad gateway".to_string(),
            ))
        } else {
            Ok(())
        }
    });

    let mut register = Register::new(
        Arc::new(catalog_returning(vec![
            vec![stocked.clone()],
            vec![stocked.clone()],
        ])),
        Arc::new(sales),
    );
    register.refresh_catalog().await?;

    register.add_product(ProductId::new(1))?;

    let first = register.finalize().await;

    assert!(
        matches!(first, Err(CheckoutError::Api(_))),
        "expected Api error on first attempt"
    );
    assert_eq!(register.cart().len(), 1);

    // Retry with the cart untouched.
    let receipt = register.finalize().await?;

    assert_eq!(receipt.total, Decimal::from(10));
    assert!(register.cart().is_empty());

    Ok(())
}

#[tokio::test]
async fn driving_quantity_to_zero_removes_the_line() -> TestResult {
    let stocked = product(1, "Fernet 750ml", Decimal::from(10), 3);

    let mut register = Register::new(
        Arc::new(catalog_returning(vec![vec![stocked]])),
        Arc::new(MockSalesService::new()),
    );
    register.refresh_catalog().await?;

    let key = register.add_product(ProductId::new(1))?;
    register.add_product(ProductId::new(1))?;

    register.change_quantity(key, -2)?;

    assert!(register.cart().is_empty());

    // Absent keys are a no-op and leave the total unchanged.
    register.change_quantity(key, -1)?;

    assert_eq!(register.total(), Decimal::ZERO);

    Ok(())
}
