use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use super::domain::{CreateProductInput, NewProduct, Product};
use super::repository::ProductRepository;
use crate::errors::{ServiceError, Violation};

/// Product business service independent of web framework
pub struct ProductService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a product.
    ///
    /// # Examples
    /// ```
    /// use service::product::{service::ProductService, repository::mock::MockProductRepository};
    /// use service::product::domain::CreateProductInput;
    /// use rust_decimal::Decimal;
    /// use std::sync::Arc;
    /// let svc = ProductService::new(Arc::new(MockProductRepository::default()));
    /// let input = CreateProductInput { name: "mango".into(), price: Some(Decimal::from(1000)) };
    /// let product = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(product.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, ServiceError> {
        let price = validate_price(input.price)?;
        let name = input.name.trim();
        if name.is_empty() {
            debug!("product rejected: blank name");
            return Err(Violation::BlankName.into());
        }

        let product = self.repo.save(NewProduct { name: name.to_string(), price }).await?;
        info!(product_id = product.id, price = %product.price, "product_created");
        Ok(product)
    }

    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_all().await
    }
}

/// Decimal places kept by the `DECIMAL(19, 2)` price columns.
pub const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound of the price columns (17 integer digits).
pub fn price_limit() -> Decimal {
    Decimal::from(100_000_000_000_000_000_i64)
}

/// Price must be present, non-negative and storable without rounding.
pub(crate) fn validate_price(price: Option<Decimal>) -> Result<Decimal, Violation> {
    match price {
        None => Err(Violation::MissingPrice),
        Some(p) if p < Decimal::ZERO => Err(Violation::NegativePrice(p)),
        Some(p) if p.normalize().scale() > PRICE_SCALE => Err(Violation::PriceScale(p)),
        Some(p) if p >= price_limit() => Err(Violation::PriceOutOfRange(p)),
        Some(p) => Ok(p),
    }
}
