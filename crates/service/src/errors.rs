use rust_decimal::Decimal;
use thiserror::Error;

/// Business rule a create request broke. Always surfaces as [`ServiceError::InvalidArgument`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("price is required")]
    MissingPrice,
    #[error("negative price: {0}")]
    NegativePrice(Decimal),
    #[error("name must not be blank")]
    BlankName,
    #[error("unknown menu group: {0}")]
    UnknownMenuGroup(i64),
    #[error("menu must contain at least one item")]
    EmptyItems,
    #[error("quantity must be positive (product {product_id}, quantity {quantity})")]
    NonPositiveQuantity { product_id: i64, quantity: i64 },
    #[error("unknown product: {0}")]
    UnknownProduct(i64),
    #[error("items total overflows the price range")]
    TotalOverflow,
    #[error("price mismatch: declared {declared}, items total {total}")]
    PriceMismatch { declared: Decimal, total: Decimal },
    #[error("price has more than two decimal places: {0}")]
    PriceScale(Decimal),
    #[error("price out of range: {0}")]
    PriceOutOfRange(Decimal),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] Violation),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::InvalidArgument(v) => match v {
                Violation::MissingPrice => 1001,
                Violation::NegativePrice(_) => 1002,
                Violation::BlankName => 1003,
                Violation::UnknownMenuGroup(_) => 1004,
                Violation::EmptyItems => 1005,
                Violation::NonPositiveQuantity { .. } => 1006,
                Violation::UnknownProduct(_) => 1007,
                Violation::TotalOverflow => 1008,
                Violation::PriceMismatch { .. } => 1009,
                Violation::PriceScale(_) => 1010,
                Violation::PriceOutOfRange(_) => 1011,
            },
            ServiceError::Persistence(_) => 1200,
        }
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            ServiceError::InvalidArgument(v) => Some(v),
            ServiceError::Persistence(_) => None,
        }
    }
}

/// Model-level checks guard rows the service already validated; a failure there is a storage fault.
impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self { Self::Persistence(e.to_string()) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Persistence(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_violation() {
        let errs = [
            ServiceError::from(Violation::MissingPrice),
            Violation::NegativePrice(Decimal::NEGATIVE_ONE).into(),
            Violation::BlankName.into(),
            Violation::UnknownMenuGroup(1).into(),
            Violation::EmptyItems.into(),
            Violation::NonPositiveQuantity { product_id: 1, quantity: 0 }.into(),
            Violation::UnknownProduct(1).into(),
            Violation::TotalOverflow.into(),
            Violation::PriceMismatch { declared: Decimal::ONE, total: Decimal::TWO }.into(),
            Violation::PriceScale(Decimal::new(1005, 3)).into(),
            Violation::PriceOutOfRange(Decimal::MAX).into(),
            ServiceError::Persistence("down".into()),
        ];
        let mut codes: Vec<u16> = errs.iter().map(ServiceError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }

    #[test]
    fn model_errors_become_persistence_errors() {
        let e: ServiceError = models::errors::ModelError::Db("connection refused".into()).into();
        assert!(matches!(e, ServiceError::Persistence(ref m) if m.contains("connection refused")));
        assert!(e.violation().is_none());

        let e: ServiceError = models::errors::ModelError::Validation("quantity must be positive".into()).into();
        assert_eq!(e.code(), 1200);
        assert!(e.violation().is_none());
    }

    #[test]
    fn mismatch_message_names_both_amounts() {
        let e = ServiceError::from(Violation::PriceMismatch { declared: Decimal::from(16000), total: Decimal::from(17000) });
        assert_eq!(e.to_string(), "invalid argument: price mismatch: declared 16000, items total 17000");
    }
}
