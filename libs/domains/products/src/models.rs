use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page size used when the client omits the limit (or sends zero)
pub const DEFAULT_PAGE_LIMIT: u64 = 20;

/// Product entity - the fully populated record as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier, assigned by the store on creation and never
    /// client-supplied
    pub id: i32,
    /// Product name
    pub name: String,
    /// Product price
    pub price: f64,
    /// Whether the product is available
    pub available: bool,
}

/// DTO for creating a new product
///
/// Absent fields bind to their zero values before validation, so a missing
/// name is rejected as empty while a missing price passes as 0.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub available: bool,
}

/// Query parameters for listing products.
///
/// Absent parameters bind to zero. A zero limit is replaced by
/// [`DEFAULT_PAGE_LIMIT`] *before* the range check, so an explicit `limit=0`
/// cannot be told apart from an unset limit.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, IntoParams)]
pub struct PageQuery {
    /// Maximum number of items to return (1-100, default 20)
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: u64,
    /// Number of items to skip (0-100, default 0)
    #[validate(range(max = 100))]
    #[serde(default)]
    pub offset: u64,
}

impl PageQuery {
    /// Substitute the default page size for an unset (zero) limit.
    ///
    /// Must run before validation: the range check rejects zero.
    pub fn with_defaults(mut self) -> Self {
        if self.limit == 0 {
            self.limit = DEFAULT_PAGE_LIMIT;
        }
        self
    }
}

/// Response envelope for product listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductPage {
    /// Effective limit after default substitution
    pub limit: u64,
    /// Effective offset
    pub offset: u64,
    /// Products in this page, in primary-key order
    pub items: Vec<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_product_rejects_empty_name() {
        let input = CreateProduct {
            name: String::new(),
            price: 1.0,
            available: true,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let input = CreateProduct {
            name: "Widget".to_string(),
            price: -0.01,
            available: false,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_product_accepts_zero_price() {
        let input = CreateProduct {
            name: "Widget".to_string(),
            price: 0.0,
            available: false,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_page_query_zero_limit_gets_default() {
        let page = PageQuery::default().with_defaults();
        assert_eq!(page.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(page.offset, 0);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_page_query_explicit_limit_is_kept() {
        let page = PageQuery {
            limit: 2,
            offset: 4,
        }
        .with_defaults();
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 4);
    }

    #[test]
    fn test_page_query_rejects_out_of_range() {
        let over_limit = PageQuery {
            limit: 101,
            offset: 0,
        }
        .with_defaults();
        assert!(over_limit.validate().is_err());

        let over_offset = PageQuery {
            limit: 20,
            offset: 101,
        }
        .with_defaults();
        assert!(over_offset.validate().is_err());
    }

    #[test]
    fn test_create_product_missing_fields_bind_to_zero_values() {
        let input: CreateProduct = serde_json::from_str(r#"{"name":"Widget"}"#).unwrap();
        assert_eq!(input.price, 0.0);
        assert!(!input.available);
        assert!(input.validate().is_ok());
    }
}
