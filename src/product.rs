//! Product records and draft validation

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};

/// A catalog record
///
/// Contains the six merchant-supplied fields plus the store-assigned `id`.
/// Field declaration order is the on-disk order; the backing file holds a
/// pretty-printed JSON array of these records and must round-trip losslessly
/// through parse/reserialize.
///
/// # Examples
///
/// ```rust,no_run
/// use stockroom::{Catalog, ProductDraft};
///
/// # fn main() -> stockroom::Result<()> {
/// let mut catalog = Catalog::open("products.json")?;
/// let product = catalog.add_product(ProductDraft::new(
///     "Keyboard", "Low-profile mechanical keyboard", 89.5, "images/kbd.jpg", "KBD-01", 12,
/// ))?;
/// println!("assigned id {}", product.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, unique and immutable once assigned
    pub id: u64,

    /// Display name
    pub title: String,

    /// Longer free-form description
    pub description: String,

    /// Unit price; finite and non-zero at creation
    pub price: f64,

    /// Path or URL of a thumbnail image
    pub thumbnail: String,

    /// Merchant-assigned code, unique across currently-stored products
    pub code: String,

    /// Units on hand; non-zero at creation
    pub stock: u32,
}

/// The caller-supplied fields of a product (everything but `id`)
///
/// Consumed by [`Catalog::add_product`](crate::Catalog::add_product), which
/// validates it and assigns the id, and by
/// [`Catalog::update_product`](crate::Catalog::update_product), which replaces
/// every stored field except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

impl ProductDraft {
    /// Create a draft from the six product fields
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: u32,
    ) -> Self {
        ProductDraft {
            title: title.into(),
            description: description.into(),
            price,
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock,
        }
    }

    /// Check that every field is present
    ///
    /// Text fields must be non-empty, `price` must be finite and non-zero,
    /// `stock` must be non-zero. There is no schema validation beyond these
    /// presence checks.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` naming the first field that fails the check.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(CatalogError::MissingField("title"));
        }
        if self.description.is_empty() {
            return Err(CatalogError::MissingField("description"));
        }
        if !self.price.is_finite() || self.price == 0.0 {
            return Err(CatalogError::MissingField("price"));
        }
        if self.thumbnail.is_empty() {
            return Err(CatalogError::MissingField("thumbnail"));
        }
        if self.code.is_empty() {
            return Err(CatalogError::MissingField("code"));
        }
        if self.stock == 0 {
            return Err(CatalogError::MissingField("stock"));
        }
        Ok(())
    }

    /// Attach an id, producing the stored record
    pub(crate) fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new("Widget", "A widget", 9.99, "images/widget.jpg", "WID-1", 3)
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_empty_text_fields_rejected() {
        for field in ["title", "description", "thumbnail", "code"] {
            let mut d = draft();
            match field {
                "title" => d.title = String::new(),
                "description" => d.description = String::new(),
                "thumbnail" => d.thumbnail = String::new(),
                "code" => d.code = String::new(),
                _ => unreachable!(),
            }
            match d.validate() {
                Err(CatalogError::MissingField(name)) => assert_eq!(name, field),
                other => panic!("expected MissingField({}), got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut d = draft();
        d.price = 0.0;
        assert!(matches!(
            d.validate(),
            Err(CatalogError::MissingField("price"))
        ));
    }

    #[test]
    fn test_non_finite_price_rejected() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut d = draft();
            d.price = price;
            assert!(matches!(
                d.validate(),
                Err(CatalogError::MissingField("price"))
            ));
        }
    }

    #[test]
    fn test_zero_stock_rejected() {
        let mut d = draft();
        d.stock = 0;
        assert!(matches!(
            d.validate(),
            Err(CatalogError::MissingField("stock"))
        ));
    }

    #[test]
    fn test_serialized_field_order_is_stable() {
        let product = draft().into_product(7);
        let json = serde_json::to_string(&product).unwrap();
        let keys = ["id", "title", "description", "price", "thumbnail", "code", "stock"];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "field order changed: {}", json);
    }

    #[test]
    fn test_draft_id_attachment() {
        let product = draft().into_product(42);
        assert_eq!(product.id, 42);
        assert_eq!(product.title, "Widget");
        assert_eq!(product.stock, 3);
    }
}
