use serde::Deserialize;

/// A catalog entry as delivered by the catalog endpoint.
///
/// `selected_amount` never appears on the wire. It is owned by the cart and
/// moves units to and from `stock`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub stock: u32,
    pub category: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
    pub images: Vec<String>,
    #[serde(skip)]
    pub selected_amount: Option<u32>,
}

impl Product {
    /// Creates a product with empty descriptive fields.
    ///
    /// # Arguments
    /// * `id` - Catalog identifier
    /// * `title` - Display title
    /// * `price` - Unit price
    /// * `stock` - Units available for selection
    pub fn new(id: u64, title: impl Into<String>, price: f64, stock: u32) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            price,
            stock,
            category: String::new(),
            thumbnail_url: String::new(),
            images: Vec::new(),
            selected_amount: None,
        }
    }

    /// Units in the cart, treating an absent amount as zero.
    pub fn selected(&self) -> u32 {
        self.selected_amount.unwrap_or(0)
    }

    /// Units owned by this product across stock and cart. Constant under
    /// increment/decrement.
    pub fn units(&self) -> u32 {
        self.stock + self.selected()
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.selected())
    }
}

/// Envelope returned by `GET /products`.
///
/// Only `products` is consumed. The paging fields are decoded but a single
/// fetch always covers the whole catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductCatalogResponse {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalog_ignores_unknown_fields() {
        let body = r#"{
            "products": [{
                "id": 1,
                "title": "iPhone 9",
                "description": "An apple mobile",
                "price": 549,
                "discountPercentage": 12.96,
                "rating": 4.69,
                "stock": 94,
                "brand": "Apple",
                "category": "smartphones",
                "thumbnail": "https://cdn.example/1/thumbnail.jpg",
                "images": ["https://cdn.example/1/1.jpg", "https://cdn.example/1/2.jpg"]
            }],
            "total": 100,
            "skip": 0,
            "limit": 30
        }"#;

        let response: ProductCatalogResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total, 100);
        assert_eq!(response.limit, 30);

        let product = &response.products[0];
        assert_eq!(product.title, "iPhone 9");
        assert_eq!(product.price, 549.0);
        assert_eq!(product.stock, 94);
        assert_eq!(product.thumbnail_url, "https://cdn.example/1/thumbnail.jpg");
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.selected_amount, None);
    }

    #[test]
    fn test_selected_amount_is_never_read_from_the_wire() {
        let body = r#"{
            "id": 7, "title": "Lamp", "description": "", "price": 2.5,
            "stock": 3, "category": "home", "thumbnail": "", "images": [],
            "selected_amount": 9, "selectedAmount": 9
        }"#;
        let product: Product = serde_json::from_str(body).unwrap();
        assert_eq!(product.selected_amount, None);
        assert_eq!(product.units(), 3);
    }

    #[test]
    fn test_line_total() {
        let mut product = Product::new(1, "Pen", 1.5, 10);
        assert_eq!(product.line_total(), 0.0);
        product.selected_amount = Some(4);
        assert_eq!(product.line_total(), 6.0);
    }
}
