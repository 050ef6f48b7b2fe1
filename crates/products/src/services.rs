//! In-memory product catalog.
//!
//! The store is a plain list. Identifiers are assigned by scanning for the current maximum and
//! adding one; nothing is persisted beyond the lifetime of the process.

use crate::models::{Product, ProductInput};
use parking_lot::RwLock;
use rust_decimal::Decimal;

/// Product catalog operations over an in-process list.
#[derive(Debug)]
pub struct ProductService {
    products: RwLock<Vec<Product>>,
}

impl ProductService {
    /// Creates a service seeded with the demo catalog (`Laptop`, `Phone`).
    pub fn new() -> Self {
        Self::with_products(vec![
            Product {
                id: 1,
                name: "Laptop".into(),
                price: Decimal::new(120050, 2),
                in_stock: true,
            },
            Product {
                id: 2,
                name: "Phone".into(),
                price: Decimal::new(65000, 2),
                in_stock: false,
            },
        ])
    }

    /// Creates a service over an explicit set of products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    pub fn get_all(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    /// Returns the first product whose id matches, if any.
    pub fn get_by_id(&self, id: i32) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    /// Stores a new product under `max(id) + 1` and returns it.
    ///
    /// An empty catalog hands out id 1.
    pub fn add(&self, input: ProductInput) -> Product {
        let mut products = self.products.write();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = Product::from_input(id, input);
        products.push(product.clone());
        tracing::info!(id, name = %product.name, "product added");
        product
    }

    /// Overwrites name, price and stock flag of an existing product.
    ///
    /// Returns `false` when no product has the given id.
    pub fn update(&self, id: i32, input: ProductInput) -> bool {
        let mut products = self.products.write();
        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply(input);
                tracing::info!(id, "product updated");
                true
            }
            None => false,
        }
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
