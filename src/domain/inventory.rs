//! Products, sales and running earnings

use crate::domain::record::{reconcile, Collection, Counter, Document, Record};
use crate::domain::validate::{non_negative_amount, positive_count, required_text};
use crate::error::{Result, StorekeepError};
use serde::{Deserialize, Serialize};

const FIRST_PRODUCT_ID: u64 = 1001;
const FIRST_SALE_ID: u64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub quantity: u64,
}

impl Record for Product {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Product {
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// One completed purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: u64,
    pub product_id: u64,
    pub product_name: String,
    pub quantity: u64,
    pub unit_price: f64,
    pub amount: f64,
    pub time: String,
}

impl Record for Sale {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Outcome of adding stock by name
#[derive(Debug, Clone, PartialEq)]
pub enum StockChange {
    Created(Product),
    Restocked(Product),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventorySummary {
    pub total_earnings: f64,
    pub stock_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(default)]
    pub products: Collection<Product>,
    /// Sum of every sale amount, updated at purchase time
    #[serde(default)]
    pub total_earnings: f64,
    #[serde(default = "InventoryDocument::product_counter")]
    pub next_product_id: Counter,
    #[serde(default)]
    pub sales: Collection<Sale>,
    #[serde(default = "InventoryDocument::sale_counter")]
    pub next_sale_id: Counter,
}

impl Default for InventoryDocument {
    fn default() -> Self {
        InventoryDocument {
            products: Collection::default(),
            total_earnings: 0.0,
            next_product_id: Self::product_counter(),
            sales: Collection::default(),
            next_sale_id: Self::sale_counter(),
        }
    }
}

impl Document for InventoryDocument {
    const NAME: &'static str = "inventory";

    fn reconcile_counters(&mut self) {
        reconcile(&mut self.next_product_id, &self.products);
        reconcile(&mut self.next_sale_id, &self.sales);
    }
}

impl InventoryDocument {
    fn product_counter() -> Counter {
        Counter::starting_at(FIRST_PRODUCT_ID)
    }

    fn sale_counter() -> Counter {
        Counter::starting_at(FIRST_SALE_ID)
    }

    /// Add a new product, or restock an existing one matched by name (case-insensitive).
    ///
    /// A restock keeps the stored price; `price` only applies to new products.
    pub fn add_product(&mut self, name: &str, price: f64, quantity: u64) -> Result<StockChange> {
        let name = required_text("Product name", name)?;
        let price = non_negative_amount("Price", price)?;

        let lowered = name.to_lowercase();
        if let Some(existing) = self
            .products
            .find_mut(|p| p.name.to_lowercase() == lowered)
        {
            existing.quantity = existing.quantity.checked_add(quantity).ok_or_else(|| {
                StorekeepError::InvalidInput(format!(
                    "Restocking '{}' by {} exceeds the largest storable quantity",
                    existing.name, quantity
                ))
            })?;
            return Ok(StockChange::Restocked(existing.clone()));
        }

        let id = self.next_product_id.next_id();
        let product = self
            .products
            .add(Product {
                id,
                name,
                price,
                quantity,
            })
            .clone();
        Ok(StockChange::Created(product))
    }

    /// Sell `quantity` units of a product.
    ///
    /// Stock and earnings move by exactly the sale; nothing changes on rejection.
    pub fn purchase(&mut self, product_id: u64, quantity: u64, time: String) -> Result<Sale> {
        let quantity = positive_count("Quantity", quantity)?;
        let product = self
            .products
            .find_by_id_mut(product_id)
            .ok_or(StorekeepError::RecordNotFound {
                kind: "product",
                id: product_id,
            })?;

        if quantity > product.quantity {
            return Err(StorekeepError::Rejected(format!(
                "Insufficient stock for '{}'. Only {} available.",
                product.name, product.quantity
            )));
        }

        let unit_price = product.price;
        let product_name = product.name.clone();
        let amount = quantity as f64 * unit_price;
        product.quantity -= quantity;
        self.total_earnings += amount;

        let id = self.next_sale_id.next_id();
        let sale = self.sales.add(Sale {
            id,
            product_id,
            product_name,
            quantity,
            unit_price,
            amount,
            time,
        });
        Ok(sale.clone())
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary {
            total_earnings: self.total_earnings,
            stock_value: self.products.iter().map(Product::stock_value).sum(),
        }
    }

    /// Starter data for a fresh workspace
    pub fn seeded() -> Result<Self> {
        let mut doc = InventoryDocument::default();
        doc.add_product("Laptop Pro", 1200.00, 5)?;
        doc.add_product("Wireless Mouse", 25.50, 50)?;
        Ok(doc)
    }
}
