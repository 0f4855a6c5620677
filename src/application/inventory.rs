//! Inventory use cases: stock, purchases and earnings

use crate::domain::inventory::{InventoryDocument, InventorySummary, Product, Sale, StockChange};
use crate::domain::validate::timestamp_now;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, StoreSession, WorkspaceRepository};

/// Service for the store inventory manager
pub struct InventoryService {
    session: StoreSession<InventoryDocument>,
}

impl InventoryService {
    pub fn new(session: StoreSession<InventoryDocument>) -> Self {
        InventoryService { session }
    }

    /// Open the inventory data file named in the workspace config
    pub fn open(repository: &FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let store = repository.store(&config.files.inventory);
        Ok(Self::new(StoreSession::open(store)))
    }

    /// Add a product or restock one with the same name
    pub fn add_product(&mut self, name: &str, price: f64, quantity: u64) -> Result<StockChange> {
        let change = self
            .session
            .commit(|doc| doc.add_product(name, price, quantity))?;
        match &change {
            StockChange::Created(p) => tracing::info!(product_id = p.id, "Added product"),
            StockChange::Restocked(p) => {
                tracing::info!(product_id = p.id, quantity = p.quantity, "Restocked product")
            }
        }
        Ok(change)
    }

    /// Sell `quantity` units. Returns the sale and the product's remaining stock.
    pub fn purchase(&mut self, product_id: u64, quantity: u64) -> Result<(Sale, u64)> {
        let (sale, remaining) = self.session.commit(|doc| {
            let sale = doc.purchase(product_id, quantity, timestamp_now())?;
            let remaining = doc
                .products
                .find_by_id(product_id)
                .map(|p| p.quantity)
                .unwrap_or_default();
            Ok((sale, remaining))
        })?;
        tracing::info!(
            sale_id = sale.id,
            product_id = product_id,
            amount = sale.amount,
            "Processed purchase"
        );
        Ok((sale, remaining))
    }

    pub fn products(&self) -> &[Product] {
        self.session.document().products.as_slice()
    }

    pub fn summary(&self) -> InventorySummary {
        self.session.document().summary()
    }
}
