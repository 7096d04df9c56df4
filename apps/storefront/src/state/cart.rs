//! # Cart Manager
//!
//! Owns the session cart and applies the three cart operations.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Manager Operations                              │
//! │                                                                         │
//! │  Shopper Action        Operation                  Lookups              │
//! │  ──────────────        ─────────                  ───────              │
//! │                                                                         │
//! │  "Add to cart" ──────► add_product(id) ─────────► stock, [product]     │
//! │                                                                         │
//! │  +/- buttons ────────► update_product_amount() ──► stock               │
//! │                                                                         │
//! │  Trash icon ─────────► remove_product(id) ──────► (none)               │
//! │                                                                         │
//! │  Each operation: compute new Cart ──► storage.set ──► install          │
//! │  Any failure:    cart untouched   ──► one Notice to the notifier       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Operations take `&mut self`: whoever owns the manager serializes them.
//! A stock reading can still be stale by the time the commit lands; nothing
//! here re-validates against concurrent changes on the server.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use rocketshoes_core::{
    Cart, CartError, CartOperation, CartResult, CartTotals, CatalogService, InventoryService,
    Notice, Notifier, Product, ProductId, ServiceError, SlotStorage, UpdateProductAmount,
    DEFAULT_CART_KEY,
};

use crate::state::CartSettings;

/// The collaborators a cart manager talks to.
#[derive(Clone)]
pub struct CartServices {
    pub inventory: Arc<dyn InventoryService>,
    pub catalog: Arc<dyn CatalogService>,
    pub storage: Arc<dyn SlotStorage>,
    pub notifier: Arc<dyn Notifier>,
}

/// Cart behavior switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartOptions {
    /// Slot key the cart is persisted under.
    pub storage_key: String,

    /// Check stock before adding a product that is not yet in the cart.
    pub check_stock_on_first_add: bool,
}

impl Default for CartOptions {
    fn default() -> Self {
        CartOptions {
            storage_key: DEFAULT_CART_KEY.to_string(),
            check_stock_on_first_add: false,
        }
    }
}

impl From<&CartSettings> for CartOptions {
    fn from(settings: &CartSettings) -> Self {
        CartOptions {
            storage_key: settings.storage_key.clone(),
            check_stock_on_first_add: settings.check_stock_on_first_add,
        }
    }
}

/// Session cart plus the services its operations consult.
pub struct CartManager {
    cart: Cart,
    options: CartOptions,
    services: CartServices,
}

impl CartManager {
    /// Loads the persisted cart, or starts empty.
    ///
    /// A missing slot, a storage read failure, or a slot that does not
    /// decode to a valid cart all yield an empty cart. Only the last two
    /// are logged.
    pub async fn load(services: CartServices, options: CartOptions) -> Self {
        let key = options.storage_key.as_str();

        let cart = match services.storage.get(key).await {
            Ok(Some(value)) => Cart::from_slot_value(&value).unwrap_or_else(|e| {
                warn!(key = %key, error = %e, "Discarding unreadable persisted cart");
                Cart::new()
            }),
            Ok(None) => {
                debug!(key = %key, "No persisted cart, starting empty");
                Cart::new()
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read persisted cart, starting empty");
                Cart::new()
            }
        };

        info!(items = cart.len(), "Cart loaded");

        CartManager {
            cart,
            options,
            services,
        }
    }

    // =========================================================================
    // Read Access
    // =========================================================================

    /// Current cart lines.
    pub fn cart(&self) -> &[Product] {
        self.cart.items()
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.cart.amount_of(product_id)
    }

    /// Amount per product id, for badging product listings.
    pub fn amounts(&self) -> BTreeMap<ProductId, i64> {
        self.cart.amounts()
    }

    // =========================================================================
    // UI-facing Operations (failures become notices)
    // =========================================================================

    /// Adds one unit of a product. Failures are reported to the notifier.
    pub async fn add_product(&mut self, product_id: ProductId) {
        if let Err(e) = self.try_add_product(product_id).await {
            self.report(CartOperation::Add, product_id, &e);
        }
    }

    /// Removes a product's line. Failures are reported to the notifier.
    pub async fn remove_product(&mut self, product_id: ProductId) {
        if let Err(e) = self.try_remove_product(product_id).await {
            self.report(CartOperation::Remove, product_id, &e);
        }
    }

    /// Sets a product's amount. Failures are reported to the notifier.
    pub async fn update_product_amount(&mut self, request: UpdateProductAmount) {
        if let Err(e) = self.try_update_product_amount(request).await {
            self.report(CartOperation::UpdateAmount, request.product_id, &e);
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds one unit of a product.
    ///
    /// ## Decision Order
    /// 1. Is the product already in the cart?
    /// 2. Fetch its stock (always, even for a new product)
    /// 3. In cart: amount + 1 must fit the stock
    /// 4. Not in cart: fetch the product and append it with amount 1
    pub async fn try_add_product(&mut self, product_id: ProductId) -> CartResult<()> {
        debug!(product_id = %product_id, "add_product");

        let in_cart = self.cart.contains(product_id);
        let stock = self.services.inventory.stock(product_id).await?;

        let next = if in_cart {
            self.cart.increment(product_id, &stock)?
        } else {
            if self.options.check_stock_on_first_add {
                stock.ensure_available(1)?;
            }

            let product = self.services.catalog.product(product_id).await?;
            if product.id != product_id {
                return Err(ServiceError::UnexpectedProduct {
                    requested: product_id,
                    returned: product.id,
                }
                .into());
            }

            self.cart.with_new_product(product)
        };

        self.commit(next).await
    }

    /// Removes a product's line.
    ///
    /// ## Returns
    /// - `Err(CartError::NotInCart)` if the product has no line
    pub async fn try_remove_product(&mut self, product_id: ProductId) -> CartResult<()> {
        debug!(product_id = %product_id, "remove_product");

        let next = self.cart.without(product_id)?;
        self.commit(next).await
    }

    /// Sets a product's line to an exact amount.
    ///
    /// ## Behavior
    /// - `amount <= 0`: nothing happens, no lookup, no commit
    /// - `amount > stock`: `Err(CartError::OutOfStock)`
    /// - product not in the cart: the unchanged cart is committed
    pub async fn try_update_product_amount(
        &mut self,
        request: UpdateProductAmount,
    ) -> CartResult<()> {
        let UpdateProductAmount { product_id, amount } = request;
        debug!(product_id = %product_id, amount = amount, "update_product_amount");

        if amount <= 0 {
            return Ok(());
        }

        let stock = self.services.inventory.stock(product_id).await?;
        let next = self.cart.with_amount(product_id, amount, &stock)?;

        if !self.cart.contains(product_id) {
            debug!(product_id = %product_id, "Product not in cart, amount update has no effect");
        }

        self.commit(next).await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Persists `next`, then installs it. Memory is untouched if the write
    /// fails.
    async fn commit(&mut self, next: Cart) -> CartResult<()> {
        let value = next.to_slot_value()?;
        self.services
            .storage
            .set(&self.options.storage_key, value)
            .await?;

        self.cart = next;
        info!(items = self.cart.len(), "Cart committed");
        Ok(())
    }

    fn report(&self, operation: CartOperation, product_id: ProductId, err: &CartError) {
        match err {
            CartError::OutOfStock { .. } => {
                warn!(%operation, product_id = %product_id, error = %err, "Cart operation rejected")
            }
            _ => error!(%operation, product_id = %product_id, error = %err, "Cart operation failed"),
        }

        self.services.notifier.notify(Notice::for_failure(operation, err));
    }
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("cart", &self.cart)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rocketshoes_core::notify::{
        ADD_FAILED_MESSAGE, OUT_OF_STOCK_MESSAGE, REMOVE_FAILED_MESSAGE, UPDATE_FAILED_MESSAGE,
    };
    use rocketshoes_core::{
        MemoryStorage, Money, NoticeLevel, NoticeLog, ServiceResult, Stock, StorageError,
        StorageResult,
    };
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    const KEY: &str = "@RocketShoes:cart";

    /// In-memory inventory and catalog. Ids without stock answer NotFound;
    /// ids in `broken` answer a network error.
    #[derive(Default)]
    struct FakeApi {
        stock: Mutex<HashMap<ProductId, i64>>,
        broken: Vec<ProductId>,
        /// Stock answers normally; the product lookup fails.
        broken_catalog: Vec<ProductId>,
        /// The product lookup answers with a different id.
        mismatched: Vec<ProductId>,
        stock_calls: AtomicUsize,
    }

    impl FakeApi {
        fn with_stock(pairs: &[(ProductId, i64)]) -> Self {
            FakeApi {
                stock: Mutex::new(pairs.iter().copied().collect()),
                ..Default::default()
            }
        }

        fn set_stock(&self, id: ProductId, amount: i64) {
            self.stock.lock().unwrap().insert(id, amount);
        }
    }

    fn catalog_product(id: ProductId) -> Product {
        Product {
            id,
            title: format!("Tênis {}", id),
            price: Money::from_cents(10_000 + id as i64),
            image: format!("https://example.com/{}.jpg", id),
            amount: 0,
        }
    }

    #[async_trait]
    impl InventoryService for FakeApi {
        async fn stock(&self, product_id: ProductId) -> ServiceResult<Stock> {
            self.stock_calls.fetch_add(1, Ordering::SeqCst);
            if self.broken.contains(&product_id) {
                return Err(ServiceError::Network("connection refused".into()));
            }
            self.stock
                .lock()
                .unwrap()
                .get(&product_id)
                .map(|&amount| Stock {
                    id: product_id,
                    amount,
                })
                .ok_or_else(|| ServiceError::not_found("Stock", product_id))
        }
    }

    #[async_trait]
    impl CatalogService for FakeApi {
        async fn product(&self, product_id: ProductId) -> ServiceResult<Product> {
            if self.broken_catalog.contains(&product_id) {
                return Err(ServiceError::Status {
                    status: 503,
                    message: "catalog unavailable".into(),
                });
            }
            if self.mismatched.contains(&product_id) {
                return Ok(catalog_product(product_id + 1000));
            }
            if self.stock.lock().unwrap().contains_key(&product_id) {
                Ok(catalog_product(product_id))
            } else {
                Err(ServiceError::not_found("Product", product_id))
            }
        }
    }

    /// Storage whose writes can be switched to fail.
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: AtomicBool,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl SlotStorage for FlakyStorage {
        async fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: String) -> StorageResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::Backend("disk full".into()));
            }
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value).await
        }
    }

    struct Harness {
        api: Arc<FakeApi>,
        storage: Arc<FlakyStorage>,
        notices: Arc<NoticeLog>,
        manager: CartManager,
    }

    async fn harness_with(api: FakeApi, storage: FlakyStorage, options: CartOptions) -> Harness {
        let api = Arc::new(api);
        let storage = Arc::new(storage);
        let notices = Arc::new(NoticeLog::new());

        let services = CartServices {
            inventory: api.clone(),
            catalog: api.clone(),
            storage: storage.clone(),
            notifier: notices.clone(),
        };
        let manager = CartManager::load(services, options).await;

        Harness {
            api,
            storage,
            notices,
            manager,
        }
    }

    async fn harness(stock: &[(ProductId, i64)]) -> Harness {
        harness_with(
            FakeApi::with_stock(stock),
            FlakyStorage::default(),
            CartOptions::default(),
        )
        .await
    }

    fn persisted(h: &Harness) -> Cart {
        let value = h.storage.inner.peek(KEY).expect("cart was persisted");
        Cart::from_slot_value(&value).unwrap()
    }

    fn update(product_id: ProductId, amount: i64) -> UpdateProductAmount {
        UpdateProductAmount { product_id, amount }
    }

    // -------------------------------------------------------------------------
    // Initialization
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_load_empty_when_no_slot() {
        let h = harness(&[]).await;
        assert!(h.manager.cart().is_empty());
    }

    #[tokio::test]
    async fn test_load_persisted_cart() {
        let stored = Cart::new()
            .with_new_product(catalog_product(1))
            .with_new_product(catalog_product(2));
        let storage = FlakyStorage {
            inner: MemoryStorage::with_slot(KEY, stored.to_slot_value().unwrap()),
            ..Default::default()
        };

        let h = harness_with(FakeApi::default(), storage, CartOptions::default()).await;

        assert_eq!(h.manager.cart(), stored.items());
    }

    #[tokio::test]
    async fn test_load_corrupt_slot_starts_empty() {
        let storage = FlakyStorage {
            inner: MemoryStorage::with_slot(KEY, "{not a cart"),
            ..Default::default()
        };

        let h = harness_with(FakeApi::default(), storage, CartOptions::default()).await;

        assert!(h.manager.cart().is_empty());
        assert!(h.notices.is_empty());
    }

    #[tokio::test]
    async fn test_load_uses_configured_key() {
        let stored = Cart::new().with_new_product(catalog_product(5));
        let storage = FlakyStorage {
            inner: MemoryStorage::with_slot("cart-v2", stored.to_slot_value().unwrap()),
            ..Default::default()
        };
        let options = CartOptions {
            storage_key: "cart-v2".to_string(),
            ..Default::default()
        };

        let h = harness_with(FakeApi::default(), storage, options).await;

        assert_eq!(h.manager.amount_of(5), 1);
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_new_product() {
        let mut h = harness(&[(1, 5)]).await;

        h.manager.add_product(1).await;

        assert_eq!(h.manager.cart().len(), 1);
        assert_eq!(h.manager.cart()[0], catalog_product(1).with_amount(1));
        assert_eq!(persisted(&h).items(), h.manager.cart());
        assert!(h.notices.is_empty());
    }

    #[tokio::test]
    async fn test_add_existing_increments_by_one() {
        let mut h = harness(&[(1, 5), (2, 5)]).await;
        h.manager.add_product(1).await;
        h.manager.add_product(2).await;

        h.manager.add_product(1).await;

        assert_eq!(h.manager.amount_of(1), 2);
        assert_eq!(h.manager.amount_of(2), 1);
        assert_eq!(h.manager.cart().len(), 2);
        assert_eq!(persisted(&h).amount_of(1), 2);
    }

    #[tokio::test]
    async fn test_add_existing_over_stock_warns() {
        let mut h = harness(&[(1, 1)]).await;
        h.manager.add_product(1).await;
        let writes = h.storage.writes.load(Ordering::SeqCst);

        h.manager.add_product(1).await;

        assert_eq!(h.manager.amount_of(1), 1);
        assert_eq!(h.storage.writes.load(Ordering::SeqCst), writes);
        assert_eq!(h.notices.drain(), vec![Notice::warning(OUT_OF_STOCK_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_add_new_product_skips_stock_check_by_default() {
        let mut h = harness(&[(1, 0)]).await;

        h.manager.add_product(1).await;

        assert_eq!(h.manager.amount_of(1), 1);
        assert!(h.notices.is_empty());
    }

    #[tokio::test]
    async fn test_add_new_product_with_first_add_check() {
        let options = CartOptions {
            check_stock_on_first_add: true,
            ..Default::default()
        };
        let mut h = harness_with(
            FakeApi::with_stock(&[(1, 0)]),
            FlakyStorage::default(),
            options,
        )
        .await;

        h.manager.add_product(1).await;

        assert!(h.manager.cart().is_empty());
        assert_eq!(h.notices.drain(), vec![Notice::warning(OUT_OF_STOCK_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_add_unknown_product_fails() {
        let mut h = harness(&[]).await;

        h.manager.add_product(404).await;

        assert!(h.manager.cart().is_empty());
        assert!(h.storage.inner.peek(KEY).is_none());
        assert_eq!(h.notices.drain(), vec![Notice::error(ADD_FAILED_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_add_with_network_failure() {
        let api = FakeApi {
            broken: vec![1],
            ..FakeApi::with_stock(&[(1, 5)])
        };
        let mut h = harness_with(api, FlakyStorage::default(), CartOptions::default()).await;

        let err = h.manager.try_add_product(1).await.unwrap_err();

        assert!(matches!(err, CartError::Service(ServiceError::Network(_))));
        assert!(h.manager.cart().is_empty());
        // try_ forms never notify
        assert!(h.notices.is_empty());
    }

    #[tokio::test]
    async fn test_add_catalog_failure_leaves_cart_unchanged() {
        let api = FakeApi {
            broken_catalog: vec![2],
            ..FakeApi::with_stock(&[(1, 5), (2, 5)])
        };
        let mut h = harness_with(api, FlakyStorage::default(), CartOptions::default()).await;
        h.manager.add_product(1).await;
        let writes = h.storage.writes.load(Ordering::SeqCst);

        h.manager.add_product(2).await;

        assert_eq!(h.api.stock_calls.load(Ordering::SeqCst), 2);
        assert_eq!(h.manager.cart(), &[catalog_product(1).with_amount(1)]);
        assert_eq!(h.storage.writes.load(Ordering::SeqCst), writes);
        assert_eq!(h.notices.drain(), vec![Notice::error(ADD_FAILED_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_add_catalog_id_mismatch() {
        let api = FakeApi {
            mismatched: vec![3],
            ..FakeApi::with_stock(&[(3, 5)])
        };
        let mut h = harness_with(api, FlakyStorage::default(), CartOptions::default()).await;

        let err = h.manager.try_add_product(3).await.unwrap_err();
        assert!(matches!(
            err,
            CartError::Service(ServiceError::UnexpectedProduct {
                requested: 3,
                returned: 1003
            })
        ));

        h.manager.add_product(3).await;

        assert!(h.manager.cart().is_empty());
        assert!(h.storage.inner.peek(KEY).is_none());
        assert_eq!(h.storage.writes.load(Ordering::SeqCst), 0);
        assert_eq!(h.notices.drain(), vec![Notice::error(ADD_FAILED_MESSAGE)]);
    }

    // -------------------------------------------------------------------------
    // remove_product
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_remove_present() {
        let mut h = harness(&[(1, 5), (2, 5)]).await;
        h.manager.add_product(1).await;
        h.manager.add_product(2).await;

        h.manager.remove_product(1).await;

        assert_eq!(h.manager.cart().len(), 1);
        assert_eq!(h.manager.amount_of(1), 0);
        assert_eq!(persisted(&h).len(), 1);
        assert!(h.notices.is_empty());
    }

    #[tokio::test]
    async fn test_remove_absent_fails() {
        let mut h = harness(&[(1, 5)]).await;
        h.manager.add_product(1).await;

        h.manager.remove_product(2).await;

        assert_eq!(h.manager.cart().len(), 1);
        assert_eq!(h.notices.drain(), vec![Notice::error(REMOVE_FAILED_MESSAGE)]);
    }

    // -------------------------------------------------------------------------
    // update_product_amount
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_non_positive_is_silent_noop() {
        let mut h = harness(&[(1, 5)]).await;
        h.manager.add_product(1).await;
        let calls = h.api.stock_calls.load(Ordering::SeqCst);
        let writes = h.storage.writes.load(Ordering::SeqCst);

        h.manager.update_product_amount(update(1, 0)).await;
        h.manager.update_product_amount(update(1, -2)).await;

        assert_eq!(h.manager.amount_of(1), 1);
        assert_eq!(h.api.stock_calls.load(Ordering::SeqCst), calls);
        assert_eq!(h.storage.writes.load(Ordering::SeqCst), writes);
        assert!(h.notices.is_empty());
    }

    #[tokio::test]
    async fn test_update_over_stock_warns() {
        let mut h = harness(&[(1, 5)]).await;
        h.manager.add_product(1).await;

        h.manager.update_product_amount(update(1, 6)).await;

        assert_eq!(h.manager.amount_of(1), 1);
        assert_eq!(h.notices.drain(), vec![Notice::warning(OUT_OF_STOCK_MESSAGE)]);
    }

    #[tokio::test]
    async fn test_update_sets_exact_amount() {
        let mut h = harness(&[(1, 5), (2, 5)]).await;
        h.manager.add_product(1).await;
        h.manager.add_product(2).await;

        h.manager.update_product_amount(update(2, 5)).await;

        assert_eq!(h.manager.amount_of(2), 5);
        assert_eq!(h.manager.amount_of(1), 1);
        assert_eq!(persisted(&h).amount_of(2), 5);
    }

    #[tokio::test]
    async fn test_update_absent_product_creates_nothing() {
        let mut h = harness(&[(1, 5), (2, 5)]).await;
        h.manager.add_product(1).await;

        h.manager.update_product_amount(update(2, 3)).await;

        assert_eq!(h.manager.cart().len(), 1);
        assert_eq!(h.manager.amount_of(2), 0);
        assert!(h.notices.is_empty());
    }

    #[tokio::test]
    async fn test_update_lookup_failure() {
        let mut h = harness(&[(1, 5)]).await;
        h.manager.add_product(1).await;

        h.manager.update_product_amount(update(9, 2)).await;

        assert_eq!(h.notices.drain(), vec![Notice::error(UPDATE_FAILED_MESSAGE)]);
        assert_eq!(h.notices.len(), 0);
    }

    #[tokio::test]
    async fn test_update_uses_fresh_stock() {
        let mut h = harness(&[(1, 5)]).await;
        h.manager.add_product(1).await;

        h.api.set_stock(1, 2);
        h.manager.update_product_amount(update(1, 3)).await;

        assert_eq!(h.manager.amount_of(1), 1);
        assert_eq!(h.notices.drain()[0].level, NoticeLevel::Warning);
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_failed_write_leaves_cart_unchanged() {
        let mut h = harness(&[(1, 5)]).await;
        h.manager.add_product(1).await;

        h.storage.fail_writes.store(true, Ordering::SeqCst);
        h.manager.add_product(1).await;
        h.manager.remove_product(1).await;

        assert_eq!(h.manager.amount_of(1), 1);
        assert_eq!(
            h.notices.drain(),
            vec![
                Notice::error(ADD_FAILED_MESSAGE),
                Notice::error(REMOVE_FAILED_MESSAGE)
            ]
        );
    }

    #[tokio::test]
    async fn test_totals_and_amounts() {
        let mut h = harness(&[(1, 5), (2, 5)]).await;
        h.manager.add_product(1).await;
        h.manager.add_product(2).await;
        h.manager.add_product(2).await;

        let totals = h.manager.totals();
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_amount, 3);
        assert_eq!(totals.subtotal.cents(), 10_001 + 2 * 10_002);

        let amounts = h.manager.amounts();
        assert_eq!(amounts.get(&1), Some(&1));
        assert_eq!(amounts.get(&2), Some(&2));
    }

    #[tokio::test]
    async fn test_session_scenario() {
        let mut h = harness(&[(1, 5)]).await;

        h.manager.add_product(1).await;
        assert_eq!(h.manager.cart(), &[catalog_product(1).with_amount(1)]);

        h.manager.add_product(1).await;
        assert_eq!(h.manager.cart(), &[catalog_product(1).with_amount(2)]);

        h.manager.update_product_amount(update(1, 10)).await;
        assert_eq!(h.manager.cart(), &[catalog_product(1).with_amount(2)]);
        assert_eq!(h.notices.drain(), vec![Notice::warning(OUT_OF_STOCK_MESSAGE)]);

        h.manager.remove_product(1).await;
        assert!(h.manager.cart().is_empty());
        assert!(persisted(&h).is_empty());
        assert!(h.notices.is_empty());
    }
}
