//! Storefront controller
//!
//! One `Storefront` is one UI instance: it owns a cart, a session and the
//! view state, shares the read-only catalog, and turns user intents into
//! store mutations plus the notice to show for them.

use super::models::{Screen, StorefrontSnapshot, ViewState};
use crate::cart::{helpers::format_price, Cart, PendingAdds, Receipt, MAX_LINE_QUANTITY};
use crate::catalog::{Catalog, CategoryFilter, Product, FEATURED_COUNT};
use crate::error::{StoreError, StoreResult};
use crate::notify::{Notice, NotificationSink, TracingSink};
use crate::session::{AuthForm, AuthMode, Credentials, SessionStore, User};
use std::{sync::Arc, time::Duration};
use tracing::{debug, info};

pub struct Storefront {
    catalog: Arc<Catalog>,
    cart: Cart,
    session: SessionStore,
    auth_form: AuthForm,
    view: ViewState,
    pending: PendingAdds,
    sink: Arc<dyn NotificationSink>,
}

impl Storefront {
    /// Creates a storefront that logs its notices.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_sink(catalog, Arc::new(TracingSink))
    }

    pub fn with_sink(catalog: Arc<Catalog>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            session: SessionStore::new(),
            auth_form: AuthForm::new(),
            view: ViewState::default(),
            pending: PendingAdds::new(),
            sink,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate(&mut self, screen: Screen) {
        debug!(from = ?self.view.screen, to = ?screen, "Navigate");
        self.view.screen = screen;
    }

    /// Hero "Shop Now": opens the shop with filters cleared.
    pub fn shop_now(&mut self) {
        self.navigate(Screen::Shop);
        self.view.reset_filters();
    }

    /// "View All Products": opens the shop with filters cleared.
    pub fn view_all_products(&mut self) {
        self.navigate(Screen::Shop);
        self.view.reset_filters();
    }

    /// "Continue Shopping" from the cart; filters are kept.
    pub fn continue_shopping(&mut self) {
        self.navigate(Screen::Shop);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.search = search.into();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.view.category = category.into();
    }

    /// Catalog products matching the current search and category.
    pub fn visible_products(&self) -> Vec<Arc<Product>> {
        self.catalog.filter(&self.view.search, &self.view.category)
    }

    pub fn featured_products(&self) -> Vec<Arc<Product>> {
        self.catalog.featured(FEATURED_COUNT)
    }

    /// Number shown on the cart icon.
    pub fn cart_badge(&self) -> u64 {
        self.cart.item_count()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// First half of a delayed add: checks the product and disables its add
    /// control until [`complete_add`](Self::complete_add) runs.
    pub fn begin_add(&mut self, product_id: &str) -> StoreResult<Arc<Product>> {
        let result = self.check_addable(product_id);
        if let Err(err) = &result {
            self.sink.notify(&Notice::error(err.to_string()));
        }
        result
    }

    fn check_addable(&mut self, product_id: &str) -> StoreResult<Arc<Product>> {
        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownProduct(product_id.to_string()))?;

        if !product.is_in_stock() {
            return Err(StoreError::OutOfStock(product_id.to_string()));
        }
        if self.cart.quantity_of(product_id) >= MAX_LINE_QUANTITY {
            return Err(StoreError::QuantityTooLarge {
                product_id: product_id.to_string(),
                max: MAX_LINE_QUANTITY,
            });
        }
        if !self.pending.begin(product_id) {
            return Err(StoreError::AddInProgress(product_id.to_string()));
        }
        Ok(product)
    }

    /// Second half of a delayed add: re-enables the control and adds the
    /// product.
    pub fn complete_add(&mut self, product_id: &str) -> StoreResult<()> {
        if !self.pending.finish(product_id) {
            return Err(StoreError::AddNotPending(product_id.to_string()));
        }
        let product = self
            .catalog
            .get(product_id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownProduct(product_id.to_string()))?;

        self.cart.add(product)?;
        debug!(
            product_id,
            quantity = self.cart.quantity_of(product_id),
            "Added to cart"
        );
        Ok(())
    }

    /// Abandons a delayed add without touching the cart, re-enabling the
    /// product's add control. Returns `false` if no add was pending.
    pub fn cancel_add(&mut self, product_id: &str) -> bool {
        let cancelled = self.pending.finish(product_id);
        if cancelled {
            debug!(product_id, "Add to cart cancelled");
        }
        cancelled
    }

    /// Adds one unit of `product_id` after `delay`.
    ///
    /// The sleep is the only suspension point. Holding `&mut self` across it
    /// keeps the storefront exclusive for the whole operation. If the future
    /// is dropped during the sleep the pending mark is cleared.
    pub async fn add_to_cart(&mut self, product_id: &str, delay: Duration) -> StoreResult<()> {
        self.begin_add(product_id)?;
        let mut guard = PendingAddGuard {
            storefront: self,
            product_id,
            armed: true,
        };
        tokio::time::sleep(delay).await;
        guard.armed = false;
        guard.storefront.complete_add(product_id)
    }

    pub fn is_adding(&self, product_id: &str) -> bool {
        self.pending.is_pending(product_id)
    }

    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<()> {
        self.cart.set_quantity(product_id, quantity)
    }

    pub fn increment(&mut self, product_id: &str) -> StoreResult<()> {
        self.cart.increment(product_id)
    }

    pub fn decrement(&mut self, product_id: &str) {
        self.cart.decrement(product_id);
    }

    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove(product_id);
    }

    /// Computes the receipt and announces the (simulated) order.
    pub fn checkout(&mut self) -> (Receipt, Notice) {
        let receipt = self.cart.checkout();
        let notice = Notice::success(
            "Order Placed Successfully!",
            format!(
                "Your order of {} has been placed. Thank you for shopping with ShopEase!",
                format_price(receipt.total)
            ),
        );
        info!(
            total = %receipt.total,
            items = receipt.item_count,
            summary = %receipt.summary,
            "Checkout"
        );
        self.sink.notify(&notice);
        (receipt, notice)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Fills the auth form with `credentials` and submits it in `mode`.
    pub fn login(&mut self, mode: AuthMode, credentials: Credentials) -> StoreResult<Notice> {
        self.auth_form.set_mode(mode);
        self.auth_form.fill(credentials);

        match self.auth_form.submit(&mut self.session) {
            Ok(user) => {
                let notice = welcome_notice(mode, &user);
                self.sink.notify(&notice);
                Ok(notice)
            }
            Err(err) => {
                self.sink.notify(&Notice::error(err.to_string()));
                Err(err.into())
            }
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn snapshot(&self) -> StorefrontSnapshot {
        let products = match self.view.screen {
            Screen::Home => self.featured_products(),
            Screen::Shop => self.visible_products(),
            Screen::Cart => Vec::new(),
        };

        StorefrontSnapshot {
            view: self.view.clone(),
            categories: self.catalog.categories(),
            products,
            cart: self.cart.summary(),
            user: self.session.current().cloned(),
            adding: self.pending.ids(),
        }
    }
}

/// Cancels a pending add when an in-flight `add_to_cart` is dropped.
struct PendingAddGuard<'a> {
    storefront: &'a mut Storefront,
    product_id: &'a str,
    armed: bool,
}

impl Drop for PendingAddGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.storefront.cancel_add(self.product_id);
        }
    }
}

fn welcome_notice(mode: AuthMode, user: &User) -> Notice {
    match mode {
        AuthMode::Login => {
            Notice::success("Login Successful!", format!("Welcome back, {}!", user.name))
        }
        AuthMode::Register => Notice::success(
            "Registration Successful!",
            format!("Welcome to ShopEase, {}!", user.name),
        ),
    }
}
