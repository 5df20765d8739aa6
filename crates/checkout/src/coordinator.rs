//! Order placement coordination.

use chrono::Utc;
use domain::{Cart, CheckoutForm, Order};
use store::OrderStore;

use crate::error::Result;
use crate::message::format_owner_message;
use crate::services::notification::NotificationService;

/// Coordinates order submission: validate, persist, notify, clear.
///
/// Persistence completes before notification dispatch is attempted, and a
/// failed dispatch never rolls the order back — the order counts as placed
/// once the store accepts it.
pub struct CheckoutCoordinator<S: OrderStore, N: NotificationService> {
    store: S,
    notifier: N,
    owner_destination: String,
}

impl<S: OrderStore, N: NotificationService> CheckoutCoordinator<S, N> {
    /// Creates a coordinator sending owner notifications to `owner_destination`.
    pub fn new(store: S, notifier: N, owner_destination: impl Into<String>) -> Self {
        Self {
            store,
            notifier,
            owner_destination: owner_destination.into(),
        }
    }

    /// Places an order from the given cart and checkout form.
    ///
    /// On success the cart is cleared and the persisted order returned. On
    /// validation or store failure the cart is left untouched and nothing
    /// is persisted.
    #[tracing::instrument(skip(self, form, cart), fields(phone = %form.phone))]
    pub async fn place_order(&self, form: CheckoutForm, cart: &mut Cart) -> Result<Order> {
        let order = Order::place(form, cart, Utc::now())?;
        let order = self.store.create_order(order).await?;

        metrics::counter!("orders_placed").increment(1);
        tracing::info!(order_id = %order.id, total = %order.total, "order placed");

        self.notify_owner(&order).await;
        cart.clear();

        Ok(order)
    }

    /// Dispatches the owner notification, capturing any failure.
    ///
    /// Failures are logged and counted; the caller never sees them.
    async fn notify_owner(&self, order: &Order) {
        let text = format_owner_message(order);
        if let Err(e) = self
            .notifier
            .send_owner_message(&self.owner_destination, &text)
            .await
        {
            metrics::counter!("owner_notifications_failed").increment(1);
            tracing::warn!(order_id = %order.id, error = %e, "owner notification failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Money;
    use domain::{CartLine, DeliveryMethod, DomainError, OrderStatus, PaymentMethod, Size};
    use store::{InMemoryOrderStore, OrderStore};

    use crate::error::CheckoutError;
    use crate::services::notification::InMemoryNotificationService;

    fn coordinator() -> (
        CheckoutCoordinator<InMemoryOrderStore, InMemoryNotificationService>,
        InMemoryOrderStore,
        InMemoryNotificationService,
    ) {
        let store = InMemoryOrderStore::new();
        let notifier = InMemoryNotificationService::new();
        let coordinator =
            CheckoutCoordinator::new(store.clone(), notifier.clone(), "9800000000");
        (coordinator, store, notifier)
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(CartLine::new(
            "Lemonade",
            Size::Half,
            Money::from_rupees(120),
            2,
        ));
        cart
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Asha".to_string(),
            phone: "9812345678".to_string(),
            delivery_method: DeliveryMethod::DineIn,
            address: String::new(),
            payment: PaymentMethod::Cash,
        }
    }

    #[tokio::test]
    async fn place_order_persists_notifies_and_clears_cart() {
        let (coordinator, store, notifier) = coordinator();
        let mut cart = cart();

        let order = coordinator.place_order(form(), &mut cart).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(store.order_count().await, 1);
        assert!(cart.is_empty());

        let (to, body) = notifier.last_message().unwrap();
        assert_eq!(to, "9800000000");
        assert!(body.contains("Asha"));
        assert!(body.contains("- Lemonade (Half) x2"));
    }

    #[tokio::test]
    async fn validation_failure_leaves_cart_and_store_untouched() {
        let (coordinator, store, notifier) = coordinator();
        let mut cart = cart();
        let mut bad_form = form();
        bad_form.phone = "12345".to_string();

        let result = coordinator.place_order(bad_form, &mut cart).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Validation(DomainError::InvalidPhone { .. }))
        ));
        assert_eq!(store.order_count().await, 0);
        assert_eq!(notifier.sent_count(), 0);
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn empty_cart_is_rejected_before_persistence() {
        let (coordinator, store, _) = coordinator();
        let mut empty = Cart::new();

        let result = coordinator.place_order(form(), &mut empty).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Validation(DomainError::EmptyCart))
        ));
        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn blank_address_rejected_before_persistence() {
        let (coordinator, store, _) = coordinator();
        let mut cart = cart();
        let mut home = form();
        home.delivery_method = DeliveryMethod::HomeDelivery;
        home.address = "   ".to_string();

        let result = coordinator.place_order(home, &mut cart).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Validation(DomainError::AddressRequired))
        ));
        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn notification_failure_does_not_block_placement() {
        let (coordinator, store, notifier) = coordinator();
        notifier.set_fail_on_send(true);
        let mut cart = cart();

        let order = coordinator.place_order(form(), &mut cart).await.unwrap();

        // Order is placed and the cart cleared despite the failed dispatch.
        assert_eq!(store.order_count().await, 1);
        assert!(cart.is_empty());
        assert_eq!(notifier.sent_count(), 0);

        let stored = store.list_orders().await.unwrap();
        assert_eq!(stored[0].id, order.id);
    }
}
