//! Owner notification message formatting.

use domain::{DeliveryMethod, Order};

/// Renders the human-readable order summary sent to the owner.
///
/// The asterisk markup is bold in WhatsApp-style clients. The address
/// line appears only for home delivery.
pub fn format_owner_message(order: &Order) -> String {
    let mut message = String::new();
    message.push_str("*New Order Placed!*\n");
    message.push_str(&format!("Name: {}\n", order.name));
    message.push_str(&format!("Phone: {}\n", order.phone));
    message.push_str(&format!("Delivery: {}\n", order.delivery_method));
    if order.delivery_method == DeliveryMethod::HomeDelivery
        && let Some(address) = &order.address
    {
        message.push_str(&format!("Address: {address}\n"));
    }
    message.push_str(&format!("Payment: {}\n", order.payment));
    message.push_str(&format!("Total: {}\n", order.total));
    message.push_str("Items:\n");
    for item in &order.items {
        message.push_str(&format!(
            "- {} ({}) x{}\n",
            item.name, item.size, item.quantity
        ));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use common::Money;
    use domain::{Cart, CartLine, CheckoutForm, PaymentMethod, Size};

    fn order(delivery_method: DeliveryMethod, address: &str) -> Order {
        let mut cart = Cart::new();
        cart.add(CartLine::new(
            "Lemonade",
            Size::Half,
            Money::from_rupees(120),
            2,
        ));
        cart.add(CartLine::new(
            "Mojito",
            Size::Full,
            Money::from_rupees(250),
            1,
        ));
        Order::place(
            CheckoutForm {
                name: "Asha".to_string(),
                phone: "9812345678".to_string(),
                delivery_method,
                address: address.to_string(),
                payment: PaymentMethod::Esewa,
            },
            &cart,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn home_delivery_message_includes_address() {
        let text = format_owner_message(&order(DeliveryMethod::HomeDelivery, "Lakeside"));

        assert!(text.starts_with("*New Order Placed!*\n"));
        assert!(text.contains("Name: Asha\n"));
        assert!(text.contains("Phone: 9812345678\n"));
        assert!(text.contains("Delivery: Home Delivery\n"));
        assert!(text.contains("Address: Lakeside\n"));
        assert!(text.contains("Payment: eSewa\n"));
        assert!(text.contains("Total: Rs. 490.00\n"));
        assert!(text.contains("- Lemonade (Half) x2\n"));
        assert!(text.contains("- Mojito (Full) x1\n"));
    }

    #[test]
    fn dine_in_message_omits_address() {
        let text = format_owner_message(&order(DeliveryMethod::DineIn, ""));
        assert!(text.contains("Delivery: Dine In\n"));
        assert!(!text.contains("Address:"));
    }
}
