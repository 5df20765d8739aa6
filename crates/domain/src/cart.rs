//! Cart aggregator for a single customer session.

use common::Money;
use serde::{Deserialize, Serialize};

/// Portion size of a menu item.
///
/// The menu mostly uses `Half`/`Full`, but seasonal specials carry
/// free-form sizes, so anything else round-trips as [`Size::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Size {
    Half,
    Full,
    Custom(String),
}

impl Size {
    /// Returns the size as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Size::Half => "Half",
            Size::Full => "Full",
            Size::Custom(s) => s,
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Size {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Half" => Size::Half,
            "Full" => Size::Full,
            _ => Size::Custom(s),
        }
    }
}

impl From<&str> for Size {
    fn from(s: &str) -> Self {
        Size::from(s.to_string())
    }
}

impl From<Size> for String {
    fn from(size: Size) -> Self {
        size.as_str().to_string()
    }
}

/// One (item, size) selection with a quantity and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Menu item name.
    pub name: String,

    /// Portion size; part of the line identity together with `name`.
    pub size: Size,

    /// Price per unit for this size.
    pub unit_price: Money,

    /// Quantity selected, always >= 1 while the line exists.
    pub quantity: u32,

    /// Optional item image URL carried along for display.
    pub image: Option<String>,
}

impl CartLine {
    /// Creates a new cart line.
    pub fn new(
        name: impl Into<String>,
        size: impl Into<Size>,
        unit_price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            unit_price,
            quantity,
            image: None,
        }
    }

    /// Attaches an image URL to the line.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Returns the line subtotal (`unit_price * quantity`).
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }

    fn matches(&self, name: &str, size: &Size) -> bool {
        self.name == name && self.size == *size
    }
}

/// In-memory list of selected items for one customer session.
///
/// The cart holds at most one line per (name, size) identity key; adding
/// a duplicate selection merges quantities instead of appending. Every
/// operation is a total function over the current list — none can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns true if the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct (name, size) lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Adds a selection to the cart.
    ///
    /// If a line with the same (name, size) already exists its quantity is
    /// incremented by the added quantity; otherwise the line is appended.
    pub fn add(&mut self, line: CartLine) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.matches(&line.name, &line.size))
        {
            Some(existing) => existing.quantity += line.quantity,
            None => self.lines.push(line),
        }
    }

    /// Removes all lines matching the identity key.
    pub fn remove(&mut self, name: &str, size: &Size) {
        self.lines.retain(|l| !l.matches(name, size));
    }

    /// Increments the quantity of the matching line by one.
    ///
    /// A no-op when no line matches.
    pub fn increase_quantity(&mut self, name: &str, size: &Size) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(name, size)) {
            line.quantity += 1;
        }
    }

    /// Decrements the quantity of the matching line by one.
    ///
    /// A line reaching quantity 0 is removed entirely; the cart never
    /// holds a zero-quantity line.
    pub fn decrease_quantity(&mut self, name: &str, size: &Size) {
        for line in &mut self.lines {
            if line.matches(name, size) {
                line.quantity = line.quantity.saturating_sub(1);
            }
        }
        self.lines.retain(|l| l.quantity > 0);
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the sum of `unit_price * quantity` over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }
}
