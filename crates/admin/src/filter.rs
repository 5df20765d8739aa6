use chrono::{DateTime, Utc};
use common::Money;
use domain::{InventoryItem, Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Status dimension of an order filter. `All` matches every order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Parses the dashboard's status selector, where `"all"` disables the filter.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        OrderStatus::parse(value).ok().map(StatusFilter::Only)
    }

    pub fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Combined order filter. All populated dimensions must match.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: StatusFilter,
    pub search: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        if !self.status.matches(order.status) {
            return false;
        }

        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let name_hit = order.name.to_lowercase().contains(&needle);
                let phone_hit = order.phone.as_str().contains(&needle);
                if !name_hit && !phone_hit {
                    return false;
                }
            }
        }

        // The date range only applies when both ends are set and ordered.
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from <= to
            && (order.placed_at < from || order.placed_at > to)
        {
            return false;
        }

        true
    }
}

/// Aggregate counters over a set of orders, as shown on the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub delivered: usize,
    pub cancelled: usize,
    pub revenue: Money,
}

impl DashboardStats {
    /// Revenue counts delivered orders only.
    pub fn compute<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut stats = DashboardStats {
            total: 0,
            pending: 0,
            delivered: 0,
            cancelled: 0,
            revenue: Money::zero(),
        };
        for order in orders {
            stats.total += 1;
            match order.status {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Delivered => {
                    stats.delivered += 1;
                    stats.revenue += order.total;
                }
                OrderStatus::Cancelled => stats.cancelled += 1,
            }
        }
        stats
    }
}

/// Category dimension of the inventory filter. `All` matches every item.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses the category selector, where `"All"` disables the filter.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Combined inventory filter: name substring match and exact category.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub search: Option<String>,
    pub category: CategoryFilter,
}

impl InventoryFilter {
    pub fn matches(&self, item: &InventoryItem) -> bool {
        if !self.category.matches(&item.category) {
            return false;
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !item.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}
