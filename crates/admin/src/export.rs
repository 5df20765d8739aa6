//! CSV export of orders and inventory, and CSV import of inventory.
//!
//! Rows are plain `Vec<Vec<String>>` so the encoding stays separate from the
//! column layout. The format is minimal RFC 4180: fields containing commas,
//! quotes, or newlines are double-quoted, quotes doubled inside.

use common::Money;
use domain::{DomainError, InventoryItem, NewInventoryItem, Order};

use crate::error::{AdminError, Result};

pub const ORDER_COLUMNS: [&str; 8] = [
    "S.N.",
    "Name",
    "Phone",
    "Items",
    "Total",
    "Payment",
    "Status",
    "Delivery Method",
];

pub const INVENTORY_COLUMNS: [&str; 7] = [
    "S.N.",
    "Name",
    "Category",
    "Price (Half)",
    "Price (Full)",
    "Stock",
    "Image URL",
];

/// Renders money as a plain decimal ("120.50") so spreadsheets treat it as a
/// number and imports can parse it back.
fn money_cell(amount: Money) -> String {
    format!("{}.{:02}", amount.rupees(), amount.paisa_part())
}

fn parse_money(field: &'static str, raw: &str) -> Result<Money> {
    let raw = raw.trim();
    let invalid = || {
        AdminError::Validation(DomainError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    };

    let (rupees_part, paisa_part) = match raw.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (raw, ""),
    };
    let rupees: i64 = rupees_part.parse().map_err(|_| invalid())?;
    let paisa: i64 = match paisa_part.len() {
        0 => 0,
        1 => paisa_part.parse::<i64>().map_err(|_| invalid())? * 10,
        2 => paisa_part.parse().map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };
    if rupees < 0 {
        return Err(invalid());
    }
    Ok(Money::from_paisa(rupees * 100 + paisa))
}

/// Builds the order export table, header row included.
pub fn orders_to_rows(orders: &[Order]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(orders.len() + 1);
    rows.push(ORDER_COLUMNS.iter().map(|c| c.to_string()).collect());
    for (index, order) in orders.iter().enumerate() {
        let items = order
            .items
            .iter()
            .map(|line| format!("{} x{} ({})", line.name, line.quantity, line.size))
            .collect::<Vec<_>>()
            .join(", ");
        rows.push(vec![
            (index + 1).to_string(),
            order.name.clone(),
            order.phone.as_str().to_string(),
            items,
            money_cell(order.total),
            order.payment.to_string(),
            order.status.to_string(),
            order.delivery_method.to_string(),
        ]);
    }
    rows
}

/// Builds the inventory export table, header row included.
pub fn inventory_to_rows(items: &[InventoryItem]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(INVENTORY_COLUMNS.iter().map(|c| c.to_string()).collect());
    for (index, item) in items.iter().enumerate() {
        rows.push(vec![
            (index + 1).to_string(),
            item.name.clone(),
            item.category.clone(),
            money_cell(item.price_half),
            money_cell(item.price_full),
            item.stock.to_string(),
            item.image.clone(),
        ]);
    }
    rows
}

/// Parses an inventory table back into new-item drafts.
///
/// A leading header row is skipped. The serial-number column is ignored;
/// imported items always mint fresh ids.
pub fn parse_inventory_rows(rows: &[Vec<String>]) -> Result<Vec<NewInventoryItem>> {
    let mut items = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if index == 0 && row.first().map(String::as_str) == Some(INVENTORY_COLUMNS[0]) {
            continue;
        }
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        if row.len() != INVENTORY_COLUMNS.len() {
            return Err(AdminError::Import(format!(
                "row {} has {} columns, expected {}",
                index + 1,
                row.len(),
                INVENTORY_COLUMNS.len()
            )));
        }
        let stock: u32 = row[5].trim().parse().map_err(|_| {
            AdminError::Validation(DomainError::InvalidNumber {
                field: "stock",
                value: row[5].trim().to_string(),
            })
        })?;
        let item = NewInventoryItem {
            name: row[1].trim().to_string(),
            category: row[2].trim().to_string(),
            price_half: parse_money("price_half", &row[3])?,
            price_full: parse_money("price_full", &row[4])?,
            stock,
            image: row[6].trim().to_string(),
        };
        item.validate()?;
        items.push(item);
    }
    Ok(items)
}

/// Encodes rows as CSV text with CRLF line endings.
pub fn to_csv(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            if cell.contains(['"', ',', '\n', '\r']) {
                out.push('"');
                out.push_str(&cell.replace('"', "\"\""));
                out.push('"');
            } else {
                out.push_str(cell);
            }
        }
        out.push_str("\r\n");
    }
    out
}

/// Decodes CSV text into rows, honoring quoted fields.
pub fn parse_csv(input: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
            continue;
        }
        match c {
            '"' if cell.is_empty() => in_quotes = true,
            '"' => return Err(AdminError::Import("stray quote in unquoted field".into())),
            ',' => {
                row.push(std::mem::take(&mut cell));
                cell.clear();
            }
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
            }
            _ => cell.push(c),
        }
    }
    if in_quotes {
        return Err(AdminError::Import("unterminated quoted field".into()));
    }
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }
    Ok(rows)
}
