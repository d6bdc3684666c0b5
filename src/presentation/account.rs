/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::CashMovement;
use prettytable::format;
use prettytable::{Cell, Row, Table};
use std::fmt::Display;

const UNKNOWN: &str = "unknown";

fn or_unknown<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// The `key: value` lines printed for one cash movement
///
/// Absent optional fields are shown as `unknown`.
#[must_use]
pub fn cash_movement_lines(movement: &CashMovement) -> Vec<String> {
    vec![
        format!("date: {}", movement.date),
        format!("valueDate: {}", movement.value_date),
        format!("productId: {}", or_unknown(movement.product_id)),
        format!("currency: {}", or_unknown(movement.currency.as_deref())),
        format!("change: {}", or_unknown(movement.change)),
    ]
}

/// Builds a table with one row per cash movement
#[must_use]
pub fn cash_movements_table(movements: &[CashMovement]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    table.add_row(Row::new(vec![
        Cell::new("DATE"),
        Cell::new("VALUE DATE"),
        Cell::new("PRODUCT"),
        Cell::new("DESCRIPTION"),
        Cell::new("CURRENCY"),
        Cell::new("CHANGE"),
    ]));

    for movement in movements {
        // Dates come as full timestamps, the day is enough here
        let date = movement.date.split('T').next().unwrap_or(&movement.date);
        let value_date = movement
            .value_date
            .split('T')
            .next()
            .unwrap_or(&movement.value_date);
        let change = movement
            .change
            .map(|c| format!("{c:.2}"))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(Row::new(vec![
            Cell::new(date),
            Cell::new(value_date),
            Cell::new(&or_unknown(movement.product_id)),
            Cell::new(movement.description.as_deref().unwrap_or("-")),
            Cell::new(movement.currency.as_deref().unwrap_or("-")),
            Cell::new(&change),
        ]));
    }

    table
}
