// records/sheet.rs - Mapping of raw sheet value grids into inventory records

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use super::InventoryRecord;

/// Raw value grid as returned by the spreadsheet API.
///
/// The first row is the header; data rows follow in sheet order. Transport and
/// authentication are the record source's concern; this module only maps the
/// already-fetched grid into typed records.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetValues {
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}

impl SheetValues {
    /// Parse the JSON body of a values-range response.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Map a sheet grid into records.
///
/// Column order: id, name, category, price, stock, queries, last-updated.
/// Defaulting mirrors the dashboard's tolerant reading of the sheet: a grid
/// without data rows yields an empty batch, a blank id falls back to
/// `item-{row_index}`, and unparsable numeric cells count as 0. Short rows are
/// padded with defaults rather than rejected.
pub fn parse_records(sheet: &SheetValues) -> Vec<InventoryRecord> {
    if sheet.values.len() < 2 {
        return Vec::new();
    }

    sheet.values[1..]
        .iter()
        .enumerate()
        .map(|(index, row)| parse_row(index, row))
        .collect()
}

fn parse_row(index: usize, row: &[String]) -> InventoryRecord {
    let id = match cell(row, 0) {
        "" => format!("item-{index}"),
        id => id.to_string(),
    };

    InventoryRecord {
        id,
        name: cell(row, 1).to_string(),
        category: cell(row, 2).to_string(),
        price: Decimal::from_str(cell(row, 3).trim()).unwrap_or(Decimal::ZERO),
        stock: cell(row, 4).trim().parse().unwrap_or(0),
        query_count: cell(row, 5).trim().parse().unwrap_or(0),
        last_updated: cell(row, 6).to_string(),
    }
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(String::as_str).unwrap_or("")
}
