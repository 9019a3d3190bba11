use prettytable::{row, Table};
use std::collections::BTreeMap;

/// Builds a console table with up to `limit` catalog entries
pub fn catalog_table(symbols: &BTreeMap<String, String>, limit: usize) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["Code", "Currency"]);
    for (code, name) in symbols.iter().take(limit) {
        table.add_row(row![code, name]);
    }
    table
}

/// Prints up to `limit` catalog entries to stdout
pub fn print_catalog(symbols: &BTreeMap<String, String>, limit: usize) {
    println!("Supported currencies (first {limit} shown for brevity):");
    catalog_table(symbols, limit).printstd();
}
