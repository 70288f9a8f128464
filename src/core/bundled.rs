//! Catalogs compiled into the crate.

use std::sync::OnceLock;

use anyhow::Result;

use super::{data::Catalog, parsers::ts::parse_ts_str, table::StringTable};

/// File name of the bundled SQL export catalog.
pub const SQL_EXPORT_PT_BR_FILE: &str = "SqlExport_pt_BR.ts";

/// Brazilian Portuguese strings of the SQL export plugin.
pub const SQL_EXPORT_PT_BR: &str = include_str!("../../translations/SqlExport_pt_BR.ts");

pub fn sql_export_catalog() -> Result<Catalog> {
    parse_ts_str(SQL_EXPORT_PT_BR, SQL_EXPORT_PT_BR_FILE)
}

/// The bundled pt_BR table, built on first use.
///
/// ```
/// use tsctl::core::bundled::sql_export_pt_br;
///
/// let table = sql_export_pt_br();
/// assert_eq!(table.translate("SqlExport", "-- Table: %1"), "-- Tabela: %1");
/// assert_eq!(table.translate("SqlExport", "-- Sequence: %1"), "-- Sequence: %1");
/// ```
pub fn sql_export_pt_br() -> &'static StringTable {
    static TABLE: OnceLock<StringTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        // Compiled-in content; `test_bundled_catalog_shape` parses it
        let catalog = sql_export_catalog().expect("bundled catalog is valid");
        StringTable::from_catalog(&catalog)
    })
}
