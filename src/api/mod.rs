pub mod sheet;

pub use sheet::fetch_sheet_tsv;
