pub mod column_summary;
pub mod data_table;
