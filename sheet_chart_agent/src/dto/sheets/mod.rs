pub mod sheet_values_response;
