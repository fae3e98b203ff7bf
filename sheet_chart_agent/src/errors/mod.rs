pub mod visualization_error;
