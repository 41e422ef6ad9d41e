pub mod csv_table;
pub mod error;
pub mod json_table;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
pub use json_table::read_json_table;
