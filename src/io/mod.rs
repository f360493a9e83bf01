pub mod csv_export;
pub mod csv_import;
pub mod error;
pub mod file;

pub use csv_export::export_csv;
pub use csv_import::import_csv;
pub use error::IoError;
pub use file::{load_project, save_project};
