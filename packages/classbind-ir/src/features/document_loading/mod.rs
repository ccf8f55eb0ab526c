//! Document loading: JSON class-record documents → class model trees

pub mod loader;
pub mod records;

pub use loader::{load_document, load_file, load_labeled};
pub use records::{ClassRecord, FieldRecord, MethodRecord, ParamRecord};
