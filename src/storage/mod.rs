pub mod error;
pub mod record;
pub mod statement;
pub mod table;

pub use error::StoreError;
pub use record::Record;
pub use statement::{Output, Statement};
pub use table::Store;

pub type Result<T> = std::result::Result<T, StoreError>;

pub trait StorageEngine {
    /// Inserts a new record, or replaces the value of the existing one
    ///
    /// # Params
    ///
    /// - `key`: Unique identifier for the record.
    /// - `value`: Data to store under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Retrieves the current value of a record
    ///
    /// Returns `None` when no record exists for `key`.
    ///
    /// # Params
    ///
    /// - `key`: Unique identifier for the record.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Retrieves every record, in no particular order
    fn list(&self) -> Result<Vec<Record>>;
}
