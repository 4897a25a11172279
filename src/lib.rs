mod repl;
mod storage;

pub use repl::*;
pub use storage::{Output, Record, Statement, StorageEngine, Store, StoreError};
