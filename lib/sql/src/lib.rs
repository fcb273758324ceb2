pub mod error;
pub mod filter;
pub mod sqlite;
pub mod traits;

pub use error::SQLError;
pub use filter::{Cond, Filter};
pub use sqlite::SqliteStore;
pub use traits::{Row, SQLStore, Value};
