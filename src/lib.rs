//! Concurrent JSON endpoint aggregation.
//!
//! Fetches a fixed list of endpoints under one base URL concurrently and
//! consolidates the decoded payloads into a single row-oriented [`Table`]:
//!
//! ```no_run
//! use fetchtab::{aggregate, ApiSession};
//!
//! # async fn run() -> Result<(), fetchtab::FetchError> {
//! let session = ApiSession::open("https://jsonplaceholder.typicode.com")?;
//! let table = aggregate(&session.handle(), &["/posts", "/users"]).await?;
//! session.release();
//! println!("{table}");
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod error;
pub mod fetch;
pub mod session;
pub mod table;

pub use aggregate::{aggregate, flatten};
pub use error::FetchError;
pub use session::{ApiSession, SessionHandle};
pub use table::Table;
