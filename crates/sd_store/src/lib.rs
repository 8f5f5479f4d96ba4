//! sd_store — key-value store over a document's custom XML parts
//!
//! Each stored entry is one XML fragment in the store namespace:
//!
//! ```xml
//! <Metadata xmlns="http://schemas.custom.xml"><Node><KEY>VALUE</KEY></Node></Metadata>
//! ```
//!
//! Keys double as XML element names and are validated up front. Lookups are
//! linear scans over every fragment in the namespace — fine for the small,
//! manually-curated sets this store holds.
//!
//! # Module layout
//! - `store` — put/get/delete/replace/list_keys over a `DocumentHost`
//! - `xml`   — fragment encode/parse and key validation
//! - `error` — unified error type

pub mod error;
pub mod store;
pub mod xml;

pub use error::StoreError;
pub use store::{delete, get, list_keys, put, replace};
pub use xml::STORE_NAMESPACE;
