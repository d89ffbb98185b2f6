//! # trafficpatch_records
//!
//! Flattens a nested YAML records document into Traffic Server's
//! `records.config` format.
//!
//! ```yaml
//! proxy:
//!   config:
//!     cache:
//!       ram_cache:
//!         size: [64, M]
//!     http:
//!       server_ports: "8080"
//! ```
//!
//! becomes
//!
//! ```text
//! CONFIG proxy.config.cache.ram_cache.size INT 64M
//! CONFIG proxy.config.http.server_ports STRING 8080
//! ```
//!
//! Strings are `STRING`, booleans and integers are `INT` (`true` is `1`),
//! `[n, K|M|G|T]` pairs are `INT` with a size suffix and floats are `FLOAT`.
//! Other leaves are silently ignored.

pub mod error;
pub mod flatten;
pub mod flattener;
pub mod record;
pub mod value;

pub use error::{RecordsError, RecordsResult};
pub use flatten::{extract_records, flatten, Leaf};
pub use flattener::{RecordsFlattener, RECORDS_CONFIG, RECORDS_YAML};
pub use record::{parse_config_line, render_config, FlatRecord};
pub use value::{RecordValue, SizeUnit, TypeTag};
