#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sectorlens/sectorlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod ingest;
pub mod raw;

pub use cell::Cell;
pub use error::{DataError, Result};
pub use raw::RawTable;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
