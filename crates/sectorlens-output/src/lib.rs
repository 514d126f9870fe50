#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/sectorlens/sectorlens/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod frame;
pub mod report;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter, write_bundle};
pub use report::{Report, ReportBuilder, ReportError};
pub use summary::{AnalysisSummary, SectorSummary};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
