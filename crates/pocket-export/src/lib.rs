//! # pocket-export
//!
//! Spreadsheet export of selected insights.
//!
//! - [`SheetBuilder`]: one sheet of rows per record, dispatched on card kind.
//!   Live cards re-fetch through a [`pocket_api::DataSource`].
//! - [`workbook`]: the `Summary` sheet and XLSX serialization.
//! - [`ExportJob`]: warm-up, deadline-bounded build, file write, cart clear.

pub mod cell;
pub mod error;
pub mod job;
pub mod sheet;
pub mod workbook;

pub use cell::{Cell, Rows};
pub use error::ExportError;
pub use job::{ExportJob, ExportState};
pub use sheet::SheetBuilder;
