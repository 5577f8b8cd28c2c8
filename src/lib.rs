//! Preparation step for sales report downloads.
//!
//! Validates report parameters and target paths against JSON schemas, makes sure
//! the target directories exist, and derives the report file name from the
//! prefix table. The transfer itself belongs to a [`fetch::ReportFetcher`].
//!
//! ```no_run
//! let parameters = serde_json::json!({
//!   "vendor_number": "80012345",
//!   "report_type": "Sales",
//!   "report_subtype": "Summary",
//!   "date_type": "Daily",
//!   "report_date": "20240101",
//! });
//! let paths = serde_json::json!({ "report": "/var/reports" });
//! let name = sales_report_prep::download_report_in_paths_with_parameters(&parameters, &paths)?;
//! assert_eq!(name, "S_D_80012345_20240101");
//! # Ok::<(), sales_report_prep::PrepareError>(())
//! ```

pub mod cli;
pub mod config;
pub mod directories;
pub mod error;
pub mod ext;
pub mod fetch;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod util;
pub mod validate;

pub use config::{Catalog, Configurator};
pub use directories::ensure_directories;
pub use error::{ConfigError, PrepareError, Violation};
pub use fetch::{fetch_report, save_report, ReportFetcher};
pub use model::{PreparedReport, ReportFormat, ReportPaths, Stage};
pub use naming::generate_file_name;
pub use pipeline::{download_report_in_paths_with_parameters, prepare};
pub use validate::validate;
