//!
//! The benchmark plotter library.
//!

pub mod analysis;
pub mod chart;
pub mod config;
pub mod display;
pub mod input;
pub mod output;
pub mod report;
pub mod summary;
pub mod util;
pub mod workflow;

pub use self::analysis::error::Error as AnalysisError;
pub use self::analysis::parameters::Parameters;
pub use self::analysis::Analysis;
pub use self::config::Config;
pub use self::input::error::Error as InputError;
pub use self::input::record::Record;
pub use self::input::Input;
pub use self::output::format::Format as OutputFormat;
pub use self::output::Output;
pub use self::report::Report;
pub use self::summary::Summary;
pub use self::workflow::error::Error as WorkflowError;
pub use self::workflow::Workflow;

/// The successful run exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failed run exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;
