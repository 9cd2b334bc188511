pub mod report_dir;

pub use report_dir::ReportDir;
