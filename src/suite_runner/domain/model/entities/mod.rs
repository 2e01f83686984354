pub mod suite_report;
pub mod test_context;
