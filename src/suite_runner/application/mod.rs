pub mod suite_runner;
