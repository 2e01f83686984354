pub mod scan_query;
