//! Integration tests for chatshare

mod helpers;

mod cli_test;
mod extract_test;
