//! Integration tests for zmem.

mod util;

mod arg_tests;
mod invalid_config_tests;

#[cfg(unix)]
mod valid_config_tests;
