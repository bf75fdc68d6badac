//! Integration tests for `tintlog`.

mod cli_output;
