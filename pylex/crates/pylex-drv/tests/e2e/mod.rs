//! End-to-End Tests for cpylex
//!
//! These tests run the `cpylex` binary on real input and check the token
//! dump it prints.

mod cli_tests;
