//! Edge case tests for pylex-fa
