//! Edge case tests for pylex-re
