//! Edge case tests for pylex-drv
