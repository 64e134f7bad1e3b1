//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the full dispatch loop through the scripted console in
//! [`crate::test_harness`], so they see both the rendered screen and every
//! terminal mode switch.

mod view_snapshots;
