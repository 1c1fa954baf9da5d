//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `rules.rs` - Queries, placement, moves and sub-boards
//! - `edge_cases.rs` - Unusual boards, players and sharing
//! - `proptest.rs` - Property-based tests
