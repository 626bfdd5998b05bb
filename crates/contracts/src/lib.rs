//! Shared types and pure logic of the trademark search page.
//!
//! Nothing here touches the browser, so the whole module tree is tested natively.

pub mod search;
