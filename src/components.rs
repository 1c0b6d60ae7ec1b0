//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared across the portfolio
//! and blog pages: the document layout, navigation bar, footer, terminal
//! window frame and content cards.

pub mod cards;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod nav;
pub mod terminal;
