//! Ordinal Core Types
//!
//! This crate provides the foundational types shared by the Ordinal crates:
//!
//! - **Directive**: The closed set of position directives ([`directive::Directive`])
//! - **Item**: A named sub-element together with its directive ([`item::Item`])
//! - **Weight**: The totally ordered value of numeric positions ([`weight::Weight`])

pub mod directive;
pub mod item;
pub mod weight;
