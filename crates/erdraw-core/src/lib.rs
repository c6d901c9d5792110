//! erdraw Core Types and Definitions
//!
//! This crate provides the foundational types shared by the erdraw parser,
//! layout engine, and exporter. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Visual definitions for edges and arrow heads ([`draw`] module)
//! - **Semantic**: Semantic model types for diagrams ([`semantic`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
