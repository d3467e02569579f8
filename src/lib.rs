//! `pageweave` — page layout assembly for static site generation.
//!
//! This library declares page archetypes as ordered sequences of renderable
//! components and provides the component factories those sequences are
//! assembled from, including an embeddable asciinema player.

pub mod cli;
pub mod component;
pub mod error;
pub mod layout;
pub mod observability;
pub mod render;
