//! # minddoc
//!
//! Convert FreeMind mind maps into flat text documents.
//!
//! A mind map is a tree of labeled nodes. Nodes styled bold become section
//! headings, nodes styled italic become numbered requirements, and the
//! requirement numbers are kept stable across runs by a small on-disk
//! identifier store.

pub mod parser;
pub mod renderer;
pub mod store;

pub use parser::*;
pub use renderer::*;
pub use store::IdentifierStore;

#[cfg(test)]
mod tests;
