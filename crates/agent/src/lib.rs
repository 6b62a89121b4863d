//! Retrieval-augmented QA chain
//!
//! Wires the retriever and generative model into the answer pipeline:
//! greeting short-circuit, context retrieval, constrained prompt,
//! generation.

pub mod qa;

pub use qa::QaChain;
