//! The acquisition-mode playbook: one generic collector per
//! mode, parametrized by per-source data. Concrete adapters in
//! `crate::adapters` bind a source identifier to one of these plus its
//! source-specific configuration (endpoint, selectors, vocabulary).

pub mod mode_a;
pub mod mode_b;
pub mod mode_c;
pub mod mode_d;
pub mod mode_e;
