//! Shared primitives for the reef decision-making and content-generation crates.
//!
//! Engines in this workspace never log through a global. They report human-readable lines to a
//! [`Diagnostics`] sink supplied by the host; [`TracingDiagnostics`] bridges those reports into
//! `tracing` for hosts that already run a subscriber.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod reactive;

pub use diagnostics::{
    Diagnostics, Level, NullDiagnostics, Report, TracingDiagnostics, VecDiagnostics,
};
pub use reactive::Reactive;
