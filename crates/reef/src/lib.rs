//! Umbrella crate that re-exports the `reef-*` building blocks.
//!
//! The two engines are independent: a host typically runs [`evo`] offline to generate content
//! and [`bt`] every frame to decide what its agents do.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use reef_core as core;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use reef_bt as bt;

#[cfg(feature = "evo")]
#[cfg_attr(docsrs, doc(cfg(feature = "evo")))]
pub use reef_evo as evo;
