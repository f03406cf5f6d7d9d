//! Option catalog
//!
//! Static value sets for every configurable axis, and the package lookup
//! tables keyed by those values.

pub mod options;
pub mod packages;

pub use options::{
    CatalogOption, ErrorHandlingLibrary, Framework, PackageManager, Runtime, StateLibrary,
    TestingLibrary, UiLibrary, ValidationLibrary,
};
pub use packages::{Contribution, Package, Section};
