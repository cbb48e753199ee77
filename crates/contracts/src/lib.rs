//! Shared domain model of the Jhulacraft storefront.
//!
//! Everything here is pure: the catalog, the list/detail derivations and the
//! form state machines compile both for the browser (wasm32) and for the
//! backend, and carry their own unit tests.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
