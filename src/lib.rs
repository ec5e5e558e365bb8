//! Layout constraint generation for evenly spaced views.
//!
//! Pure constraint construction. No solving, no view hierarchy management,
//! `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`anchor`] — View edges and offset expressions
//! - [`constraint`] — Constraint descriptors handed to the host layout engine
//! - [`proxy`] — The host [`View`] capability and [`LayoutProxy`] wrapper
//! - [`distribute`] — Chaining views along an axis, optionally inside a container

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod anchor;
pub mod constraint;
pub mod distribute;
pub mod proxy;

pub use anchor::{Anchor, Attribute, Expression};
pub use constraint::{Constraint, Relation, make_constraint};
pub use distribute::{
    Axis, DistributeError, Distribution, distribute, horizontally, left_to_right, vertically,
};
pub use proxy::{LayoutProxy, View};
