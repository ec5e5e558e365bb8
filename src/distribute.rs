//! Even distribution of views along an axis.
//!
//! Adjacent views are chained edge to edge with a fixed gap. Optionally the
//! first and last views are pinned to a container's edges with the same gap
//! as a margin.
//!
//! # Example
//!
//! ```
//! use core::cell::Cell;
//! use zendistribute::{Axis, Distribution, LayoutProxy, View};
//!
//! struct Node(&'static str, Cell<bool>);
//! impl View for Node {
//!     fn set_translates_autoresizing_mask(&self, enabled: bool) {
//!         self.1.set(enabled);
//!     }
//! }
//! impl core::fmt::Display for Node {
//!     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
//!         f.write_str(self.0)
//!     }
//! }
//!
//! let parent = Node("P", Cell::new(true));
//! let a = Node("A", Cell::new(true));
//! let b = Node("B", Cell::new(true));
//!
//! let constraints = Distribution::new(4.0_f64, Axis::Vertical)
//!     .inside(LayoutProxy::new(&parent))
//!     .compute(&[LayoutProxy::new(&a), LayoutProxy::new(&b)])
//!     .unwrap();
//!
//! let rendered: Vec<String> = constraints.iter().map(|c| c.to_string()).collect();
//! assert_eq!(rendered, ["A.top == P.top + 4", "B.bottom == P.bottom - 4", "A.bottom == B.top - 4"]);
//!
//! // Only views after the first are switched to manual constraints.
//! assert!(a.1.get());
//! assert!(!b.1.get());
//! ```

use alloc::vec::Vec;

use num_traits::Float;

use crate::anchor::Attribute;
use crate::constraint::Constraint;
use crate::proxy::{LayoutProxy, View};

/// Which edges a distribution chains and pins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Leading to trailing. Follows the layout direction.
    #[default]
    Horizontal,
    /// Pinned to the container's left and right edges. Adjacent views are
    /// still chained trailing to leading.
    LeftToRight,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Edges pinned to the container: `(first view's start, last view's end)`.
    pub const fn boundary_attributes(self) -> (Attribute, Attribute) {
        match self {
            Self::Horizontal => (Attribute::Leading, Attribute::Trailing),
            Self::LeftToRight => (Attribute::Left, Attribute::Right),
            Self::Vertical => (Attribute::Top, Attribute::Bottom),
        }
    }

    /// Edges chained between neighbours: `(previous view's end, next view's start)`.
    pub const fn interior_attributes(self) -> (Attribute, Attribute) {
        match self {
            Self::Horizontal | Self::LeftToRight => (Attribute::Trailing, Attribute::Leading),
            Self::Vertical => (Attribute::Bottom, Attribute::Top),
        }
    }
}

/// Distribution error.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DistributeError {
    /// No views were supplied. An invalid argument, not a runtime condition.
    #[error("invalid argument: cannot distribute an empty sequence of views")]
    EmptyInput,
}

/// Spacing settings for one distribution.
///
/// ```text
///   container.start + amount
///   │
///   ▼
///   ┌───┐ amount ┌───┐ amount ┌───┐
///   │ A │◄──────►│ B │◄──────►│ C │
///   └───┘        └───┘        └───┘
///                                 ▲
///                                 │
///                                 container.end - amount
/// ```
pub struct Distribution<'a, V: ?Sized, T> {
    amount: T,
    axis: Axis,
    container: Option<LayoutProxy<'a, V>>,
}

impl<'a, V: View + ?Sized, T: Float> Distribution<'a, V, T> {
    /// Chain views `amount` apart along `axis`. Negative amounts overlap.
    pub fn new(amount: T, axis: Axis) -> Self {
        Self {
            amount,
            axis,
            container: None,
        }
    }

    /// Also pin the first and last view `amount` inside `container`.
    pub fn inside(mut self, container: LayoutProxy<'a, V>) -> Self {
        self.container = Some(container);
        self
    }

    pub fn amount(&self) -> T {
        self.amount
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn container(&self) -> Option<LayoutProxy<'a, V>> {
        self.container
    }

    /// Constraints distributing `proxies`, in order.
    ///
    /// Boundary constraints (first edge, then last edge) come before the
    /// neighbour constraints, which follow input order. Every view after
    /// the first has its autoresizing-mask translation disabled.
    ///
    /// Fails without side effects when `proxies` is empty.
    pub fn compute(
        &self,
        proxies: &[LayoutProxy<'a, V>],
    ) -> Result<Vec<Constraint<'a, V, T>>, DistributeError> {
        let Some((first, rest)) = proxies.split_first() else {
            tracing::debug!(axis = ?self.axis, "refusing to distribute zero views");
            return Err(DistributeError::EmptyInput);
        };
        Ok(self.compute_nonempty(*first, rest))
    }

    fn compute_nonempty(
        &self,
        first: LayoutProxy<'a, V>,
        rest: &[LayoutProxy<'a, V>],
    ) -> Vec<Constraint<'a, V, T>> {
        tracing::trace!(
            axis = ?self.axis,
            views = rest.len() + 1,
            inside = self.container.is_some(),
            "distributing views"
        );

        for proxy in rest {
            proxy.view().set_translates_autoresizing_mask(false);
        }

        let boundaries = if self.container.is_some() { 2 } else { 0 };
        let mut constraints = Vec::with_capacity(rest.len() + boundaries);

        if let Some(container) = self.container {
            let (start, end) = self.axis.boundary_attributes();
            let last = rest.last().copied().unwrap_or(first);
            constraints.push(
                first
                    .anchor(start)
                    .equal_to(container.anchor(start) + self.amount),
            );
            constraints.push(last.anchor(end).equal_to(container.anchor(end) - self.amount));
        }

        let (end, start) = self.axis.interior_attributes();
        let mut previous = first;
        for &current in rest {
            constraints.push(
                previous
                    .anchor(end)
                    .equal_to(current.anchor(start) - self.amount),
            );
            previous = current;
        }

        constraints
    }
}

impl<V: ?Sized, T: Copy> Clone for Distribution<'_, V, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized, T: Copy> Copy for Distribution<'_, V, T> {}

impl<V: ?Sized + core::fmt::Debug, T: core::fmt::Debug> core::fmt::Debug
    for Distribution<'_, V, T>
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Distribution")
            .field("amount", &self.amount)
            .field("axis", &self.axis)
            .field("container", &self.container)
            .finish()
    }
}

/// Distribute `proxies` along `axis`, optionally pinned inside `container`.
///
/// Shorthand for [`Distribution::compute`].
pub fn distribute<'a, V: View + ?Sized, T: Float>(
    amount: T,
    axis: Axis,
    container: Option<LayoutProxy<'a, V>>,
    proxies: &[LayoutProxy<'a, V>],
) -> Result<Vec<Constraint<'a, V, T>>, DistributeError> {
    let mut distribution = Distribution::new(amount, axis);
    distribution.container = container;
    distribution.compute(proxies)
}

/// Chain `first` and `rest` leading to trailing, `amount` apart.
pub fn horizontally<'a, V: View + ?Sized, T: Float>(
    amount: T,
    first: LayoutProxy<'a, V>,
    rest: &[LayoutProxy<'a, V>],
) -> Vec<Constraint<'a, V, T>> {
    Distribution::new(amount, Axis::Horizontal).compute_nonempty(first, rest)
}

/// Chain `first` and `rest` left to right, `amount` apart.
///
/// Without a container this produces the same constraints as
/// [`horizontally`]; the axes differ only in their boundary edges.
pub fn left_to_right<'a, V: View + ?Sized, T: Float>(
    amount: T,
    first: LayoutProxy<'a, V>,
    rest: &[LayoutProxy<'a, V>],
) -> Vec<Constraint<'a, V, T>> {
    Distribution::new(amount, Axis::LeftToRight).compute_nonempty(first, rest)
}

/// Chain `first` and `rest` top to bottom, `amount` apart.
pub fn vertically<'a, V: View + ?Sized, T: Float>(
    amount: T,
    first: LayoutProxy<'a, V>,
    rest: &[LayoutProxy<'a, V>],
) -> Vec<Constraint<'a, V, T>> {
    Distribution::new(amount, Axis::Vertical).compute_nonempty(first, rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[derive(Debug)]
    struct Node {
        translates: Cell<bool>,
    }

    impl Node {
        fn new() -> Self {
            Self {
                translates: Cell::new(true),
            }
        }
    }

    impl View for Node {
        fn set_translates_autoresizing_mask(&self, enabled: bool) {
            self.translates.set(enabled);
        }
    }

    // ── Axis selection ──────────────────────────────────────────────────

    #[test]
    fn boundary_attributes_per_axis() {
        use Attribute::*;
        assert_eq!(Axis::Horizontal.boundary_attributes(), (Leading, Trailing));
        assert_eq!(Axis::LeftToRight.boundary_attributes(), (Left, Right));
        assert_eq!(Axis::Vertical.boundary_attributes(), (Top, Bottom));
    }

    #[test]
    fn interior_attributes_per_axis() {
        use Attribute::*;
        assert_eq!(Axis::Horizontal.interior_attributes(), (Trailing, Leading));
        assert_eq!(Axis::LeftToRight.interior_attributes(), (Trailing, Leading));
        assert_eq!(Axis::Vertical.interior_attributes(), (Bottom, Top));
    }

    // ── Fold ────────────────────────────────────────────────────────────

    #[test]
    fn pairs_in_input_order() {
        let views = [Node::new(), Node::new(), Node::new(), Node::new()];
        let proxies: Vec<_> = views.iter().map(LayoutProxy::new).collect();
        let out = Distribution::new(2.0_f64, Axis::Horizontal)
            .compute(&proxies)
            .unwrap();
        assert_eq!(out.len(), 3);
        for (i, c) in out.iter().enumerate() {
            assert_eq!(*c, proxies[i].trailing().equal_to(proxies[i + 1].leading() - 2.0));
        }
    }

    #[test]
    fn boundaries_come_first() {
        let parent = Node::new();
        let views = [Node::new(), Node::new(), Node::new()];
        let proxies: Vec<_> = views.iter().map(LayoutProxy::new).collect();
        let p = LayoutProxy::new(&parent);
        let out = Distribution::new(5.0_f32, Axis::LeftToRight)
            .inside(p)
            .compute(&proxies)
            .unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], proxies[0].left().equal_to(p.left() + 5.0));
        assert_eq!(out[1], proxies[2].right().equal_to(p.right() - 5.0));
        assert_eq!(out[2], proxies[0].trailing().equal_to(proxies[1].leading() - 5.0));
        assert_eq!(out[3], proxies[1].trailing().equal_to(proxies[2].leading() - 5.0));
    }

    #[test]
    fn single_view_inside_container() {
        let parent = Node::new();
        let only = Node::new();
        let p = LayoutProxy::new(&parent);
        let v = LayoutProxy::new(&only);
        let out = distribute(3.0_f64, Axis::Horizontal, Some(p), &[v]).unwrap();
        assert_eq!(
            out,
            [
                v.leading().equal_to(p.leading() + 3.0),
                v.trailing().equal_to(p.trailing() - 3.0),
            ]
        );
        assert!(only.translates.get());
        assert!(parent.translates.get());
    }

    // ── Errors ──────────────────────────────────────────────────────────

    #[test]
    fn empty_input_errors() {
        let parent = Node::new();
        let out = Distribution::<Node, f64>::new(1.0, Axis::Vertical)
            .inside(LayoutProxy::new(&parent))
            .compute(&[]);
        assert_eq!(out.unwrap_err(), DistributeError::EmptyInput);
        assert!(parent.translates.get());
    }

    #[test]
    fn error_message() {
        assert_eq!(
            DistributeError::EmptyInput.to_string(),
            "invalid argument: cannot distribute an empty sequence of views"
        );
    }

    // ── Convenience forms ───────────────────────────────────────────────

    #[test]
    fn convenience_forms_match_builder() {
        let views = [Node::new(), Node::new(), Node::new()];
        let proxies: Vec<_> = views.iter().map(LayoutProxy::new).collect();
        for (axis, short) in [
            (Axis::Horizontal, horizontally(6.0_f64, proxies[0], &proxies[1..])),
            (Axis::LeftToRight, left_to_right(6.0_f64, proxies[0], &proxies[1..])),
            (Axis::Vertical, vertically(6.0_f64, proxies[0], &proxies[1..])),
        ] {
            let full = Distribution::new(6.0_f64, axis).compute(&proxies).unwrap();
            assert_eq!(short, full, "{axis:?}");
        }
    }
}
