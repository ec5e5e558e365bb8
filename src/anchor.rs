//! Anchors (a view plus one of its edges) and offset expressions over them.
//!
//! ```
//! use core::cell::Cell;
//! use zendistribute::{Attribute, LayoutProxy, Relation, View};
//!
//! struct Label(Cell<bool>);
//! impl View for Label {
//!     fn set_translates_autoresizing_mask(&self, enabled: bool) {
//!         self.0.set(enabled);
//!     }
//! }
//!
//! let (a, b) = (Label(Cell::new(true)), Label(Cell::new(true)));
//! let (a, b) = (LayoutProxy::new(&a), LayoutProxy::new(&b));
//!
//! let c = a.trailing().equal_to(b.leading() - 8.0_f64);
//! assert_eq!(c.first.attribute(), Attribute::Trailing);
//! assert_eq!(c.relation, Relation::Equal);
//! assert_eq!(c.constant, -8.0);
//! ```

use core::fmt;
use core::ops::{Add, Sub};

use num_traits::Float;

use crate::constraint::{Constraint, Relation, make_constraint};

/// A geometric edge of a view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Leading edge. Left in left-to-right layouts, right otherwise.
    Leading,
    /// Trailing edge. Right in left-to-right layouts, left otherwise.
    Trailing,
    /// Left edge, regardless of layout direction.
    Left,
    /// Right edge, regardless of layout direction.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl Attribute {
    /// Lowercase name, as used when rendering constraints.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One edge of a borrowed view.
///
/// Two anchors are equal when they name the same attribute of the *same*
/// view instance (address identity). Views are never compared structurally.
pub struct Anchor<'a, V: ?Sized> {
    view: &'a V,
    attribute: Attribute,
}

impl<'a, V: ?Sized> Anchor<'a, V> {
    /// Anchor `attribute` of `view`.
    pub const fn new(view: &'a V, attribute: Attribute) -> Self {
        Self { view, attribute }
    }

    /// The view this anchor belongs to.
    pub const fn view(&self) -> &'a V {
        self.view
    }

    pub const fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// True when this anchor belongs to `view` (address identity).
    pub fn is_on(&self, view: &V) -> bool {
        core::ptr::addr_eq(self.view, view)
    }

    /// `self == other`
    pub fn equal_to<T: Float>(
        self,
        other: impl Into<Expression<'a, V, T>>,
    ) -> Constraint<'a, V, T> {
        make_constraint(self, Relation::Equal, other)
    }

    /// `self <= other`
    pub fn less_than_or_equal_to<T: Float>(
        self,
        other: impl Into<Expression<'a, V, T>>,
    ) -> Constraint<'a, V, T> {
        make_constraint(self, Relation::LessThanOrEqual, other)
    }

    /// `self >= other`
    pub fn greater_than_or_equal_to<T: Float>(
        self,
        other: impl Into<Expression<'a, V, T>>,
    ) -> Constraint<'a, V, T> {
        make_constraint(self, Relation::GreaterThanOrEqual, other)
    }
}

impl<V: ?Sized> Clone for Anchor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for Anchor<'_, V> {}

impl<V: ?Sized> PartialEq for Anchor<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.attribute == other.attribute && core::ptr::addr_eq(self.view, other.view)
    }
}

impl<V: ?Sized> Eq for Anchor<'_, V> {}

impl<V: ?Sized + fmt::Debug> fmt::Debug for Anchor<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anchor")
            .field("view", &self.view)
            .field("attribute", &self.attribute)
            .finish()
    }
}

impl<V: ?Sized + fmt::Display> fmt::Display for Anchor<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.view, self.attribute)
    }
}

/// An anchor shifted by a constant: `anchor + constant`.
pub struct Expression<'a, V: ?Sized, T> {
    /// The anchor being offset.
    pub anchor: Anchor<'a, V>,
    /// Offset added to the anchor's position. Negative for `anchor - n`.
    pub constant: T,
}

impl<V: ?Sized, T: Copy> Clone for Expression<'_, V, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized, T: Copy> Copy for Expression<'_, V, T> {}

impl<V: ?Sized, T: PartialEq> PartialEq for Expression<'_, V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.anchor == other.anchor && self.constant == other.constant
    }
}

impl<V: ?Sized + fmt::Debug, T: fmt::Debug> fmt::Debug for Expression<'_, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expression")
            .field("anchor", &self.anchor)
            .field("constant", &self.constant)
            .finish()
    }
}

impl<'a, V: ?Sized, T: Float> From<Anchor<'a, V>> for Expression<'a, V, T> {
    fn from(anchor: Anchor<'a, V>) -> Self {
        Self {
            anchor,
            constant: T::zero(),
        }
    }
}

impl<'a, V: ?Sized, T: Float> Add<T> for Anchor<'a, V> {
    type Output = Expression<'a, V, T>;

    fn add(self, amount: T) -> Self::Output {
        Expression {
            anchor: self,
            constant: amount,
        }
    }
}

impl<'a, V: ?Sized, T: Float> Sub<T> for Anchor<'a, V> {
    type Output = Expression<'a, V, T>;

    fn sub(self, amount: T) -> Self::Output {
        Expression {
            anchor: self,
            constant: -amount,
        }
    }
}

impl<V: ?Sized, T: Float> Add<T> for Expression<'_, V, T> {
    type Output = Self;

    fn add(mut self, amount: T) -> Self {
        self.constant = self.constant + amount;
        self
    }
}

impl<V: ?Sized, T: Float> Sub<T> for Expression<'_, V, T> {
    type Output = Self;

    fn sub(mut self, amount: T) -> Self {
        self.constant = self.constant - amount;
        self
    }
}
