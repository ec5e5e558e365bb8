//! Constraint descriptors: `first <relation> second + constant`.
//!
//! A [`Constraint`] only describes a relation. Activating it is up to the
//! host layout engine, which reads the anchors, the relation, and the
//! constant off the descriptor.

use core::fmt;

use num_traits::Float;

use crate::anchor::{Anchor, Expression};

/// How the two sides of a constraint relate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `first == second + constant`
    #[default]
    Equal,
    /// `first <= second + constant`
    LessThanOrEqual,
    /// `first >= second + constant`
    GreaterThanOrEqual,
}

impl Relation {
    /// Operator symbol used when rendering.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

/// A relation between two anchors, offset by a constant.
///
/// Reads as `first <relation> second + constant`. The descriptor borrows
/// the views it refers to and owns nothing else.
pub struct Constraint<'a, V: ?Sized, T> {
    /// Left-hand anchor.
    pub first: Anchor<'a, V>,
    pub relation: Relation,
    /// Right-hand anchor.
    pub second: Anchor<'a, V>,
    /// Offset applied to `second`.
    pub constant: T,
}

/// Build a constraint from an anchor, a relation and an offset expression.
///
/// The [`Anchor::equal_to`] family are shorthands for this.
pub fn make_constraint<'a, V: ?Sized, T: Float>(
    first: Anchor<'a, V>,
    relation: Relation,
    second: impl Into<Expression<'a, V, T>>,
) -> Constraint<'a, V, T> {
    let Expression { anchor, constant } = second.into();
    Constraint {
        first,
        relation,
        second: anchor,
        constant,
    }
}

impl<V: ?Sized, T> Constraint<'_, V, T> {
    /// True when either side is anchored to `view`.
    pub fn involves(&self, view: &V) -> bool {
        self.first.is_on(view) || self.second.is_on(view)
    }
}

impl<V: ?Sized, T: Copy> Clone for Constraint<'_, V, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized, T: Copy> Copy for Constraint<'_, V, T> {}

impl<V: ?Sized, T: PartialEq> PartialEq for Constraint<'_, V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first
            && self.relation == other.relation
            && self.second == other.second
            && self.constant == other.constant
    }
}

impl<V: ?Sized + fmt::Debug, T: fmt::Debug> fmt::Debug for Constraint<'_, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("first", &self.first)
            .field("relation", &self.relation)
            .field("second", &self.second)
            .field("constant", &self.constant)
            .finish()
    }
}

/// Renders as `A.trailing == B.leading - 8`. A zero constant is left out.
impl<V, T> fmt::Display for Constraint<'_, V, T>
where
    V: ?Sized + fmt::Display,
    T: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.relation.symbol(), self.second)?;
        if self.constant < T::zero() {
            write!(f, " - {}", -self.constant)
        } else if self.constant > T::zero() {
            write!(f, " + {}", self.constant)
        } else {
            Ok(())
        }
    }
}
