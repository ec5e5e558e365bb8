//! Host views and the proxies that expose their anchors.

use crate::anchor::{Anchor, Attribute};

/// The host-side view capability distribution needs.
///
/// UI views are reference types in most toolkits, so the flag is set
/// through `&self`; implementors keep it behind a `Cell` or similar.
pub trait View {
    /// Enable or disable synthesizing constraints from the view's
    /// non-constraint layout attributes (frame, autoresizing mask).
    ///
    /// Must be disabled on any view that takes part in hand-written
    /// constraints. Writes are idempotent.
    fn set_translates_autoresizing_mask(&self, enabled: bool);
}

impl<V: View + ?Sized> View for &V {
    fn set_translates_autoresizing_mask(&self, enabled: bool) {
        (**self).set_translates_autoresizing_mask(enabled);
    }
}

/// A borrowed view, exposing its anchors.
///
/// The proxy never owns the view and never outlives it.
pub struct LayoutProxy<'a, V: ?Sized> {
    view: &'a V,
}

impl<'a, V: ?Sized> LayoutProxy<'a, V> {
    pub const fn new(view: &'a V) -> Self {
        Self { view }
    }

    /// The wrapped view.
    pub const fn view(&self) -> &'a V {
        self.view
    }

    /// Any anchor of the wrapped view.
    pub const fn anchor(&self, attribute: Attribute) -> Anchor<'a, V> {
        Anchor::new(self.view, attribute)
    }

    pub const fn leading(&self) -> Anchor<'a, V> {
        self.anchor(Attribute::Leading)
    }

    pub const fn trailing(&self) -> Anchor<'a, V> {
        self.anchor(Attribute::Trailing)
    }

    pub const fn left(&self) -> Anchor<'a, V> {
        self.anchor(Attribute::Left)
    }

    pub const fn right(&self) -> Anchor<'a, V> {
        self.anchor(Attribute::Right)
    }

    pub const fn top(&self) -> Anchor<'a, V> {
        self.anchor(Attribute::Top)
    }

    pub const fn bottom(&self) -> Anchor<'a, V> {
        self.anchor(Attribute::Bottom)
    }
}

impl<V: ?Sized> Clone for LayoutProxy<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for LayoutProxy<'_, V> {}

impl<V: ?Sized + core::fmt::Debug> core::fmt::Debug for LayoutProxy<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LayoutProxy").field(&self.view).finish()
    }
}

impl<'a, V: ?Sized> From<&'a V> for LayoutProxy<'a, V> {
    fn from(view: &'a V) -> Self {
        Self::new(view)
    }
}
