//! Typed deep-merge of token trees
//!
//! Every token type implements [`Overlay`]. Leaves (scalars, strings, colors,
//! lists) are patched by wholesale replacement. Composite token types are
//! declared through `overlay_struct!`, which also generates the matching
//! `Partial*` type where every field is optional, so a partial tree can only
//! name fields that exist in the base.

use crate::color::Color;

/// A value that can be patched in place by a partial counterpart.
pub trait Overlay {
    /// The partial shape accepted by [`Overlay::overlay`].
    type Patch;

    /// Apply `patch` onto `self`. Fields absent from the patch are untouched.
    fn overlay(&mut self, patch: &Self::Patch);

    /// Return a patched copy, leaving `self` as it was.
    fn overlaid(&self, patch: &Self::Patch) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.overlay(patch);
        out
    }
}

macro_rules! overlay_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Overlay for $ty {
                type Patch = $ty;

                fn overlay(&mut self, patch: &$ty) {
                    self.clone_from(patch);
                }
            }
        )*
    };
}

overlay_leaf!(String, bool, i32, u32, f32, f64, Color);

// Lists are leaves: an override replaces the whole list.
impl<T: Clone> Overlay for Vec<T> {
    type Patch = Vec<T>;

    fn overlay(&mut self, patch: &Vec<T>) {
        self.clone_from(patch);
    }
}

/// Declare a composite token struct together with its partial overlay.
///
/// ```ignore
/// overlay_struct! {
///     /// Docs for the full struct
///     pub struct FontWeight / PartialFontWeight {
///         pub normal: String,
///         pub bold: String,
///     }
/// }
/// ```
///
/// Field attributes (such as `#[serde(rename = "...")]`) are applied to both
/// the full and the partial struct so they share one wire format.
macro_rules! overlay_struct {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $partial:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $(#[$meta])*
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Partial [`", stringify!($name), "`]; unset fields inherit from the base.")]
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $partial {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<<$ty as $crate::overlay::Overlay>::Patch>,
            )*
        }

        impl $partial {
            /// True when no field is set.
            pub fn is_empty(&self) -> bool {
                true $(&& self.$field.is_none())*
            }
        }

        impl $crate::overlay::Overlay for $name {
            type Patch = $partial;

            fn overlay(&mut self, patch: &$partial) {
                $(
                    if let Some(value) = &patch.$field {
                        $crate::overlay::Overlay::overlay(&mut self.$field, value);
                    }
                )*
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    overlay_struct! {
        pub struct Inner / PartialInner {
            pub a: u32,
            pub b: String,
        }
    }

    overlay_struct! {
        pub struct Outer / PartialOuter {
            pub inner: Inner,
            pub stack: Vec<String>,
            pub flag: bool,
        }
    }

    fn outer() -> Outer {
        Outer {
            inner: Inner {
                a: 1,
                b: "one".into(),
            },
            stack: vec!["x".into(), "y".into(), "z".into()],
            flag: false,
        }
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = outer();
        assert!(PartialOuter::default().is_empty());
        assert_eq!(base.overlaid(&PartialOuter::default()), base);
    }

    #[test]
    fn test_nested_patch_only_touches_named_fields() {
        let base = outer();
        let patch = PartialOuter {
            inner: Some(PartialInner {
                a: Some(7),
                b: None,
            }),
            ..Default::default()
        };

        let out = base.overlaid(&patch);
        assert_eq!(out.inner.a, 7);
        assert_eq!(out.inner.b, "one");
        assert_eq!(out.stack, base.stack);
        assert!(!out.flag);
    }

    #[test]
    fn test_lists_are_replaced_wholesale() {
        let base = outer();
        let patch = PartialOuter {
            stack: Some(vec!["only".into()]),
            ..Default::default()
        };

        let out = base.overlaid(&patch);
        assert_eq!(out.stack, vec!["only".to_string()]);
    }

    #[test]
    fn test_overlaid_leaves_source_untouched() {
        let base = outer();
        let snapshot = base.clone();
        let patch = PartialOuter {
            flag: Some(true),
            inner: Some(PartialInner {
                b: Some("two".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let _ = base.overlaid(&patch);
        assert_eq!(base, snapshot);
    }
}
