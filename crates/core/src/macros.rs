//! The `wardrobe!` derivation macro.
//!
//! Takes one record definition and emits the slot-generic struct plus
//! everything derivation needs: the [`Structural`] bijection (a single
//! `Meta` root over a right-nested `Pair` tree), the capability impls
//! (each delegating to the facade entry points), [`Reflect`], and
//! field-bounded `Clone`/`Debug`/`PartialEq` impls. A stock derive would
//! bound the slot type itself, which is never what a clothed record
//! wants; the generated impls bound each field's wearing type instead.
//!
//! Field grammar:
//!
//! - `name: Type` -- a wrapped leaf; the struct field is `F::Of<Type>`.
//! - `nested name: Record` -- an indirect leaf; the struct field is
//!   `Record<F>`, and `Record` must itself be a `wardrobe!` family (or
//!   hand-implement the capability traits).
//!
//! All generated fields are `pub`.
//!
//! Anything else does not parse, which is where non-conforming shapes
//! are rejected -- at compile time, with no fallback. A sum type has no
//! spelling at all:
//!
//! ```compile_fail
//! wardrobe_core::wardrobe! {
//!     pub enum Direction { North, South }
//! }
//! ```
//!
//! A conforming record derives everything at once:
//!
//! ```
//! use wardrobe_core::{wardrobe, Combine, Fixed, Maybe, Paired};
//!
//! wardrobe! {
//!     /// Player profile.
//!     pub struct Profile {
//!         name: String,
//!         score: u32,
//!     }
//! }
//!
//! let x = Profile::<Maybe> { name: Some("hi".into()), score: Some(3) };
//! let y = Profile::<Fixed<u8>> { name: 1, score: 2 };
//! let both: Profile<Paired<Maybe, Fixed<u8>>> = x.combine(y);
//! assert_eq!(both.name, (Some("hi".to_string()), 1));
//! assert_eq!(both.score, (Some(3), 2));
//! ```
//!
//! [`Structural`]: crate::structural::Structural
//! [`Reflect`]: crate::shape::Reflect

/// Derive the full capability set for one record family.
///
/// See the [module docs](crate::macros) for the field grammar and an
/// example.
#[macro_export]
macro_rules! wardrobe {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $($fields:tt)*
        }
    ) => {
        $crate::__wardrobe_fields! {
            attrs = [ $(#[$attr])* ],
            vis = [ $vis ],
            name = $name,
            pending = [ $($fields)* ],
            done = [ ],
        }
    };
}

/// Field muncher: classifies each field as a wrapped leaf or a nested
/// record and accumulates `[leaf name Type]` / `[nest name Record]`
/// entries for the emitter.
#[doc(hidden)]
#[macro_export]
macro_rules! __wardrobe_fields {
    (
        attrs = [ $($attrs:tt)* ],
        vis = [ $($v:tt)* ],
        name = $name:ident,
        pending = [ nested $f:ident : $inner:ident , $($rest:tt)* ],
        done = [ $($done:tt)* ],
    ) => {
        $crate::__wardrobe_fields! {
            attrs = [ $($attrs)* ],
            vis = [ $($v)* ],
            name = $name,
            pending = [ $($rest)* ],
            done = [ $($done)* [nest $f $inner] ],
        }
    };
    (
        attrs = [ $($attrs:tt)* ],
        vis = [ $($v:tt)* ],
        name = $name:ident,
        pending = [ nested $f:ident : $inner:ident ],
        done = [ $($done:tt)* ],
    ) => {
        $crate::__wardrobe_fields! {
            attrs = [ $($attrs)* ],
            vis = [ $($v)* ],
            name = $name,
            pending = [ ],
            done = [ $($done)* [nest $f $inner] ],
        }
    };
    (
        attrs = [ $($attrs:tt)* ],
        vis = [ $($v:tt)* ],
        name = $name:ident,
        pending = [ $f:ident : $t:ty , $($rest:tt)* ],
        done = [ $($done:tt)* ],
    ) => {
        $crate::__wardrobe_fields! {
            attrs = [ $($attrs)* ],
            vis = [ $($v)* ],
            name = $name,
            pending = [ $($rest)* ],
            done = [ $($done)* [leaf $f $t] ],
        }
    };
    (
        attrs = [ $($attrs:tt)* ],
        vis = [ $($v:tt)* ],
        name = $name:ident,
        pending = [ $f:ident : $t:ty ],
        done = [ $($done:tt)* ],
    ) => {
        $crate::__wardrobe_fields! {
            attrs = [ $($attrs)* ],
            vis = [ $($v)* ],
            name = $name,
            pending = [ ],
            done = [ $($done)* [leaf $f $t] ],
        }
    };
    (
        attrs = [ $($attrs:tt)* ],
        vis = [ $($v:tt)* ],
        name = $name:ident,
        pending = [ ],
        done = [ $($done:tt)* ],
    ) => {
        $crate::__wardrobe_emit! {
            attrs = [ $($attrs)* ],
            vis = [ $($v)* ],
            name = $name,
            fields = [ $($done)* ],
        }
    };
}

/// A field's concrete type at slot `$S`.
#[doc(hidden)]
#[macro_export]
macro_rules! __wardrobe_field_ty {
    ($S:ident, [leaf $f:ident $t:tt]) => { <$S as $crate::slot::Slot>::Of<$t> };
    ($S:ident, [nest $f:ident $t:tt]) => { $t<$S> };
}

/// The right-nested representation tree, as a type at slot `$S`.
#[doc(hidden)]
#[macro_export]
macro_rules! __wardrobe_repr_ty {
    ($S:ident ;) => { $crate::repr::Nil };
    ($S:ident ; [leaf $f:ident $t:tt]) => { $crate::repr::Leaf<$S, $t> };
    ($S:ident ; [nest $f:ident $t:tt]) => { $crate::repr::Nested<$S, $t<$S>> };
    ($S:ident ; [$($head:tt)+] $($tail:tt)+) => {
        $crate::repr::Pair<
            $crate::__wardrobe_repr_ty!($S ; [$($head)+]),
            $crate::__wardrobe_repr_ty!($S ; $($tail)+),
        >
    };
}

/// The representation tree as an expression over destructured field
/// bindings.
#[doc(hidden)]
#[macro_export]
macro_rules! __wardrobe_repr_expr {
    () => { $crate::repr::Nil };
    ([leaf $f:ident $t:tt]) => { $crate::repr::Leaf($f) };
    ([nest $f:ident $t:tt]) => { $crate::repr::Nested::new($f) };
    ([$($head:tt)+] $($tail:tt)+) => {
        $crate::repr::Pair(
            $crate::__wardrobe_repr_expr!([$($head)+]),
            $crate::__wardrobe_repr_expr!($($tail)+),
        )
    };
}

/// The representation tree as an irrefutable pattern binding each field.
#[doc(hidden)]
#[macro_export]
macro_rules! __wardrobe_repr_pat {
    () => { $crate::repr::Nil };
    ([leaf $f:ident $t:tt]) => { $crate::repr::Leaf($f) };
    ([nest $f:ident $t:tt]) => { $crate::repr::Nested($f, _) };
    ([$($head:tt)+] $($tail:tt)+) => {
        $crate::repr::Pair(
            $crate::__wardrobe_repr_pat!([$($head)+]),
            $crate::__wardrobe_repr_pat!($($tail)+),
        )
    };
}

/// The shape descriptor for the field tree, as an expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __wardrobe_shape_expr {
    () => { $crate::shape::ShapeNode::Empty };
    ([leaf $f:ident $t:tt]) => {
        $crate::shape::ShapeNode::Field {
            name: ::std::string::String::from(::core::stringify!($f)),
            payload: ::std::string::String::from(::core::stringify!($t)),
        }
    };
    ([nest $f:ident $t:tt]) => {
        $crate::shape::ShapeNode::Nested {
            name: ::std::string::String::from(::core::stringify!($f)),
            record: ::std::string::String::from(::core::stringify!($t)),
            inner: ::std::boxed::Box::new(
                <$t<$crate::slot::Plain> as $crate::shape::Reflect>::shape(),
            ),
        }
    };
    ([$($head:tt)+] $($tail:tt)+) => {
        $crate::shape::ShapeNode::Pair {
            left: ::std::boxed::Box::new($crate::__wardrobe_shape_expr!([$($head)+])),
            right: ::std::boxed::Box::new($crate::__wardrobe_shape_expr!($($tail)+)),
        }
    };
}

/// Emitter: the struct and every impl derivation provides.
#[doc(hidden)]
#[macro_export]
macro_rules! __wardrobe_emit {
    (
        attrs = [ $($attrs:tt)* ],
        vis = [ $($v:tt)* ],
        name = $name:ident,
        fields = [ $( [ $kind:ident $fname:ident $fty:tt ] )* ],
    ) => {
        $($attrs)*
        $($v)* struct $name<F: $crate::slot::Slot> {
            $( pub $fname: $crate::__wardrobe_field_ty!(F, [ $kind $fname $fty ]), )*
        }

        impl<F: $crate::slot::Slot> $crate::structural::Structural for $name<F> {
            type Repr = $crate::repr::Meta<
                $crate::__wardrobe_repr_ty!( F ; $( [ $kind $fname $fty ] )* ),
            >;

            fn into_repr(self) -> Self::Repr {
                let Self { $( $fname ),* } = self;
                $crate::repr::Meta($crate::__wardrobe_repr_expr!( $( [ $kind $fname $fty ] )* ))
            }

            fn from_repr(repr: Self::Repr) -> Self {
                let $crate::repr::Meta(
                    $crate::__wardrobe_repr_pat!( $( [ $kind $fname $fty ] )* ),
                ) = repr;
                Self { $( $fname ),* }
            }
        }

        impl<F: $crate::slot::Slot> $crate::wearable::Wearable<F> for $name<F> {
            type Wearing<G: $crate::slot::Slot> = $name<G>;
        }

        impl<F: $crate::slot::Slot> $crate::wearable::Combine<F> for $name<F> {
            fn combine<G: $crate::slot::Slot>(
                self,
                other: $name<G>,
            ) -> $name<$crate::slot::Paired<F, G>> {
                $crate::structural::combine_via_repr(self, other)
            }
        }

        impl<F: $crate::slot::Slot> $crate::wearable::Broadcast<F> for $name<F> {
            fn broadcast<P: $crate::broadcast::Fill<F>>(fill: &P) -> Self {
                $crate::structural::broadcast_via_repr(fill)
            }
        }

        impl<F: $crate::slot::Slot> $crate::wearable::Remap<F> for $name<F> {
            fn remap<G: $crate::slot::Slot, T: $crate::remap::Retag<F, G>>(
                self,
                tag: &mut T,
            ) -> $name<G> {
                $crate::structural::remap_via_repr(self, tag)
            }
        }

        impl<F: $crate::slot::Slot> $crate::shape::Reflect for $name<F> {
            fn shape() -> $crate::shape::ShapeNode {
                $crate::shape::ShapeNode::Meta {
                    constructor: ::std::string::String::from(::core::stringify!($name)),
                    inner: ::std::boxed::Box::new(
                        $crate::__wardrobe_shape_expr!( $( [ $kind $fname $fty ] )* ),
                    ),
                }
            }
        }

        impl<F: $crate::slot::Slot> ::core::clone::Clone for $name<F>
        where
            $( $crate::__wardrobe_field_ty!(F, [ $kind $fname $fty ]): ::core::clone::Clone, )*
        {
            fn clone(&self) -> Self {
                Self { $( $fname: self.$fname.clone() ),* }
            }
        }

        impl<F: $crate::slot::Slot> ::core::fmt::Debug for $name<F>
        where
            $( $crate::__wardrobe_field_ty!(F, [ $kind $fname $fty ]): ::core::fmt::Debug, )*
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(::core::stringify!($name))
                    $( .field(::core::stringify!($fname), &self.$fname) )*
                    .finish()
            }
        }

        impl<F: $crate::slot::Slot> ::core::cmp::PartialEq for $name<F>
        where
            $( $crate::__wardrobe_field_ty!(F, [ $kind $fname $fty ]): ::core::cmp::PartialEq, )*
        {
            fn eq(&self, other: &Self) -> bool {
                let _ = other;
                true $( && self.$fname == other.$fname )*
            }
        }
    };
}
