//! The declarative front-end: one macro per registration/query verb,
//! operating on the process-wide store. Identifiers are interned as their
//! textual name, so `add_type!(Widget, SERIALIZABLE)` registers the token
//! `"Widget"` under the registry `"SERIALIZABLE"`.

/// Declares a fresh, empty registry. Must precede any `add_type!` for the
/// same registry.
#[macro_export]
macro_rules! declare_list {
    ($name:ident) => {
        $crate::api::declare(stringify!($name))
    };
}

/// Registers one type under a declared registry, at a new registration point.
#[macro_export]
macro_rules! add_type {
    ($type:ty, $name:ident) => {
        $crate::api::add(stringify!($type), stringify!($name))
    };
}

/// Does the registry's current sequence contain this type?
#[macro_export]
macro_rules! contains_type {
    ($type:ty, $name:ident) => {
        $crate::api::contains(stringify!($type), stringify!($name))
    };
}

/// The sequence registered so far, resolved at the point just before this
/// call. Feed it to [`ancestors`](crate::ancestors) as the universe.
#[macro_export]
macro_rules! list_types {
    ($name:ident) => {
        $crate::api::types(stringify!($name))
    };
}

// The following makes the macros importable directly from the `api` module.
pub use {add_type, contains_type, declare_list, list_types};
