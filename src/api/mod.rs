/*!

The public API of the library: type tokens, the seam through which the
subtype relation is injected, and (behind the `macros` feature) the
declarative front-end over the process-wide registry store.

*/

pub mod relation;
pub mod token;

#[cfg(feature = "macros")]
pub mod macros;
#[cfg(feature = "macros")]
pub mod store;

#[cfg(feature = "macros")]
pub use store::{add, contains, current_point, declare, types, types_at};
