/*!

A registry of type tokens with ancestor linearization for per-level
hierarchy dispatch.

Tokens are registered incrementally, each at a strictly increasing
*registration point*; the registry can be queried as of any point, and a
query's result — the *universe* — feeds the linearizer, which computes the
ordered chain of a target's supertypes found in that universe, most general
first, diamonds included. The chain drives per-ancestor dispatch: call a
handler once per level of an object's hierarchy (serialization, logging,
generic per-level processing).

The subtype relation is injected rather than discovered: hand in a closure,
or build an explicit [`Hierarchy`] of direct-parent edges and seal it into a
transitive closure.

```
use hierlib::{ancestors, seq, Hierarchy, Token};

let mut hierarchy = Hierarchy::new();
hierarchy.insert_subtype("Circle", "Shape");
hierarchy.insert_subtype("Shape", "Object");
hierarchy.seal();

let universe = seq!["Object", "Shape", "Circle"];
let chain = ancestors(&Token::new("Circle"), &universe, &hierarchy);
assert_eq!(chain, seq!["Object", "Shape"]);
```

With the `macros` feature, a declarative front-end drives a process-wide
store instead:

```ignore
use hierlib::{add_type, ancestors, declare_list, list_types, Token};

declare_list!(SERIALIZABLE)?;
add_type!(Shape, SERIALIZABLE)?;
add_type!(Circle, SERIALIZABLE)?;

let universe = list_types!(SERIALIZABLE);
let chain = ancestors(&Token::new("Circle"), &universe, &relation);
```

*/

pub mod abstractions;
pub mod api;
mod core;


// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{log, IString};

// The public surface of the core.
pub use api::{relation::SubtypeRelation, token::Token};
pub use crate::core::{
  dispatch::{dispatch_hierarchy, for_each, DispatchOption, DispatchOptions},
  hierarchy::{Hierarchy, HierarchyStatus},
  linearize::ancestors,
  registry::{Registry, RegistryError},
  sequence::{Sequence, SequenceError},
};
