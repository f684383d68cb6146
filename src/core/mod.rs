/*!

The algorithmic core: the sequence algebra, the point-addressable registry,
the hierarchy table backing the subtype relation, the ancestor linearizer,
and the per-ancestor dispatcher. The public surface is re-exported from the
crate root.

*/

pub mod dispatch;
pub mod hierarchy;
pub mod linearize;
pub mod registry;
pub mod sequence;
