pub mod common;
pub mod union_find;
pub mod traversal;
pub mod components;
pub mod cycle;
pub mod mst;

pub use common::{GraphView, IndexedEdge, NodeId};
pub use union_find::DisjointSet;
pub use traversal::{is_connected, reachable_from};
pub use components::component_count;
pub use cycle::has_cycle;
pub use mst::{kruskal_mst, prim_mst, KruskalTree, MstError, PrimTree};
