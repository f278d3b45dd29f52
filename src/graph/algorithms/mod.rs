//! Analyses built on the traversal engine.
//!
//! Every analysis is generic over [`UndirectedGraph`](crate::graph::UndirectedGraph),
//! runs once at construction, and exposes its result through read-only
//! accessors.
//!
//! Vertical split:
//! - `components`: connected components
//! - `loops`: one fundamental cycle per DFS back edge
//! - `euler`: Euler path / circuit classification and construction
//! - `path`: shortest paths by hop count

pub mod components;
pub mod euler;
pub mod loops;
pub mod path;

pub use components::ConnectedComponents;
pub use euler::{classify, EulerKind, EulerWalk};
pub use loops::Loops;
pub use path::{shortest_path, shortest_path_avoiding};
