//! Image family tree: nodes, ordering and the forest that links them.

pub mod forest;
pub mod node;
pub mod ordering;
pub mod timestamp;

pub use forest::Forest;
pub use node::Node;
