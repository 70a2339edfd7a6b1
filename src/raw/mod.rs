mod arena;
mod handle;
mod node;
mod raw_tree;

pub(crate) use node::Side;
pub(crate) use raw_tree::{RawTree, Spine};
