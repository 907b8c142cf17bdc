pub(crate) mod align;
pub(crate) mod graph;
pub(crate) mod node;
pub(crate) mod shapes;
