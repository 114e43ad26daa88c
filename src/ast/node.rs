use crate::src::Src;

/// A Node contains an AST node, pairing it with its source.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub inner: K,
    pub src: Src,
}

impl<K> Node<K> {
    pub fn new(src: Src, inner: K) -> Self {
        Node { inner, src }
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for Node<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple(&format!("Node@{}+{}", self.src.offset, self.src.len))
            .field(&self.inner)
            .finish()
    }
}
