/// The entries whose keys hash to one bucket, in insertion order.
#[derive(Clone, Debug)]
pub(crate) struct Chain<V> {
    entries: Vec<Node<V>>,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    pub(crate) key: String,
    pub(crate) value: V,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Chain {
            entries: Vec::new(),
        }
    }
}

impl<V> Chain<V> {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a node without checking for an existing one with the same key.
    pub(crate) fn insert(&mut self, key: String, value: V) {
        self.entries.push(Node { key, value });
    }

    pub(crate) fn find(&self, key: &str) -> Option<&Node<V>> {
        self.entries.iter().find(|node| node.key == key)
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut Node<V>> {
        self.entries.iter_mut().find(|node| node.key == key)
    }

    /// Detaches the first node holding `key`, returning whether one was found.
    pub(crate) fn remove(&mut self, key: &str) -> bool {
        match self.entries.iter().position(|node| node.key == key) {
            Some(i) => {
                self.entries.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Node<V>> {
        self.entries.iter()
    }
}

impl<V> IntoIterator for Chain<V> {
    type Item = Node<V>;
    type IntoIter = std::vec::IntoIter<Node<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
