use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::mem;

#[derive(Default, PartialEq, Eq)]
pub(crate) struct TrieNode {
    pub(crate) is_terminal: bool,
    pub(crate) children: BTreeMap<char, TrieNode>,
}

impl TrieNode {
    pub(crate) fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }
}

// A key is a chain of nested nodes; dropping it field by field would take one
// stack frame per char.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::wordlist::trie::node::TrieNode;

    fn chain(len: usize) -> TrieNode {
        let mut node = TrieNode::default();
        node.is_terminal = true;
        for _ in 0..len {
            let mut parent = TrieNode::default();
            parent.children.insert('a', node);
            node = parent;
        }
        node
    }

    #[test]
    fn get_child_finds_direct_children_only() {
        let root = chain(2);
        let child = root.get_child('a').unwrap();
        assert!(!child.is_terminal);
        assert!(child.get_child('a').unwrap().is_terminal);
        assert!(root.get_child('b').is_none());
    }

    #[test]
    fn drops_long_chains() {
        drop(chain(1_000_000));
    }
}
