use std::collections::btree_map::Entry;
use std::fmt::{Debug, Formatter};

use derive_new::new;
use log::warn;

use crate::alphabet::{is_reserved, normalize};
use crate::wordlist::trie::node::TrieNode;

/// Case-insensitive set of strings supporting exact and prefix lookups.
#[derive(Default, PartialEq, Eq)]
pub struct Trie {
    pub(crate) root: TrieNode,
    pub(crate) size: usize,
    /// Number of non-root nodes, one per edge.
    pub(crate) edges: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            root: Default::default(),
            size: 0,
            edges: 0,
        }
    }

    /// Number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Inserts `key` after lowercasing it. Inserting a stored key again does nothing.
    pub fn insert(&mut self, key: &str) {
        let key = normalize(key);
        if key.chars().any(is_reserved) {
            warn!("key {:?} contains a reserved marker; its encoding will be ambiguous", key);
        }

        let mut current = &mut self.root;
        for c in key.chars() {
            current = match current.children.entry(c) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    self.edges += 1;
                    e.insert(TrieNode::default())
                }
            };
        }

        if !current.is_terminal {
            current.is_terminal = true;
            self.size += 1;
        }
    }

    pub fn add_all<'f, I>(&mut self, items: I)
        where I: IntoIterator<Item=&'f str> {
        items.into_iter().for_each(|x| self.insert(x));
    }

    pub fn search(&self, key: &str) -> bool {
        self.get_node(&normalize(key))
            .map(|x| x.is_terminal).unwrap_or(false)
    }

    /// Every stored key starting with `prefix`, in no particular order.
    pub fn find_all_with_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize(prefix);
        let mut results = vec![];

        let start = match self.get_node(&prefix) {
            Some(node) => node,
            None => return results,
        };

        #[derive(new)]
        struct Frame<'a> {
            node: &'a TrieNode,
            path: String,
        }

        let mut stack = vec![Frame::new(start, prefix)];
        while let Some(Frame { node, path }) = stack.pop() {
            if node.is_terminal {
                results.push(path.clone());
            }
            for (c, child) in &node.children {
                let mut child_path = path.clone();
                child_path.push(*c);
                stack.push(Frame::new(child, child_path));
            }
        }
        results
    }

    /// Expects an already normalized key.
    fn get_node(&self, key: &str) -> Option<&TrieNode> {
        key.chars()
            .try_fold(&self.root, |node, c| node.get_child(c))
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut l = f.debug_list();
        let mut stack = vec![&self.root];
        while let Some(x) = stack.pop() {
            l.entry(x);
            x.children.values().for_each(|c| stack.push(c));
        }
        l.finish()
    }
}
