//! Compact text encoding of a [`Trie`].
//!
//! The tree is written pre-order: a node emits [`TERMINAL_MARKER`] when it
//! ends a key, then each child as its edge character followed by the child's
//! own encoding, then [`CLOSE_MARKER`]. The root has no edge character, so the
//! trie holding `foo` and `fiz` encodes as `fiz]>>oo]>>>>`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::alphabet::{CLOSE_MARKER, TERMINAL_MARKER};
use crate::error::{Error, MalformedReason, Result};
use crate::wordlist::trie::node::TrieNode;
use crate::wordlist::trie::trie::Trie;

impl Trie {
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.serialize_into(&mut out);
        out
    }

    /// Appends the encoding to `out`.
    pub fn serialize_into(&self, out: &mut String) {
        // One edge char per non-root node, one close per node, one marker per key.
        out.reserve(2 * self.edges + 1 + self.size);

        if self.root.is_terminal {
            out.push(TERMINAL_MARKER);
        }
        let mut stack = vec![self.root.children.iter()];
        loop {
            let next = match stack.last_mut() {
                Some(children) => children.next(),
                None => break,
            };
            match next {
                Some((c, child)) => {
                    out.push(*c);
                    if child.is_terminal {
                        out.push(TERMINAL_MARKER);
                    }
                    stack.push(child.children.iter());
                }
                None => {
                    stack.pop();
                    out.push(CLOSE_MARKER);
                }
            }
        }
    }

    pub fn from_encoded(encoded: &str) -> Result<Trie> {
        let mut trie = Trie::new();
        deserialize(&mut trie, encoded)?;
        Ok(trie)
    }
}

/// Replays `encoded` into `trie`, starting at its root.
///
/// Decoding into a non-empty trie merges the encoded keys into it. On error
/// the trie keeps whatever was decoded before the offending character.
pub fn deserialize(trie: &mut Trie, encoded: &str) -> Result<()> {
    let before = trie.size;
    // Open scopes below the root. A child is taken out of its parent while
    // its scope is open and put back when the scope closes.
    let mut open: Vec<(char, TrieNode)> = vec![];
    let mut closed = false;

    for (position, c) in encoded.chars().enumerate() {
        if closed {
            reattach(&mut trie.root, &mut open);
            return Err(Error::MalformedEncoding {
                position,
                reason: MalformedReason::TrailingInput,
            });
        }
        match c {
            TERMINAL_MARKER => {
                let node = top(&mut trie.root, &mut open);
                if !node.is_terminal {
                    node.is_terminal = true;
                    trie.size += 1;
                }
            }
            CLOSE_MARKER => match open.pop() {
                Some((edge, node)) => {
                    top(&mut trie.root, &mut open).children.insert(edge, node);
                }
                None => closed = true,
            },
            _ => {
                let child = match top(&mut trie.root, &mut open).children.remove(&c) {
                    Some(child) => child,
                    None => {
                        trie.edges += 1;
                        TrieNode::default()
                    }
                };
                open.push((c, child));
            }
        }
    }

    if !closed {
        let scopes = open.len() + 1;
        reattach(&mut trie.root, &mut open);
        return Err(Error::MalformedEncoding {
            position: encoded.chars().count(),
            reason: MalformedReason::UnclosedScope { open: scopes },
        });
    }
    debug!("decoded {} chars into {} new keys", encoded.chars().count(), trie.size - before);
    Ok(())
}

fn top<'a>(root: &'a mut TrieNode, open: &'a mut [(char, TrieNode)]) -> &'a mut TrieNode {
    match open.last_mut() {
        Some((_, node)) => node,
        None => root,
    }
}

fn reattach(root: &mut TrieNode, open: &mut Vec<(char, TrieNode)>) {
    while let Some((edge, node)) = open.pop() {
        top(root, open).children.insert(edge, node);
    }
}

impl FromStr for Trie {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Trie::from_encoded(s)
    }
}

impl Display for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl Serialize for Trie {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(&Trie::serialize(self))
    }
}

impl<'de> Deserialize<'de> for Trie {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error> where D: Deserializer<'de> {
        deserializer.deserialize_str(DeserializeTrieVisitor {})
    }
}

struct DeserializeTrieVisitor {}

impl<'de> Visitor<'de> for DeserializeTrieVisitor {
    type Value = Trie;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        write!(formatter, "an encoded trie string")
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E> where E: de::Error {
        Trie::from_encoded(v).map_err(E::custom)
    }
}
