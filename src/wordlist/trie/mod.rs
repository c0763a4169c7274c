pub mod trie;
pub mod codec;

mod node;
