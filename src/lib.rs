pub mod alphabet;
pub mod error;
pub mod wordlist;

pub use crate::error::{Error, MalformedReason, Result};
pub use crate::wordlist::trie::codec::deserialize;
pub use crate::wordlist::trie::trie::Trie;
pub use crate::wordlist::wordlist::{FileFormat, LoadStats, Wordlist};
