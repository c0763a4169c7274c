use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use derive_new::new;
use log::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::{Error, Result};
use crate::wordlist::trie::codec::deserialize;
use crate::wordlist::trie::trie::Trie;

/// Layout of a word list file. Without a delimiter every line is one word.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    /// `line_no` is only used for error reporting.
    pub fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .ok_or(Error::MissingColumn { line: line_no, column })
            }
        }
    }
}

#[derive(new, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub added: usize,
    pub failures: usize,
}

#[derive(Debug, Default)]
pub struct Wordlist {
    trie: Trie,
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<LoadStats> {
        info!("Reading words from {:?}", path.as_ref());
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file), format)
    }

    /// Adds every word of `reader`. Blank lines are skipped; unreadable lines
    /// and lines missing the word column count as failures.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<LoadStats> {
        let start = Instant::now();
        let mut stats = LoadStats::default();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    debug!("line {}: {}", line_no, e);
                    stats.failures += 1;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match format.parse_line(&line, line_no) {
                Ok(word) => {
                    self.trie.insert(word.trim());
                    stats.added += 1;
                    if stats.added % 100000 == 0 {
                        info!("{} {}", stats.added, word);
                    }
                }
                Err(e) => {
                    debug!("{}", e);
                    stats.failures += 1;
                }
            }
        }

        info!("Read {} words in {:.3}s ({} distinct) [{} failures]",
              stats.added, start.elapsed().as_secs_f64(), self.trie.len(), stats.failures);
        Ok(stats)
    }

    pub fn save_encoded<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.trie.serialize())?;
        Ok(())
    }

    pub fn load_encoded<P: AsRef<Path>>(path: P) -> Result<Wordlist> {
        let encoded = fs::read_to_string(path)?;
        let encoded = encoded.strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(&encoded);

        let mut wordlist = Wordlist::new();
        deserialize(&mut wordlist.trie, encoded)?;
        Ok(wordlist)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.search(word)
    }

    /// Stored words starting with `prefix`, sorted.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let mut words = self.trie.find_all_with_prefix(prefix);
        words.sort();
        words
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}
