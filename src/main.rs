use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;
use structopt::StructOpt;

use word_trie::{FileFormat, Result, Wordlist};

/// Layout of the word list being read.
#[derive(StructOpt)]
struct FormatArgs {
    /// Column separator; without one each line is a word
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word
    #[structopt(long)]
    column: Option<usize>,
}

impl FormatArgs {
    fn file_format(&self) -> FileFormat {
        // The builder changes type with every setter, so fill both fields at once.
        match (self.delimiter, self.column) {
            (Some(d), Some(c)) => FileFormat::builder().delimiter(d).word_column(c).build(),
            (Some(d), None) => FileFormat::builder().delimiter(d).build(),
            (None, Some(c)) => FileFormat::builder().word_column(c).build(),
            (None, None) => FileFormat::builder().build(),
        }
    }
}

/// Exact and prefix lookups over a word list, and its compact trie encoding.
#[derive(StructOpt)]
enum Cli {
    /// Report whether each key is in the word list
    Search {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        #[structopt(flatten)]
        format: FormatArgs,
        #[structopt(required = true)]
        keys: Vec<String>,
    },
    /// List every word starting with a prefix
    Prefix {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        #[structopt(flatten)]
        format: FormatArgs,
        prefix: String,
        /// Print the matches as a JSON array
        #[structopt(long)]
        json: bool,
    },
    /// Write the trie encoding of a word list to a file
    Encode {
        #[structopt(parse(from_os_str))]
        path: PathBuf,
        #[structopt(flatten)]
        format: FormatArgs,
        #[structopt(parse(from_os_str))]
        out: PathBuf,
    },
    /// List the words of an encoded trie under a prefix
    Decode {
        #[structopt(parse(from_os_str))]
        encoded: PathBuf,
        #[structopt(default_value = "")]
        prefix: String,
    },
}

fn load(path: &Path, format: &FormatArgs) -> Result<Wordlist> {
    let mut wl = Wordlist::new();
    wl.load_file(path, &format.file_format())?;
    Ok(wl)
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::from_args() {
        Cli::Search { path, format, keys } => {
            let wl = load(&path, &format)?;
            for key in keys {
                println!("{}: {}", key, wl.contains(&key));
            }
        }
        Cli::Prefix { path, format, prefix, json } => {
            let wl = load(&path, &format)?;
            let start = Instant::now();
            let words = wl.complete(&prefix);
            info!("{} matches in {:.3}s", words.len(), start.elapsed().as_secs_f64());
            if json {
                println!("{}", serde_json::to_string(&words)?);
            } else {
                words.iter().for_each(|w| println!("{}", w));
            }
        }
        Cli::Encode { path, format, out } => {
            let wl = load(&path, &format)?;
            wl.save_encoded(&out)?;
            info!("Wrote {} words to {:?}", wl.len(), out);
        }
        Cli::Decode { encoded, prefix } => {
            let wl = Wordlist::load_encoded(&encoded)?;
            wl.complete(&prefix).iter().for_each(|w| println!("{}", w));
        }
    }
    Ok(())
}
