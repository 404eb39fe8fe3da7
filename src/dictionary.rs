use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::info;

use crate::error::{Result, SpellError};
use crate::trie::Trie;

pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Trims and lowercases each line, dropping blanks and duplicates.
pub fn normalize_words<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = lines
        .into_iter()
        .map(|line| line.as_ref().trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Reads a newline-separated word list.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, since
/// system word lists are not always clean.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SpellError::DictionaryNotFound {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| SpellError::DictionaryRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);
    let words = normalize_words(content.lines());
    if words.is_empty() {
        return Err(SpellError::EmptyDictionary {
            path: path.to_path_buf(),
        });
    }
    info!(
        path = %path.display(),
        lines = content.lines().count(),
        words = words.len(),
        "read word list"
    );
    Ok(words)
}

pub fn load_trie<P: AsRef<Path>>(path: P) -> Result<Trie> {
    let words = read_word_list(path)?;
    let start = Instant::now();
    let trie = Trie::build(&words);
    info!(
        words = trie.len(),
        nodes = trie.node_count(),
        elapsed = ?start.elapsed(),
        "built dictionary lookup tree"
    );
    Ok(trie)
}
