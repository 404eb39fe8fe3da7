use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// A single character position in the [`Trie`].
///
/// The root carries no label. Every other node is reached through the edge
/// labelled with its own character. `terminal` marks nodes where a stored
/// word ends, so a bare prefix of a longer word is not reported as a member.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    label: Option<char>,
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn new(label: char) -> Self {
        TrieNode {
            label: Some(label),
            ..TrieNode::default()
        }
    }

    pub fn label(&self) -> Option<char> {
        self.label
    }

    pub fn is_word(&self) -> bool {
        self.terminal
    }

    pub fn get(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&ch, node)| (ch, node))
    }
}

/// Prefix tree holding the dictionary.
///
/// Lookups cost O(word length) no matter how many words are stored. The tree
/// is filled once by [`Trie::build`] and only read afterwards, so a shared
/// reference can be handed to any number of threads.
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
    nodes: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie {
            root: TrieNode::default(),
            len: 0,
            nodes: 1,
        }
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Adds `word`, creating nodes along its path as needed.
    ///
    /// Returns `false` if the word was already stored or is empty.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = match node.children.entry(ch) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    self.nodes += 1;
                    entry.insert(TrieNode::new(ch))
                }
            };
        }
        if node.terminal {
            false
        } else {
            node.terminal = true;
            self.len += 1;
            true
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(TrieNode::is_word)
    }

    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    fn find(&self, path: &str) -> Option<&TrieNode> {
        path.chars().try_fold(&self.root, |node, ch| node.get(ch))
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// All stored words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        Self::collect_words(&self.root, &mut prefix, &mut words);
        words
    }

    fn collect_words(node: &TrieNode, prefix: &mut String, words: &mut Vec<String>) {
        if node.terminal {
            words.push(prefix.clone());
        }
        for (ch, child) in node.children() {
            prefix.push(ch);
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}
