use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::config::Config;

pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Insertion-ordered, de-duplicated collection of candidate strings.
///
/// Inserts past `limit` are dropped; the search is bounded by it.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    items: Vec<Rc<str>>,
    seen: HashSet<Rc<str>>, // shares each allocation with `items`
    limit: usize,
}

impl CandidateSet {
    pub fn new(limit: usize) -> Self {
        CandidateSet {
            items: Vec::new(),
            seen: HashSet::new(),
            limit,
        }
    }

    pub fn seed(word: &str, limit: usize) -> Self {
        let mut set = Self::new(limit);
        set.insert(word.to_owned());
        set
    }

    /// Returns `true` if the candidate was added.
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.is_full() || self.seen.contains(candidate.as_str()) {
            return false;
        }
        let candidate: Rc<str> = candidate.into();
        self.seen.insert(Rc::clone(&candidate));
        self.items.push(candidate);
        true
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.seen.contains(candidate)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.limit
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|candidate| &**candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|candidate| &**candidate)
    }

    /// Candidates added at or after position `from`.
    pub fn iter_from(&self, from: usize) -> impl Iterator<Item = &str> {
        self.items.iter().skip(from).map(|candidate| &**candidate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationRule {
    FoldCase,
    CollapseRepeats,
    SwapVowels,
}

impl MutationRule {
    pub const ALL: [MutationRule; 3] = [
        MutationRule::FoldCase,
        MutationRule::CollapseRepeats,
        MutationRule::SwapVowels,
    ];

    /// Applies the rule once to every candidate in `input`.
    ///
    /// Case folding replaces each candidate by its lowercase form. The other
    /// rules keep the input candidates and append their variants.
    pub fn apply(self, input: &CandidateSet, config: &Config) -> CandidateSet {
        match self {
            MutationRule::FoldCase => {
                let mut output = CandidateSet::new(input.limit());
                for candidate in input.iter() {
                    output.insert(fold_case(candidate));
                }
                output
            }
            MutationRule::CollapseRepeats | MutationRule::SwapVowels => {
                let mut output = input.clone();
                self.expand(&mut output, 0, config);
                output
            }
        }
    }

    /// Appends the variants of `set[from..]` to `set` and returns how many
    /// were added. Case folding has no variants to append.
    pub fn expand(self, set: &mut CandidateSet, from: usize, config: &Config) -> usize {
        let end = set.len();
        for i in from..end {
            if set.is_full() {
                break;
            }
            let candidate = Rc::clone(&set.items[i]);
            let variants = match self {
                MutationRule::FoldCase => Vec::new(),
                MutationRule::CollapseRepeats => {
                    let remaining = set.limit() - set.len();
                    collapse_repeats(
                        &candidate,
                        config.max_run_length,
                        remaining.saturating_add(1),
                    )
                }
                MutationRule::SwapVowels => swap_vowels(&candidate),
            };
            for variant in variants {
                set.insert(variant);
            }
        }
        set.len() - end
    }
}

impl fmt::Display for MutationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationRule::FoldCase => "fold-case",
            MutationRule::CollapseRepeats => "collapse-repeats",
            MutationRule::SwapVowels => "swap-vowels",
        };
        f.write_str(name)
    }
}

/// Every ordered selection of `k` rules from `rules`, in lexicographic order
/// of their positions in `rules`.
pub fn permutations(rules: &[MutationRule], k: usize) -> Vec<Vec<MutationRule>> {
    fn walk(
        rules: &[MutationRule],
        k: usize,
        used: &mut Vec<bool>,
        current: &mut Vec<MutationRule>,
        out: &mut Vec<Vec<MutationRule>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for (i, &rule) in rules.iter().enumerate() {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(rule);
            walk(rules, k, used, current, out);
            current.pop();
            used[i] = false;
        }
    }

    let mut out = Vec::new();
    if k > rules.len() {
        return out;
    }
    walk(rules, k, &mut vec![false; rules.len()], &mut Vec::with_capacity(k), &mut out);
    out
}

pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Variants of `word` with each run of a repeated character shortened to
/// every length from 1 up to `max_run` (or the run's own length, if
/// shorter). The unchanged word comes first; at most `limit` strings are
/// returned.
pub fn collapse_repeats(word: &str, max_run: usize, limit: usize) -> Vec<String> {
    let runs = runs(word);
    let mut variants = vec![word.to_owned()];
    if runs.iter().all(|&(_, len)| len < 2) {
        return variants;
    }

    let choices: Vec<usize> = runs.iter().map(|&(_, len)| len.min(max_run.max(1))).collect();
    let mut lengths = vec![1; runs.len()];
    // Odometer over run lengths, last run turning fastest.
    while variants.len() < limit {
        let mut variant = String::with_capacity(word.len());
        for (&(ch, _), &n) in runs.iter().zip(&lengths) {
            variant.extend(std::iter::repeat_n(ch, n));
        }
        variants.push(variant);

        let mut i = runs.len();
        loop {
            if i == 0 {
                return variants;
            }
            i -= 1;
            if lengths[i] < choices[i] {
                lengths[i] += 1;
                break;
            }
            lengths[i] = 1;
        }
    }
    variants
}

fn runs(word: &str) -> Vec<(char, usize)> {
    let mut runs: Vec<(char, usize)> = Vec::new();
    for ch in word.chars() {
        if let Some((last, len)) = runs.last_mut() {
            if *last == ch {
                *len += 1;
                continue;
            }
        }
        runs.push((ch, 1));
    }
    runs
}

/// All variants of `word` with exactly one lowercase vowel replaced by a
/// different vowel.
pub fn swap_vowels(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut variants = Vec::new();
    for (i, &ch) in chars.iter().enumerate() {
        if !VOWELS.contains(&ch) {
            continue;
        }
        for &vowel in VOWELS.iter().filter(|&&v| v != ch) {
            let mut swapped = chars.clone();
            swapped[i] = vowel;
            variants.push(swapped.into_iter().collect());
        }
    }
    variants
}

pub fn vowel_positions(word: &str) -> usize {
    word.chars().filter(|ch| VOWELS.contains(ch)).count()
}
