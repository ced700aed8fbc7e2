//! Part-of-speech tag vocabulary.
//!
//! POS filters only accept tags the vocabulary recognizes. The default is the
//! Penn Treebank tag set used by the bundled dictionary.

/// A recognized set of part-of-speech tags.
pub trait TagSet: Send + Sync {
    /// True if `tag` belongs to the vocabulary.
    fn is_known(&self, tag: &str) -> bool;
}

impl<F> TagSet for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_known(&self, tag: &str) -> bool {
        self(tag)
    }
}

/// Penn Treebank part-of-speech tags.
pub const PENN_TAGS: &[&str] = &[
    "cc", "cd", "dt", "ex", "fw", "in", "jj", "jjr", "jjs", "ls", "md", "nn", "nns", "nnp",
    "nnps", "pdt", "pos", "prp", "prp$", "rb", "rbr", "rbs", "rp", "sym", "to", "uh", "vb",
    "vbd", "vbg", "vbn", "vbp", "vbz", "wdt", "wp", "wp$", "wrb",
];

/// The Penn Treebank tag set, matched case-insensitively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PennTagSet;

impl TagSet for PennTagSet {
    fn is_known(&self, tag: &str) -> bool {
        PENN_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
