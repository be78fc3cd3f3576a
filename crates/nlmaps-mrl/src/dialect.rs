//! The closed set of supported MRL dialects.

use crate::escape;
use crate::functionalise::{self, FunctionaliseOptions};
use crate::linearise;

/// An MRL dialect tag, dispatching to the dialect's transformation set.
///
/// `Generic` knows nothing about query structure and only normalises
/// whitespace; `Nlmaps` carries the escape/linearise/functionalise pipeline.
/// The set is closed, so plain enum dispatch replaces any dynamic machinery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    Generic,
    #[default]
    Nlmaps,
}

impl Dialect {
    /// Resolves a dialect from its command-line name.
    pub fn from_name(name: &str) -> Option<Dialect> {
        match name {
            "" | "generic" => Some(Dialect::Generic),
            "nlmaps" => Some(Dialect::Nlmaps),
            _ => None,
        }
    }

    /// The name the dialect resolves from.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Generic => "generic",
            Dialect::Nlmaps => "nlmaps",
        }
    }

    /// Turns a surface query into the token stream a learner consumes.
    ///
    /// For `Nlmaps` this is sentinel escaping followed by linearisation; for
    /// `Generic` it is whitespace normalisation.
    pub fn preprocess(self, mrl: &str) -> String {
        match self {
            Dialect::Generic => mrl.split_whitespace().collect::<Vec<_>>().join(" "),
            Dialect::Nlmaps => linearise::linearise(&escape::encode(mrl)),
        }
    }

    /// Inverts [`preprocess`](Self::preprocess), rejecting streams that do
    /// not encode a tree.
    ///
    /// `Generic` has no structure to rebuild and passes the stream through.
    pub fn functionalise(self, lin: &str, opts: &FunctionaliseOptions) -> String {
        match self {
            Dialect::Generic => lin.to_string(),
            Dialect::Nlmaps => functionalise::functionalise(lin, opts),
        }
    }
}
