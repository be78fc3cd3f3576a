//! Sequence-level scoring of hypothesis streams against gold streams.

/// Marker hypotheses a decoder emits when it produced nothing usable.
const EMPTY_HYPOTHESIS: &str = "empty";
const ISSUE_MARKER: &str = "Warning::Issue in line";

/// Outcome of comparing a hypothesis file against a gold file line by line.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Hypotheses equal to their gold sequence.
    pub true_positives: usize,
    /// Non-empty hypotheses that differ from their gold sequence.
    pub false_positives: usize,
    /// Empty or unusable hypotheses.
    pub empty: usize,
    /// Number of gold sequences.
    pub total: usize,
    /// Per-line `"tp fp total"` significance triples, values in {0, 1}.
    pub significance: Vec<String>,
}

impl Evaluation {
    pub fn recall(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.true_positives as f64 / self.total as f64
    }

    pub fn precision(&self) -> f64 {
        let answered = self.true_positives + self.false_positives;
        if answered == 0 {
            return 0.0;
        }
        self.true_positives as f64 / answered as f64
    }

    pub fn f1(&self) -> f64 {
        let p = self.precision();
        let r = self.recall();
        if p + r == 0.0 {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }

    /// One-line summary with percentages, e.g. `r: 50.00 p: 100.00 f: 66.67`.
    pub fn summary(&self) -> String {
        format!(
            "r: {:.2} p: {:.2} f: {:.2}",
            self.recall() * 100.0,
            self.precision() * 100.0,
            self.f1() * 100.0
        )
    }
}

/// Scores hypotheses against gold sequences by exact match.
///
/// An empty hypothesis, the literal `empty`, or a line carrying a decoder
/// issue marker counts as unanswered rather than wrong: it costs recall but
/// not precision. Pairs beyond the shorter of the two lists are ignored;
/// recall is always relative to the number of gold sequences.
pub fn evaluate(hypos: &[String], golds: &[String]) -> Evaluation {
    let mut evaluation = Evaluation {
        true_positives: 0,
        false_positives: 0,
        empty: 0,
        total: golds.len(),
        significance: Vec::with_capacity(golds.len()),
    };

    for (hyp, gold) in hypos.iter().zip(golds) {
        if hyp == gold {
            evaluation.true_positives += 1;
            evaluation.significance.push("1 1 1".to_string());
        } else if hyp.is_empty() || hyp == EMPTY_HYPOTHESIS || hyp.contains(ISSUE_MARKER) {
            evaluation.empty += 1;
            evaluation.significance.push("0 0 1".to_string());
        } else {
            evaluation.false_positives += 1;
            evaluation.significance.push("0 1 1".to_string());
        }
    }

    evaluation
}
