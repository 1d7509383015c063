//! Keyword-and-negation sentiment scoring.
//!
//! Stages, in the order the classifier runs them:
//! - **Lexicon**: fixed positive/negative terms and negation markers
//! - **Scorer**: counts which lexicon entries occur in normalized text
//! - **Negation**: turns the counts into a label, letting negation override
//! - **Classifier**: runs normalization and the stages above
//!
//! [`BatchSummary`] aggregates results per label.

mod classifier;
mod lexicon;
mod negation;
mod scorer;
mod summary;

pub use classifier::{Classification, SentimentClassifier};
pub use lexicon::{Lexicon, NegationMarkers, TermSet};
pub use negation::{NegationAdjuster, PolarityDecision};
pub use scorer::{LexiconMatches, LexiconScorer, SubstringScorer};
pub use summary::BatchSummary;
