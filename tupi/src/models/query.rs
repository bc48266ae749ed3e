use serde::Serialize;
use std::collections::HashMap;

/// Everything the display layer renders for one analyzed text.
#[derive(Debug, Serialize, Clone)]
pub struct Analysis {
    /// Cleaned tokens in original order, stopwords removed.
    pub tokens: Vec<String>,
    /// Exact occurrence count per distinct token.
    pub frequencies: HashMap<String, usize>,
    /// Space-joined keyword digest.
    pub summary: String,
}
