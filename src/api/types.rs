use serde::{Deserialize, Serialize};

/// One summarized news record as served by `GET /api/news`.
///
/// `url` is only attached upstream when the summarizer can map an item back
/// to its source post, so both it and `explanation` fall back to empty.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub rank: u32,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub explanation: String,
}

impl NewsItem {
    /// Label shown in the tile's rank badge, e.g. `#1`.
    pub fn rank_label(&self) -> String {
        format!("#{}", self.rank)
    }
}
