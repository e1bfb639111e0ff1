//! Turns a `Payload` into the three read-only view models.
//!
//! Nothing here deduplicates, aggregates or re-sorts: that work happened in
//! the recognition service. Projection only regroups and labels, so running
//! it twice over the same payload yields identical output.

use serde::Serialize;

use crate::domain::{Block, BlockKind, Language, PageSummary, Payload};

pub const NO_SENTENCES_PLACEHOLDER: &str = "No sentences found.";
pub const NO_VOCABULARY_PLACEHOLDER: &str = "No vocabulary found.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedViews {
    pub page_feed: PageFeedView,
    pub page_summary: PageSummaryView,
    pub global_set: GlobalSetView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFeedView {
    pub cards: Vec<BlockCard>,
    /// `summary.totalBlocks` as reported, even when it disagrees with `cards.len()`.
    pub reported_total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockCard {
    pub id: String,
    pub page: u32,
    pub page_label: String,
    pub language: Language,
    pub kind: BlockKind,
    pub confidence_percent: u32,
    pub original: String,
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageGroup<'a> {
    pub page: u32,
    pub cards: Vec<&'a BlockCard>,
}

impl PageFeedView {
    /// Groups cards by page in order of first appearance; inside a page the
    /// cards keep their `results` order.
    pub fn grouped_by_page(&self) -> Vec<PageGroup<'_>> {
        let mut groups: Vec<PageGroup<'_>> = Vec::new();
        for card in &self.cards {
            match groups.iter_mut().find(|g| g.page == card.page) {
                Some(group) => group.cards.push(card),
                None => groups.push(PageGroup {
                    page: card.page,
                    cards: vec![card],
                }),
            }
        }
        groups
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSummaryView {
    pub pages: Vec<PageBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageBreakdown {
    pub page: u32,
    pub title: String,
    pub sentences: Vec<String>,
    pub vocabulary: Vec<String>,
    pub total: usize,
}

impl PageBreakdown {
    pub fn sentences_placeholder(&self) -> Option<&'static str> {
        self.sentences
            .is_empty()
            .then_some(NO_SENTENCES_PLACEHOLDER)
    }

    pub fn vocabulary_placeholder(&self) -> Option<&'static str> {
        self.vocabulary
            .is_empty()
            .then_some(NO_VOCABULARY_PLACEHOLDER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SetCategory {
    Sentences,
    Vocabulary,
}

impl SetCategory {
    pub fn title(&self) -> &'static str {
        match self {
            SetCategory::Sentences => "Global Unique Sentences",
            SetCategory::Vocabulary => "Global Unique Vocabulary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSetView {
    /// Only categories with at least one item.
    pub sections: Vec<GlobalSection>,
}

impl GlobalSetView {
    pub fn section(&self, category: SetCategory) -> Option<&GlobalSection> {
        self.sections.iter().find(|s| s.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalSection {
    pub category: SetCategory,
    pub title: String,
    pub items: Vec<String>,
    pub count: usize,
}

pub fn project(payload: &Payload) -> ProjectedViews {
    ProjectedViews {
        page_feed: project_page_feed(payload),
        page_summary: project_page_summary(payload),
        global_set: project_global_set(payload),
    }
}

pub fn project_page_feed(payload: &Payload) -> PageFeedView {
    PageFeedView {
        cards: payload.results.iter().map(block_card).collect(),
        reported_total: payload.summary.total_blocks,
    }
}

pub fn project_page_summary(payload: &Payload) -> PageSummaryView {
    PageSummaryView {
        pages: payload.page_summaries.iter().map(page_breakdown).collect(),
    }
}

pub fn project_global_set(payload: &Payload) -> GlobalSetView {
    let set = &payload.aggregated_set;
    let sections = [
        (SetCategory::Sentences, &set.sentences),
        (SetCategory::Vocabulary, &set.vocabulary),
    ]
    .into_iter()
    .filter(|(_, items)| !items.is_empty())
    .map(|(category, items)| GlobalSection {
        category,
        title: format!("{} ({})", category.title(), items.len()),
        items: items.clone(),
        count: items.len(),
    })
    .collect();

    GlobalSetView { sections }
}

fn block_card(block: &Block) -> BlockCard {
    BlockCard {
        id: block.id.clone(),
        page: block.page,
        page_label: format!("P{}", block.page),
        language: block.language,
        kind: block.kind,
        confidence_percent: (block.confidence * 100.0).round() as u32,
        original: block.original.clone(),
        reading: block.reading.clone(),
    }
}

fn page_breakdown(summary: &PageSummary) -> PageBreakdown {
    PageBreakdown {
        page: summary.page,
        title: format!("Page {} Breakdown", summary.page),
        sentences: summary.sentences.clone(),
        vocabulary: summary.vocabulary.clone(),
        total: summary.total_items(),
    }
}
