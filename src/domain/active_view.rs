use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActiveView {
    #[default]
    PageFeed,
    PageSummary,
    GlobalSet,
}

impl ActiveView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveView::PageFeed => "page",
            ActiveView::PageSummary => "page-summary",
            ActiveView::GlobalSet => "set",
        }
    }
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "page" => Ok(ActiveView::PageFeed),
            "page-summary" => Ok(ActiveView::PageSummary),
            "set" => Ok(ActiveView::GlobalSet),
            _ => Err(format!("Invalid view: {}", s)),
        }
    }
}

impl fmt::Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
