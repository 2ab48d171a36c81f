use serde::{Deserialize, Serialize};

/// which panels are visible on narrow screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Map,
    List,
    #[default]
    Both,
}
