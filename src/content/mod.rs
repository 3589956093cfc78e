//! Static library content
//!
//! The articles, gurus and tab layout are fixed at compile time.

pub mod articles;
pub mod gurus;

use serde::Serialize;

pub use articles::{article, articles, Article};
pub use gurus::{gurus, Guru};

/// One entry of the app's tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub index: u8,
    pub title: &'static str,
    pub icon: &'static str,
}

const TABS: [Tab; 3] = [
    Tab {
        index: 0,
        title: "Meditation",
        icon: "timer",
    },
    Tab {
        index: 1,
        title: "Articles",
        icon: "book",
    },
    Tab {
        index: 2,
        title: "Gurus",
        icon: "person",
    },
];

/// Tabs in display order
pub fn tabs() -> &'static [Tab] {
    &TABS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_indexed_in_order() {
        let titles: Vec<_> = tabs().iter().map(|tab| tab.title).collect();
        assert_eq!(titles, ["Meditation", "Articles", "Gurus"]);
        assert!(tabs().iter().enumerate().all(|(i, tab)| tab.index as usize == i));
    }
}
