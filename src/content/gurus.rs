//! Guru biographies

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guru {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const GURUS: [Guru; 2] = [
    Guru {
        slug: "paramahansa-yogananda",
        name: "Paramahansa Yogananda",
        description: "Author of 'Autobiography of a Yogi'.",
        icon: "person.crop.circle",
    },
    Guru {
        slug: "sri-yukteswar",
        name: "Sri Yukteswar",
        description: "The revered guru of Yogananda.",
        icon: "person.circle",
    },
];

pub fn gurus() -> &'static [Guru] {
    &GURUS
}
