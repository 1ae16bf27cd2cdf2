//! The fixed background track list.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nasheed {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

pub const NASHEEDS: [Nasheed; 4] = [
    Nasheed {
        id: "1",
        title: "Peaceful Melody",
        url: "/nasheeds/peaceful-melody.mp3",
    },
    Nasheed {
        id: "2",
        title: "Spiritual Journey",
        url: "/nasheeds/spiritual-journey.mp3",
    },
    Nasheed {
        id: "3",
        title: "Divine Light",
        url: "/nasheeds/divine-light.mp3",
    },
    Nasheed {
        id: "4",
        title: "Heavenly Voices",
        url: "/nasheeds/heavenly-voices.mp3",
    },
];

pub fn find_nasheed(id: &str) -> Option<&'static Nasheed> {
    NASHEEDS.iter().find(|nasheed| nasheed.id == id)
}
