//! Portfolio display data: immutable records rendered by the overlay and
//! the 3D scenes. Everything here is fixed at compile time; nothing
//! validates that an image URL actually resolves.

/// Shown as a stand-in when a certificate image reference is broken.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=Certificate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub area: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

/// One artwork in the virtual gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Certificate {
    pub title: &'static str,
    pub image: &'static str,
}

impl Certificate {
    /// Broken (empty) references fall back to the placeholder instead of
    /// failing.
    pub fn image_url(&self) -> &'static str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            self.image
        }
    }
}

/// One logo floating around the tech sphere.
#[derive(Debug, Clone, Copy)]
pub struct TechEntry {
    pub name: &'static str,
    pub image_url: &'static str,
    /// Per-logo display scale; some logos render visually larger than
    /// others at the same size.
    pub scale: f32,
}

pub const PROFILE: Profile = Profile {
    name: "Alex Carter",
    tagline: "Systems-curious full-stack developer",
    about: "I build interactive things for the web and the desktop, with a \
            soft spot for real-time graphics and data-heavy backends. \
            Currently exploring Rust for everything that needs to be fast.",
    email: "alex.carter.dev@example.com",
    location: "Lisbon, Portugal",
    github: "https://github.com/alexcarter-dev",
};

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        area: "Languages",
        items: &["Rust", "Python", "TypeScript", "SQL"],
    },
    SkillGroup {
        area: "Backend",
        items: &["Flask", "PostgreSQL", "MongoDB", "Redis"],
    },
    SkillGroup {
        area: "ML / Data",
        items: &["Hugging Face", "LangChain", "Whisper", "Streamlit"],
    },
    SkillGroup {
        area: "Graphics",
        items: &["wgpu", "WebGL", "shader programming"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Transcribe Studio",
        summary: "Batch audio transcription pipeline with speaker diarization and a searchable archive.",
        image: "/assets/projects/transcribe.png",
        tags: &["Python", "Whisper", "FFmpeg"],
        link: "https://github.com/alexcarter-dev/transcribe-studio",
    },
    Project {
        title: "Shelf Life",
        summary: "Inventory forecasting dashboard for small grocers, trained on two years of sales data.",
        image: "/assets/projects/shelflife.png",
        tags: &["Streamlit", "PostgreSQL"],
        link: "https://github.com/alexcarter-dev/shelf-life",
    },
    Project {
        title: "Wavefield",
        summary: "Real-time 2D wave simulation playground running entirely on the GPU.",
        image: "/assets/projects/wavefield.png",
        tags: &["Rust", "wgpu"],
        link: "https://github.com/alexcarter-dev/wavefield",
    },
    Project {
        title: "Docket",
        summary: "Minimal meeting-notes bot that files summaries straight into the team wiki.",
        image: "/assets/projects/docket.png",
        tags: &["TypeScript", "LangChain"],
        link: "https://github.com/alexcarter-dev/docket",
    },
];

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: 1,
        title: "National AI Hackathon - 1st Place",
        description: "Led a team of four to first place among 120 teams with a \
                      real-time accessibility captioning tool.",
        image: "/assets/achievements/ai-hackathon.jpg",
        date: "2025",
        category: "Hackathon",
    },
    Achievement {
        id: 2,
        title: "Space Apps Challenge - Regional Winner",
        description: "Regional round winner for an orbital-debris visualization \
                      built in 48 hours.",
        image: "/assets/achievements/space-apps.jpg",
        date: "2025",
        category: "Hackathon",
    },
    Achievement {
        id: 3,
        title: "University Research Conclave - 3rd Place",
        description: "Placed third with a study on low-latency speech-to-text \
                      pipelines for lecture capture.",
        image: "/assets/achievements/conclave.jpg",
        date: "2024",
        category: "Research",
    },
    Achievement {
        id: 4,
        title: "Open Source Sprint - Top Contributor",
        description: "Most merged PRs in the winter documentation-and-tooling \
                      sprint across three graphics crates.",
        image: "/assets/achievements/oss-sprint.jpg",
        date: "2024",
        category: "Open Source",
    },
    Achievement {
        id: 5,
        title: "24-Hour Game Jam - Audience Award",
        description: "Audience favorite for a one-button rhythm climber made \
                      with a two-person team.",
        image: "/assets/achievements/game-jam.jpg",
        date: "2023",
        category: "Game Jam",
    },
];

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Deep Learning Specialization",
        image: "/assets/certificates/deep-learning.jpg",
    },
    Certificate {
        title: "Cloud Practitioner",
        image: "/assets/certificates/cloud.jpg",
    },
    Certificate {
        // Image reference lost in a CMS migration; placeholder kicks in.
        title: "Database Design",
        image: "",
    },
];

pub const TECH_ENTRIES: &[TechEntry] = &[
    TechEntry {
        name: "Rust",
        image_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg",
        scale: 1.0,
    },
    TechEntry {
        name: "Python",
        image_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/python/python-original.svg",
        scale: 1.0,
    },
    TechEntry {
        name: "TypeScript",
        image_url:
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/typescript/typescript-original.svg",
        scale: 1.0,
    },
    TechEntry {
        name: "PostgreSQL",
        image_url:
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/postgresql/postgresql-original.svg",
        scale: 1.0,
    },
    TechEntry {
        name: "MongoDB",
        image_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/mongodb/mongodb-original.svg",
        scale: 1.0,
    },
    TechEntry {
        name: "Hugging Face",
        image_url: "https://huggingface.co/front/assets/huggingface_logo-noborder.svg",
        scale: 1.0,
    },
    TechEntry {
        name: "LangChain",
        image_url: "https://avatars.githubusercontent.com/u/126733545?s=200&v=4",
        scale: 1.0,
    },
    TechEntry {
        name: "FFmpeg",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/5/5f/FFmpeg_Logo_new.svg",
        scale: 0.4,
    },
    TechEntry {
        name: "Whisper",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/4/4d/OpenAI_Logo.svg",
        scale: 0.5,
    },
    TechEntry {
        name: "Streamlit",
        image_url:
            "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/streamlit/streamlit-original.svg",
        scale: 1.0,
    },
    TechEntry {
        name: "Flask",
        image_url: "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/flask/flask-original.svg",
        scale: 1.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievement_ids_are_unique() {
        for (i, a) in ACHIEVEMENTS.iter().enumerate() {
            for b in &ACHIEVEMENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn broken_certificate_reference_falls_back() {
        let broken = Certificate {
            title: "x",
            image: "",
        };
        assert_eq!(broken.image_url(), PLACEHOLDER_IMAGE);
        let fine = Certificate {
            title: "y",
            image: "/assets/certificates/y.jpg",
        };
        assert_eq!(fine.image_url(), "/assets/certificates/y.jpg");
    }

    #[test]
    fn tech_entries_carry_positive_scales() {
        for entry in TECH_ENTRIES {
            assert!(entry.scale > 0.0, "{} has a non-positive scale", entry.name);
        }
    }
}
