use serde::{Deserialize, Serialize};

/// Glyphs used across the page. Serialized in kebab-case so a JSON override
/// can name them (`"graduation-cap"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Heart,
    Brain,
    Users,
    GraduationCap,
    MapPin,
    MessageCircle,
    Calendar,
    ArrowRight,
    Instagram,
    Linkedin,
    Mail,
    Clock,
    Leaf,
    Star,
    Menu,
    Close,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Same-page anchor, e.g. `#sobre`.
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub icon: Icon,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Modality {
    pub icon: Icon,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub rating: u8,
    #[serde(default)]
    pub long_form: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pinned {
    pub image_url: String,
    pub heading: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub nav_links: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub specialties: Vec<Specialty>,
    #[serde(default)]
    pub formation: Vec<String>,
    pub modalities: Vec<Modality>,
    #[serde(default)]
    pub pinned: Option<Pinned>,
    pub quotes: Vec<String>,
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}
