use std::rc::Rc;

use log::{info, warn, Level};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Properties;

use crate::content::PageContent;
use crate::presets;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // More chatter while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Hero,
    About,
    Specialties,
    Pinned,
    Modalities,
    Location,
    Gallery,
    Quotes,
    Testimonials,
    Faq,
    Cta,
    Footer,
    FloatingCta,
}

/// Built-in page variants. `Consultorio` is the canonical one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Consultorio,
    Classico,
}

impl Preset {
    pub fn slug(&self) -> &'static str {
        match self {
            Preset::Consultorio => "consultorio",
            Preset::Classico => "classico",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Practice {
    pub first_name: String,
    pub last_name: String,
    /// Professional title, typed out in the hero.
    pub title: String,
    pub registration: String,
    pub tagline: String,
    pub approach: String,
    pub portrait_url: String,
    pub about_image_url: String,
    pub bio: Vec<String>,
    pub footer_blurb: String,
}

impl Practice {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_display: String,
    /// Country code and number, digits only, as wa.me expects.
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub email: String,
    pub address_lines: Vec<String>,
    /// Address handed to the map embed.
    pub map_query: String,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("whatsapp number must be digits only, got {0:?}")]
    InvalidWhatsappNumber(String),
    #[error("navigation link {label:?} must target an in-page anchor, got {target:?}")]
    InvalidAnchor { label: String, target: String },
    #[error("section {section:?} is enabled but has no {what}")]
    EmptyContent { section: Section, what: &'static str },
    #[error("testimonial by {author:?} has rating {rating}, expected 1 to 5")]
    InvalidRating { author: String, rating: u8 },
}

/// Everything the page renders. Built once per route and handed down to
/// every section; nothing in it changes after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub practice: Practice,
    pub contact: Contact,
    pub sections: Vec<Section>,
    pub content: PageContent,
}

impl SiteConfig {
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Consultorio => presets::consultorio(),
            Preset::Classico => presets::classico(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Uses the JSON override embedded in the host page when there is one
    /// and it is valid, the built-in preset otherwise.
    pub fn load(preset: Preset) -> Self {
        let Some(json) = embedded_override(preset) else {
            info!("Using built-in {} site config", preset.slug());
            return Self::preset(preset);
        };
        match Self::from_json(&json) {
            Ok(config) => {
                info!("Using embedded {} site config", preset.slug());
                config
            }
            Err(e) => {
                warn!("Ignoring embedded {} site config: {}", preset.slug(), e);
                Self::preset(preset)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let number = &self.contact.whatsapp_number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidWhatsappNumber(number.clone()));
        }

        for link in &self.content.nav_links {
            if crate::state::scroll::anchor_id(&link.target).is_none() {
                return Err(ConfigError::InvalidAnchor {
                    label: link.label.clone(),
                    target: link.target.clone(),
                });
            }
        }

        let content = &self.content;
        for section in &self.sections {
            let missing = match section {
                Section::About if content.stats.is_empty() => Some("stats"),
                Section::Specialties if content.specialties.is_empty() => Some("specialties"),
                Section::Pinned if content.pinned.is_none() => Some("pinned content"),
                Section::Modalities if content.modalities.is_empty() => Some("modalities"),
                Section::Gallery if content.gallery.is_empty() => Some("gallery images"),
                Section::Quotes if content.quotes.is_empty() => Some("quotes"),
                Section::Testimonials if content.testimonials.is_empty() => Some("testimonials"),
                Section::Faq if content.faq.is_empty() => Some("faq entries"),
                _ => None,
            };
            if let Some(what) = missing {
                return Err(ConfigError::EmptyContent {
                    section: *section,
                    what,
                });
            }
        }

        if let Some(bad) = content
            .testimonials
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ConfigError::InvalidRating {
                author: bad.author.clone(),
                rating: bad.rating,
            });
        }

        Ok(())
    }

    pub fn has(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.contact.whatsapp_number,
            urlencoding::encode(&self.contact.whatsapp_message)
        )
    }

    pub fn map_embed_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={}&output=embed",
            urlencoding::encode(&self.contact.map_query)
        )
    }

    pub fn map_link(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            urlencoding::encode(&self.contact.map_query)
        )
    }
}

/// Props for every page section: the whole, shared config.
#[derive(Properties, PartialEq)]
pub struct ConfigProps {
    pub config: Rc<SiteConfig>,
}

fn embedded_override(preset: Preset) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let script = document.get_element_by_id(&format!("site-config-{}", preset.slug()))?;
    script
        .text_content()
        .filter(|json| !json.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for preset in [Preset::Consultorio, Preset::Classico] {
            let config = SiteConfig::preset(preset);
            assert!(config.validate().is_ok(), "{} preset", preset.slug());
        }
    }

    #[test]
    fn presets_differ_in_contact_and_sections() {
        let full = SiteConfig::preset(Preset::Consultorio);
        let classic = SiteConfig::preset(Preset::Classico);
        assert_ne!(full.contact.whatsapp_number, classic.contact.whatsapp_number);
        assert_ne!(full.contact.map_query, classic.contact.map_query);
        assert!(full.has(Section::Faq));
        assert!(full.has(Section::Testimonials));
        assert!(!classic.has(Section::Faq));
        assert!(!classic.has(Section::FloatingCta));
    }

    #[test]
    fn canonical_preset_carries_every_anchor() {
        let full = SiteConfig::preset(Preset::Consultorio);
        let targets: Vec<&str> = full
            .content
            .nav_links
            .iter()
            .map(|link| link.target.as_str())
            .collect();
        for anchor in [
            "#sobre",
            "#especialidades",
            "#atendimento",
            "#localizacao",
            "#depoimentos-pacientes",
            "#faq",
            "#contato",
        ] {
            assert!(targets.contains(&anchor), "missing {}", anchor);
        }
    }

    #[test]
    fn whatsapp_link_encodes_message() {
        let mut config = SiteConfig::preset(Preset::Classico);
        config.contact.whatsapp_number = "5511999999999".to_string();
        config.contact.whatsapp_message = "Olá, gostaria de agendar".to_string();
        assert_eq!(
            config.whatsapp_link(),
            "https://wa.me/5511999999999?text=Ol%C3%A1%2C%20gostaria%20de%20agendar"
        );
    }

    #[test]
    fn map_urls_encode_address() {
        let mut config = SiteConfig::preset(Preset::Consultorio);
        config.contact.map_query = "Rua das Flores, 123".to_string();
        assert_eq!(
            config.map_embed_url(),
            "https://www.google.com/maps?q=Rua%20das%20Flores%2C%20123&output=embed"
        );
        assert!(config.map_link().ends_with("query=Rua%20das%20Flores%2C%20123"));
    }

    #[test]
    fn json_round_trip_of_preset_loads() {
        let config = SiteConfig::preset(Preset::Consultorio);
        let json = serde_json::to_string(&config).expect("serialize");
        let loaded = SiteConfig::from_json(&json).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_non_digit_whatsapp_number() {
        let mut config = SiteConfig::preset(Preset::Consultorio);
        config.contact.whatsapp_number = "+55 (11) 9999".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWhatsappNumber(_))
        ));
    }

    #[test]
    fn rejects_links_that_leave_the_page() {
        let mut config = SiteConfig::preset(Preset::Consultorio);
        config.content.nav_links[0].target = "/sobre".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAnchor { .. })
        ));
    }

    #[test]
    fn rejects_enabled_section_without_content() {
        let mut config = SiteConfig::preset(Preset::Consultorio);
        config.content.quotes.clear();
        match config.validate() {
            Err(ConfigError::EmptyContent { section, .. }) => assert_eq!(section, Section::Quotes),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn disabled_section_may_be_empty() {
        let mut config = SiteConfig::preset(Preset::Classico);
        config.content.faq.clear();
        config.content.testimonials.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_rating() {
        let mut config = SiteConfig::preset(Preset::Consultorio);
        config.content.testimonials[0].rating = 6;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRating { rating: 6, .. })
        ));
    }
}
