//! Packaging metadata the host reads before loading the extension.

use inkdex_catalog::models::ContentRating;
use serde::Serialize;

/// A capability the extension advertises; each maps to a provider trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    SettingsFormProviding,
    DiscoverSectionsProviding,
    SearchResultsProviding,
    ChapterProviding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Developer {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub icon: &'static str,
    pub language: &'static str,
    pub content_rating: ContentRating,
    pub capabilities: Vec<Capability>,
    pub badges: Vec<&'static str>,
    pub developers: Vec<Developer>,
}
impl ExtensionInfo {
    pub fn template() -> Self {
        Self {
            name: "Content Template",
            description: "Template that shows the functionality of content providing extensions.",
            version: "1.0.0-alpha.3",
            icon: "icon.png",
            language: "en",
            content_rating: ContentRating::Everyone,
            capabilities: vec![
                Capability::SettingsFormProviding,
                Capability::DiscoverSectionsProviding,
                Capability::SearchResultsProviding,
                Capability::ChapterProviding,
            ],
            badges: Vec::new(),
            developers: vec![Developer {
                name: "Celarye",
                website: Some("https://celarye.dev"),
                github: Some("https://github.com/Celarye"),
            }],
        }
    }
}
