//! Embed document domain entity
//!
//! The link-preview document returned by the embed provider for a URL.
//! Providers return partial documents freely, so every field is optional and
//! every accessor is total: absent values come back blank or `None`.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize null as default (empty vec, empty string, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A fetched link preview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedDocument {
    /// Canonical or original URL of the linked resource
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub meta: EmbedMeta,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub links: EmbedLinks,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rel: Vec<String>,
    /// Provider-generated embed markup
    #[serde(default)]
    pub html: Option<String>,
}

/// Descriptive metadata about the linked page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedMeta {
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub canonical: Option<String>,
}

/// Renderable assets grouped by kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedLinks {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub player: Vec<EmbedLink>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub image: Vec<EmbedLink>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub thumbnail: Vec<EmbedLink>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub icon: Vec<EmbedLink>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub app: Vec<EmbedLink>,
}

/// A single asset entry (player, image, thumbnail, icon or app embed)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmbedLink {
    #[serde(default)]
    pub href: Option<String>,
    #[serde(rename = "type", default)]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub rel: Vec<String>,
    /// Inline markup, set on app embeds that have no standalone href
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub content_length: Option<u64>,
    #[serde(default)]
    pub media: Option<LinkMedia>,
}

/// Size hints attached to an asset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkMedia {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(rename = "aspect-ratio", default)]
    pub aspect_ratio: Option<f64>,
    #[serde(rename = "max-width", default)]
    pub max_width: Option<f64>,
}

impl EmbedLink {
    /// The href, treating an empty string as absent
    pub fn href(&self) -> Option<&str> {
        non_blank(self.href.as_deref())
    }
}

impl EmbedDocument {
    pub fn site(&self) -> &str {
        self.meta.site.as_deref().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.meta.author.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.meta.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.meta.description.as_deref().unwrap_or_default()
    }

    pub fn canonical(&self) -> &str {
        self.meta.canonical.as_deref().unwrap_or_default()
    }

    pub fn icon_href(&self) -> Option<&str> {
        self.links.icon.first().and_then(EmbedLink::href)
    }

    pub fn first_player_href(&self) -> Option<&str> {
        self.links.player.first().and_then(EmbedLink::href)
    }

    pub fn first_thumbnail_href(&self) -> Option<&str> {
        self.links.thumbnail.first().and_then(EmbedLink::href)
    }

    /// Hrefs of every image entry that has one
    pub fn image_hrefs(&self) -> Vec<&str> {
        self.links.image.iter().filter_map(EmbedLink::href).collect()
    }

    /// Host part of `url`, or the raw url when it does not parse
    pub fn hostname(&self) -> String {
        reqwest::Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| self.url.clone())
    }

    /// Avatar fallback: first letter of the site name, upper-cased
    pub fn avatar_initial(&self) -> String {
        self.site()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
