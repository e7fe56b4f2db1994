use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// Variant used as thumbnail when nothing else is configured.
pub const ORIGIN_VARIANT: &str = "origin";

/// Variant name (for example `xs`, `s`, `m`, `origin`) to the URI serving it.
pub type Variants = BTreeMap<String, String>;

/// A hosted image and the URIs of its resolution variants.
///
/// Pictures carry no identity beyond their position in the dataset; `id` is
/// derived from that position and only used to build URIs and for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Picture {
    pub id: String,

    /// Name of the variant the list view renders.
    pub thumbnail: String,

    pub pictures: Variants,
}

impl Picture {
    /// URI of the thumbnail variant, if the picture has one.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.pictures.get(&self.thumbnail).map(String::as_str)
    }
}

/// Public URI of one variant of a picture.
pub fn generate_url(base_url: &str, partition: &str, variant: &str, id: &str) -> String {
    format!(
        "{}/api/pictures/{}/{}/{}",
        base_url.trim_end_matches('/'),
        partition,
        variant,
        id
    )
}

/// Pick the thumbnail variant: the configured one, else the first variant, else `origin`.
pub fn thumbnail_name(configured: Option<&str>, variants: &[String]) -> String {
    configured
        .or_else(|| variants.first().map(String::as_str))
        .unwrap_or(ORIGIN_VARIANT)
        .to_string()
}
