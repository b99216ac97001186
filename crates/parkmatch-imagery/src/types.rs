//! Wire types for the park search service.
//!
//! `GET <search>?q=<text>` answers
//! `{ "themeParks": [ { id?, name, city?, state?, country?, mainPicture?: { url? }, pictures?: [ { url? } ] } ] }`.
//! Picture URLs may be relative to the image host.

use parkmatch_core::SearchCandidate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub theme_parks: Vec<SearchPark>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPark {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub main_picture: Option<PictureRef>,
    #[serde(default)]
    pub pictures: Option<Vec<PictureRef>>,
}

#[derive(Debug, Deserialize)]
pub struct PictureRef {
    #[serde(default)]
    pub url: Option<String>,
}

impl From<SearchPark> for SearchCandidate {
    fn from(park: SearchPark) -> Self {
        Self {
            id: park.id,
            name: park.name,
            city: park.city,
            country: park.country,
            main_image_ref: park.main_picture.and_then(|p| p.url),
            other_image_refs: park
                .pictures
                .unwrap_or_default()
                .into_iter()
                .filter_map(|p| p.url)
                .collect(),
        }
    }
}
