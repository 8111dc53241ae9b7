//! Coin link record as delivered by the market-data API.
//!
//! Decoding is lenient: missing fields, `null` fields, `null` (or
//! non-string) entries inside URL lists and thread ids that are not
//! unsigned integers are all accepted, so a sparse record never fails to
//! decode.

use serde::{Deserialize, Deserializer, Serialize};

/// External references attached to a coin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    #[serde(default, deserialize_with = "lenient_list")]
    pub homepage: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub blockchain_site: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub official_forum_url: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub chat_url: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub announcement_url: Vec<String>,
    #[serde(default)]
    pub twitter_screen_name: Option<String>,
    #[serde(default)]
    pub facebook_username: Option<String>,
    #[serde(default)]
    pub telegram_channel_identifier: Option<String>,
    #[serde(default)]
    pub subreddit_url: Option<String>,
    /// Carried through; not turned into a link.
    #[serde(default, deserialize_with = "lenient_thread_id")]
    pub bitcointalk_thread_identifier: Option<u64>,
    #[serde(default, deserialize_with = "lenient_repos")]
    pub repos_url: ReposUrl,
}

/// Source repositories, split by hosting provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReposUrl {
    #[serde(default, deserialize_with = "lenient_list")]
    pub github: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub bitbucket: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<RawEntry>> = Option::deserialize(deserializer)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| match e {
            RawEntry::Text(s) => Some(s),
            RawEntry::Other(_) => None,
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawThreadId {
    Id(u64),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

fn lenient_thread_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawThreadId::deserialize(deserializer)? {
        RawThreadId::Id(id) => Some(id),
        RawThreadId::Other(_) => None,
    })
}

fn lenient_repos<'de, D>(deserializer: D) -> Result<ReposUrl, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ReposUrl>::deserialize(deserializer)?.unwrap_or_default())
}
