use super::{FormError, VodId};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};
use std::fmt;

pub const TWITCH_URLS_FIELD: &str = "twitch_urls";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DownloadOutcome {
    pub success: bool,
    pub message: String,
}

/// Per-VOD outcomes of one bulk download, in the order the backend wrote them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DownloadResults(Vec<(VodId, DownloadOutcome)>);

impl DownloadResults {
    pub fn iter(&self) -> impl Iterator<Item = &(VodId, DownloadOutcome)> {
        self.0.iter()
    }
}

impl From<Vec<(VodId, DownloadOutcome)>> for DownloadResults {
    fn from(entries: Vec<(VodId, DownloadOutcome)>) -> Self {
        Self(entries)
    }
}

struct DownloadResultsVisitor;

impl<'de> Visitor<'de> for DownloadResultsVisitor {
    type Value = DownloadResults;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of VOD ids to download outcomes")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));

        while let Some((vod_id, outcome)) = access.next_entry::<VodId, DownloadOutcome>()? {
            // a repeated id keeps its first position and its last outcome
            match entries.iter_mut().find(|(seen, _)| *seen == vod_id) {
                Some(entry) => entry.1 = outcome,
                None => entries.push((vod_id, outcome)),
            }
        }

        Ok(DownloadResults(entries))
    }
}

// Entries stay in body order, integer-like ids included.
impl<'de> Deserialize<'de> for DownloadResults {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(DownloadResultsVisitor)
    }
}

/// Validated content of the download form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub urls: Vec<String>,
}

impl DownloadRequest {
    /// Accepts urls (or bare ids) separated by commas or line breaks.
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        let urls: Vec<String> = raw
            .split(|c: char| c == ',' || c == '\n' || c == '\r')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(String::from)
            .collect();

        match urls.is_empty() {
            true => Err(FormError::NoVodUrls),
            false => Ok(Self { urls }),
        }
    }

    pub fn form_pairs(&self) -> Vec<(&'static str, String)> {
        vec![(TWITCH_URLS_FIELD, self.urls.join(","))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_body_order_for_numeric_ids() {
        let results: DownloadResults = serde_json::from_str(
            r#"{"456":{"success":false,"message":"not found"},"123":{"success":true,"message":"ok"}}"#,
        )
        .unwrap();
        let ids: Vec<&str> = results.iter().map(|(id, _)| id.as_str()).collect();

        assert_eq!(ids, vec!["456", "123"]);
        assert!(!results.iter().next().unwrap().1.success);
    }

    #[test]
    fn empty_map_is_a_valid_result() {
        let results: DownloadResults = serde_json::from_str("{}").unwrap();

        assert_eq!(results.iter().count(), 0);
    }

    #[test]
    fn repeated_id_yields_one_row_with_last_outcome() {
        let results: DownloadResults = serde_json::from_str(
            r#"{"1":{"success":false,"message":"busy"},"2":{"success":true,"message":"ok"},"1":{"success":true,"message":"retried"}}"#,
        )
        .unwrap();

        assert_eq!(
            results,
            DownloadResults::from(vec![
                (
                    VodId::from("1"),
                    DownloadOutcome {
                        success: true,
                        message: String::from("retried"),
                    }
                ),
                (
                    VodId::from("2"),
                    DownloadOutcome {
                        success: true,
                        message: String::from("ok"),
                    }
                ),
            ])
        );
    }

    #[test]
    fn outcome_without_message_is_rejected() {
        assert!(serde_json::from_str::<DownloadResults>(r#"{"1":{"success":true}}"#).is_err());
        assert!(serde_json::from_str::<DownloadResults>("[]").is_err());
    }

    #[test]
    fn parses_mixed_separators() {
        let request = DownloadRequest::parse(
            " https://www.twitch.tv/videos/123 ,\n456\r\n\n, https://www.twitch.tv/videos/789?t=1 ",
        )
        .unwrap();

        assert_eq!(
            request.urls,
            vec![
                "https://www.twitch.tv/videos/123",
                "456",
                "https://www.twitch.tv/videos/789?t=1"
            ]
        );
        assert_eq!(
            request.form_pairs(),
            vec![(
                "twitch_urls",
                String::from(
                    "https://www.twitch.tv/videos/123,456,https://www.twitch.tv/videos/789?t=1"
                )
            )]
        );
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(DownloadRequest::parse(" , \n "), Err(FormError::NoVodUrls));
        assert_eq!(DownloadRequest::parse(""), Err(FormError::NoVodUrls));
    }
}
