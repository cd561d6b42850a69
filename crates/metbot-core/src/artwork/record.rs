use serde::Deserialize;

/// Object record from `GET /objects/{id}`.
///
/// Only the fields the bot renders are kept; everything is optional because the
/// API omits or nulls fields freely.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ArtworkRecord {
    #[serde(rename = "objectID", default)]
    pub object_id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "artistDisplayName", default)]
    pub artist_display_name: Option<String>,
    #[serde(rename = "objectDate", default)]
    pub object_date: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "objectURL", default)]
    pub object_url: Option<String>,
    #[serde(rename = "primaryImage", default)]
    pub primary_image: Option<String>,
    #[serde(rename = "primaryImageSmall", default)]
    pub primary_image_small: Option<String>,
    #[serde(rename = "additionalImages", default)]
    pub additional_images: Option<Vec<String>>,
}

impl ArtworkRecord {
    /// True when nothing the bot renders is present: no caption field, no
    /// object page, no image.
    pub fn is_blank(&self) -> bool {
        let fields = [
            &self.title,
            &self.artist_display_name,
            &self.object_date,
            &self.culture,
            &self.period,
            &self.medium,
            &self.country,
            &self.object_url,
            &self.primary_image,
            &self.primary_image_small,
        ];
        let any_field = fields
            .into_iter()
            .filter_map(|v| v.as_deref())
            .any(|s| !s.trim().is_empty());
        let any_extra_image = self
            .additional_images
            .iter()
            .flatten()
            .any(|s| !s.trim().is_empty());

        !any_field && !any_extra_image
    }
}

/// Response of `GET /search`. `objectIDs` is `null` when nothing matched.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    #[serde(default)]
    pub total: u64,
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Option<Vec<u64>>,
}

impl SearchResult {
    pub fn ids(&self) -> &[u64] {
        self.object_ids.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_partial_object() {
        let v = serde_json::json!({
            "objectID": 436535,
            "title": "Wheat Field with Cypresses",
            "artistDisplayName": "Vincent van Gogh",
            "culture": null,
            "additionalImages": [],
            "isHighlight": true
        });
        let rec: ArtworkRecord = serde_json::from_value(v).unwrap();
        assert_eq!(rec.object_id, Some(436535));
        assert_eq!(rec.title.as_deref(), Some("Wheat Field with Cypresses"));
        assert_eq!(rec.culture, None);
        assert_eq!(rec.additional_images, Some(vec![]));
        assert_eq!(rec.primary_image_small, None);
    }

    #[test]
    fn blank_records() {
        assert!(ArtworkRecord::default().is_blank());

        let rec: ArtworkRecord = serde_json::from_value(serde_json::json!({
            "objectID": 3,
            "title": " ",
            "additionalImages": [""]
        }))
        .unwrap();
        assert!(rec.is_blank());

        let rec: ArtworkRecord =
            serde_json::from_value(serde_json::json!({"medium": "Bronze"})).unwrap();
        assert!(!rec.is_blank());

        let rec: ArtworkRecord =
            serde_json::from_value(serde_json::json!({"additionalImages": ["http://img/a.jpg"]}))
                .unwrap();
        assert!(!rec.is_blank());
    }

    #[test]
    fn search_with_null_ids_is_empty() {
        let res: SearchResult =
            serde_json::from_value(serde_json::json!({"total": 0, "objectIDs": null})).unwrap();
        assert!(res.ids().is_empty());
    }
}
