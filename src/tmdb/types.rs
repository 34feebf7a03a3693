use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the `/movie/popular` result list. Only the fields we relay
/// are decoded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TmdbResponse {
    #[serde(default)]
    pub results: Vec<TmdbMovie>,
}

// TMDB sends `null` for unknown release dates on some entries.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_popular() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-15", "adult": false},
                {"id": 2, "title": null, "release_date": null}
            ],
            "total_pages": 500
        }"#;
        let resp: TmdbResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].id, 27205);
        assert_eq!(resp.results[0].title, "Inception");
        assert_eq!(resp.results[0].release_date, "2010-07-15");
        assert_eq!(resp.results[1].title, "");
        assert_eq!(resp.results[1].release_date, "");
    }

    #[test]
    fn test_missing_results() {
        let resp: TmdbResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
    }

    #[test]
    fn test_wrong_type_fails() {
        let res = serde_json::from_str::<TmdbResponse>(r#"{"results": [{"id": "x"}]}"#);
        assert!(res.is_err());
    }
}
