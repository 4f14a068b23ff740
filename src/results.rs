use serde::{Deserialize, Serialize};

/// One (actor, work) row emitted by the crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastRecord {
    /// Display name of the actor (empty if the profile header was missing)
    pub actor: String,

    /// Title of a single work from the actor's filmography
    #[serde(rename = "movie_or_TV_name")]
    pub movie_or_tv_name: String,
}

impl CastRecord {
    /// Create a new record
    pub fn new(actor: impl Into<String>, movie_or_tv_name: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
            movie_or_tv_name: movie_or_tv_name.into(),
        }
    }

    /// Column names, in serialization order
    pub const COLUMNS: [&'static str; 2] = ["actor", "movie_or_TV_name"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let record = CastRecord::new("Jane Doe", "Film A");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"actor":"Jane Doe","movie_or_TV_name":"Film A"}"#);
    }
}
