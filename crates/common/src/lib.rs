//! Types and helpers shared by the API server and its clients.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::types::{Health, Location, VoteCounts};
    use uuid::Uuid;

    #[test]
    fn health_type_ok() {
        let h = Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn location_uses_original_field_names() {
        let loc = Location {
            id: Uuid::nil(),
            src: "img/sintra.jpg".into(),
            url: None,
            title: "Sintra".into(),
            description: "Palácios".into(),
            type_icon: "Cultura".into(),
            types: vec!["Cultura".into(), "WC".into()],
            latitude: 38.79,
            longitude: -9.39,
            likes: 2,
            dislikes: 0,
        };
        let v = serde_json::to_value(&loc).unwrap();
        assert_eq!(v["typeicon"], "Cultura");
        assert_eq!(v["types"][1], "WC");
        assert!(v.get("type_icon").is_none());

        let back: Location = serde_json::from_value(v).unwrap();
        assert_eq!(back.counts(), VoteCounts { likes: 2, dislikes: 0 });
    }

    #[test]
    fn location_defaults_missing_counters() {
        let raw = serde_json::json!({
            "id": Uuid::nil(),
            "src": "x.jpg",
            "title": "Praia",
            "description": "",
            "typeicon": "Praia",
            "types": [],
            "latitude": 0.0,
            "longitude": 0.0
        });
        let loc: Location = serde_json::from_value(raw).unwrap();
        assert_eq!(loc.likes, 0);
        assert_eq!(loc.dislikes, 0);
        assert!(loc.url.is_none());
    }
}
