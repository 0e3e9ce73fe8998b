use serde::{Deserialize, Deserializer};

/// Тело ответа АПИ при ошибке.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rejection {
    pub error: String,
}

/// Кафе из списка `GET /api/cafes`.
///
/// Сервер хранит места и цену то строкой, то числом, поэтому они остаются
/// произвольными скалярами.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cafe {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub map_url: String,
    #[serde(default)]
    pub img_url: Option<String>,
    pub location: String,
    #[serde(default, deserialize_with = "null_as_false")]
    pub has_sockets: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub has_toilet: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub has_wifi: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub can_take_calls: bool,
    #[serde(default)]
    pub seats: Option<serde_json::Value>,
    #[serde(default)]
    pub coffee_price: Option<serde_json::Value>,
}

/// Сервер хранит флаги в nullable колонках, `null` считаем за `false`.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cafe_from_listing() {
        let body = r#"{
            "id": 3,
            "name": "Monmouth",
            "map_url": "https://maps.example/monmouth",
            "img_url": null,
            "location": "Borough",
            "has_sockets": false,
            "has_toilet": true,
            "has_wifi": false,
            "can_take_calls": true,
            "seats": 20,
            "coffee_price": "£2.70"
        }"#;

        let cafe: Cafe = serde_json::from_str(body).unwrap();

        assert_eq!(Some(3), cafe.id);
        assert_eq!(None, cafe.img_url);
        assert!(cafe.has_toilet);
        assert_eq!(Some(serde_json::json!(20)), cafe.seats);
        assert_eq!(Some(serde_json::json!("£2.70")), cafe.coffee_price);
    }

    #[test]
    fn cafe_with_null_seats() {
        let body = r#"{"name": "A", "map_url": "m", "location": "l", "seats": null}"#;

        let cafe: Cafe = serde_json::from_str(body).unwrap();

        assert_eq!(None, cafe.id);
        assert_eq!(None, cafe.seats);
        assert_eq!(None, cafe.coffee_price);
    }

    #[test]
    fn cafe_with_null_flags() {
        let body = r#"{
            "name": "A", "map_url": "m", "location": "l",
            "has_sockets": null, "has_toilet": null, "has_wifi": true, "can_take_calls": null
        }"#;

        let cafe: Cafe = serde_json::from_str(body).unwrap();

        assert!(!cafe.has_sockets);
        assert!(!cafe.has_toilet);
        assert!(cafe.has_wifi);
        assert!(!cafe.can_take_calls);
    }

    #[test]
    fn rejection_requires_string_error() {
        assert!(serde_json::from_str::<Rejection>(r#"{"error": 42}"#).is_err());
        assert!(serde_json::from_str::<Rejection>(r#"{"message": "x"}"#).is_err());
    }
}
