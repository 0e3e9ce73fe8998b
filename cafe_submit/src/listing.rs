use log::debug;
use reqwest::StatusCode;

use crate::{
    api::{Cafe, Rejection, Transport, TransportError},
    handler::CAFES_PATH,
};

/// Загружает список всех кафе.
pub fn fetch_cafes<T: Transport>(transport: &T) -> Result<Vec<Cafe>, ListError> {
    let resp = transport.get(CAFES_PATH)?;

    if !resp.is_success() {
        let message = serde_json::from_str::<Rejection>(&resp.body)
            .map(|r| r.error)
            .unwrap_or(resp.body);

        return Err(ListError::Rejected {
            status: resp.status,
            message,
        });
    }

    let cafes: Vec<Cafe> = serde_json::from_str(&resp.body)?;

    debug!("Получили {} кафе", cafes.len());

    Ok(cafes)
}

/// Форматирует список кафе, по одному на строку.
pub fn render(cafes: &[Cafe]) -> String {
    cafes.iter().map(|c| format!("{}\n", line(c))).collect()
}

fn line(cafe: &Cafe) -> String {
    let mut parts = vec![match cafe.id {
        Some(id) => format!("#{} {}, {}", id, cafe.name, cafe.location),
        None => format!("{}, {}", cafe.name, cafe.location),
    }];

    if let Some(seats) = cafe.seats.as_ref().map(scalar) {
        parts.push(format!("seats: {}", seats));
    }

    if let Some(price) = cafe.coffee_price.as_ref().map(scalar) {
        parts.push(format!("coffee: {}", price));
    }

    let amenities = amenities(cafe);
    if !amenities.is_empty() {
        parts.push(amenities.join(", "));
    }

    parts.join(" | ")
}

fn amenities(cafe: &Cafe) -> Vec<&'static str> {
    [
        (cafe.has_sockets, "sockets"),
        (cafe.has_toilet, "toilet"),
        (cafe.has_wifi, "wifi"),
        (cafe.can_take_calls, "calls"),
    ]
    .into_iter()
    .filter_map(|(has, name)| has.then_some(name))
    .collect()
}

fn scalar(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("api responded {status}: {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("malformed cafe list")]
    Deserialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeTransport;

    const LISTING: &str = r#"[
        {"id": 1, "name": "Monmouth", "map_url": "m", "img_url": null, "location": "Borough",
         "has_sockets": false, "has_toilet": true, "has_wifi": false, "can_take_calls": false,
         "seats": "20-30", "coffee_price": "£2.70"},
        {"id": 2, "name": "Attendant", "map_url": "m", "img_url": null, "location": "Fitzrovia",
         "has_sockets": true, "has_toilet": false, "has_wifi": true, "can_take_calls": true,
         "seats": 12, "coffee_price": null}
    ]"#;

    #[test]
    fn fetch_and_render() {
        let transport = FakeTransport::default().respond(StatusCode::OK, LISTING);

        let cafes = fetch_cafes(&transport).unwrap();

        assert_eq!("GET", transport.requests()[0].method);
        assert_eq!("/api/cafes", transport.requests()[0].path);
        assert_eq!(
            "#1 Monmouth, Borough | seats: 20-30 | coffee: £2.70 | toilet\n\
             #2 Attendant, Fitzrovia | seats: 12 | sockets, wifi, calls\n",
            render(&cafes)
        );
    }

    #[test]
    fn listing_with_null_flags() {
        let body = r#"[{"id": 4, "name": "Rosslyn", "map_url": "m", "location": "Bank",
            "has_sockets": null, "has_toilet": null, "has_wifi": true, "can_take_calls": null,
            "seats": null, "coffee_price": null}]"#;
        let transport = FakeTransport::default().respond(StatusCode::OK, body);

        let cafes = fetch_cafes(&transport).unwrap();

        assert_eq!("#4 Rosslyn, Bank | wifi\n", render(&cafes));
    }

    #[test]
    fn render_empty() {
        assert_eq!("", render(&[]));
    }

    #[test]
    fn rejected_listing() {
        let transport = FakeTransport::default()
            .respond(StatusCode::SERVICE_UNAVAILABLE, r#"{"error": "db is down"}"#);

        let err = fetch_cafes(&transport).unwrap_err();

        assert_eq!("api responded 503 Service Unavailable: db is down", err.to_string());
    }

    #[test]
    fn rejected_listing_with_plain_body() {
        let transport = FakeTransport::default().respond(StatusCode::NOT_FOUND, "not found");

        let err = fetch_cafes(&transport).unwrap_err();

        assert_eq!("api responded 404 Not Found: not found", err.to_string());
    }

    #[test]
    fn transport_failure() {
        let transport = FakeTransport::default().fail();

        assert!(matches!(
            fetch_cafes(&transport),
            Err(ListError::Transport(_))
        ));
    }
}
