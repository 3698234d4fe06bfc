use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::{Display, Formatter};

/// Largest integer a JSON number can carry without losing precision in the browser.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Identifier of an event, as sent by the server.
/// Numeric ids are the norm, but textual ones are accepted as well.
/// Any JSON number is accepted: integers beyond `i64`, and decimals too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(Number),
    Text(String),
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            // Whole decimals are written as the browser writes them: `2`, not `2.0`.
            EventId::Number(id) => match id.as_f64() {
                Some(float)
                    if id.is_f64() && float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER =>
                {
                    write!(f, "{}", float as i64)
                }
                _ => write!(f, "{id}"),
            },
            EventId::Text(id) => write!(f, "{id}"),
        }
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        EventId::Number(Number::from(id))
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        EventId::Text(id.to_owned())
    }
}

/// An event organised by a club, as listed by `GET /api/events/{club_id}`.
#[derive(Debug, Getters, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubEvent {
    id: EventId,
    name: String,
}

impl ClubEvent {
    pub fn new<I: Into<EventId>>(id: I, name: String) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const EVENTS_AS_JSON: &str = r#"[{"id":1,"name":"A"},{"id":2,"name":"B"}]"#;

    pub fn get_expected_events() -> Vec<ClubEvent> {
        vec![
            ClubEvent::new(1_i64, "A".to_owned()),
            ClubEvent::new(2_i64, "B".to_owned()),
        ]
    }


    #[cfg(test)]
    mod display {
        use super::*;
        use parameterized::{ide, parameterized};

        ide!();

        #[parameterized(
            id = {EventId::from(42_i64), EventId::Text("x7".to_owned())},
            expected = {"42", "x7"}
        )]
        fn should_display_event_id(id: EventId, expected: &str) {
            assert_eq!(expected, id.to_string());
        }
    }
}
