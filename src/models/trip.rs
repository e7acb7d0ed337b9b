use serde::{Deserialize, Serialize};

/// One entry of the trip list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "TripId")]
    pub id: String,
    #[serde(rename = "TripName")]
    pub name: String,
    #[serde(rename = "StartDateLocal", default)]
    pub start_date: String,
}

/// The `Itinerary` document returned by the single-trip endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetail {
    #[serde(rename = "TripName")]
    pub name: String,
    #[serde(rename = "StartDateLocal")]
    pub start_date: String,
}

/// Acknowledgement from the cancel endpoint; `document` is the root element name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelAck {
    pub document: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_entries_and_ignores_extra_fields() {
        let raw = r#"[
            {"TripId": "42", "TripName": "Paris", "StartDateLocal": "2025-03-05T09:00:00", "Status": "Active"},
            {"TripId": "7", "TripName": "Oslo"}
        ]"#;
        let trips: Vec<Trip> = serde_json::from_str(raw).unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, "42");
        assert_eq!(trips[0].start_date, "2025-03-05T09:00:00");
        assert_eq!(trips[1].name, "Oslo");
        assert!(trips[1].start_date.is_empty());
    }

    #[test]
    fn decodes_itinerary_xml() {
        let raw = r#"<?xml version="1.0" encoding="utf-8"?>
<Itinerary xmlns="http://www.concursolutions.com/api/travel/trip/2010/06">
  <ItinLocator>ABC123</ItinLocator>
  <TripName>Paris</TripName>
  <StartDateLocal>2025-03-05T09:00:00</StartDateLocal>
  <EndDateLocal>2025-03-09T18:00:00</EndDateLocal>
</Itinerary>"#;
        let detail: TripDetail = quick_xml::de::from_str(raw).unwrap();
        assert_eq!(detail.name, "Paris");
        assert_eq!(detail.start_date, "2025-03-05T09:00:00");
    }
}
