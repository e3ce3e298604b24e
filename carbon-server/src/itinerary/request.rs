//! Submitted itinerary payload and its boundary validation.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::MAX_SEGMENTS;
use crate::emissions::SegmentInput;

use super::error::SubmitError;

/// One segment as submitted by the form.
///
/// The mode and coordinates are kept as raw strings; the emissions engine
/// parses them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentSubmission {
    pub transport_mode: String,
    pub from_location: String,
    pub from_coordinates: String,
    pub to_location: String,
    pub to_coordinates: String,
}

impl SegmentSubmission {
    /// The fields the emissions engine needs.
    pub fn as_input(&self) -> SegmentInput<'_> {
        SegmentInput {
            transport_mode: self.transport_mode.trim(),
            from_coordinates: &self.from_coordinates,
            to_coordinates: &self.to_coordinates,
        }
    }
}

/// An itinerary as submitted by the form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitItinerary {
    pub traveler_name: String,
    pub base_location: String,
    pub travel_date: String,
    #[serde(default)]
    pub multiple_transport: bool,
    pub segments: Vec<SegmentSubmission>,
}

/// A submission whose identity fields and segment count have been checked.
#[derive(Debug, Clone)]
pub struct ValidatedItinerary<'a> {
    pub traveler_name: &'a str,
    pub base_location: &'a str,
    pub travel_date: NaiveDate,
    pub multiple_transport: bool,
    pub segments: &'a [SegmentSubmission],
}

impl ValidatedItinerary<'_> {
    /// Engine inputs, in submission order.
    pub fn inputs(&self) -> Vec<SegmentInput<'_>> {
        self.segments.iter().map(SegmentSubmission::as_input).collect()
    }
}

fn required<'a>(value: &'a str, field: impl FnOnce() -> String) -> Result<&'a str, SubmitError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(SubmitError::MissingField { field: field() })
    } else {
        Ok(trimmed)
    }
}

/// Check everything that doesn't need the emissions engine.
///
/// The segment count is checked first, so an oversized itinerary is
/// rejected before anything else is looked at.
pub fn validate(request: &SubmitItinerary) -> Result<ValidatedItinerary<'_>, SubmitError> {
    let count = request.segments.len();
    if !(1..=MAX_SEGMENTS).contains(&count) {
        return Err(SubmitError::SegmentCountViolation { count });
    }

    let traveler_name = required(&request.traveler_name, || "travelerName".to_string())?;
    let base_location = required(&request.base_location, || "baseLocation".to_string())?;
    let travel_date = required(&request.travel_date, || "travelDate".to_string())?;

    for (i, segment) in request.segments.iter().enumerate() {
        required(&segment.transport_mode, || format!("segments[{i}].transportMode"))?;
        required(&segment.from_location, || format!("segments[{i}].fromLocation"))?;
        required(&segment.from_coordinates, || {
            format!("segments[{i}].fromCoordinates")
        })?;
        required(&segment.to_location, || format!("segments[{i}].toLocation"))?;
        required(&segment.to_coordinates, || format!("segments[{i}].toCoordinates"))?;
    }

    let travel_date = NaiveDate::parse_from_str(travel_date, "%Y-%m-%d").map_err(|_| {
        SubmitError::InvalidTravelDate {
            input: travel_date.to_string(),
        }
    })?;

    Ok(ValidatedItinerary {
        traveler_name,
        base_location,
        travel_date,
        multiple_transport: request.multiple_transport,
        segments: &request.segments,
    })
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn valid_request() {
        let req = request(vec![segment("car", DELHI, MUMBAI)]);
        let validated = validate(&req).unwrap();

        assert_eq!(validated.traveler_name, "Asha Rao");
        assert_eq!(validated.base_location, "delhi");
        assert_eq!(
            validated.travel_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(validated.inputs().len(), 1);
    }

    #[test]
    fn zero_segments_rejected() {
        let req = request(vec![]);
        assert_eq!(
            validate(&req).unwrap_err(),
            SubmitError::SegmentCountViolation { count: 0 }
        );
    }

    #[test]
    fn six_segments_rejected() {
        let req = request(vec![segment("car", DELHI, MUMBAI); 6]);
        assert_eq!(
            validate(&req).unwrap_err(),
            SubmitError::SegmentCountViolation { count: 6 }
        );
    }

    #[test]
    fn count_checked_before_fields() {
        let mut req = request(vec![segment("car", DELHI, MUMBAI); 6]);
        req.traveler_name = String::new();
        assert!(matches!(
            validate(&req),
            Err(SubmitError::SegmentCountViolation { count: 6 })
        ));
    }

    #[test]
    fn five_segments_accepted() {
        let req = request(vec![segment("bus", DELHI, MUMBAI); 5]);
        assert!(validate(&req).is_ok());
    }

    #[test]
    fn blank_identity_fields_rejected() {
        let mut req = request(vec![segment("car", DELHI, MUMBAI)]);
        req.traveler_name = "   ".to_string();
        assert_eq!(
            validate(&req).unwrap_err(),
            SubmitError::MissingField {
                field: "travelerName".to_string()
            }
        );

        let mut req = request(vec![segment("car", DELHI, MUMBAI)]);
        req.base_location = String::new();
        assert_eq!(
            validate(&req).unwrap_err().to_string(),
            "baseLocation is required"
        );
    }

    #[test]
    fn blank_segment_field_names_segment() {
        let mut second = segment("air", MUMBAI, BANGALORE);
        second.to_location = String::new();
        let req = request(vec![segment("car", DELHI, MUMBAI), second]);

        assert_eq!(
            validate(&req).unwrap_err(),
            SubmitError::MissingField {
                field: "segments[1].toLocation".to_string()
            }
        );
    }

    #[test]
    fn bad_travel_date_rejected() {
        let mut req = request(vec![segment("car", DELHI, MUMBAI)]);
        req.travel_date = "15/03/2024".to_string();
        assert!(matches!(
            validate(&req),
            Err(SubmitError::InvalidTravelDate { .. })
        ));

        req.travel_date = "2024-02-30".to_string();
        assert!(validate(&req).is_err());
    }

    #[test]
    fn identity_fields_trimmed() {
        let mut req = request(vec![segment("car", DELHI, MUMBAI)]);
        req.traveler_name = "  Asha Rao ".to_string();
        req.travel_date = " 2024-03-15".to_string();
        let validated = validate(&req).unwrap();
        assert_eq!(validated.traveler_name, "Asha Rao");
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "travelerName": "Asha Rao",
            "baseLocation": "delhi",
            "travelDate": "2024-03-15",
            "multipleTransport": false,
            "segments": [{
                "transportMode": "car",
                "fromLocation": "Delhi",
                "fromCoordinates": "28.6139,77.2090",
                "toLocation": "Mumbai",
                "toCoordinates": "19.0760,72.8777"
            }]
        }"#;
        let req: SubmitItinerary = serde_json::from_str(json).unwrap();
        assert_eq!(req.segments.len(), 1);
        assert_eq!(req.segments[0].transport_mode, "car");
        assert!(!req.multiple_transport);
    }
}
