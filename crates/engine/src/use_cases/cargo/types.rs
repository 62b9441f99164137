//! Cargo request and input types.

use serde::{Deserialize, Serialize};

use cargotrack_domain::{CargoCode, CargoWeight, Location};

use crate::use_cases::validation::{
    require_greater_than, require_non_empty, require_present, ValidationError,
};

/// Cargo at or below this weight is refused at creation.
pub const MIN_CARGO_WEIGHT: f64 = 100.0;

/// Body of a create request, as received from a client.
///
/// Every field is optional so that a missing or `null` value is reported as
/// a validation failure instead of a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCargoRequest {
    pub code: Option<String>,
    pub weight: Option<f64>,
    pub origin: Option<Location>,
    pub destination: Option<Location>,
}

impl CreateCargoRequest {
    pub fn new(
        code: impl Into<String>,
        weight: f64,
        origin: Location,
        destination: Location,
    ) -> Self {
        Self {
            code: Some(code.into()),
            weight: Some(weight),
            origin: Some(origin),
            destination: Some(destination),
        }
    }

    /// Check the creation rules and convert into domain values.
    ///
    /// Rules: code non-blank, weight strictly above [`MIN_CARGO_WEIGHT`],
    /// origin and destination present.
    pub fn validate(self) -> Result<NewCargo, ValidationError> {
        let code = require_present(self.code, "code")?;
        require_non_empty(&code, "code")?;
        let code = CargoCode::new(code).map_err(|e| ValidationError::Invalid {
            field_name: "code",
            reason: e.to_string(),
        })?;

        let weight = require_present(self.weight, "weight")?;
        require_greater_than(weight, MIN_CARGO_WEIGHT, "weight")?;
        let weight = CargoWeight::new(weight).map_err(|e| ValidationError::Invalid {
            field_name: "weight",
            reason: e.to_string(),
        })?;

        let origin = require_present(self.origin, "origin")?;
        let destination = require_present(self.destination, "destination")?;

        Ok(NewCargo {
            code,
            weight,
            origin,
            destination,
        })
    }
}

/// Validated creation input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCargo {
    pub code: CargoCode,
    pub weight: CargoWeight,
    pub origin: Location,
    pub destination: Location,
}

/// Body of an arrive request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArriveCargoRequest {
    pub location: Option<Location>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let input = CreateCargoRequest::new("CARGO_1", 200.0, Location::AirportX, Location::CityB)
            .validate()
            .unwrap();

        assert_eq!(input.code.as_str(), "CARGO_1");
        assert_eq!(input.weight.value(), 200.0);
        assert_eq!(input.origin, Location::AirportX);
        assert_eq!(input.destination, Location::CityB);
    }

    #[test]
    fn test_weight_at_or_below_minimum_rejected() {
        for weight in [50.0, 100.0, -1.0] {
            let result =
                CreateCargoRequest::new("CARGO_1", weight, Location::AirportX, Location::CityB)
                    .validate();
            assert!(
                matches!(result, Err(ValidationError::NotGreaterThan { .. })),
                "weight {} should be rejected",
                weight
            );
        }
    }

    #[test]
    fn test_weight_above_maximum_rejected() {
        let result = CreateCargoRequest::new("CARGO_1", 1e308, Location::AirportX, Location::CityB)
            .validate();
        assert!(matches!(
            result,
            Err(ValidationError::Invalid {
                field_name: "weight",
                ..
            })
        ));
    }

    #[test]
    fn test_long_code_accepted() {
        let code = "C".repeat(65);
        let input = CreateCargoRequest::new(code.clone(), 200.0, Location::AirportX, Location::CityB)
            .validate()
            .unwrap();
        assert_eq!(input.code.as_str(), code);
    }

    #[test]
    fn test_infinite_weight_rejected() {
        let result =
            CreateCargoRequest::new("CARGO_1", f64::INFINITY, Location::AirportX, Location::CityB)
                .validate();
        assert!(matches!(
            result,
            Err(ValidationError::Invalid {
                field_name: "weight",
                ..
            })
        ));
    }

    #[test]
    fn test_blank_code_rejected() {
        let result =
            CreateCargoRequest::new("", 350.0, Location::AirportX, Location::CityB).validate();
        assert_eq!(result, Err(ValidationError::Empty { field_name: "code" }));
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut request =
            CreateCargoRequest::new("CARGO_1", 350.0, Location::AirportX, Location::CityB);
        request.destination = None;
        assert_eq!(
            request.validate(),
            Err(ValidationError::Missing {
                field_name: "destination"
            })
        );

        let mut request =
            CreateCargoRequest::new("CARGO_1", 200.0, Location::AirportX, Location::CityB);
        request.origin = None;
        assert_eq!(
            request.validate(),
            Err(ValidationError::Missing {
                field_name: "origin"
            })
        );

        assert_eq!(
            CreateCargoRequest::default().validate(),
            Err(ValidationError::Missing { field_name: "code" })
        );
    }

    #[test]
    fn test_deserialize_null_destination() {
        let request: CreateCargoRequest = serde_json::from_str(
            r#"{"code": "CARGO_1", "weight": 350, "origin": "AIRPORT_X", "destination": null}"#,
        )
        .unwrap();

        assert_eq!(request.destination, None);
        assert_eq!(request.weight, Some(350.0));
    }
}
