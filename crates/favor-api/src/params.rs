//! Request parameters for placing a favor.

/// Everything needed to place a favor.
///
/// The placement endpoint takes a form-encoded body; build one of these and
/// hand it to [`crate::FavorApi::request_favor`]. Fields the API requires
/// but this library does not surface (meal and origin tracking IDs) are
/// filled with zeroes on encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavorRequest {
    /// Short title shown to the runner.
    pub title: String,
    /// Free-form description of the order.
    pub wants: String,
    /// Delivery latitude.
    pub lat: f64,
    /// Delivery longitude.
    pub lng: f64,
    /// Delivery street address.
    pub street: String,
    /// Delivery postal code.
    pub zipcode: String,
    /// Apartment or suite.
    pub apt: String,
    /// Delivery notes for the runner.
    pub notes: String,
    /// Market the favor is placed in.
    pub market_id: i64,
    /// Merchant to order from.
    pub merchant_id: i64,
    /// Set to 1 to acknowledge surge ("primetime") pricing.
    pub primetime_ack: i64,
}

impl FavorRequest {
    /// Encodes the request as form fields in the shape the placement
    /// endpoint expects. Floats keep their shortest round-trip notation.
    #[must_use]
    pub fn to_form(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("wants", self.wants.clone()),
            ("lat", self.lat.to_string()),
            ("lng", self.lng.to_string()),
            ("street", self.street.clone()),
            ("zipcode", self.zipcode.clone()),
            ("apt", self.apt.clone()),
            ("notes", self.notes.clone()),
            ("market_id", self.market_id.to_string()),
            ("merchant_id", self.merchant_id.to_string()),
            ("primetime_ack", self.primetime_ack.to_string()),
            ("origin_category_id", String::from("0")),
            ("origin_order_type", String::from("0")),
            ("origin_meal_id", String::from("0")),
            ("meal_id", String::from("0")),
        ]
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_to_form_encodes_every_field() {
        // Arrange
        let request = FavorRequest {
            title: String::from("Queso fix"),
            wants: String::from("Two breakfast tacos and a green chile queso, please."),
            lat: 30.234855,
            lng: -97.7322537,
            street: String::from("1100 S Congress Ave"),
            zipcode: String::from("78704"),
            apt: String::from("12B"),
            notes: String::from("Gate code 4321."),
            market_id: 1,
            merchant_id: 2158,
            primetime_ack: 1,
        };

        // Act
        let form = request.to_form();

        // Assert
        assert_eq!(
            form,
            vec![
                ("title", String::from("Queso fix")),
                (
                    "wants",
                    String::from("Two breakfast tacos and a green chile queso, please."),
                ),
                ("lat", String::from("30.234855")),
                ("lng", String::from("-97.7322537")),
                ("street", String::from("1100 S Congress Ave")),
                ("zipcode", String::from("78704")),
                ("apt", String::from("12B")),
                ("notes", String::from("Gate code 4321.")),
                ("market_id", String::from("1")),
                ("merchant_id", String::from("2158")),
                ("primetime_ack", String::from("1")),
                ("origin_category_id", String::from("0")),
                ("origin_order_type", String::from("0")),
                ("origin_meal_id", String::from("0")),
                ("meal_id", String::from("0")),
            ]
        );
    }

    #[test]
    fn test_to_form_drops_trailing_float_zeroes() {
        // Arrange
        let request = FavorRequest {
            lat: 151.209_900,
            ..FavorRequest::default()
        };

        // Act
        let form = request.to_form();

        // Assert
        assert!(form.contains(&("lat", String::from("151.2099"))));
    }

    #[test]
    fn test_default_request_still_carries_placeholder_ids() {
        // Arrange & Act
        let form = FavorRequest::default().to_form();

        // Assert
        assert_eq!(form.len(), 15);
        assert!(form.contains(&("meal_id", String::from("0"))));
        assert!(form.contains(&("origin_order_type", String::from("0"))));
    }
}
