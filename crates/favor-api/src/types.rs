//! Favor API record types.
//!
//! The upstream API serializes almost everything as strings, pads optional
//! fields with `""` instead of omitting them, and embeds partially
//! populated records (an unassigned runner is an empty object). The types
//! here absorb those habits so callers see `Option` and defaults instead.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer};

use crate::hours::MerchantSchedule;

/// Deserializes an optional string field, mapping `""` to `None`.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// A restaurant or place of business partnered with Favor.
///
/// Numeric fields arrive as strings; boolean-ish flags such as
/// `has_expanded_menu` arrive as `"0"`/`"1"`. Merchants embedded in a
/// favor are often partial, so every field falls back to its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Merchant {
    /// Merchant ID.
    pub id: String,
    /// Franchise the merchant belongs to, if any.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub franchise_id: Option<String>,
    /// Market (city or region) the merchant serves.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub market_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Contact phone number.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    /// Street address.
    pub address: String,
    /// City.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub city: Option<String>,
    /// State abbreviation.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub state: Option<String>,
    /// Postal code.
    pub zipcode: String,
    /// Distance from the search point, present on nearby-search results.
    pub distance: Option<f64>,
    /// `"1"` when the merchant has a full in-app menu.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub has_expanded_menu: Option<String>,
    /// Weekly schedule blocks; interpret them with
    /// [`MerchantSchedule::resolve`].
    pub hours: Vec<MerchantSchedule>,
    /// Latitude, as a string.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub lat: Option<String>,
    /// Longitude, as a string.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub lng: Option<String>,
    /// `"1"` when the merchant only serves customers in cars.
    #[serde(deserialize_with = "empty_string_as_none")]
    pub is_car_only: Option<String>,
}

/// Orders merchants alphabetically by display name.
///
/// The API returns nearby merchants sorted by distance; pass this to
/// [`slice::sort_by`] to re-sort a page by name instead.
#[must_use]
pub fn merchant_name_order(a: &Merchant, b: &Merchant) -> Ordering {
    a.name.cmp(&b.name)
}

/// A customer or runner account.
///
/// Embedded accounts are often partial, so every field falls back to its
/// default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    /// User ID.
    pub id: String,
    /// Given name.
    pub forename: String,
    /// Family name.
    pub surname: String,
    /// Contact phone number.
    pub phone: String,
    /// Account email.
    pub email: String,
    /// Number of favors this user has requested, as a string.
    pub countasked: String,
    /// Facebook account ID.
    pub fb_id: i64,
    /// Avatar URL.
    pub image: String,
}

/// A delivery address attached to a favor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Address ID.
    pub id: String,
    /// Owning customer ID.
    pub customer_id: String,
    /// Latitude, as a string.
    pub lat: String,
    /// Longitude, as a string.
    pub lng: String,
    /// Street address.
    pub street: String,
    /// Postal code.
    pub zipcode: String,
    /// Apartment or suite.
    pub apartment: String,
    /// Delivery notes for the runner.
    pub notes: String,
}

/// Ratings a customer left for a completed favor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Rating {
    /// Food rating.
    pub rating_food: String,
    /// Driver rating.
    pub rating_driver: String,
    /// Free-form comment.
    pub comment: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Itemized charges for a favor.
///
/// Dollar amounts arrive as strings; only `minimum_tip` is a number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Receipt {
    /// `"1"` once the favor has been paid.
    pub paid: String,
    /// Order price.
    pub price: String,
    /// Tip amount.
    pub tip: String,
    /// Suggested tip amount.
    pub suggested_tip: String,
    /// Minimum allowed tip, in cents.
    pub minimum_tip: i64,
    /// Delivery charge.
    pub delivery_charge: String,
    /// Credit-card processing fee.
    pub cc_fee_amount: String,
    /// Rebate applied to the price.
    pub rebate_price: String,
}

/// A delivery request, from placement through completion.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Favor {
    /// Favor ID.
    pub id: String,
    /// Short title shown in the app.
    pub title: String,
    /// Requested items.
    pub items: Vec<String>,
    /// Merchant the order is placed with.
    pub merchant_id: String,
    /// Lifecycle stage.
    pub stage: String,
    /// Most recent status message.
    pub last_status: String,
    /// Ratings left by the customer.
    pub ratings: Rating,
    /// Creation time, seconds since the Unix epoch.
    pub created_at: i64,
    /// Customer who placed the favor.
    pub customer: User,
    /// Where the favor is delivered.
    pub delivery_address: Address,
    /// Runner assigned to the favor.
    pub runner: User,
    /// Full merchant record, when the API expands it.
    pub merchant: Option<Merchant>,
    /// Itemized charges.
    pub receipt: Receipt,
}

/// Response of the favor list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FavorsResponse {
    /// Number of favors returned.
    pub count: i64,
    /// The favors themselves.
    pub favors: Vec<Favor>,
}
