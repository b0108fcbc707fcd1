//! `FavorApi` trait definition.
#![allow(clippy::future_not_send)]
#![allow(clippy::module_name_repetitions)]

use anyhow::Result;

use crate::params::FavorRequest;
use crate::types::{Favor, FavorsResponse, Merchant};

/// Operations the Favor API exposes to an authenticated customer.
///
/// [`crate::FavorClient`] is the HTTP implementation; the trait exists so
/// callers can substitute a stub in their own tests.
#[trait_variant::make(FavorApi: Send)]
pub trait LocalFavorApi {
    /// Looks up a single merchant by ID.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the API answers with a
    /// non-success status, or the merchant payload does not decode.
    async fn get_merchant(&self, id: &str) -> Result<Merchant>;

    /// Lists merchants near a point, closest first.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the API answers with a
    /// non-success status, or the merchant payload does not decode.
    async fn get_merchants(&self, lat: f64, lng: f64) -> Result<Vec<Merchant>>;

    /// Lists the account's active favors.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the API answers with a
    /// non-success status, or the favor payload does not decode.
    async fn get_favors(&self) -> Result<FavorsResponse>;

    /// Places a favor and returns the created record.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the API answers with a
    /// non-success status, or the favor payload does not decode.
    async fn request_favor(&self, request: &FavorRequest) -> Result<Favor>;
}
