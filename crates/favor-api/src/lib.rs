//! Typed client for the Favor delivery API.
//!
//! Favor is an on-demand delivery service: customers describe what they
//! want, a runner picks it up from a merchant and delivers it. This crate
//! covers the customer-facing endpoints (merchant lookup and search, favor
//! listing and placement) and interprets the merchant operating-hours
//! format the API uses.
//!
//! # Example
//!
//! ```no_run
//! use favor_api::{FavorApi as _, FavorClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = FavorClient::builder()
//!     .token(std::env::var("FAVOR_TOKEN")?)
//!     .build()?;
//!
//! for merchant in client.get_merchants(30.2672, -97.7431).await? {
//!     println!("{} ({})", merchant.name, merchant.address);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod hours;
pub mod params;
pub mod types;

pub use api::{FavorApi, LocalFavorApi};
pub use client::{FavorClient, FavorClientBuilder};
pub use hours::{HoursError, MerchantSchedule, OpenWindow, OpeningHours, ResolvedHours};
pub use params::FavorRequest;
pub use types::{
    Address, Favor, FavorsResponse, Merchant, Rating, Receipt, User, merchant_name_order,
};
