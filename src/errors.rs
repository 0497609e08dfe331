//! Error definitions for the Token Marketplace

use odra::prelude::*;

/// Reasons a marketplace call is reverted
#[odra::odra_error]
pub enum Error {
    /// Price must be greater than 0
    InvalidPrice = 1,
    /// Attached value does not equal the listing price
    IncorrectListingFee = 2,
    /// Attached value does not equal the item price
    IncorrectPaymentAmount = 3,
    /// Caller does not hold this item
    NotOwner = 4,
    /// Caller is not the seller of this listing
    NotLister = 5,
    /// Item with given ID was not found
    ItemNotFound = 6,
    /// Item is not listed for sale
    ItemNotListed = 7,
    /// Caller is not authorized (not contract owner)
    Unauthorized = 8,
    /// Items cannot be handed to the marketplace outside of a listing
    InvalidRecipient = 9,
}
