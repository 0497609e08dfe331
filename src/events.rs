//! Event definitions for the Token Marketplace
//!
//! Every state change of the registry is recorded as one of these events.

use odra::prelude::*;
use odra::casper_types::U512;

/// Emitted when a token is minted and listed
#[odra::event]
pub struct MarketItemCreated {
    /// ID of the new item
    pub token_id: u64,
    /// Address of the creator (first seller)
    pub seller: Address,
    /// Custodian holding the item while it is listed
    pub owner: Address,
    /// Listing price in motes
    pub price: U512,
    /// Always false for a fresh listing
    pub sold: bool,
}

/// Emitted when a listed item is bought
#[odra::event]
pub struct MarketItemSold {
    pub token_id: u64,
    pub seller: Address,
    pub buyer: Address,
    /// Price paid and forwarded to the seller
    pub price: U512,
    pub timestamp: u64,
}

/// Emitted when a holder puts an item back on the market
#[odra::event]
pub struct MarketItemRelisted {
    pub token_id: u64,
    pub seller: Address,
    /// New listing price in motes
    pub price: U512,
    pub timestamp: u64,
}

/// Emitted when a lister withdraws an unsold item
#[odra::event]
pub struct MarketItemCancelled {
    pub token_id: u64,
    pub seller: Address,
    pub timestamp: u64,
}

/// Emitted when the contract owner changes the listing fee
#[odra::event]
pub struct ListingPriceUpdated {
    pub old_price: U512,
    pub new_price: U512,
}

/// Emitted when a holder hands an unlisted item to another address
#[odra::event]
pub struct TokenTransferred {
    pub token_id: u64,
    pub from: Address,
    pub to: Address,
}
