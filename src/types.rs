//! Data type definitions for the Token Marketplace

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::Address;

/// A minted token together with its current listing state
#[odra::odra_type]
pub struct MarketItem {
    /// Unique identifier, assigned at mint and never reused
    pub token_id: u64,
    /// Current holder; the marketplace itself while listed and unsold
    pub owner: Address,
    /// Address that minted the token
    pub creator: Address,
    /// Address that created the current listing
    pub seller: Address,
    /// Price of the current listing in motes
    pub price: U512,
    /// Metadata pointer, fixed at mint
    pub uri: String,
    /// True while the item is held outside the marketplace
    pub sold: bool,
    /// False once the current listing is cancelled
    pub listed: bool,
}

impl MarketItem {
    /// Whether the item can currently be bought
    pub fn is_for_sale(&self) -> bool {
        self.listed && !self.sold
    }
}

/// Marketplace statistics
#[odra::odra_type]
#[derive(Default)]
pub struct MarketplaceStats {
    /// Total number of tokens minted
    pub token_count: u64,
    /// Total number of completed sales
    pub items_sold: u64,
    /// Listing fees collected in motes
    pub fees_collected: U512,
    /// Total trading volume in motes
    pub total_volume: U512,
}
