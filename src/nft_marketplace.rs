//! Token Marketplace - Main Contract Module
//!
//! Tokens are minted straight into marketplace custody and stay there while
//! listed. A sale hands the token to the buyer and forwards the payment to
//! the seller. Holders may put a token back on the market, and listers may
//! withdraw a listing that has not sold yet.

use odra::prelude::*;
use odra::casper_types::U512;
use odra::prelude::{Address, Mapping, Var};

use crate::errors::Error;
use crate::events::{
    MarketItemCreated, MarketItemSold, MarketItemRelisted,
    MarketItemCancelled, ListingPriceUpdated, TokenTransferred,
};
use crate::types::{MarketItem, MarketplaceStats};

/// Main marketplace contract module
#[odra::module(
    events = [
        MarketItemCreated,
        MarketItemSold,
        MarketItemRelisted,
        MarketItemCancelled,
        ListingPriceUpdated,
        TokenTransferred
    ],
    errors = Error
)]
pub struct NftMarketplace {
    // ============================================
    // Configuration
    // ============================================

    /// Contract owner (may change the listing price)
    owner: Var<Address>,
    /// Fee required to create or renew a listing
    listing_price: Var<U512>,

    // ============================================
    // Item Storage
    // ============================================

    /// Mapping of token ID to item data
    items: Mapping<u64, MarketItem>,
    /// Total number of tokens minted (used for generating IDs)
    token_count: Var<u64>,
    /// Number of tokens held by each address
    balances: Mapping<Address, u64>,

    // ============================================
    // Accounting
    // ============================================

    /// Number of completed sales
    items_sold: Var<u64>,
    /// Listing fees retained by the contract
    fees_collected: Var<U512>,
    /// Total value paid for sales
    total_volume: Var<U512>,
}

#[odra::module]
impl NftMarketplace {
    // ============================================
    // Initialization
    // ============================================

    /// Initialize the marketplace; the deployer becomes the contract owner
    ///
    /// # Arguments
    /// * `listing_price` - Fee in motes charged for every listing
    pub fn init(&mut self, listing_price: U512) {
        if listing_price == U512::zero() {
            self.env().revert(Error::InvalidPrice);
        }
        let deployer = self.env().caller();
        self.owner.set(deployer);
        self.listing_price.set(listing_price);
        self.token_count.set(0);
        self.items_sold.set(0);
        self.fees_collected.set(U512::zero());
        self.total_volume.set(U512::zero());
    }

    // ============================================
    // Core Entry Points
    // ============================================

    /// Mint a new token and list it for sale
    ///
    /// The attached value must equal the listing price.
    ///
    /// # Arguments
    /// * `uri` - Metadata pointer for the token
    /// * `price` - Sale price in motes
    #[odra(payable)]
    pub fn create_token(&mut self, uri: String, price: U512) -> u64 {
        let caller = self.env().caller();
        let paid = self.env().attached_value();

        if price == U512::zero() {
            self.env().revert(Error::InvalidPrice);
        }
        if paid != self.get_listing_price() {
            self.env().revert(Error::IncorrectListingFee);
        }

        let token_id = self.token_count.get_or_default() + 1;
        self.token_count.set(token_id);

        let custodian = self.env().self_address();
        let item = MarketItem {
            token_id,
            owner: custodian,
            creator: caller,
            seller: caller,
            price,
            uri,
            sold: false,
            listed: true,
        };
        self.items.set(&token_id, item);
        self.add_holding(&custodian);
        self.record_listing_fee(paid);

        self.env().emit_event(MarketItemCreated {
            token_id,
            seller: caller,
            owner: custodian,
            price,
            sold: false,
        });

        token_id
    }

    /// Buy a listed token
    ///
    /// The attached value must equal the item price and is forwarded to
    /// the seller of the listing.
    #[odra(payable)]
    pub fn create_market_sale(&mut self, token_id: u64) {
        let caller = self.env().caller();
        let paid = self.env().attached_value();

        let mut item = self.item_or_revert(token_id);
        if !item.is_for_sale() {
            self.env().revert(Error::ItemNotListed);
        }
        if paid != item.price {
            self.env().revert(Error::IncorrectPaymentAmount);
        }

        let custodian = item.owner;
        let seller = item.seller;
        let price = item.price;

        // All bookkeeping lands before the payout
        item.owner = caller;
        item.sold = true;
        self.items.set(&token_id, item);
        self.move_holding(&custodian, &caller);

        let items_sold = self.items_sold.get_or_default() + 1;
        self.items_sold.set(items_sold);
        let total_volume = self.total_volume.get_or_default() + price;
        self.total_volume.set(total_volume);

        self.env().transfer_tokens(&seller, &paid);

        self.env().emit_event(MarketItemSold {
            token_id,
            seller,
            buyer: caller,
            price,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Put an owned token back on the market at a new price
    ///
    /// # Arguments
    /// * `token_id` - ID of the token to relist
    /// * `price` - New sale price in motes
    #[odra(payable)]
    pub fn resell_token(&mut self, token_id: u64, price: U512) {
        let caller = self.env().caller();
        let paid = self.env().attached_value();

        let mut item = self.item_or_revert(token_id);
        if item.owner != caller {
            self.env().revert(Error::NotOwner);
        }
        if price == U512::zero() {
            self.env().revert(Error::InvalidPrice);
        }
        if paid != self.get_listing_price() {
            self.env().revert(Error::IncorrectListingFee);
        }

        let custodian = self.env().self_address();
        item.owner = custodian;
        item.seller = caller;
        item.price = price;
        item.sold = false;
        item.listed = true;
        self.items.set(&token_id, item);
        self.move_holding(&caller, &custodian);
        self.record_listing_fee(paid);

        self.env().emit_event(MarketItemRelisted {
            token_id,
            seller: caller,
            price,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Withdraw an unsold listing; the token returns to the lister
    ///
    /// The listing fee is not refunded.
    pub fn cancel_item_listing(&mut self, token_id: u64) {
        let caller = self.env().caller();

        let mut item = self.item_or_revert(token_id);
        if !item.is_for_sale() {
            self.env().revert(Error::ItemNotListed);
        }
        if item.seller != caller {
            self.env().revert(Error::NotLister);
        }

        let custodian = item.owner;
        item.owner = caller;
        item.listed = false;
        item.sold = true;
        self.items.set(&token_id, item);
        self.move_holding(&custodian, &caller);

        self.env().emit_event(MarketItemCancelled {
            token_id,
            seller: caller,
            timestamp: self.env().get_block_time(),
        });
    }

    /// Hand an unlisted token to another address
    pub fn transfer_token(&mut self, to: Address, token_id: u64) {
        let caller = self.env().caller();

        let mut item = self.item_or_revert(token_id);
        if item.owner != caller {
            self.env().revert(Error::NotOwner);
        }
        if to == self.env().self_address() {
            self.env().revert(Error::InvalidRecipient);
        }

        item.owner = to;
        self.items.set(&token_id, item);
        self.move_holding(&caller, &to);

        self.env().emit_event(TokenTransferred {
            token_id,
            from: caller,
            to,
        });
    }

    // ============================================
    // Admin Functions
    // ============================================

    /// Change the listing fee (only owner)
    pub fn update_listing_price(&mut self, new_price: U512) {
        let caller = self.env().caller();
        if Some(caller) != self.owner.get() {
            self.env().revert(Error::Unauthorized);
        }
        if new_price == U512::zero() {
            self.env().revert(Error::InvalidPrice);
        }

        let old_price = self.get_listing_price();
        self.listing_price.set(new_price);

        self.env().emit_event(ListingPriceUpdated {
            old_price,
            new_price,
        });
    }

    // ============================================
    // View Functions
    // ============================================

    /// Fee required to create or renew a listing
    pub fn get_listing_price(&self) -> U512 {
        self.listing_price.get_or_default()
    }

    /// All items currently for sale
    pub fn fetch_market_items(&self) -> Vec<MarketItem> {
        self.collect_items(|item| item.is_for_sale())
    }

    /// Items held by the caller
    pub fn fetch_nfts(&self) -> Vec<MarketItem> {
        let caller = self.env().caller();
        self.collect_items(|item| item.owner == caller)
    }

    /// Active listings created by the caller
    pub fn fetch_items_listed(&self) -> Vec<MarketItem> {
        let caller = self.env().caller();
        self.collect_items(|item| item.seller == caller && item.is_for_sale())
    }

    /// Get an item by ID
    pub fn get_market_item(&self, token_id: u64) -> Option<MarketItem> {
        self.items.get(&token_id)
    }

    /// Current holder of a token
    pub fn owner_of(&self, token_id: u64) -> Address {
        self.item_or_revert(token_id).owner
    }

    /// Metadata pointer of a token
    pub fn token_uri(&self, token_id: u64) -> String {
        self.item_or_revert(token_id).uri
    }

    /// Number of tokens held by an address
    pub fn balance_of(&self, owner: Address) -> u64 {
        self.balances.get_or_default(&owner)
    }

    /// Address holding listed tokens in escrow
    pub fn get_custodian(&self) -> Address {
        self.env().self_address()
    }

    /// Get the contract owner
    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    /// Motes currently held by the contract
    pub fn treasury_balance(&self) -> U512 {
        self.env().self_balance()
    }

    /// Get marketplace statistics
    pub fn get_marketplace_stats(&self) -> MarketplaceStats {
        MarketplaceStats {
            token_count: self.token_count.get_or_default(),
            items_sold: self.items_sold.get_or_default(),
            fees_collected: self.fees_collected.get_or_default(),
            total_volume: self.total_volume.get_or_default(),
        }
    }
}

// ============================================
// Internal Functions
// ============================================

impl NftMarketplace {
    fn item_or_revert(&self, token_id: u64) -> MarketItem {
        self.items
            .get(&token_id)
            .unwrap_or_else(|| self.env().revert(Error::ItemNotFound))
    }

    /// Walk every minted ID in ascending order
    fn collect_items<F: Fn(&MarketItem) -> bool>(&self, keep: F) -> Vec<MarketItem> {
        let count = self.token_count.get_or_default();
        let mut result = Vec::new();

        for id in 1..=count {
            if let Some(item) = self.items.get(&id) {
                if keep(&item) {
                    result.push(item);
                }
            }
        }

        result
    }

    fn add_holding(&mut self, holder: &Address) {
        let held = self.balances.get_or_default(holder);
        self.balances.set(holder, held + 1);
    }

    fn move_holding(&mut self, from: &Address, to: &Address) {
        let held = self.balances.get_or_default(from);
        self.balances.set(from, held.saturating_sub(1));
        self.add_holding(to);
    }

    fn record_listing_fee(&mut self, fee: U512) {
        let collected = self.fees_collected.get_or_default() + fee;
        self.fees_collected.set(collected);
    }
}

// ============================================
// Tests
// ============================================
