//! Token Marketplace - NFT minting and resale on Casper Network
//!
//! This contract allows users to:
//! - Mint tokens that are listed for sale in marketplace custody
//! - Buy listed tokens at their fixed price
//! - Resell owned tokens or cancel unsold listings
//!
//! Every listing costs a fixed fee that stays with the contract.
//!
//! Built with Odra framework for Casper Network.

#![cfg_attr(target_arch = "wasm32", no_std)]
#![cfg_attr(target_arch = "wasm32", no_main)]

extern crate alloc;

pub mod errors;
pub mod events;
pub mod types;
pub mod nft_marketplace;

pub use nft_marketplace::NftMarketplace;
