//! Proxy Caller for the marketplace's payable entry points
//!
//! Casper accounts cannot attach value to a contract call directly. This
//! session code moves `attached_value` from the account's main purse into a
//! fresh cargo purse and passes that purse to one of the payable marketplace
//! entry points (mint, buy or resell).

#![no_std]
#![no_main]

extern crate alloc;

use alloc::string::String;
use casper_contract::{
    contract_api::{account, runtime, system},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_types::{
    bytesrepr::{Bytes, FromBytes},
    ApiError, ContractPackageHash, RuntimeArgs, URef, U512,
};

/// Argument under which Odra expects the funded purse
const CARGO_PURSE_ARG: &str = "cargo_purse";

/// Entry points of the marketplace that accept attached value
const PAYABLE_ENTRY_POINTS: [&str; 3] = ["create_token", "create_market_sale", "resell_token"];

/// Target entry point is not payable
const ERROR_NOT_PAYABLE: u16 = 1;
/// Payable entry points always require a fee or price
const ERROR_NO_VALUE: u16 = 2;

#[no_mangle]
pub extern "C" fn call() {
    let marketplace: ContractPackageHash = runtime::get_named_arg("contract_package_hash");
    let entry_point: String = runtime::get_named_arg("entry_point");
    let args_bytes: Bytes = runtime::get_named_arg("args");
    let attached_value: U512 = runtime::get_named_arg("attached_value");

    if !PAYABLE_ENTRY_POINTS.contains(&entry_point.as_str()) {
        runtime::revert(ApiError::User(ERROR_NOT_PAYABLE));
    }
    if attached_value.is_zero() {
        runtime::revert(ApiError::User(ERROR_NO_VALUE));
    }

    let (mut call_args, _): (RuntimeArgs, _) =
        RuntimeArgs::from_bytes(&args_bytes).unwrap_or_revert();

    let cargo_purse: URef = system::create_purse();
    system::transfer_from_purse_to_purse(
        account::get_main_purse(),
        cargo_purse,
        attached_value,
        None,
    )
    .unwrap_or_revert();
    call_args.insert(CARGO_PURSE_ARG, cargo_purse).unwrap_or_revert();

    // create_token returns the new token ID; the session has no use for it
    match entry_point.as_str() {
        "create_token" => {
            runtime::call_versioned_contract::<u64>(marketplace, None, &entry_point, call_args);
        }
        _ => {
            runtime::call_versioned_contract::<()>(marketplace, None, &entry_point, call_args);
        }
    }
}
