use bech32::FromBase32;
use cosmwasm_std::{Addr, Api};

use crate::ContractError;

/// Decodes a Bech32 or Bech32m encoded address into the raw account bytes.
///
/// Both checksum variants of the same account decode to the same bytes, so
/// they share one identity in every store keyed by account. The BIP-173
/// 90 character limit is not applied, which keeps longer module and
/// contract addresses decodable.
pub fn decode_address(address: &str) -> Result<Vec<u8>, ContractError> {
    let (_hrp, data, _variant) =
        bech32::decode(address).map_err(|err| invalid_address(address, err))?;
    let bytes = Vec::<u8>::from_base32(&data).map_err(|err| invalid_address(address, err))?;
    if bytes.is_empty() {
        return Err(invalid_address(address, "empty address payload"));
    }
    Ok(bytes)
}

/// Validates an address the chain itself could present as a sender and
/// returns it together with its canonical bytes. Only the chain's own prefix
/// and checksum variant pass, so the stored form always equals `info.sender`
/// of the same account.
pub fn validate_address(api: &dyn Api, address: &str) -> Result<(Addr, Vec<u8>), ContractError> {
    let addr = api
        .addr_validate(address)
        .map_err(|err| invalid_address(address, err))?;
    let bytes = decode_address(addr.as_str())?;
    Ok((addr, bytes))
}

fn invalid_address(address: &str, reason: impl ToString) -> ContractError {
    ContractError::InvalidAddress {
        address: address.to_string(),
        reason: reason.to_string(),
    }
}
