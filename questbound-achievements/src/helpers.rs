use cosmwasm_std::{Addr, Api, Deps, HexBinary, MessageInfo, Storage};
use sha2::{Digest, Sha256};

use crate::error::ContractError;
use crate::state::{TokenData, CONFIG, MINTERS, TOKENS};

pub const QUEST_ID_LEN: usize = 32;

pub fn assert_admin(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.admin {
        return Err(ContractError::Unauthorized {
            role: "admin".to_string(),
        });
    }
    Ok(())
}

pub fn assert_minter(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if !MINTERS.may_load(storage, sender)?.unwrap_or(false) {
        return Err(ContractError::Unauthorized {
            role: "minter".to_string(),
        });
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// The empty address is the null identity; it never becomes an `Addr`.
pub fn validate_recipient(api: &dyn Api, recipient: &str) -> Result<Addr, ContractError> {
    if recipient.trim().is_empty() {
        return Err(ContractError::InvalidRecipient);
    }
    Ok(api.addr_validate(recipient)?)
}

pub fn is_null_identity(addr: &str) -> bool {
    addr.trim().is_empty()
}

pub fn validate_token_uri(token_uri: &str) -> Result<(), ContractError> {
    if token_uri.trim().is_empty() {
        return Err(ContractError::EmptyTokenUri);
    }
    Ok(())
}

pub fn validate_quest_id(quest_id: &HexBinary) -> Result<(), ContractError> {
    if quest_id.len() != QUEST_ID_LEN {
        return Err(ContractError::InvalidQuestId {
            length: quest_id.len(),
        });
    }
    Ok(())
}

/// Load a token that has not been burned.
pub fn load_live_token(
    storage: &dyn Storage,
    token_id: u64,
) -> Result<(Addr, TokenData), ContractError> {
    let token = TOKENS
        .may_load(storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    match token.holder.holder() {
        Some(holder) => Ok((holder.clone(), token)),
        None => Err(ContractError::TokenNotFound { token_id }),
    }
}

/// Fixed-width quest id derived from a human-readable quest name.
/// Callers use this to agree on ids like `quest_id("discord-join")`.
pub fn quest_id(name: &str) -> HexBinary {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    HexBinary::from(hasher.finalize().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;

    #[test]
    fn quest_id_is_fixed_width_and_stable() {
        let id = quest_id("discord-join");
        assert_eq!(id.len(), QUEST_ID_LEN);
        assert_eq!(id, quest_id("discord-join"));
        assert_ne!(id, quest_id("discord-join "));
        validate_quest_id(&id).unwrap();
    }

    #[test]
    fn short_quest_id_rejected() {
        let err = validate_quest_id(&HexBinary::from(vec![1u8; 4])).unwrap_err();
        assert_eq!(err, ContractError::InvalidQuestId { length: 4 });
    }

    #[test]
    fn null_recipient_rejected() {
        let api = MockApi::default();
        assert_eq!(
            validate_recipient(&api, "").unwrap_err(),
            ContractError::InvalidRecipient
        );
        assert_eq!(
            validate_recipient(&api, "   ").unwrap_err(),
            ContractError::InvalidRecipient
        );
        let alice = api.addr_make("alice");
        assert_eq!(validate_recipient(&api, alice.as_str()).unwrap(), alice);
    }

    #[test]
    fn blank_token_uri_rejected() {
        assert_eq!(
            validate_token_uri(" ").unwrap_err(),
            ContractError::EmptyTokenUri
        );
        validate_token_uri("ipfs://quest/1").unwrap();
    }
}
