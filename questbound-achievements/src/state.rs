use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, Timestamp};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    /// Sole identity allowed to manage the minter set and revoke tokens
    pub admin: Addr,
    pub name: String,
    pub symbol: String,
}

/// Two-step admin handover state
#[cw_serde]
pub struct PendingAdminTransfer {
    pub proposed_admin: Addr,
}

/// Who holds a token. The only legal moves are `Unheld -> Held` (mint) and
/// `Held -> Burned` (burn).
#[cw_serde]
pub enum HolderState {
    Unheld,
    Held(Addr),
    Burned,
}

impl HolderState {
    pub fn transition(&self, next: HolderState) -> Result<HolderState, ContractError> {
        let legal = matches!(
            (self, &next),
            (HolderState::Unheld, HolderState::Held(_))
                | (HolderState::Held(_), HolderState::Burned)
        );
        if !legal {
            return Err(ContractError::NonTransferable);
        }
        Ok(next)
    }

    pub fn holder(&self) -> Option<&Addr> {
        match self {
            HolderState::Held(addr) => Some(addr),
            _ => None,
        }
    }
}

/// Full on-chain token data
#[cw_serde]
pub struct TokenData {
    pub holder: HolderState,
    /// Opaque metadata reference, immutable after mint
    pub token_uri: String,
    /// Set when the token was issued for a quest completion
    pub quest_id: Option<HexBinary>,
    pub minted_at: Timestamp,
}

/// (player, quest) completion fact. Presence of the record means completed.
#[cw_serde]
pub struct CompletionRecord {
    pub token_id: u64,
    pub completed_at: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const PENDING_ADMIN: Item<PendingAdminTransfer> = Item::new("pending_admin");

/// Highest token id ever issued. Never decremented, so ids are not reused after burns.
pub const MINTED_COUNT: Item<u64> = Item::new("minted_count");
/// Tokens currently held
pub const LIVE_COUNT: Item<u64> = Item::new("live_count");

/// token_id -> TokenData (burned tokens keep their record)
pub const TOKENS: Map<u64, TokenData> = Map::new("tokens");

/// (holder, token_id) -> bool, live tokens only
pub const OWNER_TOKENS: Map<(&Addr, u64), bool> = Map::new("owner_tokens");

/// holder -> number of live tokens
pub const BALANCES: Map<&Addr, u64> = Map::new("balances");

/// minter -> authorized. Removal stores `false` so the entry stays queryable.
pub const MINTERS: Map<&Addr, bool> = Map::new("minters");

/// (player, quest_id bytes) -> CompletionRecord
pub const COMPLETIONS: Map<(&Addr, &[u8]), CompletionRecord> = Map::new("completions");

/// player -> quest ids in completion order
pub const QUEST_LOG: Map<&Addr, Vec<HexBinary>> = Map::new("quest_log");
