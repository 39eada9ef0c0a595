use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, HexBinary, Timestamp};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Identities authorized to mint from the start
    #[serde(default)]
    pub minters: Vec<String>,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Authorize an identity to mint (admin only, idempotent)
    AddMinter { minter: String },
    /// Withdraw minting rights (admin only, idempotent)
    RemoveMinter { minter: String },
    /// Mint a soulbound achievement (minter only)
    Mint { recipient: String, token_uri: String },
    /// Record a quest completion and mint its achievement (minter only)
    CompleteQuest {
        player: String,
        /// 32-byte opaque quest id, usually sha256 of the quest name
        quest_id: HexBinary,
        token_uri: String,
    },
    /// Always rejected unless `recipient` is empty, which burns the token
    TransferNft { recipient: String, token_id: u64 },
    /// Always rejected
    SendNft {
        contract: String,
        token_id: u64,
        msg: Binary,
    },
    /// Always rejected
    Approve { spender: String, token_id: u64 },
    /// Always rejected
    ApproveAll { operator: String },
    /// Destroy a token (holder or admin)
    Burn { token_id: u64 },
    ProposeAdmin { new_admin: String },
    AcceptAdmin {},
    CancelAdminTransfer {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},
    #[returns(Option<crate::state::PendingAdminTransfer>)]
    PendingAdmin {},
    /// Current holder of a live token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Metadata reference and provenance of a live token
    #[returns(NftInfoResponse)]
    NftInfo { token_id: u64 },
    /// Number of live tokens held by an address
    #[returns(BalanceResponse)]
    Balance { owner: String },
    #[returns(NumTokensResponse)]
    NumTokens {},
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(TokensResponse)]
    AllTokens {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(MinterResponse)]
    IsMinter { address: String },
    /// Currently authorized minters
    #[returns(MintersResponse)]
    Minters {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(CompletionResponse)]
    HasCompleted { player: String, quest_id: HexBinary },
    /// Every quest completed by `player`, oldest first
    #[returns(CompletedQuestsResponse)]
    CompletedQuests { player: String },
}

#[cw_serde]
pub struct MintResponse {
    pub token_id: u64,
}

#[cw_serde]
pub struct CompleteQuestResponse {
    pub token_id: u64,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: u64,
    pub owner: String,
    pub token_uri: String,
    pub quest_id: Option<HexBinary>,
    pub minted_at: Timestamp,
}

#[cw_serde]
pub struct BalanceResponse {
    pub count: u64,
}

#[cw_serde]
pub struct NumTokensResponse {
    /// Live tokens
    pub count: u64,
    /// Tokens ever minted, including burned ones
    pub minted: u64,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct MinterResponse {
    pub authorized: bool,
}

#[cw_serde]
pub struct MintersResponse {
    pub minters: Vec<String>,
}

#[cw_serde]
pub struct CompletionResponse {
    pub completed: bool,
    pub token_id: Option<u64>,
}

#[cw_serde]
pub struct CompletedQuestsResponse {
    pub quests: Vec<HexBinary>,
}

#[cw_serde]
pub struct MigrateMsg {}
