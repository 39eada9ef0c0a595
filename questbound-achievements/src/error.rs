use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("recipient must be a non-empty address")]
    InvalidRecipient,

    #[error("token_uri must not be empty")]
    EmptyTokenUri,

    #[error("quest id must be 32 bytes, got {length}")]
    InvalidQuestId { length: usize },

    #[error("token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("quest {quest_id} already completed by {player}")]
    AlreadyCompleted { player: String, quest_id: String },

    #[error("token is soulbound and cannot be transferred")]
    NonTransferable,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,

    #[error("no admin transfer pending")]
    NoAdminTransferPending,

    #[error("caller is not the pending admin")]
    NotPendingAdmin,

    #[error("admin transfer already pending")]
    AdminTransferAlreadyPending,
}
