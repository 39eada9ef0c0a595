//! Quest completion tracker. Records each (player, quest) pair at most once
//! and issues the matching achievement through the registry in the same call.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Response,
    Storage, Timestamp,
};

use crate::error::ContractError;
use crate::helpers::{reject_funds, validate_quest_id, validate_recipient};
use crate::msg::{CompleteQuestResponse, CompletedQuestsResponse, CompletionResponse};
use crate::registry::mint_token;
use crate::state::{CompletionRecord, COMPLETIONS, QUEST_LOG};

/// Completion written ahead of the mint. Either `commit` or `rollback` must follow.
struct StagedCompletion {
    player: Addr,
    quest_id: HexBinary,
    previous_log: Option<Vec<HexBinary>>,
    completed_at: Timestamp,
}

impl StagedCompletion {
    fn stage(
        storage: &mut dyn Storage,
        player: Addr,
        quest_id: HexBinary,
        completed_at: Timestamp,
    ) -> Result<Self, ContractError> {
        let previous_log = QUEST_LOG.may_load(storage, &player)?;

        // token_id 0 is never issued; it marks the record as pending until commit
        COMPLETIONS.save(
            storage,
            (&player, quest_id.as_slice()),
            &CompletionRecord {
                token_id: 0,
                completed_at,
            },
        )?;
        let mut log = previous_log.clone().unwrap_or_default();
        log.push(quest_id.clone());
        QUEST_LOG.save(storage, &player, &log)?;

        Ok(Self {
            player,
            quest_id,
            previous_log,
            completed_at,
        })
    }

    fn commit(self, storage: &mut dyn Storage, token_id: u64) -> Result<(), ContractError> {
        COMPLETIONS.save(
            storage,
            (&self.player, self.quest_id.as_slice()),
            &CompletionRecord {
                token_id,
                completed_at: self.completed_at,
            },
        )?;
        Ok(())
    }

    fn rollback(self, storage: &mut dyn Storage) -> Result<(), ContractError> {
        COMPLETIONS.remove(storage, (&self.player, self.quest_id.as_slice()));
        match self.previous_log {
            Some(log) => QUEST_LOG.save(storage, &self.player, &log)?,
            None => QUEST_LOG.remove(storage, &self.player),
        }
        Ok(())
    }
}

pub fn execute_complete_quest(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    player: String,
    quest_id: HexBinary,
    token_uri: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    validate_quest_id(&quest_id)?;
    let player = validate_recipient(deps.api, &player)?;

    // Must run before anything is written or delegated
    if COMPLETIONS.has(deps.storage, (&player, quest_id.as_slice())) {
        return Err(ContractError::AlreadyCompleted {
            player: player.to_string(),
            quest_id: quest_id.to_hex(),
        });
    }

    let staged =
        StagedCompletion::stage(deps.storage, player.clone(), quest_id.clone(), env.block.time)?;

    let token_id = match mint_token(
        deps.branch(),
        &env,
        &info.sender,
        player.as_str(),
        token_uri,
        Some(quest_id.clone()),
    ) {
        Ok(token_id) => token_id,
        Err(err) => {
            staged.rollback(deps.storage)?;
            return Err(err);
        }
    };
    staged.commit(deps.storage, token_id)?;

    Ok(Response::new()
        .set_data(to_json_binary(&CompleteQuestResponse { token_id })?)
        .add_attribute("action", "complete_quest")
        .add_attribute("player", player.as_str())
        .add_attribute("quest_id", quest_id.to_hex())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("minter", info.sender.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_has_completed(
    deps: Deps,
    player: String,
    quest_id: HexBinary,
) -> Result<Binary, ContractError> {
    let player = deps.api.addr_validate(&player)?;
    let record = COMPLETIONS.may_load(deps.storage, (&player, quest_id.as_slice()))?;

    Ok(to_json_binary(&CompletionResponse {
        completed: record.is_some(),
        token_id: record.map(|r| r.token_id),
    })?)
}

pub fn query_completed_quests(deps: Deps, player: String) -> Result<Binary, ContractError> {
    let player = deps.api.addr_validate(&player)?;
    let quests = QUEST_LOG.may_load(deps.storage, &player)?.unwrap_or_default();
    Ok(to_json_binary(&CompletedQuestsResponse { quests })?)
}
