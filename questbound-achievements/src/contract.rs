use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{assert_admin, reject_funds};
use crate::msg::*;
use crate::state::*;
use crate::{registry, tracker};

const CONTRACT_NAME: &str = "crates.io:questbound-achievements";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let config = Config {
        admin,
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    MINTED_COUNT.save(deps.storage, &0u64)?;
    LIVE_COUNT.save(deps.storage, &0u64)?;

    let mut response = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("admin", config.admin.as_str());

    for minter in &msg.minters {
        let minter = deps.api.addr_validate(minter)?;
        MINTERS.save(deps.storage, &minter, &true)?;
        response = response.add_attribute("minter", minter.as_str());
    }

    Ok(response)
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddMinter { minter } => registry::execute_add_minter(deps, env, info, minter),
        ExecuteMsg::RemoveMinter { minter } => {
            registry::execute_remove_minter(deps, env, info, minter)
        }
        ExecuteMsg::Mint {
            recipient,
            token_uri,
        } => registry::execute_mint(deps, env, info, recipient, token_uri),
        ExecuteMsg::CompleteQuest {
            player,
            quest_id,
            token_uri,
        } => tracker::execute_complete_quest(deps, env, info, player, quest_id, token_uri),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => registry::execute_transfer_nft(deps, env, info, recipient, token_id),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => registry::execute_send_nft(deps, env, info, contract, token_id, msg),
        ExecuteMsg::Approve { spender, token_id } => {
            registry::execute_approve(deps, env, info, spender, token_id)
        }
        ExecuteMsg::ApproveAll { operator } => {
            registry::execute_approve_all(deps, env, info, operator)
        }
        ExecuteMsg::Burn { token_id } => registry::execute_burn(deps, env, info, token_id),
        ExecuteMsg::ProposeAdmin { new_admin } => {
            execute_propose_admin(deps, env, info, new_admin)
        }
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminTransfer {} => execute_cancel_admin_transfer(deps, env, info),
    }
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(query_config(deps)?),
        QueryMsg::PendingAdmin {} => Ok(query_pending_admin(deps)?),
        QueryMsg::OwnerOf { token_id } => registry::query_owner_of(deps, token_id),
        QueryMsg::NftInfo { token_id } => registry::query_nft_info(deps, token_id),
        QueryMsg::Balance { owner } => registry::query_balance(deps, owner),
        QueryMsg::NumTokens {} => registry::query_num_tokens(deps),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => registry::query_tokens(deps, owner, start_after, limit),
        QueryMsg::AllTokens { start_after, limit } => {
            registry::query_all_tokens(deps, start_after, limit)
        }
        QueryMsg::IsMinter { address } => registry::query_is_minter(deps, address),
        QueryMsg::Minters { start_after, limit } => {
            registry::query_minters(deps, start_after, limit)
        }
        QueryMsg::HasCompleted { player, quest_id } => {
            tracker::query_has_completed(deps, player, quest_id)
        }
        QueryMsg::CompletedQuests { player } => tracker::query_completed_quests(deps, player),
    }
}

// ─── Execute: Admin handover ────────────────────────────────────────────────

pub fn execute_propose_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_admin: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;
    if PENDING_ADMIN.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AdminTransferAlreadyPending);
    }

    let proposed = deps.api.addr_validate(&new_admin)?;
    PENDING_ADMIN.save(
        deps.storage,
        &PendingAdminTransfer {
            proposed_admin: proposed.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "propose_admin")
        .add_attribute("proposed_admin", proposed.as_str()))
}

pub fn execute_accept_admin(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let pending = PENDING_ADMIN
        .may_load(deps.storage)?
        .ok_or(ContractError::NoAdminTransferPending)?;
    if info.sender != pending.proposed_admin {
        return Err(ContractError::NotPendingAdmin);
    }

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.admin = pending.proposed_admin.clone();
        Ok(c)
    })?;
    PENDING_ADMIN.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_admin")
        .add_attribute("new_admin", pending.proposed_admin.as_str()))
}

pub fn execute_cancel_admin_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;
    if PENDING_ADMIN.may_load(deps.storage)?.is_none() {
        return Err(ContractError::NoAdminTransferPending);
    }

    PENDING_ADMIN.remove(deps.storage);
    Ok(Response::new().add_attribute("action", "cancel_admin_transfer"))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_pending_admin(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&PENDING_ADMIN.may_load(deps.storage)?)
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
