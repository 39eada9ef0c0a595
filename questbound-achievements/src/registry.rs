//! Achievement registry: minter set, soulbound minting, burning and token queries.

use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Order, Response,
    StdResult, Storage,
};
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::helpers::{
    assert_admin, assert_minter, is_null_identity, load_live_token, reject_funds,
    validate_recipient, validate_token_uri,
};
use crate::msg::*;
use crate::state::*;

const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Execute: Minter set ────────────────────────────────────────────────────

pub fn execute_add_minter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let minter = deps.api.addr_validate(&minter)?;
    let already_authorized = MINTERS.may_load(deps.storage, &minter)?.unwrap_or(false);
    MINTERS.save(deps.storage, &minter, &true)?;

    Ok(Response::new()
        .add_attribute("action", "add_minter")
        .add_attribute("admin", info.sender.as_str())
        .add_attribute("minter", minter.as_str())
        .add_attribute("already_authorized", already_authorized.to_string()))
}

pub fn execute_remove_minter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let minter = deps.api.addr_validate(&minter)?;
    let was_authorized = MINTERS.may_load(deps.storage, &minter)?.unwrap_or(false);
    MINTERS.save(deps.storage, &minter, &false)?;

    Ok(Response::new()
        .add_attribute("action", "remove_minter")
        .add_attribute("admin", info.sender.as_str())
        .add_attribute("minter", minter.as_str())
        .add_attribute("was_authorized", was_authorized.to_string()))
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

pub fn execute_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    token_uri: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let token_id = mint_token(deps, &env, &info.sender, &recipient, token_uri.clone(), None)?;

    Ok(Response::new()
        .set_data(to_json_binary(&MintResponse { token_id })?)
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("minter", info.sender.as_str())
        .add_attribute("recipient", recipient)
        .add_attribute("token_uri", token_uri))
}

/// The only place tokens come into existence. Validates before writing, so a
/// failure leaves storage untouched.
pub(crate) fn mint_token(
    deps: DepsMut,
    env: &Env,
    minter: &Addr,
    recipient: &str,
    token_uri: String,
    quest_id: Option<HexBinary>,
) -> Result<u64, ContractError> {
    assert_minter(deps.storage, minter)?;
    let recipient = validate_recipient(deps.api, recipient)?;
    validate_token_uri(&token_uri)?;

    let token_id = MINTED_COUNT.load(deps.storage)? + 1;
    let token = TokenData {
        holder: HolderState::Unheld.transition(HolderState::Held(recipient.clone()))?,
        token_uri,
        quest_id,
        minted_at: env.block.time,
    };

    TOKENS.save(deps.storage, token_id, &token)?;
    OWNER_TOKENS.save(deps.storage, (&recipient, token_id), &true)?;
    BALANCES.update(deps.storage, &recipient, |n| -> StdResult<_> {
        Ok(n.unwrap_or_default() + 1)
    })?;
    LIVE_COUNT.update(deps.storage, |n| -> StdResult<_> { Ok(n + 1) })?;
    MINTED_COUNT.save(deps.storage, &token_id)?;

    Ok(token_id)
}

// ─── Execute: Transfers (always soulbound) ──────────────────────────────────

pub fn execute_transfer_nft(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    load_live_token(deps.storage, token_id)?;

    // Handing a token to nobody is a burn; handing it to anyone else never happens.
    if is_null_identity(&recipient) {
        return execute_burn(deps, env, info, token_id);
    }
    Err(ContractError::NonTransferable)
}

pub fn execute_send_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _contract: String,
    token_id: u64,
    _msg: Binary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    load_live_token(deps.storage, token_id)?;
    Err(ContractError::NonTransferable)
}

pub fn execute_approve(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _spender: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    load_live_token(deps.storage, token_id)?;
    Err(ContractError::NonTransferable)
}

pub fn execute_approve_all(
    _deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _operator: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    Err(ContractError::NonTransferable)
}

// ─── Execute: Burn ──────────────────────────────────────────────────────────

/// Holder or admin. Admin burns are a deliberate revocation path.
pub fn execute_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let (holder, token) = load_live_token(deps.storage, token_id)?;

    if info.sender != holder && assert_admin(deps.as_ref(), &info.sender).is_err() {
        return Err(ContractError::Unauthorized {
            role: "holder or admin".to_string(),
        });
    }

    burn_token(deps.storage, token_id, &holder, token)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("holder", holder.as_str())
        .add_attribute("burned_by", info.sender.as_str()))
}

fn burn_token(
    storage: &mut dyn Storage,
    token_id: u64,
    holder: &Addr,
    mut token: TokenData,
) -> Result<(), ContractError> {
    token.holder = token.holder.transition(HolderState::Burned)?;

    TOKENS.save(storage, token_id, &token)?;
    OWNER_TOKENS.remove(storage, (holder, token_id));
    BALANCES.update(storage, holder, |n| -> StdResult<_> {
        Ok(n.unwrap_or_default().saturating_sub(1))
    })?;
    LIVE_COUNT.update(storage, |n| -> StdResult<_> { Ok(n.saturating_sub(1)) })?;
    Ok(())
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_owner_of(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let (holder, _) = load_live_token(deps.storage, token_id)?;
    Ok(to_json_binary(&OwnerOfResponse {
        owner: holder.to_string(),
    })?)
}

pub fn query_nft_info(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let (holder, token) = load_live_token(deps.storage, token_id)?;
    Ok(to_json_binary(&NftInfoResponse {
        token_id,
        owner: holder.to_string(),
        token_uri: token.token_uri,
        quest_id: token.quest_id,
        minted_at: token.minted_at,
    })?)
}

pub fn query_balance(deps: Deps, owner: String) -> Result<Binary, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let count = BALANCES.may_load(deps.storage, &owner)?.unwrap_or_default();
    Ok(to_json_binary(&BalanceResponse { count })?)
}

pub fn query_num_tokens(deps: Deps) -> Result<Binary, ContractError> {
    Ok(to_json_binary(&NumTokensResponse {
        count: LIVE_COUNT.load(deps.storage)?,
        minted: MINTED_COUNT.load(deps.storage)?,
    })?)
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;

    let tokens = OWNER_TOKENS
        .prefix(&owner)
        .keys(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .collect::<StdResult<Vec<u64>>>()?;

    Ok(to_json_binary(&TokensResponse { tokens })?)
}

pub fn query_all_tokens(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;

    let tokens = TOKENS
        .range(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .filter(|item| {
            item.as_ref()
                .map_or(true, |(_, token)| token.holder.holder().is_some())
        })
        .take(limit)
        .map(|item| item.map(|(token_id, _)| token_id))
        .collect::<StdResult<Vec<u64>>>()?;

    Ok(to_json_binary(&TokensResponse { tokens })?)
}

pub fn query_is_minter(deps: Deps, address: String) -> Result<Binary, ContractError> {
    let address = deps.api.addr_validate(&address)?;
    let authorized = MINTERS.may_load(deps.storage, &address)?.unwrap_or(false);
    Ok(to_json_binary(&MinterResponse { authorized })?)
}

pub fn query_minters(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let minters = MINTERS
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| item.as_ref().map_or(true, |(_, authorized)| *authorized))
        .take(limit)
        .map(|item| item.map(|(addr, _)| addr.to_string()))
        .collect::<StdResult<Vec<String>>>()?;

    Ok(to_json_binary(&MintersResponse { minters })?)
}
