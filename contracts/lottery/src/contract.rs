#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};

use lottery_msg::lottery::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

use crate::{
    actions::{
        execute as e, instantiate::try_instantiate, migrate::migrate_contract, query as q,
    },
    error::ContractError,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    try_instantiate(deps, env, info, msg)
}

/// Exposes execute functions available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::StartLottery { duration } => e::try_start_lottery(deps, env, info, duration),

        ExecuteMsg::BuyTicket {} => e::try_buy_ticket(deps, env, info),

        ExecuteMsg::EndLottery {} => e::try_end_lottery(deps, env, info),

        ExecuteMsg::UpdateConfig { config } => e::try_update_config(deps, env, info, config),
    }
}

/// Exposes queries available in the contract.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&q::query_config(deps, env)?),

        QueryMsg::Owner {} => to_json_binary(&q::query_owner(deps, env)?),

        QueryMsg::TicketPrice {} => to_json_binary(&q::query_ticket_price(deps, env)?),

        QueryMsg::TicketOwner { ticket_number } => {
            to_json_binary(&q::query_ticket_owner(deps, env, ticket_number)?)
        }

        QueryMsg::Balance {} => to_json_binary(&q::query_balance(deps, env)?),

        QueryMsg::Status {} => to_json_binary(&q::query_status(deps, env)?),

        QueryMsg::Winner {} => to_json_binary(&q::query_winner(deps, env)?),
    }
}

/// Manages contract migration.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrate_contract(deps, env, msg)
}
