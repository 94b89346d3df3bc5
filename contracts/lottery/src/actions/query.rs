use cosmwasm_std::{Addr, Deps, Env, StdError, StdResult, Uint128};

use lottery_msg::lottery::{Config, StatusResponse, Ticket};

use crate::state::{CONFIG, OWNER, ROUND, TICKETS};

pub fn query_config(deps: Deps, _env: Env) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_owner(deps: Deps, _env: Env) -> StdResult<Addr> {
    OWNER
        .get(deps)?
        .ok_or_else(|| StdError::generic_err("Owner is not set"))
}

pub fn query_ticket_price(deps: Deps, _env: Env) -> StdResult<Uint128> {
    let Config { ticket_price, .. } = CONFIG.load(deps.storage)?;
    Ok(ticket_price)
}

pub fn query_ticket_owner(deps: Deps, _env: Env, ticket_number: u64) -> StdResult<Option<Ticket>> {
    TICKETS.may_load(deps.storage, ticket_number)
}

pub fn query_balance(deps: Deps, _env: Env) -> StdResult<Uint128> {
    let round = ROUND.load(deps.storage)?;
    Ok(round.balance)
}

pub fn query_status(deps: Deps, env: Env) -> StdResult<StatusResponse> {
    let round = ROUND.load(deps.storage)?;

    Ok(StatusResponse {
        in_progress: round.in_progress,
        end_block: round.end_block,
        current_block: env.block.height,
        total_tickets: round.total_tickets,
    })
}

pub fn query_winner(deps: Deps, _env: Env) -> StdResult<Option<Addr>> {
    let round = ROUND.load(deps.storage)?;
    Ok(round.winner)
}
