use cosmwasm_std::{ensure, DepsMut, Env, MessageInfo, Response, Uint128};
use cw2::set_contract_version;

use lottery_msg::lottery::{Config, InstantiateMsg, Round};

use crate::{
    error::ContractError,
    state::{
        CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_TICKET_DENOM, DEFAULT_TICKET_PRICE,
        OWNER, ROUND,
    },
};

pub fn try_instantiate(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(x) => deps.api.addr_validate(&x)?,
        None => info.sender,
    };
    OWNER.set(deps.branch(), Some(owner))?;

    let ticket_price = msg
        .ticket_price
        .unwrap_or(Uint128::new(DEFAULT_TICKET_PRICE));
    ensure!(!ticket_price.is_zero(), ContractError::ZeroTicketPrice {});

    CONFIG.save(
        deps.storage,
        &Config {
            ticket_price,
            ticket_denom: msg
                .ticket_denom
                .unwrap_or_else(|| DEFAULT_TICKET_DENOM.to_string()),
        },
    )?;

    ROUND.save(
        deps.storage,
        &Round {
            id: 0,
            in_progress: false,
            end_block: 0,
            balance: Uint128::zero(),
            total_tickets: 0,
            winner: None,
        },
    )?;

    Ok(Response::new().add_attributes([("action", "try_instantiate")]))
}
