use cosmwasm_std::{
    coins, ensure, ensure_eq, BankMsg, DepsMut, Env, MessageInfo, Response, Uint128,
};
use cw_utils::{must_pay, nonpayable};

use lottery_msg::lottery::{Round, Ticket, UpdateConfigMsg};

use crate::{
    error::ContractError,
    state::{CONFIG, OWNER, ROUND, TICKETS},
};

pub fn try_start_lottery(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    duration: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let round = ROUND.load(deps.storage)?;
    ensure!(!round.in_progress, ContractError::LotteryInProgress {});

    // tickets of the previous round are dropped when a new one opens
    for ticket_number in 1..=round.total_tickets {
        TICKETS.remove(deps.storage, ticket_number);
    }

    let round = Round {
        id: round.id + 1,
        in_progress: true,
        end_block: env.block.height + duration,
        balance: Uint128::zero(),
        total_tickets: 0,
        winner: round.winner,
    };
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_attribute("action", "try_start_lottery")
        .add_attribute("lottery_id", round.id.to_string())
        .add_attribute("end_block", round.end_block.to_string()))
}

pub fn try_buy_ticket(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    ensure!(round.in_progress, ContractError::LotteryNotInProgress {});

    let paid = must_pay(&info, &config.ticket_denom)?;
    ensure_eq!(
        paid,
        config.ticket_price,
        ContractError::InsufficientFunds {
            required: config.ticket_price
        }
    );

    round.total_tickets += 1;
    round.balance += config.ticket_price;
    ROUND.save(deps.storage, &round)?;

    TICKETS.save(
        deps.storage,
        round.total_tickets,
        &Ticket {
            owner: info.sender.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "try_buy_ticket")
        .add_attribute("ticket_number", round.total_tickets.to_string())
        .add_attribute("owner", info.sender))
}

pub fn try_end_lottery(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    ensure!(round.in_progress, ContractError::LotteryNotInProgress {});
    ensure!(
        env.block.height >= round.end_block,
        ContractError::RoundNotOver {
            end_block: round.end_block
        }
    );

    // the winner is picked as block height modulo sold tickets, tickets
    // are 1-based
    let winning_number = env
        .block
        .height
        .checked_rem(round.total_tickets)
        .map(|x| x + 1)
        .ok_or(ContractError::TicketNotFound {})?;
    let ticket = TICKETS
        .may_load(deps.storage, winning_number)?
        .ok_or(ContractError::TicketNotFound {})?;

    let prize_amount = round.balance;

    round.in_progress = false;
    round.winner = Some(ticket.owner.clone());
    round.balance = Uint128::zero();
    ROUND.save(deps.storage, &round)?;

    let msg = BankMsg::Send {
        to_address: ticket.owner.to_string(),
        amount: coins(prize_amount.u128(), config.ticket_denom),
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "try_end_lottery")
        .add_attribute("winner", ticket.owner)
        .add_attribute("prize_amount", prize_amount.to_string()))
}

pub fn try_update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: UpdateConfigMsg,
) -> Result<Response, ContractError> {
    OWNER.assert_admin(deps.as_ref(), &info.sender)?;

    // changing the price under sold tickets would break the prize pool
    // accounting
    let round = ROUND.load(deps.storage)?;
    ensure!(!round.in_progress, ContractError::LotteryInProgress {});

    let mut config = CONFIG.load(deps.storage)?;
    let mut res = Response::new().add_attribute("action", "try_update_config");

    if let Some(ticket_price) = msg.ticket_price {
        ensure!(!ticket_price.is_zero(), ContractError::ZeroTicketPrice {});
        config.ticket_price = ticket_price;
        res = res.add_attribute("ticket_price", ticket_price.to_string());
    }

    if let Some(ticket_denom) = msg.ticket_denom {
        config.ticket_denom = ticket_denom.clone();
        res = res.add_attribute("ticket_denom", ticket_denom);
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(res)
}
