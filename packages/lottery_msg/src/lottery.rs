use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// privileged address allowed to start and settle rounds, sender by default
    pub owner: Option<String>,
    /// price of a single ticket
    pub ticket_price: Option<Uint128>,
    /// denom tickets are paid in and the prize is paid out in
    pub ticket_denom: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// open a new round accepting tickets for `duration` blocks
    StartLottery { duration: u64 },
    /// buy a single ticket of the active round, the ticket price must be attached
    BuyTicket {},
    /// settle the active round and pay out the prize pool
    EndLottery {},
    /// update config
    UpdateConfig { config: UpdateConfigMsg },
}

#[cw_serde]
pub struct MigrateMsg {
    pub version: String,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// query config
    #[returns(Config)]
    Config {},

    /// query owner
    #[returns(Addr)]
    Owner {},

    /// query price of a single ticket
    #[returns(Uint128)]
    TicketPrice {},

    /// query ticket of the active round by its 1-based number
    #[returns(Option<Ticket>)]
    TicketOwner { ticket_number: u64 },

    /// query accumulated prize pool of the active round
    #[returns(Uint128)]
    Balance {},

    /// query round progress
    #[returns(StatusResponse)]
    Status {},

    /// query winner of the last settled round
    #[returns(Option<Addr>)]
    Winner {},
}

#[cw_serde]
pub struct UpdateConfigMsg {
    pub ticket_price: Option<Uint128>,
    pub ticket_denom: Option<String>,
}

#[cw_serde]
pub struct Config {
    /// price of a single ticket
    pub ticket_price: Uint128,
    /// denom tickets are paid in and the prize is paid out in
    pub ticket_denom: String,
}

#[cw_serde]
pub struct Ticket {
    pub owner: Addr,
}

#[cw_serde]
pub struct Round {
    /// monotonic round counter, 0 until the first round is opened
    pub id: u64,
    pub in_progress: bool,
    /// block height the round can be settled at
    pub end_block: u64,
    /// accumulated ticket funds, drained on settlement
    pub balance: Uint128,
    pub total_tickets: u64,
    /// winner of the last settled round
    pub winner: Option<Addr>,
}

#[cw_serde]
pub struct StatusResponse {
    pub in_progress: bool,
    pub end_block: u64,
    pub current_block: u64,
    pub total_tickets: u64,
}
