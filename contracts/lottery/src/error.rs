use cosmwasm_std::{StdError, Uint128};
use cw_controllers::AdminError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Admin(#[from] AdminError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    Std(#[from] StdError),

    #[error("A round is already accepting tickets")]
    LotteryInProgress {},

    #[error("No round is accepting tickets")]
    LotteryNotInProgress {},

    #[error("Round can't be settled before block {end_block}")]
    RoundNotOver { end_block: u64 },

    #[error("Sent funds do not match the ticket price {required}")]
    InsufficientFunds { required: Uint128 },

    #[error("Winning ticket is not found")]
    TicketNotFound {},

    #[error("Ticket price can't be zero")]
    ZeroTicketPrice {},

    #[error("Parsing previous version error!")]
    ParsingPrevVersion,

    #[error("Parsing new version error!")]
    ParsingNewVersion,

    #[error("Msg version is not equal contract new version!")]
    ImproperMsgVersion,
}

impl ContractError {
    /// Numeric codes kept stable for clients consuming failed
    /// transactions. Plumbing errors have no code.
    pub fn code(&self) -> Option<u64> {
        match self {
            Self::Admin(_) => Some(100),
            Self::TicketNotFound {} => Some(101),
            Self::LotteryInProgress {} | Self::RoundNotOver { .. } => Some(102),
            Self::LotteryNotInProgress {} => Some(103),
            Self::InsufficientFunds { .. } => Some(104),
            _ => None,
        }
    }
}
