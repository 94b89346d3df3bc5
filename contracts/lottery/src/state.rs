use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};

use lottery_msg::lottery::{Config, Round, Ticket};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = "crates.io:lottery";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_TICKET_PRICE: u128 = 1_000_000;
pub const DEFAULT_TICKET_DENOM: &str = "utoken";

pub const OWNER: Admin = Admin::new("owner");
pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<Round> = Item::new("round");
// tickets of the active round keyed by 1-based ticket number
pub const TICKETS: Map<u64, Ticket> = Map::new("tickets");
