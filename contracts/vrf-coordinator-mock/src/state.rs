use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<CoordinatorConfig> = Item::new("config");
pub const NEXT_SUB_ID: Item<u64> = Item::new("next_sub_id");
pub const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");
pub const SUBSCRIPTIONS: Map<u64, Subscription> = Map::new("subscriptions");
/// Outstanding requests. Removed once fulfilled.
pub const REQUESTS: Map<u64, RandomWordsRequest> = Map::new("requests");

/// Most consumers a single subscription may register.
pub const MAX_CONSUMERS: usize = 100;

/// Most random words a single request may ask for.
pub const MAX_NUM_WORDS: u32 = 500;

#[cw_serde]
pub struct CoordinatorConfig {
    /// Flat fee charged per fulfilment (LINK units, 18 decimals)
    pub base_fee: Uint128,
    /// Price charged per unit of reserved callback gas
    pub gas_price_link: Uint128,
}

#[cw_serde]
pub struct Subscription {
    pub id: u64,
    pub owner: Addr,
    /// Bookkeeping balance; funding moves no tokens
    pub balance: Uint128,
    pub consumers: Vec<Addr>,
    pub req_count: u64,
}

#[cw_serde]
pub struct RandomWordsRequest {
    pub request_id: u64,
    pub sub_id: u64,
    pub consumer: Addr,
    pub key_hash: String,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
    pub requested_at: Timestamp,
    pub block_height: u64,
}
