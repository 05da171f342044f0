use std::fmt;

use cosmwasm_schema::cw_serde;

/// Lifecycle state of the lottery.
///
/// `Open` accepts entries. `Calculating` means a randomness request is in
/// flight and the round can only be closed by the matching fulfilment.
#[cw_serde]
#[derive(Copy, Default)]
pub enum RaffleState {
    #[default]
    Open,
    Calculating,
}

impl RaffleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RaffleState::Open => "open",
            RaffleState::Calculating => "calculating",
        }
    }
}

impl fmt::Display for RaffleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
