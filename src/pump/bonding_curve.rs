use log::{debug, info};
use solana_sdk::pubkey::Pubkey;

use crate::common::{read_bool, read_u64};
use crate::error::{CurveError, DecodeError};
use crate::pump::constants::{
    BONDING_CURVE_SEED, COMPLETE_OFFSET, INITIAL_VIRTUAL_RESERVES, PUMP_PROGRAM_ID,
    REAL_SOL_RESERVES_OFFSET, REAL_TOKEN_RESERVES_OFFSET, TOKEN_TOTAL_SUPPLY_OFFSET,
    TOTAL_TOKENS_TO_COLLECT, VIRTUAL_SOL_RESERVES_OFFSET, VIRTUAL_TOKEN_RESERVES_OFFSET,
};
use crate::rpc::{AccountSource, fetch_account_data};

/// Состояние bonding curve аккаунта (после 8-байтового discriminator).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BondingCurveState {
    pub virtual_token_reserves: u64,
    pub virtual_sol_reserves: u64,
    pub real_token_reserves: u64,
    pub real_sol_reserves: u64,
    pub token_total_supply: u64,
    /// Curve has collected everything and migrated
    pub complete: bool,
}

impl BondingCurveState {
    /// Minimum account size holding every field up to `complete`.
    pub const LEN: usize = COMPLETE_OFFSET + 1;

    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() < Self::LEN {
            return Err(DecodeError::TooShort {
                needed: Self::LEN,
                actual: data.len(),
            });
        }

        Ok(Self {
            virtual_token_reserves: read_u64(data, VIRTUAL_TOKEN_RESERVES_OFFSET)?,
            virtual_sol_reserves: read_u64(data, VIRTUAL_SOL_RESERVES_OFFSET)?,
            real_token_reserves: read_u64(data, REAL_TOKEN_RESERVES_OFFSET)?,
            real_sol_reserves: read_u64(data, REAL_SOL_RESERVES_OFFSET)?,
            token_total_supply: read_u64(data, TOKEN_TOTAL_SUPPLY_OFFSET)?,
            complete: read_bool(data, COMPLETE_OFFSET)?,
        })
    }

    pub fn progress(&self) -> f64 {
        progress_from_reserves(self.virtual_token_reserves)
    }
}

/// Прогресс bonding curve в процентах.
///
/// `((INITIAL_VIRTUAL_RESERVES - reserves) * 100) / TOTAL_TOKENS_TO_COLLECT`,
/// computed as `(INITIAL_VIRTUAL_RESERVES - reserves) / (TOTAL_TOKENS_TO_COLLECT / 100)`
/// so that a single rounding happens: both operands are exact in `f64` while
/// `|INITIAL_VIRTUAL_RESERVES - reserves| <= 2^53`. The result is not clamped:
/// reserves above the initial value give a negative percentage.
pub fn progress_from_reserves(virtual_token_reserves: u64) -> f64 {
    let numerator = INITIAL_VIRTUAL_RESERVES as i128 - virtual_token_reserves as i128;
    numerator as f64 / (TOTAL_TOKENS_TO_COLLECT / 100) as f64
}

/// Reads `virtual_token_reserves` (u64 LE at `[8, 16)`) of a bonding curve account.
///
/// # Arguments
/// * `source` - where the account is fetched from, one request per call
/// * `account` - account address, passed to the node as is
pub fn virtual_token_reserves<S: AccountSource + ?Sized>(
    source: &S,
    account: &str,
) -> Result<u64, CurveError> {
    let data = fetch_account_data(source, account)?;
    let reserves = read_u64(&data, VIRTUAL_TOKEN_RESERVES_OFFSET)?;

    debug!("Bonding curve {}: virtual_token_reserves={}", account, reserves);

    Ok(reserves)
}

pub fn bonding_curve_progress<S: AccountSource + ?Sized>(
    source: &S,
    account: &str,
) -> Result<f64, CurveError> {
    let reserves = virtual_token_reserves(source, account)?;
    let progress = progress_from_reserves(reserves);

    info!(
        "Bonding curve {} -> virtual_token_reserves={}, progress={:.4}%",
        account, reserves, progress
    );

    Ok(progress)
}

/// Fetches the account once and decodes the whole curve state.
pub fn get_bonding_curve_state<S: AccountSource + ?Sized>(
    source: &S,
    account: &str,
) -> Result<BondingCurveState, CurveError> {
    let data = fetch_account_data(source, account)?;
    let state = BondingCurveState::from_bytes(&data)?;

    debug!(
        "Parsed bonding curve {}: \
         \n\tvirtual_token_reserves={}, \
         \n\tvirtual_sol_reserves={}, \
         \n\treal_token_reserves={}, \
         \n\treal_sol_reserves={}, \
         \n\ttoken_total_supply={}, \
         \n\tcomplete={}",
        account,
        state.virtual_token_reserves,
        state.virtual_sol_reserves,
        state.real_token_reserves,
        state.real_sol_reserves,
        state.token_total_supply,
        state.complete
    );

    Ok(state)
}

/// PDA bonding curve для mint: seeds = ["bonding-curve", mint].
pub fn bonding_curve_address(mint: &Pubkey) -> Pubkey {
    let (pda, _) =
        Pubkey::find_program_address(&[BONDING_CURVE_SEED, mint.as_ref()], &PUMP_PROGRAM_ID);
    pda
}
