use solana_sdk::pubkey::Pubkey;

/// Virtual token reserves a fresh curve starts with (6 decimals).
pub const INITIAL_VIRTUAL_RESERVES: u64 = 1_073_000_000 * 1_000_000;
/// Tokens sold off the curve before it completes (6 decimals).
pub const TOTAL_TOKENS_TO_COLLECT: u64 = 793_100_000 * 1_000_000;

pub const BONDING_CURVE_SEED: &[u8] = b"bonding-curve";

pub const PUMP_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P");

// Offsets внутри аккаунта BondingCurve, с учётом первых 8 байт discriminator.
pub const VIRTUAL_TOKEN_RESERVES_OFFSET: usize = 8;
pub const VIRTUAL_SOL_RESERVES_OFFSET: usize = 16;
pub const REAL_TOKEN_RESERVES_OFFSET: usize = 24;
pub const REAL_SOL_RESERVES_OFFSET: usize = 32;
pub const TOKEN_TOTAL_SUPPLY_OFFSET: usize = 40;
pub const COMPLETE_OFFSET: usize = 48;
