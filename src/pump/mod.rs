pub mod bonding_curve;
pub mod constants;

pub use bonding_curve::{
    BondingCurveState, bonding_curve_address, bonding_curve_progress, get_bonding_curve_state,
    progress_from_reserves, virtual_token_reserves,
};
