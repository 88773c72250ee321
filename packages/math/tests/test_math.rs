use soroban_sdk::Env;
use tideswap_math::*;

const LIQUIDITY_1M: Liquidity = Liquidity::from_integer(1_000_000);

// ============================================================
// DECIMALS
// ============================================================

#[test]
fn test_from_scale() {
    assert_eq!(FixedPoint::from_scale(5, 3).v, 5_000_000_000);
    assert_eq!(FixedPoint::from_scale(1, 2), FixedPoint::new(10_000_000_000));
    assert_eq!(Price::from_scale(101, 2).v, 1_010_000_000_000_000_000_000_000);
}

#[test]
fn test_fixed_point_mul_amount_rounding() {
    let fee = FixedPoint::from_scale(1, 2);
    assert_eq!(fee.mul_amount(650).unwrap(), 6);
    assert_eq!(fee.mul_amount_up(650).unwrap(), 7);
    assert_eq!(fee.mul_amount_up(600).unwrap(), 6);
}

#[test]
fn test_checked_sub_underflow() {
    assert_eq!(
        Liquidity::new(1).checked_sub(Liquidity::new(2)),
        Err(MarketError::ArithmeticOverflow)
    );
}

#[test]
fn test_fee_growth_round_trip_rounds_against_claimer() {
    let env = Env::default();
    let liquidity = Liquidity::from_integer(3);
    let growth = FeeGrowth::from_fee(&env, liquidity, 10).unwrap();
    // 10 / 3 rounded up at 24 decimals
    assert_eq!(growth.v, 3_333_333_333_333_333_333_333_334);
    assert_eq!(growth.to_fee(&env, liquidity).unwrap(), 10);
    assert_eq!(FeeGrowth::new(growth.v - 1).to_fee(&env, liquidity).unwrap(), 9);
}

#[test]
fn test_seconds_per_liquidity_from_elapsed() {
    let env = Env::default();
    let accrued = SecondsPerLiquidity::from_elapsed(&env, 1000, LIQUIDITY_1M).unwrap();
    assert_eq!(accrued.v, 1_000_000_000_000_000_000_000);
    assert_eq!(
        SecondsPerLiquidity::from_elapsed(&env, 0, LIQUIDITY_1M).unwrap(),
        SecondsPerLiquidity::zero()
    );
    assert_eq!(
        SecondsPerLiquidity::from_elapsed(&env, 1, Liquidity::zero()),
        Err(MarketError::DivisionByZero)
    );
}

#[test]
fn test_seconds_per_liquidity_wraps_on_tiny_liquidity() {
    let env = Env::default();
    let accrued = SecondsPerLiquidity::from_elapsed(&env, u64::MAX, Liquidity::new(1)).unwrap();
    assert_eq!(accrued.v, 237_324_459_680_667_634_165_748_060_124_530_868_224);
    assert_eq!(
        SecondsPerLiquidity::new(u128::MAX).wrapping_add(SecondsPerLiquidity::new(1)),
        SecondsPerLiquidity::zero()
    );
}

#[test]
fn test_fee_growth_wraps() {
    let high = FeeGrowth::new(u128::MAX);
    assert_eq!(high.wrapping_add(FeeGrowth::new(2)).v, 1);
    assert_eq!(FeeGrowth::new(1).wrapping_sub(high).v, 2);
}

#[test]
fn test_mul_div_zero_denominator() {
    let env = Env::default();
    assert_eq!(mul_div(&env, 1, 1, 0), Err(MarketError::DivisionByZero));
    assert_eq!(mul_div_up(&env, 7, 3, 2).unwrap(), 11);
    assert_eq!(mul_div(&env, u128::MAX, 4, 2), Err(MarketError::ArithmeticOverflow));
}

// ============================================================
// DELTAS
// ============================================================

#[test]
fn test_delta_rounding() {
    let env = Env::default();
    let one = Price::from_integer(1);
    let upper = tick_to_sqrt_price(10).unwrap();

    assert_eq!(get_delta_x(&env, one, upper, LIQUIDITY_1M, true).unwrap(), 500);
    assert_eq!(get_delta_x(&env, one, upper, LIQUIDITY_1M, false).unwrap(), 499);
    assert_eq!(get_delta_y(&env, one, upper, LIQUIDITY_1M, true).unwrap(), 501);
    assert_eq!(get_delta_y(&env, upper, one, LIQUIDITY_1M, false).unwrap(), 500);
}

#[test]
fn test_amounts_for_liquidity_by_range_position() {
    let env = Env::default();
    let one = Price::from_integer(1);

    // Range above the price needs only X
    let (x, y, in_range) = get_amounts_for_liquidity(&env, 0, one, LIQUIDITY_1M, 10, 20, true).unwrap();
    assert!(x > 0);
    assert_eq!(y, 0);
    assert!(!in_range);

    // Range below the price needs only Y
    let (x, y, in_range) = get_amounts_for_liquidity(&env, 0, one, LIQUIDITY_1M, -20, -10, true).unwrap();
    assert_eq!(x, 0);
    assert!(y > 0);
    assert!(!in_range);

    // Range containing the price needs both
    let (x, y, in_range) = get_amounts_for_liquidity(&env, 0, one, LIQUIDITY_1M, -20, 10, true).unwrap();
    assert_eq!(x, 500);
    assert_eq!(y, 1000);
    assert!(in_range);
}

// ============================================================
// NEXT SQRT PRICE
// ============================================================

#[test]
fn test_next_sqrt_price_from_input() {
    let env = Env::default();
    let one = Price::from_integer(1);

    let down = get_next_sqrt_price_from_input(&env, one, LIQUIDITY_1M, 1000, true).unwrap();
    assert_eq!(down.v, 999_000_999_000_999_000_999_001);

    let up = get_next_sqrt_price_from_input(&env, one, LIQUIDITY_1M, 1000, false).unwrap();
    assert_eq!(up.v, 1_001_000_000_000_000_000_000_000);

    assert_eq!(get_next_sqrt_price_from_input(&env, one, LIQUIDITY_1M, 0, true).unwrap(), one);
}

#[test]
fn test_next_sqrt_price_from_output() {
    let env = Env::default();
    let one = Price::from_integer(1);

    let down = get_next_sqrt_price_from_output(&env, one, LIQUIDITY_1M, 1000, true).unwrap();
    assert_eq!(down.v, 999_000_000_000_000_000_000_000);

    let up = get_next_sqrt_price_from_output(&env, one, LIQUIDITY_1M, 1000, false).unwrap();
    assert_eq!(up.v, 1_001_001_001_001_001_001_001_002);
}

#[test]
fn test_next_sqrt_price_output_exceeds_reserves() {
    let env = Env::default();
    let one = Price::from_integer(1);
    assert_eq!(
        get_next_sqrt_price_from_output(&env, one, LIQUIDITY_1M, 1_000_000, false),
        Err(MarketError::ArithmeticOverflow)
    );
}

// ============================================================
// SWAP STEP
// ============================================================

#[test]
fn test_swap_step_reaches_target() {
    let env = Env::default();
    let one = Price::from_integer(1);
    let target = tick_to_sqrt_price(-20).unwrap();
    let liquidity = Liquidity::from_integer(2_000_000);
    let fee = FixedPoint::from_scale(5, 3);

    let step = compute_swap_step(&env, one, target, liquidity, 10_000, true, fee).unwrap();
    assert_eq!(step.next_sqrt_price, target);
    assert_eq!(step.amount_in, 2001);
    assert_eq!(step.amount_out, 1998);
    assert_eq!(step.fee_amount, 11);
}

#[test]
fn test_swap_step_stops_before_target() {
    let env = Env::default();
    let one = Price::from_integer(1);
    let target = tick_to_sqrt_price(-20).unwrap();
    let liquidity = Liquidity::from_integer(2_000_000);
    let fee = FixedPoint::from_scale(5, 3);

    let step = compute_swap_step(&env, one, target, liquidity, 1000, true, fee).unwrap();
    assert_eq!(step.next_sqrt_price.v, 999_502_747_383_176_869_507_421);
    assert_eq!(step.amount_in, 995);
    assert_eq!(step.amount_out, 994);
    // Whatever was not swapped is kept as fee
    assert_eq!(step.amount_in + step.fee_amount, 1000);
}

#[test]
fn test_swap_step_y_to_x() {
    let env = Env::default();
    let one = Price::from_integer(1);
    let target = tick_to_sqrt_price(20).unwrap();
    let liquidity = Liquidity::from_integer(2_000_000);
    let fee = FixedPoint::from_scale(6, 3);

    let step = compute_swap_step(&env, one, target, liquidity, 1000, true, fee).unwrap();
    assert_eq!(step.next_sqrt_price.v, 1_000_497_000_000_000_000_000_000);
    assert_eq!(step.amount_in, 994);
    assert_eq!(step.amount_out, 993);
    assert_eq!(step.fee_amount, 6);
}

#[test]
fn test_swap_step_by_amount_out() {
    let env = Env::default();
    let one = Price::from_integer(1);
    let target = tick_to_sqrt_price(-20).unwrap();
    let liquidity = Liquidity::from_integer(2_000_000);
    let fee = FixedPoint::from_scale(5, 3);

    let step = compute_swap_step(&env, one, target, liquidity, 500, false, fee).unwrap();
    assert_eq!(step.next_sqrt_price.v, 999_750_000_000_000_000_000_000);
    assert_eq!(step.amount_out, 500);
    assert_eq!(step.amount_in, 501);
    assert_eq!(step.fee_amount, 3);
}

#[test]
fn test_swap_step_without_liquidity_jumps_to_target() {
    let env = Env::default();
    let one = Price::from_integer(1);
    let target = tick_to_sqrt_price(20).unwrap();

    let step = compute_swap_step(&env, one, target, Liquidity::zero(), 1000, true, FixedPoint::from_scale(6, 3)).unwrap();
    assert_eq!(step.next_sqrt_price, target);
    assert_eq!((step.amount_in, step.amount_out, step.fee_amount), (0, 0, 0));
}

#[test]
fn test_enough_amount_to_push_price() {
    let env = Env::default();
    let one = Price::from_integer(1);
    let fee = FixedPoint::from_scale(5, 3);

    assert!(is_enough_amount_to_push_price(&env, 1000, one, LIQUIDITY_1M, fee, true, true).unwrap());
    assert!(!is_enough_amount_to_push_price(&env, 0, one, LIQUIDITY_1M, fee, true, true).unwrap());
    assert!(is_enough_amount_to_push_price(&env, 0, one, Liquidity::zero(), fee, true, true).unwrap());
}
