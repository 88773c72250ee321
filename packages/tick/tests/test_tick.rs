use tideswap_math::{tick_to_sqrt_price, FeeGrowth, Liquidity, MarketError, SecondsPerLiquidity};
use tideswap_tick::{
    cross_fee_growth, get_fee_growth_inside, get_seconds_per_liquidity_inside, Tick,
};

fn growth(v: u128) -> FeeGrowth {
    FeeGrowth::new(v)
}

fn seconds(v: u128) -> SecondsPerLiquidity {
    SecondsPerLiquidity::new(v)
}

#[test]
fn test_create_below_current_inherits_global_growth() {
    let tick = Tick::create(-20, 0, growth(7), growth(9), seconds(11)).unwrap();
    assert_eq!(tick.fee_growth_outside_x, growth(7));
    assert_eq!(tick.fee_growth_outside_y, growth(9));
    assert_eq!(tick.seconds_per_liquidity_outside, seconds(11));
    assert_eq!(tick.sqrt_price, tick_to_sqrt_price(-20).unwrap());
    assert!(tick.sign);
    assert!(tick.liquidity_gross.is_zero());

    let at_current = Tick::create(0, 0, growth(7), growth(9), seconds(11)).unwrap();
    assert_eq!(at_current.fee_growth_outside_x, growth(7));
    assert_eq!(at_current.seconds_per_liquidity_outside, seconds(11));
}

#[test]
fn test_create_above_current_starts_at_zero() {
    let tick = Tick::create(10, 0, growth(7), growth(9), seconds(11)).unwrap();
    assert_eq!(tick.fee_growth_outside_x, FeeGrowth::zero());
    assert_eq!(tick.fee_growth_outside_y, FeeGrowth::zero());
    assert_eq!(tick.seconds_per_liquidity_outside, SecondsPerLiquidity::zero());
}

#[test]
fn test_create_out_of_range() {
    assert_eq!(
        Tick::create(300_000, 0, growth(0), growth(0), seconds(0)),
        Err(MarketError::InvalidTick)
    );
}

#[test]
fn test_update_lower_and_upper() {
    let delta = Liquidity::from_integer(100);
    let mut lower = Tick::create(-10, 0, growth(0), growth(0), seconds(0)).unwrap();
    let mut upper = Tick::create(10, 0, growth(0), growth(0), seconds(0)).unwrap();

    lower.update(delta, false, true).unwrap();
    upper.update(delta, true, true).unwrap();

    assert_eq!(lower.liquidity_change, delta);
    assert!(lower.sign);
    assert_eq!(upper.liquidity_change, delta);
    assert!(!upper.sign);
    assert_eq!(upper.liquidity_gross, delta);
}

#[test]
fn test_update_sign_flips_when_net_changes_direction() {
    let mut tick = Tick::create(0, 0, growth(0), growth(0), seconds(0)).unwrap();
    // Upper bound of one range and lower bound of a bigger one
    tick.update(Liquidity::from_integer(100), true, true).unwrap();
    tick.update(Liquidity::from_integer(300), false, true).unwrap();

    assert!(tick.sign);
    assert_eq!(tick.liquidity_change, Liquidity::from_integer(200));
    assert_eq!(tick.liquidity_gross, Liquidity::from_integer(400));

    tick.update(Liquidity::from_integer(300), false, false).unwrap();
    assert!(!tick.sign);
    assert_eq!(tick.liquidity_change, Liquidity::from_integer(100));
    assert_eq!(tick.liquidity_gross, Liquidity::from_integer(100));
}

#[test]
fn test_update_withdraw_too_much() {
    let mut tick = Tick::create(0, 0, growth(0), growth(0), seconds(0)).unwrap();
    tick.update(Liquidity::from_integer(1), false, true).unwrap();
    assert_eq!(
        tick.update(Liquidity::from_integer(2), false, false),
        Err(MarketError::InsufficientPositionLiquidity)
    );
}

#[test]
fn test_cross_flips_outside_growth() {
    let mut tick = Tick::create(10, 0, growth(0), growth(0), seconds(0)).unwrap();
    tick.cross(growth(4_000), growth(0), seconds(0));
    assert_eq!(tick.fee_growth_outside_x, growth(4_000));

    // Crossing back with more growth leaves only what accrued in between
    tick.cross(growth(10_000), growth(5), seconds(0));
    assert_eq!(tick.fee_growth_outside_x, growth(6_000));
    assert_eq!(tick.fee_growth_outside_y, growth(5));

    assert_eq!(cross_fee_growth(growth(1), growth(3)).v, u128::MAX - 1);
}

#[test]
fn test_cross_flips_seconds_per_liquidity_outside() {
    let mut tick = Tick::create(-10, 0, growth(0), growth(0), seconds(500)).unwrap();
    tick.cross(growth(0), growth(0), seconds(800));
    assert_eq!(tick.seconds_per_liquidity_outside, seconds(300));

    tick.cross(growth(0), growth(0), seconds(1_000));
    assert_eq!(tick.seconds_per_liquidity_outside, seconds(700));
}

#[test]
fn test_liquidity_after_cross() {
    let delta = Liquidity::from_integer(50);
    let mut lower = Tick::create(-10, 0, growth(0), growth(0), seconds(0)).unwrap();
    lower.update(delta, false, true).unwrap();
    let pool = Liquidity::from_integer(150);

    assert_eq!(lower.liquidity_after_cross(pool, true).unwrap(), Liquidity::from_integer(100));
    assert_eq!(lower.liquidity_after_cross(pool, false).unwrap(), Liquidity::from_integer(200));
}

#[test]
fn test_fee_growth_inside() {
    let lower = Tick {
        fee_growth_outside_x: growth(100),
        ..Tick::create(-10, 0, growth(0), growth(0), seconds(0)).unwrap()
    };
    let upper = Tick {
        fee_growth_outside_x: growth(30),
        ..Tick::create(10, 0, growth(0), growth(0), seconds(0)).unwrap()
    };

    // Price inside the range
    let (inside_x, inside_y) = get_fee_growth_inside(&lower, &upper, 0, growth(1_000), growth(0));
    assert_eq!(inside_x, growth(870));
    assert_eq!(inside_y, growth(0));

    // Price below the range: everything above lower counts as outside
    let (inside_x, _) = get_fee_growth_inside(&lower, &upper, -20, growth(1_000), growth(0));
    assert_eq!(inside_x, growth(70));
}

#[test]
fn test_seconds_per_liquidity_inside() {
    let lower = Tick::create(-10, 0, growth(0), growth(0), seconds(200)).unwrap();
    let upper = Tick::create(10, 0, growth(0), growth(0), seconds(200)).unwrap();
    assert_eq!(upper.seconds_per_liquidity_outside, seconds(0));

    // Price inside the range since creation
    assert_eq!(get_seconds_per_liquidity_inside(&lower, &upper, 0, seconds(1_000)), seconds(800));

    // Price left the range downwards after 300 more
    let mut left = lower.clone();
    left.cross(growth(0), growth(0), seconds(500));
    assert_eq!(get_seconds_per_liquidity_inside(&left, &upper, -20, seconds(1_000)), seconds(300));

    // Price above the range
    let mut crossed = upper.clone();
    crossed.cross(growth(0), growth(0), seconds(600));
    assert_eq!(get_seconds_per_liquidity_inside(&lower, &crossed, 20, seconds(1_000)), seconds(400));
}
