#![allow(dead_code)]

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use tideswap_market::{MarketContract, MarketContractClient};
use tideswap_math::{FeeTier, FixedPoint, Liquidity, PoolKey};

/// 1% of every swap fee goes to the protocol
pub const PROTOCOL_FEE: FixedPoint = FixedPoint::from_scale(1, 2);

pub struct Market<'a> {
    pub env: Env,
    pub client: MarketContractClient<'a>,
    pub admin: Address,
    pub token_x: Address,
    pub token_y: Address,
}

/// Market with state created and two tokens, `token_x < token_y`.
pub fn setup_market(env: &Env) -> Market<'_> {
    env.mock_all_auths();
    env.cost_estimate().budget().reset_unlimited();

    let admin = Address::generate(env);
    let token_a = create_token(env, &admin);
    let token_b = create_token(env, &admin);
    let (token_x, token_y) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    let market_id = env.register(MarketContract, ());
    let client = MarketContractClient::new(env, &market_id);
    client.create_state(&admin, &PROTOCOL_FEE);

    Market {
        env: env.clone(),
        client,
        admin,
        token_x,
        token_y,
    }
}

impl Market<'_> {
    /// Register the fee tier if needed and create the pool.
    pub fn create_pool(&self, fee: FixedPoint, tick_spacing: u32) -> PoolKey {
        let fee_tier = FeeTier { fee, tick_spacing };
        if !self.client.fee_tier_exists(&fee_tier) {
            self.client.create_fee_tier(&self.admin, &fee_tier);
        }
        self.client.create_pool(&self.token_x, &self.token_y, &fee_tier)
    }

    /// New funded account holding `amount` of both tokens.
    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        mint_tokens(&self.env, &self.token_x, &user, amount);
        mint_tokens(&self.env, &self.token_y, &user, amount);
        user
    }

    pub fn open_position(
        &self,
        owner: &Address,
        key: &PoolKey,
        lower_tick: i32,
        upper_tick: i32,
        liquidity: u128,
    ) {
        self.client.init_position(
            owner,
            key,
            &lower_tick,
            &upper_tick,
            &Liquidity::from_integer(liquidity),
            &None,
            &FixedPoint::zero(),
        );
    }

    pub fn balances(&self, account: &Address) -> (i128, i128) {
        (
            balance(&self.env, &self.token_x, account),
            balance(&self.env, &self.token_y, account),
        )
    }
}

pub fn create_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone()).address()
}

pub fn mint_tokens(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn balance(env: &Env, token: &Address, account: &Address) -> i128 {
    TokenClient::new(env, token).balance(account)
}
