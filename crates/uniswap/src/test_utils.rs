use std::collections::HashMap;

use alloy::primitives::{Address, TxHash, U256};
use lp_types::primitive::{LiquidityPosition, PoolInfo, Token, Version};
use parking_lot::Mutex;

use crate::{MintReceipt, UniswapApi, UniswapError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Quote { qty: U256, fee: Option<u32>, route: Option<Vec<Address>> },
    GetToken(Address),
    GetPool { token_a: Address, token_b: Address, fee: u32 },
    Mint { amount0: U256, amount1: U256, tick_lower: i32, tick_upper: i32 },
    ListPositions,
    GetPosition(U256),
    Close(U256)
}

/// In-memory stand-in for the chain. Quotes are looked up by input quantity,
/// mints append a fresh token id to the owned positions and closes remove it.
#[derive(Debug, Default)]
pub struct MockUniswap {
    pub version:         Version,
    pub address:         Option<Address>,
    pub quotes:          HashMap<U256, U256>,
    pub pool:            Option<PoolInfo>,
    pub positions:       Mutex<Vec<U256>>,
    /// minted positions are not reported back by the listing
    pub untracked_mints: bool,
    pub(crate) calls:    Mutex<Vec<MockCall>>
}

impl MockUniswap {
    pub fn with_quote(mut self, qty: U256, amount_out: U256) -> Self {
        self.quotes.insert(qty, amount_out);
        self
    }

    pub fn with_pool(mut self, pool: PoolInfo) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn with_positions(self, positions: Vec<U256>) -> Self {
        *self.positions.lock() = positions;
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().push(call);
    }
}

fn tx_hash(token_id: U256) -> TxHash {
    TxHash::from(token_id)
}

impl UniswapApi for MockUniswap {
    fn version(&self) -> Version {
        self.version
    }

    fn address(&self) -> Option<Address> {
        self.address
    }

    async fn get_price_input(
        &self,
        _token_in: Address,
        _token_out: Address,
        qty: U256,
        fee: Option<u32>,
        route: Option<&[Address]>
    ) -> Result<U256, UniswapError> {
        self.record(MockCall::Quote { qty, fee, route: route.map(<[Address]>::to_vec) });
        self.quotes.get(&qty).copied().ok_or(UniswapError::EmptyQuote)
    }

    async fn get_token(&self, token: Address) -> Result<Token, UniswapError> {
        self.record(MockCall::GetToken(token));
        Ok(Token::new(token, "MOCK", 18))
    }

    async fn get_pool(
        &self,
        token_a: Address,
        token_b: Address,
        fee: u32
    ) -> Result<PoolInfo, UniswapError> {
        self.record(MockCall::GetPool { token_a, token_b, fee });
        self.pool
            .clone()
            .ok_or(UniswapError::PoolNotFound { token_a, token_b, fee })
    }

    async fn mint_liquidity(
        &self,
        _pool: &PoolInfo,
        amount0: U256,
        amount1: U256,
        tick_lower: i32,
        tick_upper: i32
    ) -> Result<MintReceipt, UniswapError> {
        self.record(MockCall::Mint { amount0, amount1, tick_lower, tick_upper });

        let mut positions = self.positions.lock();
        let token_id = positions
            .iter()
            .max()
            .map(|id| *id + U256::from(1))
            .unwrap_or(U256::from(1));
        if !self.untracked_mints {
            positions.push(token_id);
        }

        Ok(MintReceipt { tx_hash: tx_hash(token_id), token_id: Some(token_id) })
    }

    async fn get_liquidity_positions(&self) -> Result<Vec<U256>, UniswapError> {
        self.record(MockCall::ListPositions);
        Ok(self.positions.lock().clone())
    }

    async fn get_position(&self, token_id: U256) -> Result<LiquidityPosition, UniswapError> {
        self.record(MockCall::GetPosition(token_id));
        let pool = self.pool.clone().ok_or(UniswapError::EmptyQuote)?;

        Ok(LiquidityPosition {
            token_id,
            token0: pool.token0.address,
            token1: pool.token1.address,
            fee: pool.fee,
            tick_lower: -pool.tick_spacing,
            tick_upper: pool.tick_spacing,
            liquidity: 1,
            tokens_owed0: 0,
            tokens_owed1: 0
        })
    }

    async fn close_position(&self, token_id: U256) -> Result<TxHash, UniswapError> {
        self.record(MockCall::Close(token_id));
        self.positions.lock().retain(|id| *id != token_id);

        Ok(tx_hash(token_id))
    }
}
