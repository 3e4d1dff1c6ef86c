use std::{
    future::Future,
    time::{SystemTime, UNIX_EPOCH}
};

use alloy::{
    network::EthereumWallet,
    primitives::{
        Address, Bytes, TxHash, U160, U256,
        aliases::U24
    },
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
    sol_types::{SolCall, SolEvent}
};
use lp_types::{
    contract_bindings::{
        erc20::IERC20,
        position_manager::INonfungiblePositionManager::{
            self, CollectParams, DecreaseLiquidityParams, IncreaseLiquidity, MintParams,
            burnCall, collectCall, decreaseLiquidityCall
        },
        quoter::IQuoter,
        uniswap_v2_router::IUniswapV2Router02,
        uniswap_v3_factory::IUniswapV3Factory,
        uniswap_v3_pool::IUniswapV3Pool
    },
    primitive::{ContractAddresses, ETH_ADDRESS, LiquidityPosition, PoolInfo, Token, Version},
    ticks::i32_to_i24
};
use url::Url;

use crate::{
    UniswapError,
    path::{DEFAULT_FEE, v2_path, v3_path}
};

/// Seconds a mint or close transaction stays valid after submission.
const DEADLINE_SECS: u64 = 600;

/// Outcome of a mint. The token id comes from the `IncreaseLiquidity` event
/// and is absent only if the receipt carried no such log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintReceipt {
    pub tx_hash:  TxHash,
    pub token_id: Option<U256>
}

/// Everything the toolkit needs from Uniswap. Quotes, pool metadata and
/// position bookkeeping all come from chain; nothing here prices a swap
/// locally.
pub trait UniswapApi: Send + Sync {
    fn version(&self) -> Version;

    /// Account the client acts for, if it was built with a signer.
    fn address(&self) -> Option<Address>;

    /// Raw amount of `token_out` received for `qty` raw units of `token_in`.
    fn get_price_input(
        &self,
        token_in: Address,
        token_out: Address,
        qty: U256,
        fee: Option<u32>,
        route: Option<&[Address]>
    ) -> impl Future<Output = Result<U256, UniswapError>> + Send;

    fn get_token(&self, token: Address) -> impl Future<Output = Result<Token, UniswapError>> + Send;

    fn get_pool(
        &self,
        token_a: Address,
        token_b: Address,
        fee: u32
    ) -> impl Future<Output = Result<PoolInfo, UniswapError>> + Send;

    /// Opens a position over `[tick_lower, tick_upper]`. Amounts are raw
    /// units of the pool's token0 and token1.
    fn mint_liquidity(
        &self,
        pool: &PoolInfo,
        amount0: U256,
        amount1: U256,
        tick_lower: i32,
        tick_upper: i32
    ) -> impl Future<Output = Result<MintReceipt, UniswapError>> + Send;

    /// Token ids of every position owned by the client's account, in the
    /// order the position manager enumerates them.
    fn get_liquidity_positions(&self) -> impl Future<Output = Result<Vec<U256>, UniswapError>> + Send;

    fn get_position(
        &self,
        token_id: U256
    ) -> impl Future<Output = Result<LiquidityPosition, UniswapError>> + Send;

    /// Withdraws all liquidity, collects owed tokens and burns the NFT.
    fn close_position(&self, token_id: U256) -> impl Future<Output = Result<TxHash, UniswapError>> + Send;
}

/// [`UniswapApi`] over an alloy provider.
#[derive(Debug, Clone)]
pub struct Uniswap<P = DynProvider> {
    provider:  P,
    version:   Version,
    address:   Option<Address>,
    addresses: ContractAddresses
}

impl Uniswap<DynProvider> {
    /// Connects to `rpc_url`. With a signer the provider signs and submits
    /// transactions for the signer's address, without one the client can
    /// only read.
    pub async fn connect(
        rpc_url: &Url,
        signer: Option<PrivateKeySigner>,
        version: Version,
        addresses: ContractAddresses
    ) -> Result<Self, UniswapError> {
        let address = signer.as_ref().map(|signer| signer.address());

        let provider = match signer {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::new(signer))
                .connect(rpc_url.as_str())
                .await?
                .erased(),
            None => ProviderBuilder::new()
                .connect(rpc_url.as_str())
                .await?
                .erased()
        };
        tracing::debug!(%rpc_url, %version, ?address, "connected uniswap client");

        Ok(Self::new(provider, version, address, addresses))
    }
}

impl<P> Uniswap<P>
where
    P: Provider + Clone + 'static
{
    pub fn new(
        provider: P,
        version: Version,
        address: Option<Address>,
        addresses: ContractAddresses
    ) -> Self {
        Self { provider, version, address, addresses }
    }

    fn require_v3(&self, operation: &'static str) -> Result<(), UniswapError> {
        match self.version {
            Version::V3 => Ok(()),
            version => Err(UniswapError::UnsupportedVersion { operation, version })
        }
    }

    fn require_account(&self, operation: &'static str) -> Result<Address, UniswapError> {
        self.address.ok_or(UniswapError::MissingAccount(operation))
    }

    fn position_manager(&self) -> INonfungiblePositionManager::INonfungiblePositionManagerInstance<&P> {
        INonfungiblePositionManager::new(self.addresses.position_manager, &self.provider)
    }

    /// Approves `spender` for the maximum amount when the current allowance
    /// cannot cover `amount`.
    async fn ensure_approval(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256
    ) -> Result<(), UniswapError> {
        let erc20 = IERC20::new(token, &self.provider);
        let allowance = erc20.allowance(owner, spender).call().await?;
        if allowance >= amount {
            return Ok(());
        }

        tracing::info!(%token, %spender, %allowance, "approving token");
        let receipt = erc20
            .approve(spender, U256::MAX)
            .from(owner)
            .send()
            .await?
            .get_receipt()
            .await?;
        ensure_success(&receipt)?;

        Ok(())
    }
}

impl<P> UniswapApi for Uniswap<P>
where
    P: Provider + Clone + 'static
{
    fn version(&self) -> Version {
        self.version
    }

    fn address(&self) -> Option<Address> {
        self.address
    }

    async fn get_price_input(
        &self,
        token_in: Address,
        token_out: Address,
        qty: U256,
        fee: Option<u32>,
        route: Option<&[Address]>
    ) -> Result<U256, UniswapError> {
        let fee = fee.unwrap_or(DEFAULT_FEE);

        let amount_out = match self.version {
            Version::V2 => {
                let path = v2_path(&self.addresses, token_in, token_out, route)?;
                let amounts = IUniswapV2Router02::new(self.addresses.v2_router, &self.provider)
                    .getAmountsOut(qty, path)
                    .call()
                    .await?;
                amounts.last().copied().ok_or(UniswapError::EmptyQuote)?
            }
            Version::V3 => {
                let quoter = IQuoter::new(self.addresses.v3_quoter, &self.provider);
                match route {
                    Some(route) => {
                        let path = v3_path(&self.addresses, route, fee)?;
                        quoter.quoteExactInput(path, qty).call().await?
                    }
                    None => {
                        quoter
                            .quoteExactInputSingle(
                                self.addresses.erc20(token_in),
                                self.addresses.erc20(token_out),
                                U24::from(fee),
                                qty,
                                U160::ZERO
                            )
                            .call()
                            .await?
                    }
                }
            }
        };
        tracing::debug!(version = %self.version, %token_in, %token_out, %qty, %amount_out, "quoted");

        Ok(amount_out)
    }

    async fn get_token(&self, token: Address) -> Result<Token, UniswapError> {
        if token == ETH_ADDRESS {
            return Ok(Token::eth());
        }

        let erc20 = IERC20::new(token, &self.provider);
        let decimals = erc20.decimals().call().await?;
        let symbol = erc20.symbol().call().await?;

        Ok(Token::new(token, symbol, decimals))
    }

    async fn get_pool(
        &self,
        token_a: Address,
        token_b: Address,
        fee: u32
    ) -> Result<PoolInfo, UniswapError> {
        self.require_v3("get_pool")?;

        let address = IUniswapV3Factory::new(self.addresses.v3_factory, &self.provider)
            .getPool(self.addresses.erc20(token_a), self.addresses.erc20(token_b), U24::from(fee))
            .call()
            .await?;
        if address == Address::ZERO {
            return Err(UniswapError::PoolNotFound { token_a, token_b, fee });
        }

        let pool = IUniswapV3Pool::new(address, &self.provider);
        let token0 = pool.token0().call().await?;
        let token1 = pool.token1().call().await?;
        let fee = pool.fee().call().await?.to::<u32>();
        let tick_spacing = pool.tickSpacing().call().await?.as_i32();

        Ok(PoolInfo {
            address,
            token0: self.get_token(token0).await?,
            token1: self.get_token(token1).await?,
            fee,
            tick_spacing
        })
    }

    async fn mint_liquidity(
        &self,
        pool: &PoolInfo,
        amount0: U256,
        amount1: U256,
        tick_lower: i32,
        tick_upper: i32
    ) -> Result<MintReceipt, UniswapError> {
        self.require_v3("mint_liquidity")?;
        let owner = self.require_account("mint_liquidity")?;
        let position_manager = self.addresses.position_manager;

        self.ensure_approval(pool.token0.address, owner, position_manager, amount0)
            .await?;
        self.ensure_approval(pool.token1.address, owner, position_manager, amount1)
            .await?;

        let params = MintParams {
            token0:         pool.token0.address,
            token1:         pool.token1.address,
            fee:            U24::from(pool.fee),
            tickLower:      i32_to_i24(tick_lower)?,
            tickUpper:      i32_to_i24(tick_upper)?,
            amount0Desired: amount0,
            amount1Desired: amount1,
            amount0Min:     U256::ZERO,
            amount1Min:     U256::ZERO,
            recipient:      owner,
            deadline:       deadline()
        };
        let receipt = self
            .position_manager()
            .mint(params)
            .from(owner)
            .send()
            .await?
            .get_receipt()
            .await?;
        let tx_hash = ensure_success(&receipt)?;

        let token_id = receipt
            .inner
            .logs()
            .iter()
            .find_map(|log| IncreaseLiquidity::decode_log(&log.inner).ok())
            .map(|event| event.data.tokenId);

        Ok(MintReceipt { tx_hash, token_id })
    }

    async fn get_liquidity_positions(&self) -> Result<Vec<U256>, UniswapError> {
        self.require_v3("get_liquidity_positions")?;
        let owner = self.require_account("get_liquidity_positions")?;
        let position_manager = self.position_manager();

        let count = position_manager.balanceOf(owner).call().await?.to::<u64>();
        let mut token_ids = Vec::with_capacity(count as usize);
        for index in 0..count {
            let token_id = position_manager
                .tokenOfOwnerByIndex(owner, U256::from(index))
                .call()
                .await?;
            token_ids.push(token_id);
        }

        Ok(token_ids)
    }

    async fn get_position(&self, token_id: U256) -> Result<LiquidityPosition, UniswapError> {
        self.require_v3("get_position")?;
        let raw = self.position_manager().positions(token_id).call().await?;

        Ok(LiquidityPosition::from((token_id, raw)))
    }

    async fn close_position(&self, token_id: U256) -> Result<TxHash, UniswapError> {
        self.require_v3("close_position")?;
        let owner = self.require_account("close_position")?;
        let position = self.get_position(token_id).await?;
        tracing::debug!(%position, "closing position");

        let calls = close_calls(&position, owner, deadline());
        let receipt = self
            .position_manager()
            .multicall(calls)
            .from(owner)
            .send()
            .await?
            .get_receipt()
            .await?;

        ensure_success(&receipt)
    }
}

fn ensure_success(receipt: &TransactionReceipt) -> Result<TxHash, UniswapError> {
    if receipt.inner.status() {
        Ok(receipt.transaction_hash)
    } else {
        Err(UniswapError::Reverted(receipt.transaction_hash))
    }
}

/// Calls batched into the closing multicall: withdraw what is left, collect
/// everything owed to `recipient`, then burn the NFT.
fn close_calls(position: &LiquidityPosition, recipient: Address, deadline: U256) -> Vec<Bytes> {
    let mut calls: Vec<Bytes> = Vec::with_capacity(3);
    // decreasing by zero liquidity reverts
    if position.liquidity > 0 {
        calls.push(
            decreaseLiquidityCall::new((DecreaseLiquidityParams {
                tokenId: position.token_id,
                liquidity: position.liquidity,
                amount0Min: U256::ZERO,
                amount1Min: U256::ZERO,
                deadline
            },))
            .abi_encode()
            .into()
        );
    }
    calls.push(
        collectCall::new((CollectParams {
            tokenId: position.token_id,
            recipient,
            amount0Max: u128::MAX,
            amount1Max: u128::MAX
        },))
        .abi_encode()
        .into()
    );
    calls.push(burnCall::new((position.token_id,)).abi_encode().into());
    calls
}

fn deadline() -> U256 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    U256::from(now + DEADLINE_SECS)
}
