use alloy::{
    contract::Error as ContractError,
    primitives::{Address, TxHash},
    providers::PendingTransactionError,
    transports::TransportError
};
use lp_types::{
    primitive::Version,
    ticks::{ConversionError, TickError}
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniswapError {
    #[error("{operation} is not available on uniswap {version}")]
    UnsupportedVersion { operation: &'static str, version: Version },
    #[error("{0} needs an account, construct the client with a signing key")]
    MissingAccount(&'static str),
    #[error("no v3 pool for {token_a}/{token_b} at fee {fee}")]
    PoolNotFound { token_a: Address, token_b: Address, fee: u32 },
    #[error("router returned no amounts for the requested path")]
    EmptyQuote,
    #[error("reference quote for {0} returned zero, cannot estimate impact")]
    ZeroReferencePrice(Address),
    #[error("swap path needs at least two tokens, got {0}")]
    InvalidPath(usize),
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    #[error(transparent)]
    Tick(#[from] TickError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error(transparent)]
    AlloyContractError(#[from] ContractError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    PendingTransaction(#[from] PendingTransactionError)
}
