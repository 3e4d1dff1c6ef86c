//! Minimal ABI surface of the Uniswap v2/v3 periphery and core contracts that
//! the client talks to. Only the functions and events actually used are
//! declared.

#[rustfmt::skip]
pub mod erc20 {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        #[derive(Debug, PartialEq, Eq)]
        interface IERC20 {
            function decimals() external view returns (uint8);
            function symbol() external view returns (string memory);
            function allowance(address owner, address spender) external view returns (uint256 remaining);
            function approve(address spender, uint256 value) external returns (bool success);
        }
    );
}

#[rustfmt::skip]
pub mod uniswap_v2_router {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        #[derive(Debug, PartialEq, Eq)]
        interface IUniswapV2Router02 {
            function getAmountsOut(uint256 amountIn, address[] calldata path) external view returns (uint256[] memory amounts);
        }
    );
}

#[rustfmt::skip]
pub mod quoter {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        #[derive(Debug, PartialEq, Eq)]
        interface IQuoter {
            function quoteExactInputSingle(address tokenIn, address tokenOut, uint24 fee, uint256 amountIn, uint160 sqrtPriceLimitX96) external returns (uint256 amountOut);
            function quoteExactInput(bytes memory path, uint256 amountIn) external returns (uint256 amountOut);
        }
    );
}

#[rustfmt::skip]
pub mod uniswap_v3_factory {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        #[derive(Debug, PartialEq, Eq)]
        interface IUniswapV3Factory {
            function getPool(address tokenA, address tokenB, uint24 fee) external view returns (address pool);
        }
    );
}

#[rustfmt::skip]
pub mod uniswap_v3_pool {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        #[derive(Debug, PartialEq, Eq)]
        interface IUniswapV3Pool {
            function token0() external view returns (address);
            function token1() external view returns (address);
            function fee() external view returns (uint24);
            function tickSpacing() external view returns (int24);
        }
    );
}

#[rustfmt::skip]
pub mod position_manager {
    alloy::sol!(
        #[allow(missing_docs)]
        #[sol(rpc)]
        #[derive(Debug, PartialEq, Eq)]
        interface INonfungiblePositionManager {
            struct MintParams {
                address token0;
                address token1;
                uint24 fee;
                int24 tickLower;
                int24 tickUpper;
                uint256 amount0Desired;
                uint256 amount1Desired;
                uint256 amount0Min;
                uint256 amount1Min;
                address recipient;
                uint256 deadline;
            }

            struct DecreaseLiquidityParams {
                uint256 tokenId;
                uint128 liquidity;
                uint256 amount0Min;
                uint256 amount1Min;
                uint256 deadline;
            }

            struct CollectParams {
                uint256 tokenId;
                address recipient;
                uint128 amount0Max;
                uint128 amount1Max;
            }

            event IncreaseLiquidity(uint256 indexed tokenId, uint128 liquidity, uint256 amount0, uint256 amount1);

            function mint(MintParams calldata params) external payable returns (uint256 tokenId, uint128 liquidity, uint256 amount0, uint256 amount1);
            function decreaseLiquidity(DecreaseLiquidityParams calldata params) external payable returns (uint256 amount0, uint256 amount1);
            function collect(CollectParams calldata params) external payable returns (uint256 amount0, uint256 amount1);
            function burn(uint256 tokenId) external payable;
            function multicall(bytes[] calldata data) external payable returns (bytes[] memory results);

            function balanceOf(address owner) external view returns (uint256 balance);
            function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256 tokenId);
            function positions(uint256 tokenId) external view returns (
                uint96 nonce,
                address operator,
                address token0,
                address token1,
                uint24 fee,
                int24 tickLower,
                int24 tickUpper,
                uint128 liquidity,
                uint256 feeGrowthInside0LastX128,
                uint256 feeGrowthInside1LastX128,
                uint128 tokensOwed0,
                uint128 tokensOwed1
            );
        }
    );
}
