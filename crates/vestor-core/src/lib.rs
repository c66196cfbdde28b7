//! # vestor-core
//!
//! Rule-based investment advice engine. There is no algorithmic core here:
//! allocation is a static percentage lookup by risk tier multiplied by the
//! monthly budget, advisory text is selected from fixed multilingual tables,
//! and the assistant is an ordered keyword matcher over canned answers.
//!
//! ## Allocation mixes
//!
//! ```text
//! ┌──────────────┬────────┬──────────────┬───────┬────────┬─────────────┐
//! │  Risk tier   │ Stocks │ Mutual funds │ ETFs  │ Crypto │ Real estate │
//! ├──────────────┼────────┼──────────────┼───────┼────────┼─────────────┤
//! │  low         │  25%   │     35%      │  25%  │   0%   │     15%     │
//! │  medium      │  35%   │     30%      │  20%  │   5%   │     10%     │
//! │  high        │  45%   │     20%      │  15%  │  15%   │      5%     │
//! └──────────────┴────────┴──────────────┴───────┴────────┴─────────────┘
//! ```
//!
//! Everything is deterministic given the request and the static tables:
//! no market data, no external calls, no stored state. Malformed input is
//! coerced to safe defaults (unknown risk → medium, unknown language → en,
//! unknown currency → `$`), never rejected.

pub mod advisor;
pub mod allocation;
pub mod assistant;
pub mod catalog;
pub mod model;

pub use advisor::generate;
pub use allocation::AllocationMix;
pub use assistant::respond;
pub use model::{
    AdviceDocument, AdviceRequest, AssetAdvice, AssetClass, AssetDetails, Language, Localized,
    RiskTier, currency_symbol,
};
