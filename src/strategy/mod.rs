use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

mod agent;
mod moving_average;

pub use agent::TradingAgent;
pub use moving_average::SimpleMovingAverage;

/// A single market observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// When the price was observed
    pub timestamp: DateTime<Utc>,

    /// Observed price
    pub price: f64,
}

impl MarketData {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// Trading decision produced by a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,

    /// The series is shorter than the strategy needs
    NotEnoughData,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Buy => write!(f, "Buy"),
            Signal::Sell => write!(f, "Sell"),
            Signal::Hold => write!(f, "Hold"),
            Signal::NotEnoughData => write!(f, "Not enough data"),
        }
    }
}

/// Core trait for trading strategies evaluated on the client side
pub trait Strategy: Send + Sync {
    /// Get the name of this strategy
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Derive a signal from a series ordered oldest first
    fn evaluate(&self, data: &[MarketData]) -> Signal;
}
