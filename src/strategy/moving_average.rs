use log::{debug, info};

use super::{MarketData, Signal, Strategy};
use crate::core::error::StrategyError;

/// Compares the latest price with the mean of the last `window_size` prices
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    name: String,
    description: String,
    window_size: usize,
}

impl SimpleMovingAverage {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        window_size: usize,
    ) -> Result<Self, StrategyError> {
        let name = name.into();
        if window_size == 0 {
            return Err(StrategyError::InvalidWindow { name, window_size });
        }

        let strategy = Self {
            name,
            description: description.into(),
            window_size,
        };
        info!(
            "Strategy initialized: {} ({})",
            strategy.name, strategy.description
        );
        Ok(strategy)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Last `window_size` points, or `None` when the series is too short
    fn window<'a>(&self, data: &'a [MarketData]) -> Option<&'a [MarketData]> {
        data.len()
            .checked_sub(self.window_size)
            .map(|start| &data[start..])
    }

    /// Mean price over the trailing window
    pub fn average(&self, data: &[MarketData]) -> Option<f64> {
        self.window(data)
            .map(|w| w.iter().map(|d| d.price).sum::<f64>() / self.window_size as f64)
    }
}

impl Strategy for SimpleMovingAverage {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn evaluate(&self, data: &[MarketData]) -> Signal {
        let Some(window) = self.window(data) else {
            debug!(
                "{}: {} points, need {}",
                self.name,
                data.len(),
                self.window_size
            );
            return Signal::NotEnoughData;
        };

        // last > mean iff sum(last - p) > 0; exact zero for a flat window
        let last = window[window.len() - 1].price;
        let deviation: f64 = window.iter().map(|d| last - d.price).sum();

        let signal = if deviation > 0.0 {
            Signal::Buy
        } else if deviation < 0.0 {
            Signal::Sell
        } else {
            Signal::Hold
        };
        debug!("{}: {} (deviation {})", self.name, signal, deviation);
        signal
    }
}
