// ABOUTME: Plan pricing: volume to monthly price, per-message rate and API rate limit
// Also owns the slider that feeds the first wizard step

use serde::Serialize;

use crate::config::PricingConfig;
use crate::error::WizardError;

/// A priced plan for one monthly message volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    /// Monthly messages
    pub volume: u64,
    /// Whole dollars per month, floor(volume * rate)
    pub price: u64,
    /// price / volume, in dollars
    pub per_message_rate: f64,
    /// API requests per minute granted by this plan
    pub rate_limit_per_minute: u64,
}

impl Quote {
    fn new(volume: u64, price: u64, rate_limit_per_minute: u64) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let per_message_rate = if volume == 0 {
            0.0
        } else {
            price as f64 / volume as f64
        };
        Self {
            volume,
            price,
            per_message_rate,
            rate_limit_per_minute,
        }
    }

    /// "$29/month"
    pub fn price_label(&self) -> String {
        format!("${}/month", group_thousands(self.price))
    }

    /// "$0.029 per message"
    pub fn rate_label(&self) -> String {
        format!("${:.3} per message", self.per_message_rate)
    }

    /// "Monthly Messages: 1,000"
    pub fn volume_label(&self) -> String {
        format!("Monthly Messages: {}", group_thousands(self.volume))
    }
}

/// Maps a monthly message volume to a [`Quote`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingCalculator {
    config: PricingConfig,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl PricingCalculator {
    pub const fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub const fn min_volume(&self) -> u64 {
        self.config.min_volume
    }

    pub const fn max_volume(&self) -> u64 {
        self.config.max_volume
    }

    pub const fn step(&self) -> u64 {
        self.config.step
    }

    pub const fn contains(&self, volume: u64) -> bool {
        volume >= self.config.min_volume && volume <= self.config.max_volume
    }

    /// Price a volume inside the supported range
    pub fn quote(&self, volume: u64) -> Result<Quote, WizardError> {
        if !self.contains(volume) {
            return Err(WizardError::InvalidInput { volume });
        }
        self.price(volume).ok_or(WizardError::InvalidInput { volume })
    }

    /// Clamp to the range and snap down onto the step grid before pricing.
    /// Saturates at `u64::MAX` when the configured rates overflow.
    pub fn quote_clamped(&self, volume: u64) -> Quote {
        let volume = self.snap(volume);
        self.price(volume).unwrap_or_else(|| {
            let price = per_thousand(volume, self.config.price_per_thousand);
            let rate_limit = self.rate_limit_per_minute(volume);
            Quote::new(volume, price.unwrap_or(u64::MAX), rate_limit.unwrap_or(u64::MAX))
        })
    }

    /// Nearest representable slider position at or below `volume`
    pub fn snap(&self, volume: u64) -> u64 {
        let min = self.config.min_volume;
        let clamped = volume.clamp(min, self.config.max_volume);
        let step = self.config.step.max(1);
        min + (clamped - min) / step * step
    }

    /// Requests per minute: base rate scaled by thousands of monthly messages
    pub fn rate_limit_per_minute(&self, volume: u64) -> Option<u64> {
        per_thousand(volume, self.config.base_rate_per_minute)
    }

    fn price(&self, volume: u64) -> Option<Quote> {
        // Integer math keeps floor(volume * 0.029) exact
        let price = per_thousand(volume, self.config.price_per_thousand)?;
        Some(Quote::new(volume, price, self.rate_limit_per_minute(volume)?))
    }
}

/// floor(volume * rate / 1000), or None when it does not fit in a u64
fn per_thousand(volume: u64, rate: u64) -> Option<u64> {
    u64::try_from(u128::from(volume) * u128::from(rate) / 1_000).ok()
}

/// Slider input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderEvent {
    Increase,
    Decrease,
    Min,
    Max,
    Set(u64),
}

/// Slider position plus whether the user has touched it yet.
/// A plan only exists once the slider has been moved.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingSlider {
    calculator: PricingCalculator,
    volume: u64,
    touched: bool,
}

impl PricingSlider {
    pub const fn new(calculator: PricingCalculator) -> Self {
        let volume = calculator.min_volume();
        Self {
            calculator,
            volume,
            touched: false,
        }
    }

    pub fn apply(&mut self, event: SliderEvent) -> Quote {
        let step = self.calculator.step();
        let target = match event {
            SliderEvent::Increase => self.volume.saturating_add(step),
            SliderEvent::Decrease => self.volume.saturating_sub(step),
            SliderEvent::Min => self.calculator.min_volume(),
            SliderEvent::Max => self.calculator.max_volume(),
            SliderEvent::Set(volume) => volume,
        };
        self.volume = self.calculator.snap(target);
        self.touched = true;
        self.quote()
    }

    /// Quote for the current position, shown even before the first move
    pub fn quote(&self) -> Quote {
        self.calculator.quote_clamped(self.volume)
    }

    /// The selected plan, present only after user interaction
    pub fn plan(&self) -> Option<Quote> {
        self.touched.then(|| self.quote())
    }

    pub const fn volume(&self) -> u64 {
        self.volume
    }

    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Position along the track in [0.0, 1.0]
    #[allow(clippy::cast_precision_loss)]
    pub fn ratio(&self) -> f64 {
        let min = self.calculator.min_volume();
        let span = self.calculator.max_volume().saturating_sub(min);
        if span == 0 {
            return 1.0;
        }
        (self.volume - min) as f64 / span as f64
    }
}

/// 11400 -> "11,400"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
