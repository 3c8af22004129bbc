//! Domain value objects: bars, price series, returns, fundamentals.

pub mod bar;
pub mod fundamentals;
pub mod returns;

pub use bar::{PriceBar, PriceSeries};
pub use fundamentals::{FundamentalSnapshot, MetricKey};
pub use returns::ReturnSeries;
