pub mod bars;
pub mod binner;
pub mod sparkline;

pub use bars::{bucket, render, render_indices};
pub use binner::downsample;
pub use sparkline::{Sparkline, SparklineBuilder};
