pub mod id;
pub mod layout;
pub mod options;
pub mod types;

pub use id::{ChartId, IdProvider, ProcessIdProvider};
pub use layout::ChartLayout;
pub use options::{
    AnimationOptions, ChartClasses, ChartConfig, ChartOptions, MergeOptions, Padding,
    PartialAnimationOptions, PartialChartClasses, PartialChartOptions, PartialPadding,
    merge_options,
};
pub use types::{Bounds, Translation, ViewBox};
