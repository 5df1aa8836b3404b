// File: crates/gantt-core/src/lib.rs
// Summary: Core library entry point; exports the Gantt planning pipeline.

pub mod annotation;
pub mod axis;
pub mod error;
pub mod grid;
pub mod layout;
pub mod month;
pub mod normalize;
pub mod plan;
pub mod timeline;
pub mod types;

pub use annotation::{normalize_annotations, Annotation, AnnotationSet};
pub use axis::{plan_axis, plan_span, AxisOptions, AxisPlan, MonthBand, MonthTick};
pub use error::{Column, GanttError, GanttResult};
pub use layout::{AxisLabelMode, AxisPosition, GanttConfig, JoinPolicy, LayoutOptions};
pub use month::YearMonth;
pub use normalize::{normalize, TimeMode};
pub use plan::GanttPlan;
pub use timeline::{aggregate, derive_work_package, Timeline};
pub use types::{DateSpan, EntryKind, RawRow, SpotRow, TimelineEntry};
