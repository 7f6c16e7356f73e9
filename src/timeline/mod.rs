//! Match timeline: clock parsing, period segmentation and time normalization.
//!
//! - `clock`: clock text to seconds, seconds to `MM:SS`
//! - `period`: sentinel scan and per-event period tags
//! - `normalize`: real and effective time per event, half durations

pub mod clock;
pub mod normalize;
pub mod period;


pub use clock::{clock_difference, format_mmss, format_optional_mmss, parse_clock};
pub use normalize::{normalize, period_durations, EventTiming, MatchTimeline, PeriodDurations};
pub use period::{Period, PeriodSegments, ReportPeriod};
