//! Widgets for the cih TUI.
//!
//! Reusable pieces the chrome and the pages are drawn from.

mod activity_feed;
mod button;
mod feature_card;
mod location_bar;
mod stat_card;

pub use activity_feed::{ActivityEvent, ActivityFeedWidget};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use feature_card::FeatureCard;
pub use location_bar::LocationBarWidget;
pub use stat_card::{StatCard, Trend};
