pub mod stat_card;
pub mod status_badge;
