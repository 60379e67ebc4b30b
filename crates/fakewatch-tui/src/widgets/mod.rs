//! Custom widget components

mod featured;
mod header;
mod history;
mod notices;
mod score_chart;
mod status_bar;

pub use featured::FeaturedCard;
pub use header::MainHeader;
pub use history::HistoryList;
pub use notices::NoticeBanner;
pub use score_chart::ScoreChart;
pub use status_bar::StatusBar;
