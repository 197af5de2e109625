//! # corrlab-tui
//!
//! Interactive correlation dashboard using ratatui with Elm architecture.
//! Sliders drive the notebook; every recomputed cell is redrawn and logged.

pub mod bridge;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod report;
pub mod scatter;
pub mod sliders;
pub mod sparkline;
pub mod styles;
pub mod table;

pub use bridge::TuiBridgeObserver;
pub use logs::LogScrollState;
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use sparkline::HistoryBuffer;
