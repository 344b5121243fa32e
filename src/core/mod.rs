pub mod clock;
pub mod frame_stats;

pub use clock::Clock;
pub use frame_stats::FrameStats;
