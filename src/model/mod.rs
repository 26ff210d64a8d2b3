pub mod histogram;
pub mod normal;
pub mod ranking;
pub mod stats;
