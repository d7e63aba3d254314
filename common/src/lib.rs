pub mod round_stats;
