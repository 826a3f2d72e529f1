pub mod pool;

// Re-export for easier access
pub use pool::LpPoolRecord;
