pub mod scheduler;
pub mod sweep;

pub use scheduler::{Scheduler, SchedulerHandle, SchedulerState};
pub use sweep::{run_sweep, SweepError, SweepSummary};
