mod test_vm;
mod time_fmt;

pub use test_vm::{TestIntent, TestVm};
pub use time_fmt::format_completed_at;
