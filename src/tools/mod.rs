mod cpu_sampler;
mod fs_tools;

pub use cpu_sampler::{CpuSampler, CpuSource};
pub use fs_tools::{entry_size, list_entries, remove_entry};
