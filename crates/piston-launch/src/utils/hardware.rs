use once_cell::sync::Lazy;
use std::sync::Mutex;
use sysinfo::System;

static SYSTEM: Lazy<Mutex<System>> = Lazy::new(|| Mutex::new(System::new()));

/// Returns the total physical memory in Megabytes
pub fn get_total_memory_mb() -> u64 {
    let mut sys = match SYSTEM.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    sys.refresh_memory();
    sys.total_memory() / 1024 / 1024
}

/// Default heap bounds `(min, max)` in MB for a host with `total_mb` of RAM.
///
/// Half of physical memory, clamped to 1-4 GiB; the initial heap never
/// exceeds the maximum.
pub fn recommended_heap_mb(total_mb: u64) -> (u32, u32) {
    let max = (total_mb / 2).clamp(1024, 4096) as u32;
    (max.min(512), max)
}

/// Host heap defaults, see [`recommended_heap_mb`]
pub fn host_heap_defaults() -> (u32, u32) {
    recommended_heap_mb(get_total_memory_mb())
}

/// Bare host OS version used for `os.version` rule matching, in the form the
/// JVM reports it (`14.1` on macOS, `10.0` on Windows, the kernel release on
/// Linux)
pub fn host_os_version() -> String {
    let version = if cfg!(any(target_os = "linux", target_os = "android")) {
        System::kernel_version()
    } else {
        System::os_version()
    };
    version.unwrap_or_default()
}
