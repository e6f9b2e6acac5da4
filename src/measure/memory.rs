// src/measure/memory.rs

//! Sample the resident memory size of this process.
//!
//! The only meaningful use of a sample is the difference between two samples
//! taken before and after some work.

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx, defñ};

#[allow(unused_imports)]
use crate::debug::printers::de_wrn;

/// A source of resident memory samples.
pub trait MemoryProbe {
    /// Current resident memory size of this process in bytes.
    fn resident_bytes(&self) -> u64;

    /// Bytes gained since `before`. A shrinking process returns `0`.
    fn delta_since(&self, before: u64) -> u64 {
        self.resident_bytes().saturating_sub(before)
    }
}

/// The [`MemoryProbe`] for the compiled target platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessMemoryProbe;

cfg_if::cfg_if! {
    if #[cfg(any(target_os = "linux", target_os = "android"))] {
        impl MemoryProbe for ProcessMemoryProbe {
            /// Resident pages from procfs `statm` times the page size.
            fn resident_bytes(&self) -> u64 {
                let process = match ::procfs::process::Process::myself() {
                    Ok(val) => val,
                    Err(_err) => {
                        de_wrn!("Process::myself() failed {}", _err);
                        return 0;
                    }
                };
                match process.statm() {
                    Ok(statm) => statm.resident * ::procfs::page_size(),
                    Err(_err) => {
                        de_wrn!("statm() failed {}", _err);
                        0
                    }
                }
            }
        }
    } else if #[cfg(target_os = "macos")] {
        impl MemoryProbe for ProcessMemoryProbe {
            /// Current resident size from `proc_pidinfo(PROC_PIDTASKINFO)`.
            fn resident_bytes(&self) -> u64 {
                let mut info: ::libc::proc_taskinfo = unsafe { std::mem::zeroed() };
                let size = std::mem::size_of::<::libc::proc_taskinfo>() as ::libc::c_int;
                let ret: ::libc::c_int = unsafe {
                    ::libc::proc_pidinfo(
                        ::libc::getpid(),
                        ::libc::PROC_PIDTASKINFO,
                        0,
                        &mut info as *mut ::libc::proc_taskinfo as *mut ::libc::c_void,
                        size,
                    )
                };
                if ret != size {
                    de_wrn!("proc_pidinfo returned {}, expected {}", ret, size);
                    return 0;
                }

                info.pti_resident_size
            }
        }
    } else if #[cfg(unix)] {
        impl MemoryProbe for ProcessMemoryProbe {
            /// Peak resident set size from `getrusage`. There is no portable
            /// current-resident-size query on the remaining unix platforms;
            /// the peak only grows so the before/after difference remains
            /// meaningful.
            fn resident_bytes(&self) -> u64 {
                use ::nix::sys::resource::{getrusage, UsageWho};

                let usage = match getrusage(UsageWho::RUSAGE_SELF) {
                    Ok(val) => val,
                    Err(_err) => {
                        de_wrn!("getrusage failed {}", _err);
                        return 0;
                    }
                };
                // the BSDs report kibibytes
                usage.max_rss().max(0) as u64 * 1024
            }
        }
    } else {
        impl MemoryProbe for ProcessMemoryProbe {
            /// Unsupported platform; always `0`.
            fn resident_bytes(&self) -> u64 {
                0
            }
        }
    }
}
