//! # Register window
//!
//! One 4 KiB page of 32-bit registers, either mapped from `/dev/mem` or
//! allocated on the heap as a stand-in for the real controller. Every access
//! goes through a byte offset that is checked against the window.

use core::ptr::NonNull;
use std::fs::OpenOptions;
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::AsRawFd;

use log::debug;
use volatile_register::RW;

use crate::error::GpioError;

/// Physical address of the GPIO block on the Pi 2 / Pi 3.
pub const GPIO_BASE: u64 = 0x3F20_0000;
pub const BLOCK_SIZE: usize = 4 * 1024;
const WORDS: usize = BLOCK_SIZE / 4;

enum Backing {
    DevMem,
    Heap,
}

/// Exclusive owner of the GPIO register page.
///
/// Not `Clone`, and the raw pointer keeps it `!Send + !Sync`, so there is
/// exactly one handle to the hardware for the life of the process.
pub struct RegisterBlock {
    base: NonNull<RW<u32>>,
    backing: Backing,
}

impl RegisterBlock {
    /// Map the register page at `phys_base` through `/dev/mem`.
    pub fn map(phys_base: u64) -> Result<Self, GpioError> {
        let mem = OpenOptions::new()
            .read(true)
            .write(true)
            .custom_flags(libc::O_SYNC)
            .open("/dev/mem")
            .map_err(GpioError::Open)?;

        let ptr = unsafe {
            libc::mmap(
                core::ptr::null_mut(),
                BLOCK_SIZE,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                mem.as_raw_fd(),
                phys_base as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(GpioError::Map(io::Error::last_os_error()));
        }

        // the mapping stays valid after `mem` is closed
        let base = NonNull::new(ptr.cast::<RW<u32>>())
            .ok_or_else(|| GpioError::Map(io::Error::other("mmap returned null")))?;

        debug!("mapped GPIO registers at {:#010x} -> {:p}", phys_base, base);

        Ok(Self {
            base,
            backing: Backing::DevMem,
        })
    }

    /// A zeroed page on the heap with the same layout as the controller.
    ///
    /// Nothing responds to writes: set/clear words simply hold the last
    /// value written, and level words read back whatever was [`poke`]d.
    ///
    /// [`poke`]: RegisterBlock::poke
    pub fn anonymous() -> Self {
        let page: &'static mut [u32; WORDS] = Box::leak(Box::new([0u32; WORDS]));

        Self {
            base: NonNull::from(page).cast::<RW<u32>>(),
            backing: Backing::Heap,
        }
    }

    fn cell(&self, offset: usize) -> Result<&RW<u32>, GpioError> {
        if offset % 4 != 0 || offset >= BLOCK_SIZE {
            return Err(GpioError::OffsetOutOfRange(offset));
        }

        // offset checked above, the page is valid for as long as `self` is
        Ok(unsafe { &*self.base.as_ptr().add(offset / 4) })
    }

    #[inline]
    pub fn read(&self, offset: usize) -> Result<u32, GpioError> {
        Ok(self.cell(offset)?.read())
    }

    #[inline]
    pub fn write(&mut self, offset: usize, value: u32) -> Result<(), GpioError> {
        let cell = self.cell(offset)?;
        unsafe { cell.write(value) };
        Ok(())
    }

    /// Volatile read-modify-write of one word. Not atomic.
    #[inline]
    pub fn modify<F>(&mut self, offset: usize, f: F) -> Result<(), GpioError>
    where
        F: FnOnce(u32) -> u32,
    {
        let cell = self.cell(offset)?;
        unsafe { cell.modify(f) };
        Ok(())
    }

    /// Inspect a word without going through a pin. Meant for the heap-backed
    /// window; on real hardware reading the write-only registers returns 0.
    pub fn peek(&self, offset: usize) -> Result<u32, GpioError> {
        self.read(offset)
    }

    /// Force a word, e.g. to drive a simulated input level.
    pub fn poke(&mut self, offset: usize, value: u32) -> Result<(), GpioError> {
        self.write(offset, value)
    }

    pub fn is_hardware(&self) -> bool {
        matches!(self.backing, Backing::DevMem)
    }
}

impl Drop for RegisterBlock {
    fn drop(&mut self) {
        match self.backing {
            Backing::DevMem => unsafe {
                libc::munmap(self.base.as_ptr().cast(), BLOCK_SIZE);
            },
            Backing::Heap => unsafe {
                drop(Box::from_raw(self.base.as_ptr().cast::<[u32; WORDS]>()));
            },
        }
    }
}

/// Whether we are running as root. Mapping `/dev/mem` fails otherwise, but
/// the caller decides whether that is worth more than a warning.
pub fn is_privileged() -> bool {
    unsafe { libc::geteuid() == 0 }
}
