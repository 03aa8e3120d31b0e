//! Binary I/O for simulated run sequences.
//!
//! Format: 32-byte header + u32[N] in native layout. Loading uses
//! zero-copy mmap so a large inning pool can be resampled or reaggregated
//! without a parse step.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use memmap2::Mmap;

use crate::constants::{RUNS_FILE_MAGIC, RUNS_FILE_VERSION};
use crate::errors::StorageError;

/// Binary file header (32 bytes).
#[repr(C)]
#[derive(Clone, Copy)]
pub struct RunsHeader {
    pub magic: u32,         // 4
    pub version: u32,       // 4
    pub num_runs: u32,      // 4
    pub _pad: u32,          // 4
    pub seed: u64,          // 8
    pub _reserved: [u8; 8], // 8
}

const _: () = assert!(std::mem::size_of::<RunsHeader>() == 32);

/// Save a run sequence to a binary file.
pub fn save_runs(runs: &[u32], seed: u64, path: &str) -> Result<(), StorageError> {
    if let Some(parent) = Path::new(path).parent() {
        let _ = fs::create_dir_all(parent);
    }

    let mut f = File::create(path)?;

    let header = RunsHeader {
        magic: RUNS_FILE_MAGIC,
        version: RUNS_FILE_VERSION,
        num_runs: runs.len() as u32,
        _pad: 0,
        seed,
        _reserved: [0u8; 8],
    };

    let header_bytes = unsafe {
        std::slice::from_raw_parts(
            &header as *const RunsHeader as *const u8,
            std::mem::size_of::<RunsHeader>(),
        )
    };
    f.write_all(header_bytes)?;

    let data_bytes = unsafe {
        std::slice::from_raw_parts(runs.as_ptr() as *const u8, std::mem::size_of_val(runs))
    };
    f.write_all(data_bytes)?;
    Ok(())
}

/// Loaded run sequence: owns the mmap, exposes header + runs.
pub struct LoadedRuns {
    _mmap: Mmap,
    header: RunsHeader,
    runs_ptr: *const u32,
    runs_len: usize,
}

// Safety: the mmap is immutable and the u32 slice is derived from it.
unsafe impl Send for LoadedRuns {}
unsafe impl Sync for LoadedRuns {}

impl LoadedRuns {
    pub fn header(&self) -> &RunsHeader {
        &self.header
    }

    pub fn runs(&self) -> &[u32] {
        unsafe { std::slice::from_raw_parts(self.runs_ptr, self.runs_len) }
    }
}

/// Load a run sequence via mmap, validating the header.
pub fn load_runs(path: &str) -> Result<LoadedRuns, StorageError> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len() as usize;

    let header_size = std::mem::size_of::<RunsHeader>();
    if file_size < header_size {
        return Err(StorageError::Truncated {
            len: file_size,
            expected: header_size,
        });
    }

    let mmap = unsafe { Mmap::map(&file)? };

    let header = unsafe { *(mmap.as_ptr() as *const RunsHeader) };
    if header.magic != RUNS_FILE_MAGIC {
        return Err(StorageError::BadMagic {
            found: header.magic,
            expected: RUNS_FILE_MAGIC,
        });
    }
    if header.version != RUNS_FILE_VERSION {
        return Err(StorageError::BadVersion(header.version));
    }

    let expected = header_size + header.num_runs as usize * std::mem::size_of::<u32>();
    if file_size < expected {
        return Err(StorageError::Truncated {
            len: file_size,
            expected,
        });
    }

    let runs_ptr = unsafe { mmap.as_ptr().add(header_size) as *const u32 };

    Ok(LoadedRuns {
        _mmap: mmap,
        header,
        runs_ptr,
        runs_len: header.num_runs as usize,
    })
}
