//! RIFF style chunk containers
//!
//! RIFF (the format family behind WAV and AVI) lays a file out as a tree
//! of tagged, length prefixed chunks. Unless otherwise noted everything
//! is stored in Little Endian format.
//!
//! | Type    | Name      | Description |
//! | ------: | --------- | ----------- |
//! | [u8; 4] | id        | The chunk tag, usually ASCII such as `fmt ` or `data` |
//! | u32     | size      | Byte length of everything after this field, excluding the pad byte |
//! | [u8; 4] | form type | Only present for container ids (`RIFF`, `LIST`), counted in `size` |
//! | [u8; N] | content   | Raw payload, or a sequence of nested chunks for container ids |
//! | u8      | pad       | One zero byte, only present when `size` is odd |
//!
//! Every chunk ends on an even offset. The pad byte that enforces this
//! occupies stream space but is never part of the recorded size, which
//! is why parent sizes are computed from offset deltas rather than by
//! summing child sizes.
//!
//! The writer in [`writer`] emits this structure incrementally: each
//! `descend` writes a header with a placeholder size, and the matching
//! `ascend` seeks back to patch the real size in once the content length
//! is known. Reading RIFF back is out of scope here, any conformant
//! reader can traverse the output.

pub mod tag;
pub mod writer;

/// Fixed byte length of the id + size chunk header.
pub const HEADER_LEN: u64 = 8;
