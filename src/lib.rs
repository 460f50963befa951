//! # vmcache
//!
//! Core primitives for a volatile-memory value cache:
//!
//! - [`Critnib`]: a 4-bit-stride critbit-style radix tree mapping byte-string
//!   keys to opaque value handles. The cache's primary lookup structure.
//! - [`Heap`]: a coarse-grained, thread-safe linear allocator handing out
//!   aligned byte ranges from a single pre-mapped region. Backs the cache's
//!   value storage.
//! - [`CritnibIndex`]: a mutex-serialized wrapper around [`Critnib`] for use
//!   as a shared cache index.
//!
//! The two primitives are independent. The expected data flow is: the cache
//! asks the heap for a byte range to hold a value, stores the value there,
//! then publishes the entry by inserting its handle into the critnib under
//! the key. Eviction reverses the sequence.
//!
//! ## Key convention
//!
//! The critnib stores arbitrary byte sequences verbatim, but fails inserts
//! where one key is a prefix of another. Callers sidestep this by passing
//! length-prefixed keys (a fixed-width size field followed by the key bytes),
//! which guarantees no valid key is a prefix of another.

#![deny(unsafe_op_in_unsafe_fn)]

pub mod critnib;
pub mod heap;
pub mod index;

mod tracing_helpers;

pub use critnib::{Critnib, SetError};
pub use heap::{Heap, HeapEntry};
pub use index::CritnibIndex;
