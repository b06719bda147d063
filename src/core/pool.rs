//! Pooled argument storage for commands.
//!
//! Every command under construction owns one [`CommandSlice`] taken from a
//! [`CommandPool`]. The slice is sealed by the terminal step, shared with the
//! transport through `Completed`/`Cacheable`, and handed back to the pool on
//! release so the next command can reuse its argument vector.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use crossbeam_queue::ArrayQueue;
use once_cell::sync::Lazy;

use crate::core::error::{misuse, Error};

/// Default number of idle slices kept by a pool.
const DEFAULT_MAX_BUFFERS: usize = 1024;

/// Default capacity of a freshly allocated argument vector.
const DEFAULT_ARG_CAPACITY: usize = 8;

/// Argument vectors that grew beyond this are not recycled.
const DEFAULT_MAX_RETAINED_CAPACITY: usize = 256;

static GLOBAL: Lazy<CommandPool> = Lazy::new(|| CommandPool::new(PoolConfig::default()));

/// Configuration for a [`CommandPool`].
///
/// # Example
///
/// ```
/// use muxis_cmds::{CommandPool, PoolConfig};
///
/// let pool = CommandPool::new(
///     PoolConfig::new()
///         .max_buffers(64)
///         .arg_capacity(4)
///         .max_retained_capacity(32),
/// );
/// assert_eq!(pool.config().max_buffers, 64);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct PoolConfig {
    /// Maximum number of idle slices kept for reuse
    pub max_buffers: usize,
    /// Initial capacity of a newly allocated argument vector
    pub arg_capacity: usize,
    /// Slices whose argument vector grew beyond this are dropped on release
    pub max_retained_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_buffers: DEFAULT_MAX_BUFFERS,
            arg_capacity: DEFAULT_ARG_CAPACITY,
            max_retained_capacity: DEFAULT_MAX_RETAINED_CAPACITY,
        }
    }
}

impl PoolConfig {
    /// Creates a configuration with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of idle slices kept for reuse (at least 1).
    #[inline]
    pub fn max_buffers(mut self, max: usize) -> Self {
        self.max_buffers = max.max(1);
        self
    }

    /// Sets the initial argument capacity of new slices (at least 2).
    #[inline]
    pub fn arg_capacity(mut self, capacity: usize) -> Self {
        self.arg_capacity = capacity.max(2);
        self
    }

    /// Sets the largest argument capacity a slice may have and still be recycled.
    #[inline]
    pub fn max_retained_capacity(mut self, capacity: usize) -> Self {
        self.max_retained_capacity = capacity;
        self
    }
}

/// Counters describing pool effectiveness.
#[derive(Debug, Default)]
pub struct PoolStats {
    hits: AtomicUsize,
    misses: AtomicUsize,
    returns: AtomicUsize,
    drops: AtomicUsize,
}

impl PoolStats {
    /// Number of acquisitions served from the free list.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of acquisitions that had to allocate.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of slices returned to the free list.
    pub fn returns(&self) -> usize {
        self.returns.load(Ordering::Relaxed)
    }

    /// Number of released slices that were not kept.
    pub fn drops(&self) -> usize {
        self.drops.load(Ordering::Relaxed)
    }

    /// Hit rate as a percentage.
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 {
            100.0
        } else {
            hits / total * 100.0
        }
    }
}

#[derive(Debug)]
struct SliceStorage {
    args: Vec<Bytes>,
    sealed: Option<usize>,
    refs: AtomicU32,
    released: AtomicBool,
}

impl SliceStorage {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            args: Vec::with_capacity(capacity),
            sealed: None,
            refs: AtomicU32::new(0),
            released: AtomicBool::new(false),
        }
    }

    fn reset(&mut self) {
        self.args.clear();
        self.sealed = None;
        *self.refs.get_mut() = 0;
        *self.released.get_mut() = false;
    }
}

#[derive(Debug)]
struct PoolInner {
    free: ArrayQueue<Arc<SliceStorage>>,
    config: PoolConfig,
    stats: PoolStats,
}

/// A lock-free pool of command argument vectors.
///
/// Cloning is cheap and yields a handle to the same pool. Acquire and release
/// may be called from any number of threads; no lock is ever held while
/// caller code runs.
#[derive(Debug, Clone)]
pub struct CommandPool {
    inner: Arc<PoolInner>,
}

impl CommandPool {
    /// Creates an independent pool.
    pub fn new(config: PoolConfig) -> Self {
        Self {
            inner: Arc::new(PoolInner {
                free: ArrayQueue::new(config.max_buffers.max(1)),
                config,
                stats: PoolStats::default(),
            }),
        }
    }

    /// The process-wide pool used by `Builder::default()`.
    pub fn global() -> &'static CommandPool {
        &GLOBAL
    }

    /// Takes an empty, unsealed slice from the pool, allocating one if the
    /// free list is empty.
    pub fn acquire(&self) -> CommandSlice {
        let storage = match self.inner.free.pop() {
            Some(storage) => {
                self.inner.stats.hits.fetch_add(1, Ordering::Relaxed);
                storage
            }
            None => {
                self.inner.stats.misses.fetch_add(1, Ordering::Relaxed);
                let capacity = self.inner.config.arg_capacity.max(2);
                tracing::trace!(capacity, "allocating command slice");
                Arc::new(SliceStorage::with_capacity(capacity))
            }
        };

        CommandSlice {
            storage,
            pool: self.clone(),
        }
    }

    /// Returns the pool configuration.
    pub fn config(&self) -> &PoolConfig {
        &self.inner.config
    }

    /// Returns the pool statistics.
    pub fn stats(&self) -> &PoolStats {
        &self.inner.stats
    }

    /// Number of idle slices currently held.
    pub fn idle(&self) -> usize {
        self.inner.free.len()
    }

    fn recycle(&self, mut storage: Arc<SliceStorage>) {
        let stats = &self.inner.stats;

        let Some(slice) = Arc::get_mut(&mut storage) else {
            tracing::debug!("command slice still shared on release, not recycled");
            stats.drops.fetch_add(1, Ordering::Relaxed);
            return;
        };

        if slice.args.capacity() > self.inner.config.max_retained_capacity {
            tracing::debug!(
                capacity = slice.args.capacity(),
                "command slice grew past retention cap, not recycled"
            );
            stats.drops.fetch_add(1, Ordering::Relaxed);
            return;
        }

        slice.reset();
        match self.inner.free.push(storage) {
            Ok(()) => {
                stats.returns.fetch_add(1, Ordering::Relaxed);
                tracing::trace!("command slice recycled");
            }
            Err(_) => {
                stats.drops.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("command pool full, dropping slice");
            }
        }
    }
}

/// The argument vector of one command.
///
/// Append-only until sealed; immutable afterwards. A sealed slice may be
/// shared by several terminal handles when the transport fans a command out,
/// in which case the transport sets a reference count with
/// [`set_refs`](CommandSlice::set_refs) and each recipient calls
/// [`release`](CommandSlice::release) once.
#[derive(Debug)]
pub struct CommandSlice {
    storage: Arc<SliceStorage>,
    pool: CommandPool,
}

impl CommandSlice {
    #[track_caller]
    fn storage_mut(&mut self) -> &mut SliceStorage {
        if self.storage.sealed.is_some() {
            misuse(Error::AppendAfterBuild)
        }
        match Arc::get_mut(&mut self.storage) {
            Some(storage) => storage,
            None => misuse(Error::AppendAfterBuild),
        }
    }

    /// Appends one argument.
    ///
    /// # Panics
    ///
    /// Panics if the slice is already sealed.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, arg: impl Into<Bytes>) {
        self.storage_mut().args.push(arg.into());
    }

    /// Appends every argument in order.
    ///
    /// # Panics
    ///
    /// Panics if the slice is already sealed.
    #[track_caller]
    pub fn extend<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: Into<Bytes>,
    {
        self.storage_mut()
            .args
            .extend(args.into_iter().map(Into::into));
    }

    /// Seals the slice at its current length.
    ///
    /// # Panics
    ///
    /// Panics with "a command should not be built twice" if already sealed.
    #[track_caller]
    pub fn seal(&mut self) {
        if self.storage.sealed.is_some() {
            misuse(Error::BuiltTwice)
        }
        let storage = self.storage_mut();
        storage.sealed = Some(storage.args.len());
    }

    /// Asserts the slice was sealed and not modified since. Called by the
    /// transport right before encoding.
    ///
    /// # Panics
    ///
    /// Panics with "a command should be finished by calling Build() or
    /// Cache()" otherwise.
    #[track_caller]
    pub fn verify(&self) {
        if self.storage.sealed != Some(self.storage.args.len()) {
            misuse(Error::Unfinished)
        }
    }

    /// Returns `true` once [`seal`](CommandSlice::seal) has been called.
    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.storage.sealed.is_some()
    }

    /// The arguments appended so far.
    #[inline]
    pub fn args(&self) -> &[Bytes] {
        &self.storage.args
    }

    /// Number of arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.args.len()
    }

    /// Returns `true` if no argument has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.args.is_empty()
    }

    /// Sets how many recipients must release the slice before it is recycled.
    /// Must be called before the command escapes to a concurrent consumer.
    #[inline]
    pub fn set_refs(&self, refs: u32) {
        self.storage.refs.store(refs, Ordering::Release);
    }

    /// The outstanding reference count.
    #[inline]
    pub fn refs(&self) -> u32 {
        self.storage.refs.load(Ordering::Acquire)
    }

    /// Shares a sealed slice with another terminal handle.
    #[track_caller]
    pub(crate) fn share(&self) -> Self {
        if !self.is_sealed() {
            misuse(Error::Unfinished)
        }
        Self {
            storage: Arc::clone(&self.storage),
            pool: self.pool.clone(),
        }
    }

    /// Releases this handle. With a zero reference count the slice is
    /// recycled immediately; otherwise the count is decremented and the
    /// slice is recycled by the release that brings it to zero.
    ///
    /// # Panics
    ///
    /// Panics with "a command should not be released twice" if the slice
    /// was already recycled through another handle.
    #[track_caller]
    pub fn release(self) {
        let refs = &self.storage.refs;
        let mut current = refs.load(Ordering::Acquire);
        while current != 0 {
            match refs.compare_exchange_weak(
                current,
                current - 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(1) => break,
                Ok(_) => return,
                Err(actual) => current = actual,
            }
        }
        self.recycle();
    }

    /// Recycles the slice regardless of the reference count. Used when the
    /// transport knows no fan-out happened.
    ///
    /// # Panics
    ///
    /// Panics with "a command should not be released twice" if the slice
    /// was already recycled through another handle.
    #[track_caller]
    pub fn release_force(self) {
        self.recycle();
    }

    #[track_caller]
    fn recycle(self) {
        if self.storage.released.swap(true, Ordering::AcqRel) {
            misuse(Error::ReleasedTwice)
        }
        let CommandSlice { storage, pool } = self;
        pool.recycle(storage);
    }
}
