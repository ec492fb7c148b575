//! Identity allocation and live-instance accounting.
//!
//! One registry belongs to one [`CartonFactory`](crate::CartonFactory).
//! Counters are atomics so cartons can move between threads, but no
//! ordering beyond each counter's own is promised.
//!
//! The id counter never wraps. `u64::MAX` is never issued, since the counter
//! would have nowhere to go after it.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use carton_shared::errors::{CartonError, CartonResult};

use crate::types::CartonId;

#[derive(Debug)]
pub struct Registry {
    /// Next id to hand out. Only ever grows.
    next_id: AtomicU64,
    /// Initialized cartons currently alive.
    live: AtomicUsize,
}

impl Registry {
    pub fn new(first_id: CartonId) -> Self {
        Self {
            next_id: AtomicU64::new(first_id.as_u64()),
            live: AtomicUsize::new(0),
        }
    }

    /// Hand out the next unused id. Fails once the counter is exhausted;
    /// the counter is left untouched then.
    pub fn allocate(&self) -> CartonResult<CartonId> {
        self.next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| {
                next.checked_add(1)
            })
            .map(CartonId::from)
            .map_err(|_| CartonError::IdsExhausted)
    }

    /// Mark `id` as used so later allocations start after it.
    pub fn reserve(&self, id: CartonId) -> CartonResult<()> {
        let next = id.checked_next().ok_or(CartonError::IdsExhausted)?;
        self.next_id.fetch_max(next.as_u64(), Ordering::Relaxed);
        Ok(())
    }

    /// Id the next [`allocate`](Self::allocate) call would return, unless
    /// the counter is exhausted.
    pub fn peek_next(&self) -> CartonId {
        CartonId::from(self.next_id.load(Ordering::Relaxed))
    }

    pub(crate) fn acquire_instance(&self) {
        self.live.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn release_instance(&self) {
        self.live.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn live_instances(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_allocate_is_contiguous() {
        let registry = Registry::new(CartonId::from(5));
        let ids: Vec<u64> = (0..4)
            .map(|_| registry.allocate().unwrap().as_u64())
            .collect();
        assert_eq!(ids, vec![5, 6, 7, 8]);
        assert_eq!(registry.peek_next(), CartonId::from(9));
    }

    #[test]
    fn test_reserve_skips_past_id() {
        let registry = Registry::new(CartonId::from(0));
        registry.reserve(CartonId::from(10)).unwrap();
        assert_eq!(registry.allocate(), Ok(CartonId::from(11)));
    }

    #[test]
    fn test_reserve_never_moves_backwards() {
        let registry = Registry::new(CartonId::from(20));
        registry.reserve(CartonId::from(3)).unwrap();
        assert_eq!(registry.allocate(), Ok(CartonId::from(20)));
    }

    #[test]
    fn test_allocate_stops_at_max() {
        let registry = Registry::new(CartonId::from(u64::MAX - 2));
        assert_eq!(registry.allocate(), Ok(CartonId::from(u64::MAX - 2)));
        assert_eq!(registry.allocate(), Ok(CartonId::from(u64::MAX - 1)));
        assert_eq!(registry.allocate(), Err(CartonError::IdsExhausted));
        assert_eq!(registry.allocate(), Err(CartonError::IdsExhausted));
        assert_eq!(registry.peek_next(), CartonId::from(u64::MAX));
    }

    #[test]
    fn test_reserve_max_is_rejected() {
        let registry = Registry::new(CartonId::from(7));
        assert_eq!(
            registry.reserve(CartonId::from(u64::MAX)),
            Err(CartonError::IdsExhausted)
        );
        assert_eq!(registry.peek_next(), CartonId::from(7));

        registry.reserve(CartonId::from(u64::MAX - 1)).unwrap();
        assert_eq!(registry.allocate(), Err(CartonError::IdsExhausted));
    }

    #[test]
    fn test_instance_counting() {
        let registry = Registry::new(CartonId::default());
        registry.acquire_instance();
        registry.acquire_instance();
        assert_eq!(registry.live_instances(), 2);
        registry.release_instance();
        assert_eq!(registry.live_instances(), 1);
    }

    #[test]
    fn test_allocate_across_threads_unique() {
        let registry = Arc::new(Registry::new(CartonId::default()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    (0..100)
                        .map(|_| registry.allocate().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all: Vec<CartonId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
    }
}
