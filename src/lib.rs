mod error;
mod heap;

pub use error::HeapFull;
pub use heap::{Level, MinMaxHeap};

#[cfg(test)]
mod driver {
    use super::*;
    use rand::prelude::*;
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
        use std::time::{Duration, Instant};
        let start = Instant::now();
        f();
        let elapsed = start.elapsed();

        print!("BENCH `{}` :", name);
        for _ in 0..num_tabs {
            print!("\t");
        }

        if elapsed < Duration::from_millis(1) {
            println!(
                "{} {:03} nanos",
                elapsed.as_micros(),
                elapsed.as_nanos() % 1000,
            );
        } else if elapsed < Duration::from_secs(1) {
            println!(
                "{} {:03} micros",
                elapsed.as_millis(),
                elapsed.as_micros() % 1000,
            );
        } else {
            println!(
                "{} {:03} millis",
                elapsed.as_secs(),
                elapsed.subsec_millis(),
            );
        }
    }

    /// Random fill and drain of many heaps with random capacities, checking every removal against
    /// a sorted copy of the keys.
    fn validate_min_max_heap(rng: &mut SmallRng) {
        const ROUNDS: usize = 100;

        println!("[Validate MinMaxHeap]");
        for _ in 0..ROUNDS {
            let size = rng.gen_range(1..=1000);
            let mut heap = MinMaxHeap::new(size);

            let mut keys: Vec<u32> = (0..size).map(|_| rng.gen_range(1..=100)).collect();
            for (i, &k) in keys.iter().enumerate() {
                assert!(heap.insert(k, i));
            }
            assert!(!heap.insert(0, size));
            assert!(heap.is_valid());
            keys.sort_unstable();

            for &k in keys[..size / 2].iter() {
                assert_eq!(heap.remove_minimum().map(|(k, _)| k), Some(k));
            }
            assert!(heap.is_valid());

            for &k in keys[size / 2..].iter().rev() {
                assert_eq!(heap.remove_maximum().map(|(k, _)| k), Some(k));
            }
            assert!(heap.is_valid());
            assert!(heap.is_empty());
        }
        println!("MinMaxHeap VALIDATED");
        println!();
    }

    fn bench_min_max_heap(rng: &mut SmallRng) {
        const N: usize = 256 * 1024;

        let values: Vec<u64> = (0..N).map(|_| rng.gen()).collect();

        let mut max_heap = BinaryHeap::with_capacity(N);
        let mut min_heap = BinaryHeap::with_capacity(N);
        bench("BinaryHeap x2::push", 2, || {
            for &x in values.iter() {
                max_heap.push(x);
                min_heap.push(Reverse(x));
            }
        });
        bench("BinaryHeap x2::pop", 3, || {
            for _ in 0..N / 2 {
                assert!(max_heap.pop().is_some());
                assert!(min_heap.pop().is_some());
            }
        });
        println!();

        let mut heap = MinMaxHeap::new(N);
        bench("MinMaxHeap::insert", 3, || {
            for (len, &x) in values.iter().enumerate() {
                assert_eq!(heap.len(), len);
                assert!(heap.insert(x, ()));
            }
        });
        bench("MinMaxHeap::find_min_max", 2, || {
            for _ in 0..N {
                assert!(heap.find_minimum().is_some());
                assert!(heap.find_maximum().is_some());
            }
        });
        bench("MinMaxHeap::remove_min_max", 2, || {
            for len in 0..N / 2 {
                assert_eq!(heap.len(), N - 2 * len);
                assert!(heap.remove_minimum().is_some());
                assert!(heap.remove_maximum().is_some());
            }
        });
        assert!(heap.is_empty());
    }

    #[test]
    pub fn main() {
        let mut rng = SmallRng::seed_from_u64(0x6d6d_6865_6170);

        validate_min_max_heap(&mut rng);
        bench_min_max_heap(&mut rng);
        println!();
    }
}
