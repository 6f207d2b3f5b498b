//! Sliding-window soak harness
//!
//! Feeds synthetic record batches from producer threads through a bounded
//! queue into one shared collector, then reports the window counters.
//! Exercises the full stack: config, logging, locking, metrics.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_queue::ArrayQueue;

use window_collector::infrastructure::{logging::init_logging, Config, IngestMetrics};
use window_collector::{Batch, LockedCollector, WindowCollector};

fn main() -> anyhow::Result<()> {
    let _guards = init_logging();

    let config = Config::load()?;
    run(&config)
}

fn run(config: &Config) -> anyhow::Result<()> {
    let width = config.window.record_width.max(1);
    let expected_records = (config.soak.producers
        * config.soak.batches_per_producer
        * config.soak.batch_records) as i64;

    let mut collector = WindowCollector::<i64>::new(config.window.capacity)?;
    if config.window.track_visited {
        collector = collector.with_visited_tracking();
    }
    let collector = Arc::new(LockedCollector::new(collector));
    let queue: Arc<ArrayQueue<Vec<i64>>> =
        Arc::new(ArrayQueue::new(config.soak.queue_depth.max(1)));
    let metrics = Arc::new(IngestMetrics::new());
    let producers_done = Arc::new(AtomicBool::new(false));

    tracing::info!(
        capacity = config.window.capacity,
        record_width = width,
        producers = config.soak.producers,
        consumers = config.soak.consumers,
        "starting soak run"
    );

    let consumers: Vec<_> = (0..config.soak.consumers.max(1))
        .map(|_| {
            let collector = Arc::clone(&collector);
            let queue = Arc::clone(&queue);
            let metrics = Arc::clone(&metrics);
            let producers_done = Arc::clone(&producers_done);
            let dims = vec![width];
            thread::spawn(move || loop {
                match queue.pop() {
                    Some(data) => {
                        let batch = match Batch::of_records(&dims, &data) {
                            Ok(batch) => batch,
                            Err(e) => {
                                tracing::error!("malformed batch dropped: {}", e);
                                continue;
                            }
                        };
                        let records = batch.records() as u64;
                        if let Err(e) = collector.collect(&batch) {
                            tracing::error!("collect failed: {}", e);
                            return;
                        }
                        metrics.record_batch(records);
                    }
                    None if producers_done.load(Ordering::Acquire) => break,
                    None => thread::yield_now(),
                }
            })
        })
        .collect();

    let producers: Vec<_> = (0..config.soak.producers)
        .map(|p| {
            let queue = Arc::clone(&queue);
            let batches = config.soak.batches_per_producer;
            let batch_records = config.soak.batch_records;
            thread::spawn(move || {
                for k in 0..batches {
                    let base = ((p * batches + k) * batch_records) as i64;
                    let mut data = Vec::with_capacity(batch_records * width);
                    for r in 0..batch_records {
                        // every element of a record carries the same value,
                        // so a torn record would be visible downstream
                        data.extend(std::iter::repeat(base + r as i64).take(width));
                    }
                    let mut item = data;
                    while let Err(back) = queue.push(item) {
                        item = back;
                        thread::yield_now();
                    }
                }
            })
        })
        .collect();

    for handle in producers {
        if handle.join().is_err() {
            tracing::error!("producer thread panicked");
        }
    }
    producers_done.store(true, Ordering::Release);

    for handle in consumers {
        if handle.join().is_err() {
            tracing::error!("consumer thread panicked");
        }
    }

    let stats = collector.with(|c| c.stats());
    let snapshot = metrics.snapshot();
    tracing::info!(
        occupancy = stats.occupancy,
        cursor = ?stats.cursor,
        visited = ?stats.visited,
        evicted = ?stats.evicted,
        batches = snapshot.batches,
        records = snapshot.records,
        records_per_sec = snapshot.records_per_sec,
        "soak run complete"
    );

    if let Some(visited) = stats.visited {
        if visited != expected_records {
            tracing::warn!(visited, expected_records, "visited count mismatch");
        }
    }

    Ok(())
}
