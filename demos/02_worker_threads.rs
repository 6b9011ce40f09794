//! Shares one writer between worker threads and writes the trace to the path given
//! as the first argument, or `workers.json`.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrome_trace_scope::prelude::*;

fn work(writer: &TraceWriter, worker: usize, job: usize) {
    let _timer = ScopedTimer::new(writer, format!("worker {worker} job {job}"));
    thread::sleep(Duration::from_millis(1 + (worker * job % 5) as u64));
}

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("workers.json"));
    let writer = Arc::new(TraceWriter::new());

    if let Err(e) = writer.try_begin_session("workers", &path) {
        eprintln!("Couldn't write {path}: {e}");
        std::process::exit(1);
    }

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let writer = Arc::clone(&writer);
            thread::spawn(move || {
                for job in 0..10 {
                    work(&writer, worker, job);
                }
            })
        })
        .collect();

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("A worker thread panicked");
        }
    }

    let records = writer.record_count();
    match writer.try_end_session() {
        Ok(Some(session)) => println!(
            "Wrote {records} records for {:?} to {}",
            session.name(),
            session.path().display()
        ),
        Ok(None) => println!("Instrumentation is disabled; no trace was written"),
        Err(e) => eprintln!("Couldn't finish {path}: {e}"),
    }
}
