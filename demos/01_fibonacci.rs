//! Writes `results.json` with one event per `fib` call.
//!
//! Load the file in `chrome://tracing` or <https://ui.perfetto.dev>.

use chrome_trace_scope::prelude::*;

fn fib(n: u64) -> u64 {
    profile_measure!({
        match n {
            0 | 1 => n,
            _ => fib(n - 1) + fib(n - 2),
        }
    }, name: format!("fib({n})"))
}

fn run() -> u64 {
    profile_function!();
    fib(10)
}

fn main() {
    env_logger::init();

    start_session!("fibonacci");
    let value = run();
    end_session!();

    println!("fib(10) = {value}");
    if chrome_trace_scope::ENABLED {
        println!("Wrote {}", chrome_trace_scope::DEFAULT_TRACE_PATH);
    }
}
