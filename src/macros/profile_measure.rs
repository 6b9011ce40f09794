//! This module defines the [`profile_measure!`](crate::profile_measure) macro for timing code blocks.

/// Times a block of code with a scoped timer.
///
/// * With only a `name:`, the timer submits to [`TraceWriter::global`](crate::writer::TraceWriter::global).
/// * With `writer:` before `name:`, it submits to that writer.
///
/// * The record's start time is the beginning of the block.
/// * The record's end time is the end of the block.
///
/// The block's value is preserved by the macro. Both synchronous and asynchronous
/// blocks are supported.
///
/// # Examples
///
/// #### Synchronous
///
/// ```rust
/// # use chrome_trace_scope::profile_measure;
/// fn fib(n: u64) -> u64 {
///     profile_measure!({
///         match n {
///             0 | 1 => n,
///             _ => fib(n - 1) + fib(n - 2),
///         }
///     }, name: format!("fib({n})"))
/// }
///
/// assert_eq!(fib(10), 55);
/// ```
///
/// #### Explicit Writer
///
/// ```rust
/// # use chrome_trace_scope::prelude::*;
/// let writer = TraceWriter::new();
/// let sum: u32 = profile_measure!({
///     (1..=10).sum()
/// }, writer: &writer, name: "sum");
///
/// assert_eq!(sum, 55);
/// ```
///
/// #### Create a New Async Block
///
/// Use the `async` keyword to create a new async block,
/// which allows the `?` operator to return from this block instead of the enclosing function.
///
/// ```rust
/// # use chrome_trace_scope::profile_measure;
/// # async fn read_file(path: &str) -> Option<String> { Some(String::from("100,200")) }
/// async fn load_config(path: &str) -> (u32, u32) {
///     let config = profile_measure!(async {
///         let contents = read_file(path).await?;
///         let (x, y) = contents.split_once(',')?;
///         Some((x.parse::<u32>().ok()?, y.parse::<u32>().ok()?))
///     }, name: "load config").await;
///
///     config.unwrap_or((0, 0))
/// }
/// ```
///
/// #### Create a New Async Move Block
///
/// ```rust
/// # use chrome_trace_scope::profile_measure;
/// # async fn process_data(data: String) -> usize { data.len() }
/// async fn measure_owned_data() -> usize {
///     let data = String::from("owned data");
///     profile_measure!(async move {
///         process_data(data).await
///     }, name: "process owned data").await
/// }
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! profile_measure {
    // New block scope within the same context
    ($body:block $(,)? name: $name:expr $(,)?) => {{
        let _timer = $crate::timer::ScopedTimer::global($name);
        $body
    }};

    // Create a new async block
    (async $body:block $(,)? name: $name:expr $(,)?) => {
        async {
            let _timer = $crate::timer::ScopedTimer::global($name);
            (async $body).await
        }
    };

    // Create a new async move block
    (async move $body:block $(,)? name: $name:expr $(,)?) => {
        async move {
            let _timer = $crate::timer::ScopedTimer::global($name);
            (async move $body).await
        }
    };

    // The same three forms, submitting to an explicit writer
    ($body:block $(,)? writer: $writer:expr, name: $name:expr $(,)?) => {{
        let _timer = $crate::timer::ScopedTimer::new($writer, $name);
        $body
    }};

    (async $body:block $(,)? writer: $writer:expr, name: $name:expr $(,)?) => {
        async {
            let _timer = $crate::timer::ScopedTimer::new($writer, $name);
            (async $body).await
        }
    };

    (async move $body:block $(,)? writer: $writer:expr, name: $name:expr $(,)?) => {
        async move {
            let _timer = $crate::timer::ScopedTimer::new($writer, $name);
            (async move $body).await
        }
    };
}

/// Times a block of code.
///
/// Instrumentation is disabled, so this expands to the block itself.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! profile_measure {
    ($body:block $(,)? name: $name:expr $(,)?) => {
        $body
    };
    (async $body:block $(,)? name: $name:expr $(,)?) => {
        async $body
    };
    (async move $body:block $(,)? name: $name:expr $(,)?) => {
        async move $body
    };
    ($body:block $(,)? writer: $writer:expr, name: $name:expr $(,)?) => {
        $body
    };
    (async $body:block $(,)? writer: $writer:expr, name: $name:expr $(,)?) => {
        async $body
    };
    (async move $body:block $(,)? writer: $writer:expr, name: $name:expr $(,)?) => {
        async move $body
    };
}
