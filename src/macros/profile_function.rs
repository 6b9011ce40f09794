//! This module defines the macros that name timers after the enclosing function.

use std::borrow::Cow;

/// Returns the enclosing function's name with its module or type, e.g. `"parser::parse_expr"`.
///
/// Trait-impl methods keep a shortened qualifier, e.g. `"<Parser as Iterator>::next"`.
///
/// ```rust
/// mod parser {
///     pub fn parse_expr() -> String {
///         chrome_trace_scope::function_name!().into_owned()
///     }
/// }
/// assert_eq!(parser::parse_expr(), "parser::parse_expr");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {
        $crate::clean_function_name($crate::function_path!())
    };
}

/// Returns the enclosing function's full path, e.g. `"my_crate::parser::parse_expr"`.
#[macro_export]
macro_rules! function_path {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::trim_function_path(type_name_of(f))
    }};
}

/// Starts a scoped timer named after the enclosing function, as returned by [`function_name!`].
///
/// ```rust
/// # use chrome_trace_scope::prelude::*;
/// fn load_assets() {
///     profile_function!();
///     // ...
/// }
/// # load_assets();
/// ```
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! profile_function {
    () => {
        $crate::profile_scope!($crate::function_name!())
    };
    ($writer:expr $(,)?) => {
        $crate::profile_scope!($writer, $crate::function_name!())
    };
}

/// Starts a scoped timer named after the enclosing function.
///
/// Instrumentation is disabled, so this expands to nothing.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! profile_function {
    () => {};
    ($writer:expr $(,)?) => {};
}

/// Starts a scoped timer named after the enclosing function's full path, as returned by [`function_path!`].
#[cfg(feature = "enabled")]
#[macro_export]
macro_rules! profile_function_detailed {
    () => {
        $crate::profile_scope!($crate::function_path!())
    };
    ($writer:expr $(,)?) => {
        $crate::profile_scope!($writer, $crate::function_path!())
    };
}

/// Starts a scoped timer named after the enclosing function's full path.
///
/// Instrumentation is disabled, so this expands to nothing.
#[cfg(not(feature = "enabled"))]
#[macro_export]
macro_rules! profile_function_detailed {
    () => {};
    ($writer:expr $(,)?) => {};
}

/// Shortens a function path to its last two segments.
///
/// `::` inside angle brackets does not split segments, and a trait-impl qualifier is
/// reduced to the last segment of each side: `<a::Type as b::Trait>::method` becomes
/// `<Type as Trait>::method`.
pub fn clean_function_name(name: &str) -> Cow<'_, str> {
    let separators = top_level_separators(name);

    // "foo::bar::baz::function_name" -> "baz::function_name"
    // "foo::function_name" -> "foo::function_name"
    let start = match separators.len() {
        0 | 1 => 0,
        n => separators[n - 2] + 2,
    };
    let short = &name[start..];

    let Some(&method_separator) = separators.last() else {
        return Cow::Borrowed(short);
    };
    let qualifier = &name[start..method_separator];
    let Some(inner) = qualifier
        .strip_prefix('<')
        .and_then(|q| q.strip_suffix('>'))
    else {
        return Cow::Borrowed(short);
    };
    let method = &name[method_separator + 2..];

    let qualifier = match find_top_level(inner, " as ") {
        Some(at) => format!(
            "<{} as {}>",
            last_segment(&inner[..at]),
            last_segment(&inner[at + 4..])
        ),
        None => format!("<{}>", last_segment(inner)),
    };
    Cow::Owned(format!("{qualifier}::{method}"))
}

/// Returns the last `::`-separated segment of `path` that is not inside angle brackets.
fn last_segment(path: &str) -> &str {
    let start = top_level_separators(path).last().map_or(0, |&at| at + 2);
    &path[start..]
}

/// Returns the byte offsets of every `::` in `path` that is not inside angle brackets.
fn top_level_separators(path: &str) -> Vec<usize> {
    let bytes = path.as_bytes();
    let mut separators = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            // The arrow in `fn() -> T` is not a closing bracket.
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                separators.push(i);
                i += 2;
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    separators
}

/// Returns the offset of the first `needle` in `haystack` that is not inside angle brackets.
fn find_top_level(haystack: &str, needle: &str) -> Option<usize> {
    let bytes = haystack.as_bytes();
    let mut depth = 0usize;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => {}
            b'>' => depth = depth.saturating_sub(1),
            _ if depth == 0 && haystack.get(i..).is_some_and(|rest| rest.starts_with(needle)) => {
                return Some(i);
            }
            _ => {}
        }
    }
    None
}

/// Strips the `::f` helper and any `::{{closure}}` segments from a path produced by [`function_path!`].
#[doc(hidden)]
#[inline]
pub fn trim_function_path(path: &str) -> &str {
    let mut path = path.strip_suffix("::f").unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}
