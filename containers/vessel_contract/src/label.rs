//! Short type labels for container rendering.
//!
//! `std::any::type_name` returns fully qualified paths
//! (`alloc::string::String`), which drown out the variant name in a rendered
//! container. The functions here trim module paths per segment while keeping
//! generic arguments intact: `Vec<alloc::string::String>` renders as
//! `Vec<String>`.

use std::any;
use std::fmt;

/// Characters that end a path segment inside a rendered type name.
///
/// Everything between two delimiters is a single path whose leading
/// `module::` portions get trimmed.
const SEGMENT_DELIMITERS: &[char] = &['<', '>', '(', ')', '[', ']', ',', ' ', '&', ';', '*'];

/// Stream the trimmed label of `T` into `out`.
///
/// Used by the containers' `Display` impls so rendering never allocates.
pub fn fmt_type_label<T: ?Sized>(out: &mut dyn fmt::Write) -> fmt::Result {
    let full = any::type_name::<T>();
    let mut start = 0;
    for (idx, ch) in full.char_indices() {
        if SEGMENT_DELIMITERS.contains(&ch) {
            write_trimmed(out, &full[start..idx])?;
            out.write_char(ch)?;
            start = idx + ch.len_utf8();
        }
    }
    write_trimmed(out, &full[start..])
}

/// The trimmed label of `T` as an owned string, for violation messages and
/// assertions.
pub fn type_label<T: ?Sized>() -> String {
    let mut label = String::new();
    if fmt_type_label::<T>(&mut label).is_err() {
        // Writing into a String cannot fail; fall back to the raw name
        // rather than returning a truncated label.
        return any::type_name::<T>().to_owned();
    }
    label
}

fn write_trimmed(out: &mut dyn fmt::Write, segment: &str) -> fmt::Result {
    match segment.rsplit("::").next() {
        Some(last) => out.write_str(last),
        None => out.write_str(segment),
    }
}
