/// Checks that the first string is equal to any of the other ones in an ASCII
/// case-insensitive match.
///
/// The generated code is the same as writing:
/// `a.eq_ignore_ascii_case(b) || a.eq_ignore_ascii_case(c)`, without
/// allocating lowercased temporaries.
///
/// # Examples
///
/// ```ignore
/// assert!(multi_eq_ignore_ascii_case!("JSON", "json"));
/// assert!(multi_eq_ignore_ascii_case!("Text", "plain" | "text"));
/// assert!(!multi_eq_ignore_ascii_case!("yaml", "table" | "plain" | "json"));
/// ```
#[macro_export]
macro_rules! multi_eq_ignore_ascii_case {
    ( $lhs:expr, $last:literal ) => {
        $lhs.eq_ignore_ascii_case($last)
    };
    ( $lhs:expr, $head:literal | $($tail:tt)* ) => {
        $lhs.eq_ignore_ascii_case($head) || $crate::multi_eq_ignore_ascii_case!($lhs, $($tail)*)
    };
}
