//! Marker traits shared across crates

/// Marker for values an `on_result` handler may produce.
///
/// Handlers consume the `Result` and decide what an error turns into, so the
/// value they hand back is a plain value rather than another `Result`.
pub trait NotResult {}

impl NotResult for bool {}
impl NotResult for () {}
impl<T> NotResult for Vec<T> {}
impl NotResult for String {}
impl<T> NotResult for Option<T> {}
impl NotResult for u8 {}
impl NotResult for u16 {}
impl NotResult for u32 {}
impl NotResult for u64 {}
impl NotResult for usize {}
impl NotResult for i32 {}
impl NotResult for i64 {}
impl NotResult for &str {}
impl<T> NotResult for &[T] {}
impl<T> NotResult for Box<T> {}
impl<T> NotResult for std::sync::Arc<T> {}

impl<T, U> NotResult for (T, U)
where
    T: NotResult,
    U: NotResult,
{
}
