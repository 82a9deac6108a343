//! The repeat-N-times operator.

use crate::count::Count;

/// Invoke `action` once for every index in `0..n`, in ascending order.
///
/// Zero and negative counts never invoke `action`. The index is compared with
/// `n` before it is incremented, so `n == N::MAX` finishes without overflow:
/// the last index handed out is `N::MAX - 1` and the counter stops at `N::MAX`.
///
/// A panic inside `action` unwinds straight through; indices after the
/// panicking one are never delivered.
#[inline]
pub fn repeat<N, F>(n: N, mut action: F)
where
    N: Count,
    F: FnMut(N),
{
    let mut index = N::ZERO;
    while index < n {
        action(index);
        index = index.successor();
    }
}

/// Like [`repeat`], but stops at the first `Err` returned by `action` and
/// hands it back unchanged.
#[inline]
pub fn try_repeat<N, E, F>(n: N, mut action: F) -> Result<(), E>
where
    N: Count,
    F: FnMut(N) -> Result<(), E>,
{
    let mut index = N::ZERO;
    while index < n {
        action(index)?;
        index = index.successor();
    }
    Ok(())
}

/// Method syntax for [`repeat`] and [`try_repeat`]: `5i32.times(|i| ...)`.
pub trait Times: Count {
    #[inline]
    fn times<F: FnMut(Self)>(self, action: F) {
        repeat(self, action)
    }

    #[inline]
    fn try_times<E, F: FnMut(Self) -> Result<(), E>>(self, action: F) -> Result<(), E> {
        try_repeat(self, action)
    }
}

impl<N: Count> Times for N {}
