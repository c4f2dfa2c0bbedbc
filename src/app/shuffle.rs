/// Source of the uniform index draws used by shuffle.
pub trait IndexPicker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Draws from the thread-local RNG. Every call is independent, so the same
/// index can come up twice in a row.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPicker;

impl IndexPicker for ThreadPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::random_range(0..len)
    }
}
