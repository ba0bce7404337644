/// Row-major flat grid. No per-cell objects, f32 friendly.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    pub data: Vec<T>,
    pub w: usize,
    pub h: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            data: vec![T::default(); w * h],
            w,
            h,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h);
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }

    /// Signed lookup. Returns None outside `[0, w) x [0, h)`.
    #[inline]
    pub fn checked_get(&self, x: i32, y: i32) -> Option<T> {
        in_bounds(x, y, self.w, self.h).map(|(x, y)| self.get(x, y))
    }
}

/// Convert signed coordinates to grid indices. No wrapping on either axis.
#[inline]
pub fn in_bounds(x: i32, y: i32, w: usize, h: usize) -> Option<(usize, usize)> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= w || y >= h {
        return None;
    }
    Some((x, y))
}
