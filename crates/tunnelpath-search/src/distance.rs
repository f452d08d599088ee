use tunnelpath_core::Point;

/// Chebyshev (L∞) distance between two points: the number of king moves
/// needed on an open board.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
