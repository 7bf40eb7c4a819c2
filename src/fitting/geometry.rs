use crate::language::{Line, Point};

impl Line {
    /// The line passing through two points. If they share an x coordinate
    /// the slope is infinite (or NaN if the points coincide) and so is the
    /// intercept.
    pub fn through(first: Point, last: Point) -> Line {
        let dx = last.x - first.x;
        let dy = last.y - first.y;
        let slope = dy / dx;

        Line {
            slope,
            intercept: last.y - slope * last.x,
        }
    }

    /// Whether both slope and intercept are ordinary numbers.
    pub fn is_finite(&self) -> bool {
        self.slope
            .is_finite()
            && self
                .intercept
                .is_finite()
    }
}
