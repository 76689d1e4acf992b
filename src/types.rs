use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector2D {
    pub x: i64,
    pub y: i64,
}

impl Vector2D {
    pub fn new(x: i64, y: i64) -> Self {
        Vector2D { x, y }
    }

    pub fn add(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn length_sq(&self) -> i64 {
        self.x * self.x + self.y * self.y
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {})", self.x, self.y)
    }
}

/// Wraps `value` onto `[0, max)`. `%` keeps the sign of the dividend, so a
/// negative remainder is shifted back up by one period.
pub fn wrap_coordinate(value: i64, max: i64) -> i64 {
    let wrapped = value % max;
    if wrapped < 0 {
        wrapped + max
    } else {
        wrapped
    }
}

/// Folds `value` back into `[lower, upper]`, returning the new value and the
/// (possibly inverted) velocity. At most one reflection is assumed per tick,
/// so anything further than one span past a bound yields `None`.
pub fn reflect_coordinate(value: i64, velocity: i64, lower: i64, upper: i64) -> Option<(i64, i64)> {
    let span = upper - lower;
    if value < lower - span || value > upper + span {
        return None;
    }
    if value < lower {
        Some((2 * lower - value, -velocity))
    } else if value > upper {
        Some((2 * upper - value, -velocity))
    } else {
        Some((value, velocity))
    }
}
