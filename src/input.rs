//! Arrow-key steering. Holds the pressed-key table and the ship offset it drives.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Up,
    Right,
    Down,
}

impl Arrow {
    const ALL: [Arrow; 4] = [Arrow::Left, Arrow::Up, Arrow::Right, Arrow::Down];

    /// Maps a `KeyboardEvent.key` value. Older browsers report `Left` etc.
    pub fn from_key(key: &str) -> Option<Arrow> {
        match key {
            "ArrowLeft" | "Left" => Some(Arrow::Left),
            "ArrowUp" | "Up" => Some(Arrow::Up),
            "ArrowRight" | "Right" => Some(Arrow::Right),
            "ArrowDown" | "Down" => Some(Arrow::Down),
            _ => None,
        }
    }

    /// Maps a legacy `keyCode`.
    pub fn from_key_code(code: u32) -> Option<Arrow> {
        match code {
            37 => Some(Arrow::Left),
            38 => Some(Arrow::Up),
            39 => Some(Arrow::Right),
            40 => Some(Arrow::Down),
            _ => None,
        }
    }

    /// Prefers the `key` name and falls back to the `keyCode` when the name is unknown.
    pub fn from_event(key: &str, key_code: u32) -> Option<Arrow> {
        Arrow::from_key(key).or_else(|| Arrow::from_key_code(key_code))
    }

    fn index(self) -> usize {
        self as usize
    }

    fn step(self, amount: i32) -> (i32, i32) {
        match self {
            Arrow::Left => (-amount, 0),
            Arrow::Up => (0, -amount),
            Arrow::Right => (amount, 0),
            Arrow::Down => (0, amount),
        }
    }
}

/// Cumulative ship displacement in pixels. Unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

pub struct Controls {
    pressed: [bool; 4],
    offset: Offset,
    step: i32,
}

impl Controls {
    pub fn new(step: i32) -> Self {
        Self {
            pressed: [false; 4],
            offset: Offset::default(),
            step,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Registers a keydown. Every arrow still held moves the ship again, so holding
    /// two arrows steers diagonally at the browser's key-repeat rate.
    fn press(&mut self, arrow: Arrow) {
        self.pressed[arrow.index()] = true;
        for held in Arrow::ALL {
            if self.pressed[held.index()] {
                let (dx, dy) = held.step(self.step);
                self.offset.dx += dx;
                self.offset.dy += dy;
            }
        }
    }

    /// Handles a keydown given its `key` name and legacy `keyCode`. Returns `true`
    /// when the key was an arrow, i.e. the caller should suppress the browser's
    /// default scrolling.
    pub fn key_down(&mut self, key: &str, key_code: u32) -> bool {
        match Arrow::from_event(key, key_code) {
            Some(arrow) => {
                self.press(arrow);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, key: &str, key_code: u32) {
        if let Some(arrow) = Arrow::from_event(key, key_code) {
            self.pressed[arrow.index()] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_keydown_moves_five_pixels() {
        let mut c = Controls::new(5);
        assert!(c.key_down("ArrowLeft", 0));
        assert!(c.key_down("ArrowLeft", 0));
        assert_eq!(c.offset(), Offset { dx: -10, dy: 0 });
    }

    #[test]
    fn held_keys_combine() {
        let mut c = Controls::new(5);
        c.key_down("ArrowUp", 0);
        c.key_down("ArrowRight", 0);
        // up already held, so both apply on the second keydown
        assert_eq!(c.offset(), Offset { dx: 5, dy: -10 });
    }

    #[test]
    fn release_keeps_offset() {
        let mut c = Controls::new(5);
        c.key_down("ArrowDown", 0);
        c.key_up("ArrowDown", 0);
        c.key_down("ArrowRight", 0);
        assert_eq!(c.offset(), Offset { dx: 5, dy: 5 });
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut c = Controls::new(5);
        assert!(!c.key_down("a", 0));
        c.key_up("Enter", 13);
        assert_eq!(c.offset(), Offset::default());
    }

    #[test]
    fn key_code_is_used_when_key_name_is_unknown() {
        let mut c = Controls::new(5);
        assert!(c.key_down("Unidentified", 37));
        assert!(c.key_down("", 40));
        // left still held
        assert_eq!(c.offset(), Offset { dx: -10, dy: 5 });
        c.key_up("", 37);
        c.key_up("", 40);
        assert!(c.key_down("ArrowUp", 0));
        assert_eq!(c.offset(), Offset { dx: -10, dy: 0 });
        assert!(!c.key_down("x", 88));
    }

    #[test]
    fn legacy_key_codes() {
        assert_eq!(Arrow::from_key_code(37), Some(Arrow::Left));
        assert_eq!(Arrow::from_key_code(40), Some(Arrow::Down));
        assert_eq!(Arrow::from_key_code(65), None);
    }
}
