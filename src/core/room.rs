// A screening room. Showtimes only keep the room label, the room itself supplies the capacity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: String,
    pub room_name: String,
    pub capacity: u32,
}

impl Room {
    pub fn new(room_id: impl Into<String>, room_name: impl Into<String>, capacity: u32) -> Self {
        Self {
            room_id: room_id.into(),
            room_name: room_name.into(),
            capacity,
        }
    }

    /// Label in the "ID - Name" convention used on showtimes.
    pub fn label(&self) -> String {
        format!("{} - {}", self.room_id, self.room_name)
    }
}

#[cfg(test)]
mod room_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_build_the_showtime_label() {
        let room = Room::new("R101", "IMAX Hall", 200);
        assert_eq!(room.label(), "R101 - IMAX Hall");
        assert_eq!(room.capacity, 200);
    }
}
