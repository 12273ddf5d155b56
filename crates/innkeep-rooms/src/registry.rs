//! Room registry: the hotel's ordered, append-only room inventory.
//!
//! # Vacancy index
//!
//! Alongside the room arena the registry keeps `vacant`, an ordered set
//! of the indices of every available room. It is updated on every state
//! change, so the first-fit lookup is the set's smallest element rather
//! than a scan. Because indices order by insertion, the smallest vacant
//! index is exactly the earliest-registered free room.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::io::{self, Read, Write};

use innkeep_types::{parse_inventory, FormatError, RoomIndex, RoomNumber, RoomView, VacantRoom};

use crate::{Room, RoomError, RoomState};

/// What a bulk load read, and where it stopped if the input was bad.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    /// Rooms appended by this load.
    pub loaded: usize,
    /// Why parsing ended before the end of input, if it did.
    pub stopped: Option<FormatError>,
}

impl LoadReport {
    /// Returns `true` if the whole input was read.
    pub fn is_complete(&self) -> bool {
        self.stopped.is_none()
    }
}

/// Owns every room in the hotel.
///
/// Rooms are only ever appended; nothing removes one. That makes a
/// [`RoomIndex`] a stable handle for the lifetime of the registry.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,

    /// Indices of available rooms, kept in sync with `rooms`.
    vacant: BTreeSet<RoomIndex>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from rooms in a known order and state.
    pub fn from_rooms(rooms: Vec<Room>) -> Self {
        let vacant = rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.is_available())
            .map(|(i, _)| RoomIndex(i))
            .collect();
        Self { rooms, vacant }
    }

    /// Appends a room and returns its index.
    pub fn add(&mut self, room: impl Into<Room>) -> RoomIndex {
        let room = room.into();
        let index = RoomIndex(self.rooms.len());
        if room.is_available() {
            self.vacant.insert(index);
        }
        tracing::debug!(number = %room.number, %index, "room registered");
        self.rooms.push(room);
        index
    }

    /// Appends every room described by seed-format text.
    ///
    /// Rooms read before a malformed or missing token are kept; the
    /// report says where reading stopped.
    pub fn load_str(&mut self, input: &str) -> LoadReport {
        let parsed = parse_inventory(input);
        let loaded = parsed.rooms.len();
        for spec in parsed.rooms {
            self.add(spec);
        }

        if let Some(reason) = &parsed.stopped {
            tracing::warn!(loaded, %reason, "room inventory truncated");
        } else {
            tracing::debug!(loaded, "room inventory read");
        }

        LoadReport {
            loaded,
            stopped: parsed.stopped,
        }
    }

    /// Reads `reader` to the end, then loads it like [`load_str`](Self::load_str).
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD, so they only
    /// affect the token they sit in.
    ///
    /// # Errors
    /// Any I/O error from `reader`. Nothing is appended in that case.
    pub fn load_reader<R: Read>(&mut self, mut reader: R) -> io::Result<LoadReport> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let input = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = input {
            tracing::warn!("room inventory contains bytes that are not UTF-8");
        }
        Ok(self.load_str(&input))
    }

    /// All rooms in registry order.
    pub fn list(&self) -> Vec<RoomView> {
        self.rooms.iter().map(Room::view).collect()
    }

    /// Available rooms in registry order.
    pub fn list_available(&self) -> Vec<VacantRoom> {
        self.vacant
            .iter()
            .filter_map(|index| self.rooms.get(index.0))
            .map(Room::vacancy)
            .collect()
    }

    /// The earliest-registered available room, if any.
    pub fn find_first_available(&self) -> Option<RoomIndex> {
        self.vacant.first().copied()
    }

    pub fn get(&self, index: RoomIndex) -> Option<&Room> {
        self.rooms.get(index.0)
    }

    /// Index of the first room carrying `number`.
    pub fn index_of(&self, number: RoomNumber) -> Option<RoomIndex> {
        self.rooms
            .iter()
            .position(|room| room.number == number)
            .map(RoomIndex)
    }

    /// Iterates rooms with their indices, in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomIndex, &Room)> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (RoomIndex(i), room))
    }

    /// Marks an available room occupied.
    ///
    /// # Errors
    /// [`RoomError::UnknownIndex`] or [`RoomError::InvalidTransition`]; the
    /// registry is unchanged in both cases.
    pub fn occupy(&mut self, index: RoomIndex) -> Result<&Room, RoomError> {
        self.transition(index, RoomState::Occupied)
    }

    /// Marks an occupied room available again.
    ///
    /// # Errors
    /// Same as [`occupy`](Self::occupy).
    pub fn vacate(&mut self, index: RoomIndex) -> Result<&Room, RoomError> {
        self.transition(index, RoomState::Available)
    }

    fn transition(&mut self, index: RoomIndex, to: RoomState) -> Result<&Room, RoomError> {
        let room = self
            .rooms
            .get_mut(index.0)
            .ok_or(RoomError::UnknownIndex(index))?;

        if !room.state.can_transition_to(to) {
            return Err(RoomError::InvalidTransition {
                number: room.number,
                from: room.state,
                to,
            });
        }

        room.state = to;
        if to.is_available() {
            self.vacant.insert(index);
        } else {
            self.vacant.remove(&index);
        }

        tracing::debug!(number = %room.number, %index, state = %to, "room state changed");
        Ok(room)
    }

    /// Writes one state line per room, in registry order. Returns the
    /// number of lines written.
    pub fn persist<W: Write>(&self, mut out: W) -> io::Result<usize> {
        for room in &self.rooms {
            writeln!(out, "{}", room.state_line())?;
        }
        out.flush()?;
        Ok(self.rooms.len())
    }

    /// Rooms in registry order, for snapshotting.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Number of rooms currently available.
    pub fn vacancy_count(&self) -> usize {
        self.vacant.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(input: &str) -> RoomRegistry {
        let mut rooms = RoomRegistry::new();
        rooms.load_str(input);
        rooms
    }

    #[test]
    fn test_new_registry_is_empty() {
        let rooms = RoomRegistry::new();
        assert!(rooms.is_empty());
        assert_eq!(rooms.find_first_available(), None);
        assert!(rooms.list().is_empty());
    }

    #[test]
    fn test_add_returns_sequential_indices() {
        let mut rooms = RoomRegistry::new();
        let a = rooms.add(Room::new(RoomNumber(1), "Single", 40.0));
        let b = rooms.add(Room::new(RoomNumber(2), "Single", 40.0));
        assert_eq!(a, RoomIndex(0));
        assert_eq!(b, RoomIndex(1));
        assert_eq!(rooms.vacancy_count(), 2);
    }

    #[test]
    fn test_load_str_appends_available_rooms() {
        let mut rooms = RoomRegistry::new();
        let report = rooms.load_str("101 Standard 99.5\n102 Deluxe 150\n");
        assert_eq!(report.loaded, 2);
        assert!(report.is_complete());

        let listed = rooms.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].number, RoomNumber(101));
        assert_eq!(listed[0].category, "Standard");
        assert_eq!(listed[0].price, 99.5);
        assert_eq!(listed[1].number, RoomNumber(102));
        assert_eq!(listed[1].category, "Deluxe");
        assert_eq!(listed[1].price, 150.0);
        assert!(listed.iter().all(|r| r.available));
    }

    #[test]
    fn test_load_twice_appends() {
        let mut rooms = registry("101 Standard 99.5");
        rooms.load_str("101 Standard 99.5");
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms.index_of(RoomNumber(101)), Some(RoomIndex(0)));
    }

    #[test]
    fn test_load_keeps_rooms_before_bad_token() {
        let mut rooms = RoomRegistry::new();
        let report = rooms.load_str("101 Standard 99.5 oops Deluxe 150");
        assert_eq!(report.loaded, 1);
        assert!(!report.is_complete());
        assert_eq!(rooms.len(), 1);
    }

    #[test]
    fn test_load_reader_tolerates_non_utf8_bytes() {
        let mut rooms = RoomRegistry::new();
        let bytes: &[u8] = b"101 Caf\xe9 50\n102 Deluxe 150\n";
        let report = rooms.load_reader(bytes).unwrap();
        assert_eq!(report.loaded, 2);
        assert!(report.is_complete());
        assert_eq!(rooms.get(RoomIndex(0)).unwrap().category, "Caf\u{FFFD}");
    }

    #[test]
    fn test_load_reader_non_utf8_number_stops_load() {
        let mut rooms = RoomRegistry::new();
        let bytes: &[u8] = b"101 Standard 50\n1\xff2 Deluxe 150\n";
        let report = rooms.load_reader(bytes).unwrap();
        assert_eq!(report.loaded, 1);
        assert!(matches!(
            report.stopped,
            Some(FormatError::Malformed { position: 3, .. })
        ));
    }

    #[test]
    fn test_find_first_available_is_first_fit() {
        let mut rooms = registry("101 A 10 102 B 20 103 C 30");
        assert_eq!(rooms.find_first_available(), Some(RoomIndex(0)));

        rooms.occupy(RoomIndex(0)).unwrap();
        assert_eq!(rooms.find_first_available(), Some(RoomIndex(1)));

        rooms.occupy(RoomIndex(1)).unwrap();
        rooms.vacate(RoomIndex(0)).unwrap();
        assert_eq!(rooms.find_first_available(), Some(RoomIndex(0)));
    }

    #[test]
    fn test_occupy_twice_is_invalid_and_unchanged() {
        let mut rooms = registry("101 A 10");
        rooms.occupy(RoomIndex(0)).unwrap();

        let err = rooms.occupy(RoomIndex(0)).unwrap_err();
        assert!(matches!(
            err,
            RoomError::InvalidTransition {
                from: RoomState::Occupied,
                to: RoomState::Occupied,
                ..
            }
        ));
        assert_eq!(rooms.vacancy_count(), 0);
        assert_eq!(rooms.get(RoomIndex(0)).unwrap().state(), RoomState::Occupied);
    }

    #[test]
    fn test_vacate_available_room_is_invalid() {
        let mut rooms = registry("101 A 10");
        assert!(rooms.vacate(RoomIndex(0)).is_err());
        assert_eq!(rooms.vacancy_count(), 1);
    }

    #[test]
    fn test_unknown_index() {
        let mut rooms = registry("101 A 10");
        assert!(matches!(
            rooms.occupy(RoomIndex(5)),
            Err(RoomError::UnknownIndex(RoomIndex(5)))
        ));
    }

    #[test]
    fn test_list_available_filters_occupied() {
        let mut rooms = registry("101 A 10 102 B 20 103 C 30");
        rooms.occupy(RoomIndex(1)).unwrap();

        let numbers: Vec<_> = rooms.list_available().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![RoomNumber(101), RoomNumber(103)]);
        assert_eq!(rooms.list().len(), 3);
    }

    #[test]
    fn test_persist_writes_state_lines() {
        let mut rooms = registry("101 Standard 99.5\n102 Deluxe 150\n");
        rooms.occupy(RoomIndex(1)).unwrap();

        let mut out = Vec::new();
        let written = rooms.persist(&mut out).unwrap();
        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "101 Standard 99.5 1\n102 Deluxe 150 0\n"
        );
    }

    #[test]
    fn test_from_rooms_rebuilds_vacancy_index() {
        let rooms = RoomRegistry::from_rooms(vec![
            Room::with_state(RoomNumber(1), "A", 1.0, RoomState::Occupied),
            Room::new(RoomNumber(2), "B", 2.0),
        ]);
        assert_eq!(rooms.find_first_available(), Some(RoomIndex(1)));
        assert_eq!(rooms.vacancy_count(), 1);
    }
}
