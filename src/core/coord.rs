use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::core::square::Square;
use crate::error::ChessError;

/// Lowest valid row / file number.
pub const MIN_AXIS: i32 = 1;
/// Highest valid row / file number.
pub const MAX_AXIS: i32 = 8;

const FILE_LETTERS: &[u8; 8] = b"abcdefgh";

#[inline]
pub fn is_valid_axis(v: i32) -> bool {
    (MIN_AXIS..=MAX_AXIS).contains(&v)
}

/// A board file (column), stored as its number `1..=8`.
///
/// `File::from_letter('e')` and `File::from_number(5)` are the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct File(u8);

impl File {
    pub fn from_number(n: i32) -> Result<File, ChessError> {
        if !is_valid_axis(n) {
            return Err(ChessError::InvalidFile {
                value: n.to_string(),
            });
        }
        Ok(File(n as u8))
    }

    /// Case-insensitive.
    pub fn from_letter(c: char) -> Result<File, ChessError> {
        let lower = c.to_ascii_lowercase();
        FILE_LETTERS
            .iter()
            .position(|&l| l as char == lower)
            .map(|i| File(i as u8 + 1))
            .ok_or_else(|| ChessError::InvalidFile {
                value: c.to_string(),
            })
    }

    pub fn from_letter_or_number(value: impl IntoFile) -> Result<File, ChessError> {
        value.into_file()
    }

    #[inline]
    pub fn number(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn letter(self) -> char {
        FILE_LETTERS[(self.0 - 1) as usize] as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Anything a caller may pass as a file: a letter, a number, or an already-built [`File`].
pub trait IntoFile {
    fn into_file(self) -> Result<File, ChessError>;
}

impl IntoFile for File {
    #[inline]
    fn into_file(self) -> Result<File, ChessError> {
        Ok(self)
    }
}

impl IntoFile for char {
    fn into_file(self) -> Result<File, ChessError> {
        File::from_letter(self)
    }
}

impl IntoFile for i32 {
    fn into_file(self) -> Result<File, ChessError> {
        File::from_number(self)
    }
}

impl IntoFile for u8 {
    fn into_file(self) -> Result<File, ChessError> {
        File::from_number(i32::from(self))
    }
}

impl IntoFile for &str {
    /// A single letter, or a decimal number.
    fn into_file(self) -> Result<File, ChessError> {
        let s = self.trim();
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => File::from_letter(c),
            _ => s
                .parse::<i32>()
                .map_err(|_| ChessError::InvalidFile {
                    value: self.to_string(),
                })
                .and_then(File::from_number),
        }
    }
}

/// A row/column step. Not validated: applying it to a [`Coord`] may leave the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub row: i8,
    pub col: i8,
}

impl Delta {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// A validated board coordinate.
///
/// Equality is structural (row + file number). The derived ordering sorts by row, then file,
/// which is the same order as [`Coord::position_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    file: File,
}

impl Coord {
    /// Build from a row and a file given as letter or number.
    pub fn new(row: i32, column: impl IntoFile) -> Result<Coord, ChessError> {
        let file = column.into_file()?;
        if !is_valid_axis(row) {
            return Err(ChessError::InvalidCoordinate {
                row,
                column: i32::from(file.number()),
            });
        }
        Ok(Coord {
            row: row as u8,
            file,
        })
    }

    /// Build from two numeric axes.
    pub fn from_row_column(row: i32, column: i32) -> Result<Coord, ChessError> {
        if !is_valid_axis(row) || !is_valid_axis(column) {
            return Err(ChessError::InvalidCoordinate { row, column });
        }
        Ok(Coord::at(row as u8, column as u8))
    }

    pub fn from_position_number(n: i32) -> Result<Coord, ChessError> {
        Square::from_number(n).map(Square::coord)
    }

    /// Both axes must already be in `1..=8`.
    #[inline]
    pub(crate) fn at(row: u8, column: u8) -> Coord {
        debug_assert!(row >= 1 && row <= 8 && column >= 1 && column <= 8);
        Coord {
            row,
            file: File(column),
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn file(self) -> File {
        self.file
    }

    #[inline]
    pub fn column(self) -> u8 {
        self.file.number()
    }

    #[inline]
    pub fn position_number(self) -> u8 {
        self.square().number()
    }

    #[inline]
    pub fn square(self) -> Square {
        Square::from_coord(self)
    }

    /// The coordinate shifted by `(dr, dc)`, or `None` if that leaves the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Coord> {
        let row = i32::from(self.row) + dr;
        let col = i32::from(self.column()) + dc;
        if is_valid_axis(row) && is_valid_axis(col) {
            Some(Coord::at(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn step(self, d: Delta) -> Option<Coord> {
        self.offset(i32::from(d.row), i32::from(d.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file.letter(), self.row)
    }
}

impl FromStr for Coord {
    type Err = ChessError;

    /// Algebraic notation, e.g. `"e2"` or `"E2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ChessError::InvalidSquareName {
            text: s.to_string(),
        };
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        if !letter.is_ascii_alphabetic() {
            return Err(malformed());
        }
        let row: i32 = chars.as_str().parse().map_err(|_| malformed())?;
        Coord::new(row, letter)
    }
}

impl Serialize for Coord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_and_number_files_are_equal() {
        assert_eq!(File::from_letter('e').unwrap(), File::from_number(5).unwrap());
        assert_eq!(File::from_letter('E').unwrap(), File::from_number(5).unwrap());
        assert_eq!("c".into_file().unwrap(), 3i32.into_file().unwrap());
        assert_eq!(" 7 ".into_file().unwrap().letter(), 'g');
    }

    #[test]
    fn bad_files_are_rejected() {
        for bad in [0, 9, -1] {
            assert!(matches!(
                File::from_number(bad),
                Err(ChessError::InvalidFile { .. })
            ));
        }
        assert!(matches!(
            File::from_letter('i'),
            Err(ChessError::InvalidFile { .. })
        ));
        assert!(matches!(
            "ab".into_file(),
            Err(ChessError::InvalidFile { .. })
        ));
        assert!(matches!("".into_file(), Err(ChessError::InvalidFile { .. })));
    }

    #[test]
    fn rows_are_validated_not_clamped() {
        assert_eq!(
            Coord::new(0, 'a'),
            Err(ChessError::InvalidCoordinate { row: 0, column: 1 })
        );
        assert_eq!(
            Coord::from_row_column(4, 9),
            Err(ChessError::InvalidCoordinate { row: 4, column: 9 })
        );
        // A bad letter surfaces as a file error, not a coordinate error.
        assert!(matches!(
            Coord::new(4, 'z'),
            Err(ChessError::InvalidFile { .. })
        ));
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = Coord::new(1, 'a').unwrap();
        assert_eq!(a1.offset(1, 1), Some(Coord::new(2, 'b').unwrap()));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(7, 7), Some(Coord::new(8, 'h').unwrap()));
        assert_eq!(a1.offset(8, 0), None);
        assert_eq!(a1.step(Delta::new(2, 1)), Some(Coord::new(3, 'b').unwrap()));
    }

    #[test]
    fn algebraic_text() {
        let e2: Coord = "e2".parse().unwrap();
        assert_eq!(e2, Coord::from_row_column(2, 5).unwrap());
        assert_eq!(e2.to_string(), "e2");
        assert_eq!("H8".parse::<Coord>().unwrap().to_string(), "h8");

        assert!(matches!(
            "e".parse::<Coord>(),
            Err(ChessError::InvalidSquareName { .. })
        ));
        assert!(matches!(
            "42".parse::<Coord>(),
            Err(ChessError::InvalidSquareName { .. })
        ));
        assert!(matches!(
            "e9".parse::<Coord>(),
            Err(ChessError::InvalidCoordinate { row: 9, column: 5 })
        ));
        assert!(matches!(
            "j1".parse::<Coord>(),
            Err(ChessError::InvalidFile { .. })
        ));
    }

    #[test]
    fn serde_uses_algebraic_form() {
        let c = Coord::new(7, 'd').unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"d7\"");
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Coord>("\"z0\"").is_err());
    }
}
