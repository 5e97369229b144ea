//! Six-dot Braille cell model: dots, chords, and the chord → codepoint mapping.

use std::fmt;

/// First codepoint of the Unicode Braille Patterns block (U+2800, the blank cell).
pub const CELL_BASE: u32 = 0x2800;

/// One of the six dots of a standard Braille cell.
///
/// The discriminants are the wire values hosts send for dot-press commands:
/// each dot occupies one bit of the cell's low six bits, dot 1 being the
/// least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dot {
    Dot1 = 0x01,
    Dot2 = 0x02,
    Dot3 = 0x04,
    Dot4 = 0x08,
    Dot5 = 0x10,
    Dot6 = 0x20,
}

impl Dot {
    pub const ALL: [Dot; 6] = [
        Dot::Dot1,
        Dot::Dot2,
        Dot::Dot3,
        Dot::Dot4,
        Dot::Dot5,
        Dot::Dot6,
    ];

    /// Parse a host wire value (1, 2, 4, 8, 16, 32). Anything else is rejected.
    pub fn from_bit(value: u8) -> Option<Dot> {
        match value {
            0x01 => Some(Dot::Dot1),
            0x02 => Some(Dot::Dot2),
            0x04 => Some(Dot::Dot3),
            0x08 => Some(Dot::Dot4),
            0x10 => Some(Dot::Dot5),
            0x20 => Some(Dot::Dot6),
            _ => None,
        }
    }

    /// Parse a dot number 1–6 (the notation used in Braille literature and
    /// in replay scripts).
    pub fn from_number(number: u8) -> Option<Dot> {
        match number {
            1..=6 => Some(Dot::ALL[(number - 1) as usize]),
            _ => None,
        }
    }

    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Dot number 1–6.
    pub fn number(self) -> u8 {
        (self as u8).trailing_zeros() as u8 + 1
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// The bit-set union of dot presses accumulated before a commit.
///
/// Always in 0..=0x3F. The empty chord means "no dots pending" and never
/// maps to a cell; the blank cell U+2800 is unreachable by accumulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Chord(u8);

impl Chord {
    pub const EMPTY: Chord = Chord(0);

    /// Build a chord from raw bits. Values above 0x3F are out of contract.
    pub fn from_bits(bits: u8) -> Option<Chord> {
        (bits <= 0x3F).then_some(Chord(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Merge a dot into the chord. Bitwise OR, so duplicates are idempotent.
    pub fn with(self, dot: Dot) -> Chord {
        Chord(self.0 | dot.bit())
    }

    pub fn contains(self, dot: Dot) -> bool {
        self.0 & dot.bit() != 0
    }

    /// The Braille pattern character for this chord, or `None` when empty.
    ///
    /// The mapping `bits → U+2800 + bits` is a bijection on 1..=63; the
    /// emitted range is exactly U+2801..=U+283F.
    pub fn to_cell(self) -> Option<char> {
        if self.is_empty() {
            return None;
        }
        // Bits are ≤ 0x3F so CELL_BASE + bits is always a valid scalar.
        char::from_u32(CELL_BASE + self.0 as u32)
    }

    /// Dot numbers in ascending order, e.g. `"145"` for dots 1, 4, 5.
    pub fn dot_numbers(self) -> String {
        Dot::ALL
            .iter()
            .filter(|d| self.contains(**d))
            .map(|d| char::from(b'0' + d.number()))
            .collect()
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_cell() {
            Some(c) => write!(f, "{}", c),
            None => write!(f, "(empty)"),
        }
    }
}
