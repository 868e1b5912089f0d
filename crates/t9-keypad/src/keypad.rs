use crate::key::Key;

/// The separator character. A pause closes the current run without
/// producing output of its own.
pub const PAUSE: char = ' ';

/// Substituted for a run that cannot be resolved to a letter.
pub const PLACEHOLDER: char = '?';

/// The standard ITU E.161 multi-tap layout.
///
/// ```text
/// ┌─────┬─────────────┐
/// │ Key │ Letters     │
/// ├─────┼─────────────┤
/// │  0  │ ' '         │
/// │  1  │ (none)      │
/// │  2  │ a b c       │
/// │  3  │ d e f       │
/// │  4  │ g h i       │
/// │  5  │ j k l       │
/// │  6  │ m n o       │
/// │  7  │ p q r s     │
/// │  8  │ t u v       │
/// │  9  │ w x y z     │
/// └─────┴─────────────┘
/// ```
pub const STANDARD_KEYPAD: Keypad = Keypad {
  table: [
    &[' '],
    &[],
    &['a', 'b', 'c'],
    &['d', 'e', 'f'],
    &['g', 'h', 'i'],
    &['j', 'k', 'l'],
    &['m', 'n', 'o'],
    &['p', 'q', 'r', 's'],
    &['t', 'u', 'v'],
    &['w', 'x', 'y', 'z'],
  ],
};

/// An immutable mapping from digit keys to the letters they cycle
/// through.
///
/// The table is indexed by [`Key::index`]. A key with an empty slice is
/// unmapped: pressing it is invalid input. The only instance is
/// [`STANDARD_KEYPAD`], built at compile time and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keypad {
  table: [&'static [char]; 10],
}

impl Keypad {
  /// The letters assigned to `key`, in press order.
  ///
  /// Returns `None` for unmapped keys (`1` on the standard layout), so
  /// a returned slice is never empty.
  #[must_use]
  pub fn letters(&self, key: Key) -> Option<&'static [char]> {
    let letters = self.table[key.index()];
    if letters.is_empty() { None } else { Some(letters) }
  }

  /// Resolve an input character to a mapped key.
  ///
  /// This is the validity test for key presses: it is `Some` exactly for
  /// `'0'` and `'2'..='9'`.
  #[must_use]
  pub fn key_for(&self, c: char) -> Option<Key> {
    Key::from_char(c).filter(|&key| self.letters(key).is_some())
  }

  /// Reverse lookup: which key produces `letter`, and after how many
  /// presses.
  ///
  /// ```text
  /// locate('a') == Some((Key::Two, 1))
  /// locate('s') == Some((Key::Seven, 4))
  /// locate(' ') == Some((Key::Zero, 1))
  /// ```
  #[must_use]
  pub fn locate(&self, letter: char) -> Option<(Key, usize)> {
    Key::ALL.into_iter().find_map(|key| {
      let letters = self.table[key.index()];
      letters
        .iter()
        .position(|&l| l == letter)
        .map(|pos| (key, pos + 1))
    })
  }
}

impl Default for Keypad {
  fn default() -> Self {
    STANDARD_KEYPAD
  }
}
