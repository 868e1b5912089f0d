// ── Macro for key/char boilerplate ────────────────────────────────────
//
// Each physical key is identified on the input side by a single ASCII
// digit. The macro keeps the variant list and the digit mapping in one
// place so `from_char` and `to_char` can never drift apart.

macro_rules! digit_keys {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $digit:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// Every key in keypad order (`0` first, `9` last).
      pub const ALL: [Self; 10] = [ $( Self::$variant ),+ ];

      /// Map an input character to its key.
      ///
      /// Returns `None` for anything that is not an ASCII digit. Note
      /// that this accepts `'1'`: whether a key carries letters is a
      /// question for the [`Keypad`](crate::Keypad), not for `Key`.
      #[must_use]
      pub fn from_char(c: char) -> Option<Self> {
        match c {
          $( $digit => Some(Self::$variant), )+
          _ => None,
        }
      }

      /// The digit printed on this key.
      #[must_use]
      pub fn to_char(self) -> char {
        match self {
          $( Self::$variant => $digit ),+
        }
      }
    }
  };
}

digit_keys! {
  /// One of the ten digit keys on a telephone keypad.
  ///
  /// ```text
  /// ┌─────┬─────┬─────┐
  /// │  1  │  2  │  3  │
  /// │     │ abc │ def │
  /// ├─────┼─────┼─────┤
  /// │  4  │  5  │  6  │
  /// │ ghi │ jkl │ mno │
  /// ├─────┼─────┼─────┤
  /// │  7  │  8  │  9  │
  /// │pqrs │ tuv │wxyz │
  /// ├─────┼─────┼─────┤
  /// │     │  0  │     │
  /// │     │ ' ' │     │
  /// └─────┴─────┴─────┘
  /// ```
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
  pub enum Key {
    Zero = '0',
    One = '1',
    Two = '2',
    Three = '3',
    Four = '4',
    Five = '5',
    Six = '6',
    Seven = '7',
    Eight = '8',
    Nine = '9',
  }
}

impl Key {
  /// Zero-based table index (`Key::Zero` is 0, `Key::Nine` is 9).
  #[must_use]
  pub fn index(self) -> usize {
    self as usize
  }
}

impl std::fmt::Display for Key {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_char())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_char_accepts_every_ascii_digit() {
    for (i, c) in ('0'..='9').enumerate() {
      let key = Key::from_char(c).unwrap();
      assert_eq!(key.to_char(), c);
      assert_eq!(key.index(), i);
    }
  }

  #[test]
  fn from_char_rejects_non_digits() {
    for c in [' ', '*', '#', 'a', '٣', '\n'] {
      assert_eq!(Key::from_char(c), None, "{c:?} is not a key");
    }
  }

  #[test]
  fn all_is_in_keypad_order() {
    let digits: String = Key::ALL.iter().map(|k| k.to_char()).collect();
    assert_eq!(digits, "0123456789");
  }

  #[test]
  fn display_prints_the_digit() {
    assert_eq!(Key::Seven.to_string(), "7");
  }
}
