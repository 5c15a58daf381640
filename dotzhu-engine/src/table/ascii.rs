//! North American Braille ASCII: the flat single-cell table used in
//! English mode. Every cell resolves immediately, so no trie is needed.

/// Look up the ASCII character for a finalized cell in English mode.
/// The space-only cell maps to a plain space. Returns `None` for cells
/// with no assignment.
pub fn ascii_char(digits: &str) -> Option<char> {
    let ch = match digits {
        "0" => ' ',
        "1" => 'a',
        "12" => 'b',
        "14" => 'c',
        "145" => 'd',
        "15" => 'e',
        "124" => 'f',
        "1245" => 'g',
        "125" => 'h',
        "24" => 'i',
        "245" => 'j',
        "13" => 'k',
        "123" => 'l',
        "134" => 'm',
        "1345" => 'n',
        "135" => 'o',
        "1234" => 'p',
        "12345" => 'q',
        "1235" => 'r',
        "234" => 's',
        "2345" => 't',
        "136" => 'u',
        "1236" => 'v',
        "2456" => 'w',
        "1346" => 'x',
        "13456" => 'y',
        "1356" => 'z',
        "2" => '1',
        "23" => '2',
        "25" => '3',
        "256" => '4',
        "26" => '5',
        "235" => '6',
        "2356" => '7',
        "236" => '8',
        "35" => '9',
        "356" => '0',
        "2346" => '!',
        "5" => '"',
        "3456" => '#',
        "1246" => '$',
        "146" => '%',
        "12346" => '&',
        "3" => '\'',
        "12356" => '(',
        "23456" => ')',
        "16" => '*',
        "346" => '+',
        "6" => ',',
        "36" => '-',
        "46" => '.',
        "34" => '/',
        "156" => ':',
        "56" => ';',
        "126" => '<',
        "123456" => '=',
        "345" => '>',
        "1456" => '?',
        "4" => '@',
        "246" => '[',
        "1256" => '\\',
        "12456" => ']',
        "45" => '^',
        "456" => '_',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(ascii_char("1"), Some('a'));
        assert_eq!(ascii_char("1356"), Some('z'));
        assert_eq!(ascii_char("2"), Some('1'));
        assert_eq!(ascii_char("356"), Some('0'));
    }

    #[test]
    fn test_space_cell() {
        assert_eq!(ascii_char("0"), Some(' '));
    }

    #[test]
    fn test_unassigned() {
        assert_eq!(ascii_char("7"), None);
        assert_eq!(ascii_char("78"), None);
    }
}
