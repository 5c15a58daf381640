//! The Chinese phonetic partition: bopomofo cells, tones, punctuation and
//! Greek letters, following the Taiwanese braille layout.
//!
//! Single cells cover initials, rhymes (including the one-cell contracted
//! rhymes ㄧㄚ…ㄩㄥ) and tones. Two-cell entries resolve the shared
//! initial cells: ㄍ/ㄎ/ㄏ retroactively become ㄐ/ㄑ/ㄒ when followed by
//! an ㄧ- or ㄩ-family rhyme. Punctuation and Greek letters are multi-cell
//! literal sequences.

use super::{CellTrie, Payload};

const INITIALS: &[(&str, &str)] = &[
    ("135", "ㄅ"),
    ("1234", "ㄆ"),
    ("134", "ㄇ"),
    ("12345", "ㄈ"),
    ("145", "ㄉ"),
    ("124", "ㄊ"),
    ("1345", "ㄋ"),
    ("14", "ㄌ"),
    ("13", "ㄍ"),
    ("123", "ㄎ"),
    ("1235", "ㄏ"),
    ("1", "ㄓ"),
    ("12", "ㄔ"),
    ("24", "ㄕ"),
    ("1245", "ㄖ"),
    ("125", "ㄗ"),
    ("245", "ㄘ"),
    ("15", "ㄙ"),
];

const RHYMES: &[(&str, &str)] = &[
    ("345", "ㄚ"),
    ("126", "ㄛ"),
    ("2346", "ㄜ"),
    ("26", "ㄝ"),
    ("2456", "ㄞ"),
    ("356", "ㄟ"),
    ("146", "ㄠ"),
    ("12356", "ㄡ"),
    ("1236", "ㄢ"),
    ("136", "ㄣ"),
    ("1346", "ㄤ"),
    ("1356", "ㄥ"),
    ("156", "ㄦ"),
    ("16", "ㄧ"),
    ("34", "ㄨ"),
    ("1256", "ㄩ"),
    // Contracted rhymes: one cell per compound
    ("23456", "ㄧㄚ"),
    ("346", "ㄧㄝ"),
    ("246", "ㄧㄠ"),
    ("234", "ㄧㄡ"),
    ("2345", "ㄧㄢ"),
    ("1456", "ㄧㄣ"),
    ("46", "ㄧㄤ"),
    ("13456", "ㄧㄥ"),
    ("35", "ㄨㄚ"),
    ("25", "ㄨㄛ"),
    ("2356", "ㄨㄞ"),
    ("1246", "ㄨㄟ"),
    ("12456", "ㄨㄢ"),
    ("123456", "ㄨㄣ"),
    ("456", "ㄨㄤ"),
    ("12346", "ㄨㄥ"),
    ("236", "ㄩㄝ"),
    ("45", "ㄩㄢ"),
    ("256", "ㄩㄣ"),
    ("235", "ㄩㄥ"),
];

/// Tone marks terminate a syllable. The space cell doubles as the first
/// tone, matching keyboard practice.
const TONES: &[(&str, &str)] = &[
    ("0", "ˉ"),
    ("2", "ˊ"),
    ("4", "ˇ"),
    ("5", "ˋ"),
    ("23", "˙"),
];

/// The shared initial cells and their palatal readings.
const PALATAL_INITIALS: &[(&str, &str)] = &[("13", "ㄐ"), ("123", "ㄑ"), ("1235", "ㄒ")];

/// Multi-cell punctuation sequences. Several begin with a tone cell; the
/// tone is emitted tentatively and retracted when the sequence extends.
const PUNCTUATION: &[(&[&str], &str)] = &[
    (&["23", "3"], "，"),
    (&["4", "5"], "、"),
    (&["5", "23"], "。"),
    (&["5", "23", "5"], "；"),
    (&["5", "3"], "？"),
    (&["56", "2"], "！"),
    (&["5", "5", "5"], "…"),
    (&["56", "3"], "（"),
    (&["6", "3"], "）"),
    (&["56", "36"], "「"),
    (&["36", "23"], "」"),
    (&["36", "36"], "—"),
];

/// Greek letters: the dots-46 marker cell, then the base letter cell.
/// Uppercase adds the dot-6 capital cell between marker and letter.
const GREEK_LETTERS: &[(&str, &str, &str)] = &[
    ("1", "α", "Α"),
    ("12", "β", "Β"),
    ("1245", "γ", "Γ"),
    ("145", "δ", "Δ"),
    ("15", "ε", "Ε"),
    ("1356", "ζ", "Ζ"),
    ("156", "η", "Η"),
    ("1456", "θ", "Θ"),
    ("24", "ι", "Ι"),
    ("13", "κ", "Κ"),
    ("123", "λ", "Λ"),
    ("134", "μ", "Μ"),
    ("1345", "ν", "Ν"),
    ("1346", "ξ", "Ξ"),
    ("135", "ο", "Ο"),
    ("1234", "π", "Π"),
    ("1235", "ρ", "Ρ"),
    ("234", "σ", "Σ"),
    ("2345", "τ", "Τ"),
    ("136", "υ", "Υ"),
    ("124", "φ", "Φ"),
    ("12346", "χ", "Χ"),
    ("13456", "ψ", "Ψ"),
    ("2456", "ω", "Ω"),
];

/// Marker cell that introduces a Greek letter sequence. It doubles as the
/// contracted rhyme ㄧㄤ, so the rhyme is emitted tentatively and retracted
/// when the sequence turns out to be Greek.
const GREEK_MARKER: &str = "46";

/// Capital cell within a Greek sequence.
const CAPITAL_CELL: &str = "6";

/// Hotkeys must be chords that include the space dot; the phonetic
/// partition may only use the space digit for the bare first-tone cell.
fn assert_no_space_chord(cells: &[&str]) {
    debug_assert!(
        cells[0] == "0" || !cells[0].starts_with('0'),
        "phonetic entry {:?} would shadow the hotkey chord namespace",
        cells
    );
}

/// Build the Chinese phonetic partition.
pub fn chinese_table() -> CellTrie {
    let mut trie = CellTrie::new();

    for (cell, symbol) in INITIALS {
        assert_no_space_chord(&[cell]);
        trie.insert(&[cell], Payload::phonetic(*symbol));
    }
    for (cell, symbol) in RHYMES {
        assert_no_space_chord(&[cell]);
        trie.insert(&[cell], Payload::phonetic(*symbol));
    }
    for (cell, symbol) in TONES {
        assert_no_space_chord(&[cell]);
        trie.insert(&[cell], Payload::tone(*symbol));
    }

    // Palatal readings: the initial cell followed by any ㄧ/ㄩ-family rhyme
    for (initial_cell, palatal) in PALATAL_INITIALS {
        for (rhyme_cell, rhyme) in RHYMES {
            if rhyme.starts_with('ㄧ') || rhyme.starts_with('ㄩ') {
                trie.insert(
                    &[initial_cell, rhyme_cell],
                    Payload::phonetic(format!("{}{}", palatal, rhyme)),
                );
            }
        }
    }

    for (cells, symbol) in PUNCTUATION {
        assert_no_space_chord(cells);
        trie.insert(cells, Payload::literal(*symbol));
    }

    for (letter_cell, lower, upper) in GREEK_LETTERS {
        trie.insert(&[GREEK_MARKER, letter_cell], Payload::literal(*lower));
        trie.insert(
            &[GREEK_MARKER, CAPITAL_CELL, letter_cell],
            Payload::literal(*upper),
        );
    }

    trie
}
