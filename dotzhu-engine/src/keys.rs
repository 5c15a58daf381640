//! Translation from bopomofo symbols and literal characters to the key
//! sequence a standard-layout phonetic backend expects. Sequences that
//! start with a backtick drive the backend's symbol-input table.

/// Key sequence for one character on the standard phonetic layout.
/// Characters outside the table pass through unchanged.
pub fn keys_for(ch: char) -> Option<&'static str> {
    let keys = match ch {
        'ㄅ' => "1",
        'ㄆ' => "q",
        'ㄇ' => "a",
        'ㄈ' => "z",
        'ㄉ' => "2",
        'ㄊ' => "w",
        'ㄋ' => "s",
        'ㄌ' => "x",
        'ㄍ' => "e",
        'ㄎ' => "d",
        'ㄏ' => "c",
        'ㄐ' => "r",
        'ㄑ' => "f",
        'ㄒ' => "v",
        'ㄓ' => "5",
        'ㄔ' => "t",
        'ㄕ' => "g",
        'ㄖ' => "b",
        'ㄗ' => "y",
        'ㄘ' => "h",
        'ㄙ' => "n",
        'ㄧ' => "u",
        'ㄨ' => "j",
        'ㄩ' => "m",
        'ㄚ' => "8",
        'ㄛ' => "i",
        'ㄜ' => "k",
        'ㄝ' => ",",
        'ㄞ' => "9",
        'ㄟ' => "o",
        'ㄠ' => "l",
        'ㄡ' => ".",
        'ㄢ' => "0",
        'ㄣ' => "p",
        'ㄤ' => ";",
        'ㄥ' => "/",
        'ㄦ' => "-",
        'ˉ' => " ",
        '˙' => "7",
        'ˊ' => "6",
        'ˇ' => "3",
        'ˋ' => "4",
        '，' => "`31",
        '、' => "`32",
        '。' => "`33",
        '；' => "`37",
        '：' => "`38",
        '？' => "`35",
        '！' => "`36",
        '…' => "`1",
        '—' => "` 49",
        '（' => "`41",
        '）' => "`42",
        '《' => "`4 4",
        '》' => "`4 5",
        '〔' => "`45",
        '〕' => "`46",
        '〈' => "`49",
        '〉' => "`4 1",
        '「' => "`43",
        '」' => "`44",
        '『' => "`4 2",
        '』' => "`4 3",
        '＆' => "`3   1",
        '＊' => "`3   3",
        '×' => "`73",
        '÷' => "`74",
        '±' => "`79",
        '≠' => "`76",
        '∞' => "`78",
        '≒' => "`77",
        '≦' => "`7 6",
        '≧' => "`7 7",
        '∩' => "`7 8",
        '∪' => "`7 9",
        '⊥' => "`7  2",
        '∠' => "`7  3",
        '∵' => "`7   1",
        '∴' => "`7   2",
        '≡' => "` 43",
        '∥' => "` 46",
        '↑' => "`81",
        '↓' => "`82",
        '←' => "`83",
        '→' => "`84",
        '△' => "`8 8",
        '□' => "`8  5",
        'α' => "`61",
        'β' => "`62",
        'γ' => "`63",
        'δ' => "`64",
        'ε' => "`65",
        'ζ' => "`66",
        'η' => "`67",
        'θ' => "`68",
        'ι' => "`69",
        'κ' => "`6 1",
        'λ' => "`6 2",
        'μ' => "`6 3",
        'ν' => "`6 4",
        'ξ' => "`6 5",
        'ο' => "`6 6",
        'π' => "`6 7",
        'ρ' => "`6 8",
        'σ' => "`6 9",
        'τ' => "`6  1",
        'υ' => "`6  2",
        'φ' => "`6  3",
        'χ' => "`6  4",
        'ψ' => "`6  5",
        'ω' => "`6  6",
        'Α' => "`6  7",
        'Β' => "`6  8",
        'Γ' => "`6  9",
        'Δ' => "`6   1",
        'Ε' => "`6   2",
        'Ζ' => "`6   3",
        'Η' => "`6   4",
        'Θ' => "`6   5",
        'Ι' => "`6   6",
        'Κ' => "`6   7",
        'Λ' => "`6   8",
        'Μ' => "`6   9",
        'Ν' => "`6    1",
        'Ξ' => "`6    2",
        'Ο' => "`6    3",
        'Π' => "`6    4",
        'Ρ' => "`6    5",
        'Σ' => "`6    6",
        'Τ' => "`6    7",
        'Υ' => "`6    8",
        'Φ' => "`6    9",
        'Χ' => "`6     1",
        'Ψ' => "`6     2",
        'Ω' => "`6     3",
        _ => return None,
    };
    Some(keys)
}

/// Translate a whole emitted string. Unknown characters are kept as-is,
/// which lets ASCII already in key form pass straight through.
pub fn translate(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match keys_for(ch) {
            Some(keys) => out.push_str(keys),
            None => out.push(ch),
        }
    }
    out
}
