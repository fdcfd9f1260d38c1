/*
SPDX-License-Identifier: MPL-2.0
*/

//! Character filtering for citation keys: the fixed disallowed set, the
//! user-configured unwanted set, and the ASCII transliteration table for
//! accented letters.

/// Characters that can never appear in a citation key, whatever the
/// configuration says. Source: what BibTeX cannot tolerate in a key.
pub const DISALLOWED_CHARACTERS: [char; 12] =
    ['{', '}', '(', ')', ',', '=', '\\', '"', '#', '%', '~', '\''];

/// Transliterations for letters outside plain ASCII. Ordered pairs of
/// (character, replacement); characters not listed pass through unchanged.
static SPECIAL_CHARACTER_MAP: &[(char, &str)] = &[
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "Ae"),
    ('Å', "Aa"),
    ('Æ', "Ae"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ð', "D"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "Oe"),
    ('Ø', "Oe"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ü', "Ue"),
    ('Ý', "Y"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "ae"),
    ('å', "aa"),
    ('æ', "ae"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ð', "d"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "oe"),
    ('ø', "oe"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "ue"),
    ('ý', "y"),
    ('ÿ', "y"),
    ('ß', "ss"),
    ('Ć', "C"),
    ('ć', "c"),
    ('Č', "C"),
    ('č', "c"),
    ('Đ', "D"),
    ('đ', "d"),
    ('Ğ', "G"),
    ('ğ', "g"),
    ('İ', "I"),
    ('ı', "i"),
    ('Ł', "L"),
    ('ł', "l"),
    ('Ń', "N"),
    ('ń', "n"),
    ('Œ', "Oe"),
    ('œ', "oe"),
    ('Ř', "R"),
    ('ř', "r"),
    ('Ś', "S"),
    ('ś', "s"),
    ('Ş', "S"),
    ('ş', "s"),
    ('Š', "S"),
    ('š', "s"),
    ('Ž', "Z"),
    ('ž', "z"),
];

/// Replace accented and other non-plain-ASCII letters with an ASCII-safe
/// substitution (ö becomes oe, ß becomes ss, and so on).
pub fn replace_special_characters(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match SPECIAL_CHARACTER_MAP.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => result.push_str(to),
            None => result.push(c),
        }
    }
    result
}

/// Remove every character present in `unwanted` or in the fixed disallowed
/// set, then transliterate the remainder to ASCII-safe letters.
pub fn remove_unwanted_characters(key: &str, unwanted: &str) -> String {
    let kept: String = key
        .chars()
        .filter(|c| !unwanted.contains(*c))
        .filter(|c| !DISALLOWED_CHARACTERS.contains(c))
        .collect();

    replace_special_characters(&kept)
}

/// Remove unwanted characters and strip all whitespace.
pub fn clean_key(key: &str, unwanted: &str) -> String {
    remove_unwanted_characters(key, unwanted)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use citekey_core::GeneratorConfig;

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(remove_unwanted_characters("Smi{t}h(2020)", ""), "Smith2020");
        assert_eq!(remove_unwanted_characters("a\\b\"c#d%e~f'g", ""), "abcdefg");
    }

    #[test]
    fn strips_configured_unwanted_characters() {
        let config = GeneratorConfig::default();
        assert_eq!(
            remove_unwanted_characters("Smith-Jones:2020!", &config.unwanted_characters),
            "SmithJones2020"
        );
        // `+` survives the default set; it marks "et al.".
        assert_eq!(
            remove_unwanted_characters("SJ+2020", &config.unwanted_characters),
            "SJ+2020"
        );
    }

    #[test]
    fn transliterates_accented_letters() {
        assert_eq!(remove_unwanted_characters("Müller", ""), "Mueller");
        assert_eq!(remove_unwanted_characters("Strauß", ""), "Strauss");
        assert_eq!(remove_unwanted_characters("Ångström", ""), "Aangstroem");
        assert_eq!(remove_unwanted_characters("García", ""), "Garcia");
        assert_eq!(remove_unwanted_characters("Łukasz", ""), "Lukasz");
    }

    #[test]
    fn clean_key_strips_all_whitespace() {
        assert_eq!(clean_key("Smith 2020\tfoo\nbar", ""), "Smith2020foobar");
        assert_eq!(clean_key(" \u{a0} ", ""), "");
    }

    #[test]
    fn clean_key_output_is_always_safe() {
        let inputs = ["a{b} (c),=d", "ä ö ü", "x\t\ny", "#%~'"];
        for input in inputs {
            let cleaned = clean_key(input, "");
            assert!(
                cleaned
                    .chars()
                    .all(|c| !DISALLOWED_CHARACTERS.contains(&c) && !c.is_whitespace()),
                "unsafe output for {input:?}: {cleaned:?}"
            );
        }
    }
}
