// Russian letter classes shared by the paradigm generators.

/// The ten Russian vowel letters.
pub const VOWELS: &str = "аеёиоуыэюя";

/// The twenty-one Russian consonant letters.
pub const CONSONANTS: &str = "бвгджзйклмнпрстфхцчшщ";

/// Reflexive verb/participle suffix.
pub const REFLEXIVE_SUFFIX: &str = "ся";

/// Vowel-final variant of the reflexive suffix.
pub const REFLEXIVE_SUFFIX_SHORT: &str = "сь";

/// Seven-letter spelling rule: these consonants never take a following "ы".
pub const SEVEN_LETTER_RULE: &str = "гкхшжщч";

/// Eight-letter spelling rule: these consonants never take a following
/// "я" or "ю".
pub const EIGHT_LETTER_RULE: &str = "гкхшжщчц";

/// Five-letter spelling rule: after these consonants an unstressed "о"
/// in an ending is written "е".
pub const FIVE_LETTER_RULE: &str = "шжщчц";

/// Hushing consonants, as used by the conjugation exceptions
/// (1st singular / 3rd plural) and the masculine genitive plural.
pub const HUSHING_CONSONANTS: &str = "жшщч";

/// Labial consonants, which take an epenthetic "л" in the second
/// conjugation 1st singular.
pub const LABIAL_CONSONANTS: &str = "бвпмф";

/// Whether `c` is one of the ten Russian vowels (either case).
pub fn is_vowel(c: char) -> bool {
    c.to_lowercase().any(|l| VOWELS.contains(l))
}
