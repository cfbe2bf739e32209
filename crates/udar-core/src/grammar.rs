// Closed grammatical vocabularies: gender, case, number.
//
// Each carries the short code used by the lexical database tables and the
// report columns ("m", "gen", "sg", ...).

use std::fmt;

/// Error returned when a database code does not name a known member.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unrecognized grammar code: {0:?}")]
pub struct UnknownCode(pub String);

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    pub fn code(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Neuter => "n",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, UnknownCode> {
        match code {
            "m" => Ok(Gender::Masculine),
            "f" => Ok(Gender::Feminine),
            "n" => Ok(Gender::Neuter),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The six Russian cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Case::Nominative => "nom",
            Case::Genitive => "gen",
            Case::Dative => "dat",
            Case::Accusative => "acc",
            Case::Instrumental => "inst",
            Case::Prepositional => "prep",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, UnknownCode> {
        match code {
            "nom" => Ok(Case::Nominative),
            "gen" => Ok(Case::Genitive),
            "dat" => Ok(Case::Dative),
            "acc" => Ok(Case::Accusative),
            "inst" => Ok(Case::Instrumental),
            "prep" => Ok(Case::Prepositional),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub fn code(self) -> &'static str {
        match self {
            Number::Singular => "sg",
            Number::Plural => "pl",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, UnknownCode> {
        match code {
            "sg" => Ok(Number::Singular),
            "pl" => Ok(Number::Plural),
            other => Err(UnknownCode(other.to_string())),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_codes_round_trip() {
        for g in Gender::ALL {
            assert_eq!(Gender::from_code(g.code()), Ok(g));
        }
    }

    #[test]
    fn case_codes_round_trip() {
        for c in Case::ALL {
            assert_eq!(Case::from_code(c.code()), Ok(c));
        }
    }

    #[test]
    fn number_codes_round_trip() {
        for n in Number::ALL {
            assert_eq!(Number::from_code(n.code()), Ok(n));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(Gender::from_code("x").is_err());
        assert!(Case::from_code("abl").is_err());
        assert!(Number::from_code("dual").is_err());
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Gender::Feminine.to_string(), "f");
        assert_eq!(Case::Instrumental.to_string(), "inst");
        assert_eq!(Number::Plural.to_string(), "pl");
    }
}
