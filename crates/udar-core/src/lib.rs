// udar-core: shared leaf types for Russian paradigm generation.
//
// Everything here is alphabet-level: the stress-mark convention and its
// arithmetic, the letter classes that drive orthographic rules, and the
// closed grammatical vocabularies (gender, case, number).

pub mod grammar;
pub mod letters;
pub mod stress;
