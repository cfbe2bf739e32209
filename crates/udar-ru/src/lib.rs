// udar-ru: Russian language module.
//
// Builds the full inflectional paradigm of a headword (noun, adjective or
// verb) from its dictionary form with marked stress, using the general
// orthographic and phonological rules of the language, and reviews each
// generated form against an attested form from a lexical database.

pub mod adjective;
pub mod noun;
pub mod review;
pub mod tags;
pub mod verb;
pub mod word;

pub use adjective::{AdjectiveSlot, Agreement, RussianAdjective};
pub use noun::{NounSlot, RussianNoun};
pub use review::{SlotContext, SlotReview, Variant, review_slot};
pub use verb::{Conjugation, ConjugationClass, RussianVerb, VerbSlot};
pub use word::{CellForms, MorphError};
