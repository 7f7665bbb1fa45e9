//! Dictionary-free English lemmatization
//!
//! Irregular forms are resolved through per-part-of-speech exception tables;
//! everything else goes through suffix-detachment rules in the style of
//! WordNet's morphological processor. Without a full lexicon the rules are
//! guarded heuristics: short words and known invariant forms pass through.
//!
//! Only lowercase tokens are lemmatized. Tokens containing uppercase letters
//! are returned unchanged, so pipelines usually lowercase first.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Part of speech a lemmatizer call targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
}

const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("people", "person"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("indices", "index"),
    ("leaves", "leaf"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
];

const NOUN_INVARIANTS: &[&str] = &[
    "news",
    "series",
    "species",
    "means",
    "physics",
    "mathematics",
    "economics",
    "politics",
    "ethics",
    "lens",
    "this",
    "has",
    "was",
    "yes",
];

const VERB_EXCEPTIONS: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("had", "have"),
    ("having", "have"),
    ("does", "do"),
    ("did", "do"),
    ("done", "do"),
    ("goes", "go"),
    ("went", "go"),
    ("gone", "go"),
    ("ate", "eat"),
    ("eaten", "eat"),
    ("saw", "see"),
    ("seen", "see"),
    ("took", "take"),
    ("taken", "take"),
    ("made", "make"),
    ("said", "say"),
    ("got", "get"),
    ("gotten", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("came", "come"),
    ("knew", "know"),
    ("known", "know"),
    ("thought", "think"),
    ("told", "tell"),
    ("found", "find"),
    ("became", "become"),
    ("left", "leave"),
    ("felt", "feel"),
    ("fed", "feed"),
    ("brought", "bring"),
    ("began", "begin"),
    ("begun", "begin"),
    ("kept", "keep"),
    ("held", "hold"),
    ("wrote", "write"),
    ("written", "write"),
    ("writing", "write"),
    ("stood", "stand"),
    ("heard", "hear"),
    ("meant", "mean"),
    ("met", "meet"),
    ("ran", "run"),
    ("paid", "pay"),
    ("sat", "sit"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("led", "lead"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("lost", "lose"),
    ("fell", "fall"),
    ("fallen", "fall"),
    ("sent", "send"),
    ("built", "build"),
    ("understood", "understand"),
    ("drew", "draw"),
    ("drawn", "draw"),
    ("broke", "break"),
    ("broken", "break"),
    ("spent", "spend"),
    ("rose", "rise"),
    ("risen", "rise"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("bought", "buy"),
    ("wore", "wear"),
    ("worn", "wear"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("sought", "seek"),
    ("threw", "throw"),
    ("thrown", "throw"),
    ("caught", "catch"),
    ("dealt", "deal"),
    ("won", "win"),
    ("fought", "fight"),
    ("taught", "teach"),
    ("flew", "fly"),
    ("flown", "fly"),
    ("sold", "sell"),
    ("slept", "sleep"),
    ("forgot", "forget"),
    ("forgotten", "forget"),
    ("hid", "hide"),
    ("hidden", "hide"),
    ("used", "use"),
    ("using", "use"),
    ("uses", "use"),
];

const ADJECTIVE_EXCEPTIONS: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
    ("farthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
];

const ADJECTIVE_INVARIANTS: &[&str] = &[
    "other", "under", "after", "ever", "never", "inner", "outer", "upper", "former", "latter",
    "whether", "rather", "proper", "super", "clever", "bitter", "tender", "sober", "eager",
    "silver", "modest", "honest", "earnest", "interest", "forest", "computer", "water", "paper",
    "number", "letter", "order", "power", "matter", "member", "answer", "weather", "winter",
    "summer", "mother", "father", "brother", "sister", "dinner", "chest", "guest", "test",
];

/// Exception and invariant tables for one part of speech
#[derive(Debug, Clone, Default)]
struct PosTables {
    exceptions: FxHashMap<&'static str, &'static str>,
    invariants: FxHashSet<&'static str>,
}

impl PosTables {
    fn new(exceptions: &[(&'static str, &'static str)], invariants: &[&'static str]) -> Self {
        Self {
            exceptions: exceptions.iter().copied().collect(),
            invariants: invariants.iter().copied().collect(),
        }
    }
}

/// Rule-based lemmatizer for nouns, verbs and adjectives
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    nouns: PosTables,
    verbs: PosTables,
    adjectives: PosTables,
}

impl Lemmatizer {
    /// Create an English lemmatizer with the built-in exception tables
    pub fn new() -> Self {
        Self {
            nouns: PosTables::new(NOUN_EXCEPTIONS, NOUN_INVARIANTS),
            verbs: PosTables::new(VERB_EXCEPTIONS, &[]),
            adjectives: PosTables::new(ADJECTIVE_EXCEPTIONS, ADJECTIVE_INVARIANTS),
        }
    }

    fn tables(&self, pos: PartOfSpeech) -> &PosTables {
        match pos {
            PartOfSpeech::Noun => &self.nouns,
            PartOfSpeech::Verb => &self.verbs,
            PartOfSpeech::Adjective => &self.adjectives,
        }
    }

    /// Lemmatize a single word for the given part of speech
    pub fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return word.to_string();
        }
        let tables = self.tables(pos);
        if let Some(lemma) = tables.exceptions.get(word) {
            return (*lemma).to_string();
        }
        if tables.invariants.contains(word) {
            return word.to_string();
        }

        let lemma = match pos {
            PartOfSpeech::Noun => Self::noun(word),
            PartOfSpeech::Verb => Self::verb(word),
            PartOfSpeech::Adjective => Self::adjective(word),
        };
        lemma.unwrap_or_else(|| word.to_string())
    }

    /// Lemmatize every token, preserving order and count
    pub fn lemmatize_all(&self, tokens: Vec<String>, pos: PartOfSpeech) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| self.lemmatize(&token, pos))
            .collect()
    }

    fn noun(word: &str) -> Option<String> {
        if word.len() <= 3 || ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return None;
        }
        if let Some(stem) = word.strip_suffix("ies").filter(|_| word.len() > 4) {
            return Some(format!("{stem}y"));
        }
        if ["sses", "xes", "zes", "ches", "shes"]
            .iter()
            .any(|s| word.ends_with(s))
        {
            return Some(word[..word.len() - 2].to_string());
        }
        if let Some(stem) = word.strip_suffix("men").filter(|_| word.len() > 4) {
            return Some(format!("{stem}man"));
        }
        word.strip_suffix('s').map(str::to_string)
    }

    fn verb(word: &str) -> Option<String> {
        if word.len() <= 3 {
            return None;
        }
        if let Some(stem) = word.strip_suffix("ies").filter(|_| word.len() > 4) {
            return Some(format!("{stem}y"));
        }
        if ["sses", "xes", "zes", "ches", "shes"]
            .iter()
            .any(|s| word.ends_with(s))
        {
            return Some(word[..word.len() - 2].to_string());
        }
        if let Some(stem) = word.strip_suffix("ied").filter(|_| word.len() > 4) {
            return Some(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("ed").filter(|_| word.len() > 4) {
            return Some(restore_stem(stem));
        }
        if let Some(stem) = word.strip_suffix("ing").filter(|_| word.len() > 5) {
            if !stem.bytes().any(is_vowel) {
                return None;
            }
            return Some(restore_stem(stem));
        }
        if word.ends_with("ss") {
            return None;
        }
        word.strip_suffix('s').map(str::to_string)
    }

    fn adjective(word: &str) -> Option<String> {
        if word.len() <= 4 {
            return None;
        }
        if let Some(stem) = word.strip_suffix("iest") {
            return Some(format!("{stem}y"));
        }
        if let Some(stem) = word.strip_suffix("ier") {
            return Some(format!("{stem}y"));
        }
        let stem = word
            .strip_suffix("est")
            .or_else(|| word.strip_suffix("er"))?;
        // Comparative -er/-est only attaches to one-syllable stems.
        if stem.len() < 2 || vowel_groups(stem) > 1 {
            return None;
        }
        Some(restore_stem(stem))
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn vowel_groups(stem: &str) -> usize {
    let mut groups = 0;
    let mut in_vowel = false;
    for b in stem.bytes() {
        let vowel = is_vowel(b) || b == b'y';
        if vowel && !in_vowel {
            groups += 1;
        }
        in_vowel = vowel;
    }
    groups
}

/// Repair a stem left behind by removing an inflectional suffix:
/// undouble a final consonant (`runn` → `run`) or restore a silent `e`
/// (`mak` → `make`, `simpl` → `simple`).
fn restore_stem(stem: &str) -> String {
    let bytes = stem.as_bytes();
    let n = bytes.len();

    if n >= 3 {
        let (prev, last) = (bytes[n - 2], bytes[n - 1]);
        if prev == last && !is_vowel(last) && !matches!(last, b'l' | b's' | b'f' | b'z') {
            return stem[..n - 1].to_string();
        }
    }

    let needs_e = stem.ends_with('v')
        || stem.ends_with("iz")
        || (stem.ends_with('c') && !stem.ends_with("ic"))
        || stem.ends_with("rg")
        || (n >= 2 && bytes[n - 1] == b'l' && !is_vowel(bytes[n - 2]) && bytes[n - 2] != b'l')
        || ends_short_syllable(bytes);

    if needs_e {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

/// A consonant-vowel-consonant ending on a one-syllable stem, such as
/// `hop`, `lat` or `stat`.
fn ends_short_syllable(bytes: &[u8]) -> bool {
    let n = bytes.len();
    let short = n == 3 || (n == 4 && !is_vowel(bytes[0]) && !is_vowel(bytes[1]));
    if !short {
        return false;
    }
    let (c1, v, c2) = (bytes[n - 3], bytes[n - 2], bytes[n - 1]);
    !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, b'w' | b'x' | b'y')
}
