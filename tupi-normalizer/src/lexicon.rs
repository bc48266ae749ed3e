//! static lexicon for Brazilian internet shorthand and casing lists.

use std::{
    collections::{HashMap, HashSet},
    sync::OnceLock,
};

/// Internet/chat abbreviations and their canonical written forms.
const ENTRIES: &[(&str, &str)] = &[
    ("vc", "você"),
    ("vcs", "vocês"),
    ("tb", "também"),
    ("tbm", "também"),
    ("blz", "beleza"),
    ("pq", "porque"),
    ("q", "que"),
    ("mt", "muito"),
    ("mto", "muito"),
    ("n", "não"),
    ("naum", "não"),
    ("eh", "é"),
    ("neh", "né"),
    ("obg", "obrigado"),
    ("vlw", "valeu"),
    ("flw", "falou"),
    ("bj", "beijo"),
    ("bjs", "beijos"),
    ("sdd", "saudade"),
    ("sdds", "saudades"),
    ("amg", "amigo"),
    ("gnt", "gente"),
    ("dps", "depois"),
    ("agr", "agora"),
    ("hj", "hoje"),
    ("amnh", "amanhã"),
    ("kd", "cadê"),
    ("cmg", "comigo"),
    ("ctg", "contigo"),
    ("msg", "mensagem"),
    ("pf", "por favor"),
    ("pfv", "por favor"),
    ("td", "tudo"),
    ("tds", "todos"),
    ("ngm", "ninguém"),
    ("qdo", "quando"),
    ("qnd", "quando"),
    ("qq", "qualquer"),
    ("vdd", "verdade"),
    ("fds", "fim de semana"),
    ("tmj", "tamo junto"),
    ("facul", "faculdade"),
];

/// Words always written with a capital initial.
const PROPER_NOUNS: &[&str] = &[
    "brasil",
    "portugal",
    "lisboa",
    "bahia",
    "amazonas",
    "maria",
    "joão",
    "josé",
    "paulo",
];

/// Initialisms always written fully uppercased.
const ACRONYMS: &[&str] =
    &["eua", "onu", "ibge", "cpf", "cep", "sus", "usp", "ovni"];

static LEXICON: OnceLock<HashMap<&'static str, &'static str>> =
    OnceLock::new();
static PROPER: OnceLock<HashSet<&'static str>> = OnceLock::new();
static ACRONYM: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Canonical form for an abbreviation, if the lexicon has an entry.
pub(crate) fn expansion(word: &str) -> Option<&'static str> {
    LEXICON
        .get_or_init(|| ENTRIES.iter().copied().collect())
        .get(word)
        .copied()
}

pub(crate) fn is_proper_noun(word: &str) -> bool {
    PROPER
        .get_or_init(|| PROPER_NOUNS.iter().copied().collect())
        .contains(word)
}

pub(crate) fn is_acronym(word: &str) -> bool {
    ACRONYM
        .get_or_init(|| ACRONYMS.iter().copied().collect())
        .contains(word)
}
