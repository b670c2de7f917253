use std::collections::HashMap;

pub fn builtin_characters() -> HashMap<&'static str, &'static str> {
    HashMap::from([("briv", include_str!("../content/characters/briv.json"))])
}

pub fn builtin_character(id: &str) -> Option<&'static str> {
    builtin_characters()
        .into_iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(id))
        .map(|(_, v)| v)
}
