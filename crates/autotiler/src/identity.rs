//! Tile name encoding
//!
//! A tile name is `<family key><variant code>`, where the variant code is the
//! trailing run of ASCII digits. Two names belong to the same family iff their
//! family keys are byte-for-byte equal.

/// Strip the trailing digit run from a tile name, leaving its family key.
///
/// Names without trailing digits are returned unchanged.
pub fn strip_variant_suffix(name: &str) -> &str {
    name.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Split a tile name into `(family key, variant suffix)`
pub fn split_tile_name(name: &str) -> (&str, &str) {
    let family = strip_variant_suffix(name);
    (family, &name[family.len()..])
}

/// The numeric variant code of a tile name, if it has one that fits in a `u32`
pub fn variant_code(name: &str) -> Option<u32> {
    let (_, suffix) = split_tile_name(name);
    suffix.parse().ok()
}

/// Build the tile name for a family showing a given variant
pub fn compose_tile_name(family: &str, code: u8) -> String {
    format!("{}{}", family, code)
}

/// Compare an already stripped family key with a raw tile name
pub fn same_family(stripped: &str, raw: &str) -> bool {
    strip_variant_suffix(raw) == stripped
}
