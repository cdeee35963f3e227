use fnv::FnvHasher;
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Hash map keyed by small values such as grid coordinates.
/// FNV is much faster than the default hasher on short keys but not resistant to collision attacks,
/// which is irrelevant for maze data.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::<FnvHasher>::default())
}

pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, BuildHasherDefault::<FnvHasher>::default())
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Lowercase base 36 rendering of a number, digits 0-9 then a-z.
/// Values of 36 and above need more than one glyph.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return String::from("0");
    }

    let mut glyphs = Vec::new();
    while value > 0 {
        glyphs.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    glyphs.reverse();
    glyphs.into_iter().map(char::from).collect()
}
