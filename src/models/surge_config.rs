use linked_hash_map::LinkedHashMap;

/// Name of the implicit section collecting lines before the first header
pub const GLOBAL_SECTION: &str = "Global";

/// Key to optional value mapping of a single section, in line order
pub type SectionBody = LinkedHashMap<String, Option<String>>;

/// Section name to section body mapping, in the order sections first appear
pub type SurgeConfig = LinkedHashMap<String, SectionBody>;

/// Insert or overwrite `key`, keeping the position of its first occurrence.
///
/// `LinkedHashMap::insert` moves an existing key to the back, which would
/// reorder sections and rules that are written twice.
pub fn upsert<V>(map: &mut LinkedHashMap<String, V>, key: String, value: V) {
    match map.get_mut(&key) {
        Some(slot) => *slot = value,
        None => {
            map.insert(key, value);
        }
    }
}
