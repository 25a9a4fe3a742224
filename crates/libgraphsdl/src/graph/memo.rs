use indexmap::IndexMap;
use std::sync::OnceLock;

/// A value derived from an entity's contents, computed on first use and then
/// cached for the lifetime of the entity.
///
/// Entities never change after construction, so a memo never needs to be
/// invalidated. Memos take no part in equality or `Debug` output and are
/// never serialized.
#[derive(Clone)]
pub(crate) struct Memo<T>(OnceLock<T>);
impl<T> Memo<T> {
    pub(crate) fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.0.get_or_init(init)
    }
}
impl<T> std::default::Default for Memo<T> {
    fn default() -> Self {
        Self(OnceLock::new())
    }
}
impl<T> std::cmp::PartialEq for Memo<T> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
impl<T> std::fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Memo(..)")
    }
}

/// Insertion-ordered `name -> position` index over a sequence of (mostly)
/// named entities.
///
/// When two entities share a name the later position wins, but the name keeps
/// the place of its first occurrence in iteration order.
pub(crate) type NameIndex = Memo<IndexMap<String, usize>>;
impl NameIndex {
    fn index_of<T>(
        &self,
        items: &[T],
        name_of: impl Fn(&T) -> Option<&str>,
    ) -> &IndexMap<String, usize> {
        self.get_or_init(|| {
            let mut index = IndexMap::new();
            for (pos, item) in items.iter().enumerate() {
                if let Some(name) = name_of(item) {
                    index.insert(name.to_string(), pos);
                }
            }
            index
        })
    }

    pub(crate) fn lookup<'a, T>(
        &self,
        items: &'a [T],
        name_of: impl Fn(&T) -> Option<&str>,
        name: &str,
    ) -> Option<&'a T> {
        self.index_of(items, name_of)
            .get(name)
            .and_then(|pos| items.get(*pos))
    }

    pub(crate) fn names<T>(
        &self,
        items: &[T],
        name_of: impl Fn(&T) -> Option<&str>,
    ) -> impl Iterator<Item = &str> {
        self.index_of(items, name_of)
            .keys()
            .map(String::as_str)
    }
}
