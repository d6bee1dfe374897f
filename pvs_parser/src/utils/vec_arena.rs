use std::{
    fmt::{self, Debug, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
    num::NonZeroU32,
    ops::{Index, IndexMut},
};

/// `VecArena` の型つきのインデックスを表す。
///
/// `Tag` は値を区別するための幽霊型。
/// `Option<VecArenaId>` が4バイトに収まるように NonZeroU32 で持つ。
pub(crate) struct VecArenaId<Tag> {
    inner: NonZeroU32,
    _phantom: PhantomData<Tag>,
}

impl<Tag> VecArenaId<Tag> {
    pub(crate) fn from_index(index: usize) -> Self {
        let inner = NonZeroU32::new((index + 1) as u32).expect("arena index overflow");
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    pub(crate) fn to_index(self) -> usize {
        (self.inner.get() - 1) as usize
    }

    pub(crate) fn of<T>(self, arena: &VecArena<Tag, T>) -> &T {
        &arena.inner[self.to_index()]
    }

    pub(crate) fn of_mut<T>(self, arena: &mut VecArena<Tag, T>) -> &mut T {
        &mut arena.inner[self.to_index()]
    }
}

// derive(Clone) だと Tag: Clone のときしか実装されない。
impl<Tag> Clone for VecArenaId<Tag> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner,
            _phantom: PhantomData,
        }
    }
}

impl<Tag> Copy for VecArenaId<Tag> {}

impl<Tag> PartialEq for VecArenaId<Tag> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Tag> Eq for VecArenaId<Tag> {}

impl<Tag> PartialOrd for VecArenaId<Tag> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<Tag> Ord for VecArenaId<Tag> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl<Tag> Hash for VecArenaId<Tag> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(&self.inner, state)
    }
}

impl<Tag> Debug for VecArenaId<Tag> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.to_index(), f)
    }
}

/// 型つき ID によりインデックスアクセス可能な `Vec`
pub(crate) struct VecArena<Tag, T> {
    inner: Vec<T>,
    _phantom: PhantomData<*mut Tag>,
}

impl<Tag, T> VecArena<Tag, T> {
    pub(crate) const fn new() -> Self {
        Self {
            inner: vec![],
            _phantom: PhantomData,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }

    pub(crate) fn alloc(&mut self, value: T) -> VecArenaId<Tag> {
        let id = VecArenaId::from_index(self.len());
        self.inner.push(value);
        id
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = VecArenaId<Tag>> {
        (0..self.inner.len()).map(VecArenaId::from_index)
    }

    pub(crate) fn enumerate(&self) -> impl Iterator<Item = (VecArenaId<Tag>, &T)> {
        self.keys().zip(&self.inner)
    }
}

impl<Tag, T> From<Vec<T>> for VecArena<Tag, T> {
    fn from(inner: Vec<T>) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
    }
}

impl<Tag, T: Debug> Debug for VecArena<Tag, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.enumerate()).finish()
    }
}

impl<Tag, T> Default for VecArena<Tag, T> {
    fn default() -> Self {
        VecArena::new()
    }
}

impl<Tag, T> Index<VecArenaId<Tag>> for VecArena<Tag, T> {
    type Output = T;

    fn index(&self, id: VecArenaId<Tag>) -> &T {
        id.of(self)
    }
}

impl<Tag, T> IndexMut<VecArenaId<Tag>> for VecArena<Tag, T> {
    fn index_mut(&mut self, id: VecArenaId<Tag>) -> &mut T {
        id.of_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NumTag;

    #[test]
    fn test_alloc_and_index() {
        let mut arena: VecArena<NumTag, i32> = VecArena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        assert_eq!(arena[a], 1);
        assert_eq!(*b.of(&arena), 2);
        assert_eq!(arena.keys().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(std::mem::size_of::<Option<VecArenaId<NumTag>>>(), 4);
    }
}
