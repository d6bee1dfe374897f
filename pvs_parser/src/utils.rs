mod vec_arena;

pub(crate) use vec_arena::{VecArena, VecArenaId};
