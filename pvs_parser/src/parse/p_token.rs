use crate::{
    source::Range,
    token::TokenData,
    utils::{VecArena, VecArenaId},
};

pub(crate) struct PTokenTag;

/// 構文木のトークン (終端ノード)
///
/// トリビアも含むトークン列のインデックスを指す。
pub(crate) type PToken = VecArenaId<PTokenTag>;

pub(crate) type PTokens = VecArena<PTokenTag, TokenData>;

impl PToken {
    pub(crate) fn text(self, tokens: &PTokens) -> &str {
        self.of(tokens).text()
    }

    pub(crate) fn range(self, tokens: &PTokens) -> Range {
        self.of(tokens).range()
    }
}
