use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

/// 任意のエラー。`?` で何でも変換できるようにする。
///
/// 入力ファイルの読み込みに失敗したときは、どのファイルかを添えて報告する。
/// (DynError 自身に Debug を実装すると From の実装が衝突するので、表示には to_message を使う。)
pub(crate) struct DynError {
    path_opt: Option<PathBuf>,
    inner: Box<dyn Debug + Send + 'static>,
}

impl DynError {
    pub(crate) fn in_file(path: &Path, err: impl Debug + Send + 'static) -> Self {
        DynError {
            path_opt: Some(path.to_path_buf()),
            inner: Box::new(err),
        }
    }

    pub(crate) fn to_message(&self) -> String {
        match &self.path_opt {
            Some(path) => format!("{}: {:?}", path.display(), self.inner),
            None => format!("{:?}", self.inner),
        }
    }
}

impl<T: Debug + Send + 'static> From<T> for DynError {
    fn from(value: T) -> Self {
        DynError {
            path_opt: None,
            inner: Box::new(value),
        }
    }
}
