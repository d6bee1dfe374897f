use url::Url;

/// 正規化された URI
///
/// 同じファイルを指す URL が同じ値になるように、ファイルパスに変換できるものは canonicalize する。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Uri {
    inner: Url,
}

impl Uri {
    pub(crate) fn from_url(url: &Url) -> Self {
        let url = match url
            .to_file_path()
            .ok()
            .and_then(|file_path| file_path.canonicalize().ok())
            .and_then(|canonical_path| Url::from_file_path(canonical_path).ok())
        {
            Some(url) => url,
            None => url.to_owned(),
        };
        Uri { inner: url }
    }

    pub(crate) fn into_url(self) -> Url {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_file_url_is_kept() {
        let url = Url::parse("untitled:Untitled-1").unwrap();
        assert_eq!(Uri::from_url(&url).into_url(), url);
    }
}
