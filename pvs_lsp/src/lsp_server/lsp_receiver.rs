use log::{error, trace};
use std::io::{self, BufRead, BufReader, Read};

/// LSP のメッセージを読むもの
///
/// メッセージは `Content-Length: N` ヘッダー、空行、N バイトの JSON からなる。
pub(crate) struct LspReceiver<R: Read> {
    reader: BufReader<R>,
    line: String,
    content: Vec<u8>,
}

impl<R: Read> LspReceiver<R> {
    pub(crate) fn new(reader: R) -> LspReceiver<R> {
        LspReceiver {
            reader: BufReader::new(reader),
            line: String::new(),
            content: vec![],
        }
    }

    /// ヘッダーを読んで、内容の長さを返す。入力の終わりなら None
    fn read_header(&mut self) -> io::Result<Option<usize>> {
        let mut content_length_opt = None;

        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let line = self.line.trim_end();
            if line.is_empty() {
                if content_length_opt.is_none() {
                    continue;
                }
                break;
            }

            let mut parts = line.splitn(2, ':');
            match (parts.next(), parts.next()) {
                (Some(name), Some(value)) if name.eq_ignore_ascii_case("Content-Length") => {
                    content_length_opt = value.trim().parse::<usize>().ok();
                }
                _ => trace!("ignore header {:?}", line),
            }
        }

        Ok(content_length_opt)
    }

    /// 次のメッセージを読んで、その JSON を関数に渡す。
    /// 入力が終わったら false を返す。
    pub(crate) fn read_next(&mut self, f: impl FnOnce(&str)) -> bool {
        let content_length = match self.read_header() {
            Ok(Some(content_length)) => content_length,
            Ok(None) => return false,
            Err(err) => {
                error!("ヘッダーを読めません {:?}", err);
                return false;
            }
        };

        self.content.resize(content_length, 0);
        if let Err(err) = self.reader.read_exact(&mut self.content) {
            error!("内容を読めません {:?}", err);
            return false;
        }

        let json = String::from_utf8_lossy(&self.content);
        trace!("lsp-receiver/recv {}", json);
        f(&json);
        true
    }
}
