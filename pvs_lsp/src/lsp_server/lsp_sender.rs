use super::{LspError, LspErrorResponse, LspNotification, LspResponse};
use log::{error, trace};
use serde::Serialize;
use std::io::{self, BufWriter, Write};

pub(crate) struct LspSender<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> LspSender<W> {
    pub(crate) fn new(writer: W) -> LspSender<W> {
        LspSender {
            writer: BufWriter::new(writer),
        }
    }

    fn write_message(&mut self, content: &[u8]) -> io::Result<()> {
        write!(self.writer, "Content-Length: {}\r\n\r\n", content.len())?;
        self.writer.write_all(content)?;
        self.writer.flush()
    }

    fn do_send(&mut self, content: &[u8]) {
        trace!(
            "lsp-sender/send Content-Length: {}\r\n\r\n{}",
            content.len(),
            String::from_utf8_lossy(content)
        );

        if let Err(err) = self.write_message(content) {
            error!("メッセージを送れません {:?}", err);
        }
    }

    fn send_json(&mut self, message: &impl Serialize) {
        match serde_json::to_vec(message) {
            Ok(buf) => self.do_send(&buf),
            Err(err) => error!("メッセージを JSON にできません {:?}", err),
        }
    }

    pub(crate) fn send_notification<P: Serialize>(&mut self, method: &str, params: P) {
        self.send_json(&LspNotification::<P> {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    pub(crate) fn send_response<R: Serialize>(&mut self, id: i64, result: R) {
        self.send_json(&LspResponse::<R> {
            jsonrpc: "2.0",
            id,
            result,
        });
    }

    pub(crate) fn send_error(&mut self, id: i64, code: i64, message: String) {
        self.send_json(&LspErrorResponse {
            jsonrpc: "2.0",
            id,
            error: LspError { code, message },
        });
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(_) => panic!("flush failed"),
        }
    }
}
