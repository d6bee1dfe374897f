use super::{lsp_handler::LspHandler, lsp_receiver::LspReceiver, lsp_sender::LspSender};
use log::{info, LevelFilter};
use pvs_parser::rust_api::{DriverConfig, LangService, LookupMode};
use simplelog::{Config, WriteLogger};
use std::{
    env::temp_dir,
    fs::OpenOptions,
    io::{stdin, stdout},
    path::PathBuf,
    process,
};

/// ログをファイルに出力する。(標準出力は LSP の通信に使う。)
pub(crate) fn init_log() {
    let log_filter = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };

    let file_path = if cfg!(debug_assertions) {
        PathBuf::from("pvs_lsp.log")
    } else {
        temp_dir().join("pvs_lsp.log")
    };

    let file = match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&file_path)
    {
        Ok(file) => file,
        Err(err) => {
            eprintln!("ログファイル {:?} を作れません ({:?})", file_path, err);
            return;
        }
    };

    WriteLogger::init(log_filter, Config::default(), file).ok();
}

pub(crate) fn start_lsp_server(lookup: LookupMode) -> ! {
    init_log();
    info!("start");

    let stdin = stdin();
    let stdin = stdin.lock();
    let receiver = LspReceiver::new(stdin);

    let stdout = stdout();
    let stdout = stdout.lock();
    let sender = LspSender::new(stdout);

    info!("lookup mode: {:?}", lookup);
    let lang_service = LangService::new(DriverConfig {
        lookup,
        ..DriverConfig::default()
    });
    let handler = LspHandler::new(sender, lang_service);

    handler.main(receiver);

    info!("input closed");
    process::exit(0)
}
