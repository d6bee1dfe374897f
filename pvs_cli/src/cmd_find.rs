use crate::util::dyn_error::DynError;
use pvs_parser::rust_api::{Driver, DriverConfig, LookupMode, Pos};
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub(crate) struct FindArgs {
    pub(crate) file: PathBuf,
    pub(crate) name: String,
    pub(crate) pos_opt: Option<Pos>,
}

/// `LINE:COL` をパースする。
fn parse_pos(s: &str) -> Option<Pos> {
    let mut parts = s.splitn(2, ':');
    let line = parts.next()?.parse::<usize>().ok()?;
    let character = parts.next()?.parse::<usize>().ok()?;

    if line == 0 {
        return None;
    }

    Some(Pos::new(line, character))
}

pub(crate) fn parse_find_args(
    mut args: impl Iterator<Item = String>,
) -> Result<FindArgs, DynError> {
    let mut positional = vec![];
    let mut pos_opt = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scoped" => {
                let value = args
                    .next()
                    .ok_or_else(|| DynError::from("--scoped の後に位置がありません。"))?;
                let pos = parse_pos(&value).ok_or_else(|| {
                    DynError::from(format!(
                        "位置 '{}' は LINE:COL の形式ではありません。",
                        value
                    ))
                })?;
                pos_opt = Some(pos);
            }
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next(), positional.next()) {
        (Some(file), Some(name), None) => Ok(FindArgs {
            file: PathBuf::from(file),
            name,
            pos_opt,
        }),
        _ => Err("ファイル名と探す名前を指定してください。".into()),
    }
}

pub(crate) fn exec_find_cmd(args: impl Iterator<Item = String>) -> Result<(), DynError> {
    let find_args = parse_find_args(args)?;

    let driver = Driver::new(DriverConfig {
        lookup: LookupMode::Scoped,
        ..DriverConfig::default()
    });
    let result = driver
        .index(&find_args.file)
        .map_err(|err| DynError::in_file(&find_args.file, err))?;

    if !result.is_ok() {
        println!("{}", serde_json::to_string(&result.diagnostics)?);
        return Err(format!("{} に構文エラーがあります。", find_args.file.display()).into());
    }

    let descriptor_opt = driver.find(&result.table, &find_args.name, find_args.pos_opt);
    println!("{}", serde_json::to_string_pretty(&descriptor_opt)?);
    Ok(())
}
