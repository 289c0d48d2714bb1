use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

/// 各行について, 重なり付き二重送信の結果として説明できるかを判定する
///
/// 説明できる行には`YES`と復元したメッセージを, できない行には`NO`を出力する.
#[derive(Parser, Debug)]
#[command(name = "overlapfix", version, about)]
struct Args {
    /// 入力ファイル. 省略すると標準入力を読む
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 空行をエラーとして扱う
    #[arg(long)]
    strict: bool,

    /// RUST_LOGが無いときのログレベル
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn run(reader: impl BufRead, mut writer: impl Write, strict: bool) -> Result<usize> {
    let mut count = 0;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", lineno + 1))?;
        let t = line.trim();
        let Some(message) = (match overlapfix::recover_str(t) {
            Ok(message) => message,
            Err(overlapfix::Error::InvalidInput) if !strict => {
                warn!(line = lineno + 1, "empty line");
                None
            }
            Err(e) => bail!("line {}: {e}", lineno + 1),
        }) else {
            writeln!(writer, "NO")?;
            count += 1;
            continue;
        };
        debug!(line = lineno + 1, len = t.len(), split = message.len(), "recovered");
        writeln!(writer, "YES")?;
        writeln!(writer, "{message}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(
                    args.log_level
                        .parse::<tracing_subscriber::filter::Directive>()
                        .with_context(|| format!("invalid log level: {}", args.log_level))?,
                )
                .from_env_lossy(),
        )
        .init();

    let stdout = io::stdout().lock();
    let count = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            run(BufReader::new(file), stdout, args.strict)?
        }
        None => run(io::stdin().lock(), stdout, args.strict)?,
    };
    info!(count, "done");
    Ok(())
}
