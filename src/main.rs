// ==========================================
// 供应商谈判决策引擎 - 命令行入口
// ==========================================
// 用法:
//   negotiation-engine <snapshot.json> [config.json] [--csv <out.csv>]
// 输出: 报告 JSON 写入 stdout，日志写入 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use negotiation_engine::{logging, CandidateCsvExporter, NegotiationApi};
use std::path::PathBuf;

/// 命令行参数
struct CliArgs {
    snapshot_path: PathBuf,
    config_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut positional = Vec::new();
    let mut csv_path = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => {
                let path = args.next().context("--csv 需要输出文件路径")?;
                csv_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!(usage()),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let snapshot_path = match positional.next() {
        Some(p) => PathBuf::from(p),
        None => bail!(usage()),
    };
    let config_path = positional.next().map(PathBuf::from);

    Ok(CliArgs {
        snapshot_path,
        config_path,
        csv_path,
    })
}

fn usage() -> String {
    "用法: negotiation-engine <snapshot.json> [config.json] [--csv <out.csv>]".to_string()
}

fn main() -> Result<()> {
    logging::init();

    tracing::info!(
        "{} v{}",
        negotiation_engine::APP_NAME,
        negotiation_engine::VERSION
    );

    let args = parse_args(std::env::args().skip(1))?;

    let api = NegotiationApi::from_env();
    let report = api
        .run_file(&args.snapshot_path, args.config_path.as_deref())
        .with_context(|| format!("计算失败: {}", args.snapshot_path.display()))?;

    tracing::info!(
        "排序目标: {}, 候选 {} 个",
        report.output.prioritize_by.title_sv(),
        report.output.candidates.len()
    );

    if let Some(csv_path) = &args.csv_path {
        CandidateCsvExporter::new()
            .export_to_path(csv_path, &report.output.candidates)
            .with_context(|| format!("导出失败: {}", csv_path.display()))?;
    }

    let json = serde_json::to_string_pretty(&report).context("报告序列化失败")?;
    println!("{}", json);
    Ok(())
}
